//! Mesh nodes: position, load flag and boundary marker.

use serde::{Deserialize, Serialize};

/// Boundary classification attached to a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryMarker {
    /// No boundary condition applies.
    #[default]
    Unset,
    /// Velocity boundary condition (node lies on the marked skin).
    Velocity,
}

impl BoundaryMarker {
    /// Numeric code used by the text formats (`0` unset, `1` velocity).
    pub fn code(self) -> u8 {
        match self {
            BoundaryMarker::Unset => 0,
            BoundaryMarker::Velocity => 1,
        }
    }

    /// Inverse of [`BoundaryMarker::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BoundaryMarker::Unset),
            1 => Some(BoundaryMarker::Velocity),
            _ => None,
        }
    }
}

/// A mesh node.
///
/// `flag` is the load/velocity flag delivered by the mesh loader; it is never
/// changed by processing. `boundary` is the derived classification written by
/// the boundary marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: [f64; 3],
    pub flag: bool,
    pub boundary: BoundaryMarker,
}

impl Node {
    /// A node at `position` with no flag and no boundary marker.
    pub fn new(position: [f64; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Builder-style setter for the load flag.
    pub fn with_flag(mut self, flag: bool) -> Self {
        self.flag = flag;
        self
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.boundary != BoundaryMarker::Unset
    }

    #[inline]
    pub fn set_boundary(&mut self, marker: BoundaryMarker) {
        self.boundary = marker;
    }

    #[inline]
    pub fn clear_boundary(&mut self) {
        self.boundary = BoundaryMarker::Unset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_codes_round_trip() {
        for marker in [BoundaryMarker::Unset, BoundaryMarker::Velocity] {
            assert_eq!(BoundaryMarker::from_code(marker.code()), Some(marker));
        }
        assert_eq!(BoundaryMarker::from_code(7), None);
    }

    #[test]
    fn new_node_is_unmarked() {
        let mut n = Node::new([1.0, 2.0, 3.0]).with_flag(true);
        assert!(n.flag);
        assert!(!n.is_boundary());
        n.set_boundary(BoundaryMarker::Velocity);
        assert!(n.is_boundary());
        n.clear_boundary();
        assert!(!n.is_boundary());
        assert!(n.flag);
    }
}
