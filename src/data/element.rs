//! Bricks and the shared local-node lookup.

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshSkinError;
use crate::topology::cell_type::CellType;
use crate::topology::point::NodeId;

/// Fixed-topology cells addressed by 1-based local node positions.
pub trait ElementNodes {
    /// Cell type of every implementor instance.
    const CELL_TYPE: CellType;

    /// Node references in local order.
    fn node_ids(&self) -> &[NodeId];

    /// Node at the 1-based local position `local`.
    fn node(&self, local: usize) -> Result<NodeId, MeshSkinError> {
        let ids = self.node_ids();
        local
            .checked_sub(1)
            .and_then(|i| ids.get(i).copied())
            .ok_or(MeshSkinError::LocalIndexOutOfRange {
                cell: Self::CELL_TYPE,
                local,
                max: ids.len(),
            })
    }
}

/// Node reference for a 1-based local position of a brick or quad facet.
pub fn element_node<E: ElementNodes>(element: &E, local: usize) -> Result<NodeId, MeshSkinError> {
    element.node(local)
}

/// An 8-node hexahedral element.
///
/// Node order follows the local numbering documented in
/// [`cell_type`](crate::topology::cell_type).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brick {
    nodes: [NodeId; 8],
}

impl Brick {
    pub fn new(nodes: [NodeId; 8]) -> Self {
        Self { nodes }
    }

    /// Convenience constructor from 0-based node indices.
    pub fn from_indices(indices: [usize; 8]) -> Self {
        Self::new(indices.map(NodeId::new))
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId; 8] {
        &self.nodes
    }
}

impl ElementNodes for Brick {
    const CELL_TYPE: CellType = CellType::Hexahedron;

    fn node_ids(&self) -> &[NodeId] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_lookup_is_one_based() {
        let b = Brick::from_indices([10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!(element_node(&b, 1), Ok(NodeId::new(10)));
        assert_eq!(element_node(&b, 8), Ok(NodeId::new(17)));
    }

    #[test]
    fn out_of_range_local_index() {
        let b = Brick::from_indices([0, 1, 2, 3, 4, 5, 6, 7]);
        for local in [0, 9] {
            assert_eq!(
                b.node(local),
                Err(MeshSkinError::LocalIndexOutOfRange {
                    cell: CellType::Hexahedron,
                    local,
                    max: 8,
                })
            );
        }
    }
}
