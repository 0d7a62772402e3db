//! Element quality check based on the signed brick volume.
//!
//! A brick is *valid* when its signed volume is not negative and none of its
//! eight corner Jacobians is negative. The corner test catches swapped node
//! pairs that the summed volume alone misses. The full check
//! is advisory: every degenerate element is reported through the caller's
//! [`Reporter`] and collected into a [`QualityReport`], and processing
//! continues.
//!
//! # Examples
//! ```rust
//! use mesh_skin::data::{Brick, Node};
//! use mesh_skin::geometry::quality::is_element_valid;
//!
//! let nodes: Vec<Node> = [
//!     [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0],
//! ]
//! .into_iter()
//! .map(Node::new)
//! .collect();
//!
//! let good = Brick::from_indices([0, 1, 2, 3, 4, 5, 6, 7]);
//! let flipped = Brick::from_indices([4, 5, 6, 7, 0, 1, 2, 3]);
//! assert!(is_element_valid(&good, &nodes)?);
//! assert!(!is_element_valid(&flipped, &nodes)?);
//! # Ok::<(), mesh_skin::mesh_error::MeshSkinError>(())
//! ```

use crate::data::element::Brick;
use crate::data::node::Node;
use crate::geometry::metrics::{gather_vertices, hex_corner_jacobians, hex_signed_volume};
use crate::mesh_error::MeshSkinError;
use crate::report::{Event, Reporter};
use crate::topology::point::ElementId;

const EPS: f64 = 1e-12;

/// Why an element failed the check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// Negative signed volume or corner Jacobian: node ordering is inverted.
    Inverted,
    /// Zero (or non-finite) signed volume: the brick is collapsed.
    Collapsed,
}

/// One element that failed the quality check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateElement {
    pub element: ElementId,
    pub signed_volume: f64,
    pub kind: Degeneracy,
}

/// Aggregated result of [`check_elements`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QualityReport {
    /// Number of elements examined.
    pub checked: usize,
    /// Failing elements in traversal order.
    pub degenerate: Vec<DegenerateElement>,
}

impl QualityReport {
    /// Overall pass/fail of the advisory check.
    pub fn all_valid(&self) -> bool {
        self.degenerate.is_empty()
    }

    /// Number of elements with inverted winding.
    pub fn inverted_count(&self) -> usize {
        self.count(Degeneracy::Inverted)
    }

    /// Number of collapsed elements.
    pub fn collapsed_count(&self) -> usize {
        self.count(Degeneracy::Collapsed)
    }

    fn count(&self, kind: Degeneracy) -> usize {
        self.degenerate.iter().filter(|d| d.kind == kind).count()
    }
}

/// Returns `false` iff the signed volume of `element` or one of its corner
/// Jacobians is negative.
pub fn is_element_valid(element: &Brick, nodes: &[Node]) -> Result<bool, MeshSkinError> {
    let (volume, corner_inverted) = measure(element, nodes)?;
    Ok((volume >= 0.0 || volume.is_nan()) && !corner_inverted)
}

/// Signed volume and whether any corner Jacobian is negative.
fn measure(element: &Brick, nodes: &[Node]) -> Result<(f64, bool), MeshSkinError> {
    let vertices = gather_vertices(element.nodes(), nodes)?;
    let corner_inverted = hex_corner_jacobians(&vertices).iter().any(|&j| j < 0.0);
    Ok((hex_signed_volume(&vertices), corner_inverted))
}

/// Classifies a signed volume; `None` means the element is fine.
pub fn classify_volume(signed_volume: f64) -> Option<Degeneracy> {
    if !signed_volume.is_finite() || signed_volume.abs() <= EPS {
        Some(Degeneracy::Collapsed)
    } else if signed_volume < 0.0 {
        Some(Degeneracy::Inverted)
    } else {
        None
    }
}

/// Checks every element, reporting each failure and never aborting on one.
///
/// Only index errors (dangling node references) stop the pass.
pub fn check_elements(
    elements: &[Brick],
    nodes: &[Node],
    reporter: &mut dyn Reporter,
) -> Result<QualityReport, MeshSkinError> {
    let mut report = QualityReport {
        checked: elements.len(),
        degenerate: Vec::new(),
    };
    for (i, brick) in elements.iter().enumerate() {
        let (signed_volume, corner_inverted) = measure(brick, nodes)?;
        let kind = if corner_inverted {
            Some(Degeneracy::Inverted)
        } else {
            classify_volume(signed_volume)
        };
        if let Some(kind) = kind {
            let entry = DegenerateElement {
                element: ElementId::new(i),
                signed_volume,
                kind,
            };
            reporter.report(&Event::DegenerateElement(entry));
            report.degenerate.push(entry);
        }
    }
    if report.all_valid() {
        reporter.report(&Event::AllElementsFine {
            checked: report.checked,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CollectingReporter;

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify_volume(1.0), None);
        assert_eq!(classify_volume(-0.5), Some(Degeneracy::Inverted));
        assert_eq!(classify_volume(0.0), Some(Degeneracy::Collapsed));
        assert_eq!(classify_volume(f64::NAN), Some(Degeneracy::Collapsed));
    }

    #[test]
    fn empty_collection_passes() {
        let mut sink = CollectingReporter::default();
        let report = check_elements(&[], &[], &mut sink).unwrap();
        assert!(report.all_valid());
        assert_eq!(report.checked, 0);
        assert_eq!(sink.events(), &[Event::AllElementsFine { checked: 0 }]);
    }

    #[test]
    fn swapped_pair_with_positive_volume_is_inverted() {
        let nodes: Vec<Node> = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ]
        .into_iter()
        .map(Node::new)
        .collect();
        let brick = Brick::from_indices([0, 1, 3, 2, 4, 5, 6, 7]);
        assert!(!is_element_valid(&brick, &nodes).unwrap());
        let mut sink = CollectingReporter::default();
        let report = check_elements(&[brick], &nodes, &mut sink).unwrap();
        assert_eq!(report.inverted_count(), 1);
        assert!(report.degenerate[0].signed_volume > 0.0);
    }

    #[test]
    fn collapsed_brick_is_reported_but_not_invalid() {
        let nodes = vec![Node::new([0.0; 3]); 8];
        let brick = Brick::from_indices([0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(is_element_valid(&brick, &nodes).unwrap());
        let mut sink = CollectingReporter::default();
        let report = check_elements(&[brick], &nodes, &mut sink).unwrap();
        assert_eq!(report.collapsed_count(), 1);
        assert_eq!(report.inverted_count(), 0);
        assert!(!report.all_valid());
    }
}
