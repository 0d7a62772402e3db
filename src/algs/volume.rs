//! Model volume accumulation.

use crate::data::element::Brick;
use crate::data::node::Node;
use crate::geometry::metrics::brick_signed_volume;
use crate::mesh_error::MeshSkinError;

/// Sum of the signed volumes of `elements`; `0.0` when there are none.
///
/// Inverted elements contribute negatively. Nothing is clamped, so a mesh
/// with bad elements reports a visibly smaller volume.
pub fn total_volume(elements: &[Brick], nodes: &[Node]) -> Result<f64, MeshSkinError> {
    elements
        .iter()
        .map(|brick| brick_signed_volume(brick, nodes))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_nodes(edge: f64) -> Vec<Node> {
        let mut out = Vec::new();
        for z in [0.0, edge] {
            for (x, y) in [(0.0, 0.0), (edge, 0.0), (edge, edge), (0.0, edge)] {
                out.push(Node::new([x, y, z]));
            }
        }
        out
    }

    #[test]
    fn empty_collection_is_zero() {
        assert_eq!(total_volume(&[], &[]), Ok(0.0));
    }

    #[test]
    fn signed_contributions_are_not_clamped() {
        let nodes = cube_nodes(2.0);
        let good = Brick::from_indices([0, 1, 2, 3, 4, 5, 6, 7]);
        let flipped = Brick::from_indices([4, 5, 6, 7, 0, 1, 2, 3]);
        let v = total_volume(&[good, flipped, good], &nodes).unwrap();
        assert!((v - 8.0).abs() < 1e-12);
    }
}
