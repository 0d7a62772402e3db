//! Node coordinate transforms.

use crate::data::node::Node;
use crate::mesh_error::MeshSkinError;
use crate::topology::point::NodeId;

/// Applies `update` to every node position, leaving topology unchanged.
///
/// Stops at the first error; nodes visited before it keep their new position.
pub fn transform_nodes<F>(nodes: &mut [Node], mut update: F) -> Result<(), MeshSkinError>
where
    F: FnMut(NodeId, &mut [f64; 3]) -> Result<(), MeshSkinError>,
{
    for (i, node) in nodes.iter_mut().enumerate() {
        update(NodeId::new(i), &mut node.position)?;
    }
    Ok(())
}

/// Rejects scale factors that are zero or not finite.
pub fn validate_scale(factors: [f64; 3]) -> Result<(), MeshSkinError> {
    for (axis, f) in ["x", "y", "z"].iter().zip(factors) {
        if !f.is_finite() || f == 0.0 {
            return Err(MeshSkinError::InvalidConfig(format!(
                "scale factor for {axis} must be finite and non-zero, got {f}"
            )));
        }
    }
    Ok(())
}

/// True when scaling by `factors` would not move any node.
pub fn is_identity_scale(factors: [f64; 3]) -> bool {
    factors == [1.0; 3]
}

/// Multiplies every coordinate by the per-axis factor.
pub fn scale_nodes(nodes: &mut [Node], factors: [f64; 3]) -> Result<(), MeshSkinError> {
    validate_scale(factors)?;
    transform_nodes(nodes, |_, p| {
        p[0] *= factors[0];
        p[1] *= factors[1];
        p[2] *= factors[2];
        Ok(())
    })
}
