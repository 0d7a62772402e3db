//! Structured brick-grid generator.
//!
//! Produces an `nx * ny * nz` grid of axis-aligned bricks spanning the box
//! `[min, max]`. Nodes are numbered x-fastest, then y, then z; every brick
//! uses the corner order expected by the signed-volume check, so a grid with
//! `min < max` on every axis has only positive volumes.

use crate::data::element::Brick;
use crate::data::mesh::Mesh;
use crate::data::node::Node;
use crate::mesh_error::MeshSkinError;
use crate::topology::point::NodeId;

fn invalid_geometry(message: impl Into<String>) -> MeshSkinError {
    MeshSkinError::InvalidGeometry(message.into())
}

fn check_extent(nx: usize, ny: usize, nz: usize, min: [f64; 3], max: [f64; 3]) -> Result<(), MeshSkinError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(invalid_geometry("nx, ny, and nz must be positive"));
    }
    for axis in 0..3 {
        if !(min[axis].is_finite() && max[axis].is_finite()) {
            return Err(invalid_geometry(format!("axis {axis} has a non-finite bound")));
        }
    }
    Ok(())
}

/// Builds an `nx * ny * nz` brick grid over `[min, max]`.
pub fn brick_grid(
    nx: usize,
    ny: usize,
    nz: usize,
    min: [f64; 3],
    max: [f64; 3],
) -> Result<Mesh, MeshSkinError> {
    check_extent(nx, ny, nz, min, max)?;

    let dx = (max[0] - min[0]) / nx as f64;
    let dy = (max[1] - min[1]) / ny as f64;
    let dz = (max[2] - min[2]) / nz as f64;

    let mut mesh = Mesh::new();
    for k in 0..=nz {
        let z = min[2] + dz * k as f64;
        for j in 0..=ny {
            let y = min[1] + dy * j as f64;
            for i in 0..=nx {
                let x = min[0] + dx * i as f64;
                mesh.add_node(Node::new([x, y, z]));
            }
        }
    }

    let row_stride = nx + 1;
    let slab_stride = row_stride * (ny + 1);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let base = k * slab_stride + j * row_stride + i;
                let v0 = base;
                let v1 = base + 1;
                let v3 = base + row_stride;
                let v2 = v3 + 1;
                let v4 = base + slab_stride;
                let v5 = v4 + 1;
                let v7 = v4 + row_stride;
                let v6 = v7 + 1;
                mesh.add_element(Brick::from_indices([v0, v1, v2, v3, v4, v5, v6, v7]))?;
            }
        }
    }

    log::debug!(
        "generated {nx}x{ny}x{nz} brick grid: {} nodes, {} elements",
        mesh.num_nodes(),
        mesh.num_elements()
    );
    Ok(mesh)
}

/// Ids of the grid nodes lying on the outer box, in ascending order.
pub fn grid_boundary_nodes(nx: usize, ny: usize, nz: usize) -> Vec<NodeId> {
    let mut out = Vec::new();
    for k in 0..=nz {
        for j in 0..=ny {
            for i in 0..=nx {
                if i == 0 || i == nx || j == 0 || j == ny || k == 0 || k == nz {
                    out.push(NodeId::new(k * (nx + 1) * (ny + 1) + j * (nx + 1) + i));
                }
            }
        }
    }
    out
}

/// Number of exterior facets of an `nx * ny * nz` grid.
pub fn grid_exterior_facet_count(nx: usize, ny: usize, nz: usize) -> usize {
    2 * (nx * ny + ny * nz + nx * nz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::metrics::brick_signed_volume;

    #[test]
    fn zero_divisions_are_rejected() {
        let err = brick_grid(0, 1, 1, [0.0; 3], [1.0; 3]).unwrap_err();
        assert!(matches!(err, MeshSkinError::InvalidGeometry(_)));
    }

    #[test]
    fn grid_has_expected_counts() {
        let mesh = brick_grid(2, 3, 4, [0.0; 3], [2.0, 3.0, 4.0]).unwrap();
        assert_eq!(mesh.num_nodes(), 3 * 4 * 5);
        assert_eq!(mesh.num_elements(), 24);
    }

    #[test]
    fn unit_bricks_have_unit_volume() {
        let mesh = brick_grid(2, 1, 1, [0.0; 3], [2.0, 1.0, 1.0]).unwrap();
        for brick in mesh.elements() {
            let v = brick_signed_volume(brick, mesh.nodes()).unwrap();
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn interior_node_is_not_on_the_box() {
        let b = grid_boundary_nodes(2, 2, 2);
        assert_eq!(b.len(), 27 - 1);
        assert!(!b.contains(&NodeId::new(13)));
    }
}
