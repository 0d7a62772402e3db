//! Geometry metrics for bricks and quad facets.
//!
//! Bricks use the local numbering documented in
//! [`cell_type`](crate::topology::cell_type): bottom face `[v0, v1, v2, v3]`
//! counter-clockwise seen from above, top face `[v4, v5, v6, v7]`.
//!
//! The signed brick volume splits the hexahedron into five tetrahedra along
//! that ordering. It is exact for bricks with planar faces, positive for the
//! documented winding and negative for a mirrored one.

use crate::data::element::Brick;
use crate::data::facet::Facet;
use crate::data::node::Node;
use crate::mesh_error::MeshSkinError;
use crate::topology::cell_type::HEX_CORNER_NEIGHBOURS;
use crate::topology::point::NodeId;

const EPS: f64 = 1e-12;

/// Position of node `id`, or an index error.
pub fn node_position(nodes: &[Node], id: NodeId) -> Result<[f64; 3], MeshSkinError> {
    nodes
        .get(id.index())
        .map(|n| n.position)
        .ok_or(MeshSkinError::NodeIndexOutOfRange {
            index: id.index(),
            len: nodes.len(),
        })
}

/// Positions of a fixed number of nodes, in order.
pub fn gather_vertices<const N: usize>(
    ids: &[NodeId; N],
    nodes: &[Node],
) -> Result<[[f64; 3]; N], MeshSkinError> {
    let mut out = [[0.0; 3]; N];
    for (slot, id) in out.iter_mut().zip(ids) {
        *slot = node_position(nodes, *id)?;
    }
    Ok(out)
}

/// Signed volume of a brick; sign encodes node-ordering consistency.
pub fn brick_signed_volume(element: &Brick, nodes: &[Node]) -> Result<f64, MeshSkinError> {
    let vertices = gather_vertices(element.nodes(), nodes)?;
    Ok(hex_signed_volume(&vertices))
}

/// Signed volume from explicit brick vertices.
pub fn hex_signed_volume(v: &[[f64; 3]; 8]) -> f64 {
    signed_volume(v[0], v[1], v[3], v[4])
        + signed_volume(v[1], v[2], v[3], v[6])
        + signed_volume(v[1], v[3], v[4], v[6])
        + signed_volume(v[1], v[4], v[5], v[6])
        + signed_volume(v[3], v[4], v[6], v[7])
}

/// Jacobian determinant at each brick corner.
///
/// Corner `i` uses the edge vectors to its three neighbours in
/// [`HEX_CORNER_NEIGHBOURS`] order. All eight are positive for a brick with
/// consistent node ordering; a single swapped pair of nodes turns at least
/// one negative even when the summed volume stays positive.
pub fn hex_corner_jacobians(v: &[[f64; 3]; 8]) -> [f64; 8] {
    let mut out = [0.0; 8];
    for (i, [a, b, c]) in HEX_CORNER_NEIGHBOURS.iter().enumerate() {
        let o = v[i];
        out[i] = dot(sub(v[*a], o), cross(sub(v[*b], o), sub(v[*c], o)));
    }
    out
}

/// [`hex_corner_jacobians`] for a stored brick.
pub fn brick_corner_jacobians(element: &Brick, nodes: &[Node]) -> Result<[f64; 8], MeshSkinError> {
    Ok(hex_corner_jacobians(&gather_vertices(element.nodes(), nodes)?))
}

/// Arithmetic mean of the eight brick corners.
pub fn brick_centroid(element: &Brick, nodes: &[Node]) -> Result<[f64; 3], MeshSkinError> {
    Ok(mean(&gather_vertices(element.nodes(), nodes)?))
}

/// Arithmetic mean of the facet's four corners.
pub fn quad_centroid(facet: &Facet, nodes: &[Node]) -> Result<[f64; 3], MeshSkinError> {
    quad_centroid_of(facet.nodes(), nodes)
}

/// [`quad_centroid`] for bare corner ids.
pub fn quad_centroid_of(ids: &[NodeId; 4], nodes: &[Node]) -> Result<[f64; 3], MeshSkinError> {
    Ok(mean(&gather_vertices(ids, nodes)?))
}

/// Vector area of a quad: half the cross product of its diagonals.
///
/// Exact for planar quads; for warped quads it is the area of the projection
/// onto the mean plane.
pub fn quad_area(facet: &Facet, nodes: &[Node]) -> Result<f64, MeshSkinError> {
    let v = gather_vertices(facet.nodes(), nodes)?;
    Ok(0.5 * norm(diagonal_cross(&v)))
}

/// Unit normal following the facet winding, `None` for a collapsed facet.
pub fn quad_normal(facet: &Facet, nodes: &[Node]) -> Result<Option<[f64; 3]>, MeshSkinError> {
    let v = gather_vertices(facet.nodes(), nodes)?;
    let n = diagonal_cross(&v);
    let len = norm(n);
    if len <= EPS {
        return Ok(None);
    }
    Ok(Some([n[0] / len, n[1] / len, n[2] / len]))
}

fn diagonal_cross(v: &[[f64; 3]; 4]) -> [f64; 3] {
    cross(sub(v[2], v[0]), sub(v[3], v[1]))
}

fn mean<const N: usize>(v: &[[f64; 3]; N]) -> [f64; 3] {
    let mut acc = [0.0; 3];
    for p in v {
        acc[0] += p[0];
        acc[1] += p[1];
        acc[2] += p[2];
    }
    let n = N as f64;
    [acc[0] / n, acc[1] / n, acc[2] / n]
}

fn signed_volume(a: [f64; 3], b: [f64; 3], c: [f64; 3], d: [f64; 3]) -> f64 {
    let ab = sub(b, a);
    let ac = sub(c, a);
    let ad = sub(d, a);
    dot(ab, cross(ac, ad)) / 6.0
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
