//! Boundary marking of nodes from facets.
//!
//! Marking copies a [`BoundaryMarker`] onto the four corner nodes of a facet.
//! The gated form, [`mark_flagged_facets`], only converts facets whose
//! sentinel (local position 5) was flagged by the neighbour pass, so exactly
//! the exterior skin ends up marked.

use crate::data::facet::Facet;
use crate::data::node::{BoundaryMarker, Node};
use crate::mesh_error::MeshSkinError;
use crate::topology::point::NodeId;

/// Classified boundary/interior node sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryClassification {
    pub boundary: Vec<NodeId>,
    pub interior: Vec<NodeId>,
}

/// Marks every corner of `facet` as a velocity boundary node. Idempotent.
pub fn mark_boundary(facet: &Facet, nodes: &mut [Node]) -> Result<(), MeshSkinError> {
    mark_boundary_with(facet, nodes, BoundaryMarker::Velocity)
}

/// Marks every corner of `facet` with `marker`.
///
/// All four references are checked before any node is touched, so a failing
/// call leaves `nodes` unchanged.
pub fn mark_boundary_with(
    facet: &Facet,
    nodes: &mut [Node],
    marker: BoundaryMarker,
) -> Result<(), MeshSkinError> {
    let len = nodes.len();
    if let Some(bad) = facet.nodes().iter().find(|n| n.index() >= len) {
        return Err(MeshSkinError::NodeIndexOutOfRange {
            index: bad.index(),
            len,
        });
    }
    for id in facet.nodes() {
        nodes[id.index()].set_boundary(marker);
    }
    Ok(())
}

/// Marks the facets whose sentinel is flagged; returns how many were marked.
pub fn mark_flagged_facets<'a, I>(facets: I, nodes: &mut [Node]) -> Result<usize, MeshSkinError>
where
    I: IntoIterator<Item = &'a Facet>,
{
    let mut marked = 0;
    for facet in facets {
        if facet.sentinel_flag() {
            mark_boundary(facet, nodes)?;
            marked += 1;
        }
    }
    Ok(marked)
}

/// Resets every boundary marker; returns how many nodes were marked before.
pub fn clear_boundary(nodes: &mut [Node]) -> usize {
    let mut cleared = 0;
    for node in nodes.iter_mut().filter(|n| n.is_boundary()) {
        node.clear_boundary();
        cleared += 1;
    }
    cleared
}

/// Splits node ids by their current boundary marker.
pub fn classify_boundary_nodes(nodes: &[Node]) -> BoundaryClassification {
    let (boundary, interior): (Vec<NodeId>, Vec<NodeId>) = (0..nodes.len())
        .map(NodeId::new)
        .partition(|id| nodes[id.index()].is_boundary());
    BoundaryClassification { boundary, interior }
}
