//! Quad facets of bricks and their combinatorial adjacency key.
//!
//! A facet keeps the four corner nodes of one brick face (in the outward
//! winding of [`HEX_FACES`](crate::topology::cell_type::HEX_FACES)), the
//! originating brick, and its centroid. Local position 5 of a facet is its
//! *sentinel*: the flag the neighbour pass sets when the facet turns out to be
//! exterior. The boundary marker reads that sentinel to decide which facets to
//! convert into node markers.

use crate::data::element::ElementNodes;
use crate::topology::cell_type::{CellType, LocalFace};
use crate::topology::point::{ElementId, NodeId};

/// 1-based local position of the facet sentinel.
pub const SENTINEL_POSITION: usize = 5;

/// Order-independent identity of a facet: its node ids, sorted.
///
/// Two facets describe the same geometric face exactly when their keys are
/// equal, independent of winding or starting corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacetKey([NodeId; 4]);

impl FacetKey {
    pub fn of(nodes: &[NodeId; 4]) -> Self {
        let mut sorted = *nodes;
        sorted.sort_unstable();
        FacetKey(sorted)
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId; 4] {
        &self.0
    }
}

/// One face of a brick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Facet {
    element: ElementId,
    face: LocalFace,
    nodes: [NodeId; 4],
    centroid: [f64; 3],
    exterior: bool,
}

impl Facet {
    /// A facet with an unset sentinel.
    pub fn new(element: ElementId, face: LocalFace, nodes: [NodeId; 4], centroid: [f64; 3]) -> Self {
        Self {
            element,
            face,
            nodes,
            centroid,
            exterior: false,
        }
    }

    /// The brick this facet was generated from.
    #[inline]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[inline]
    pub fn face(&self) -> LocalFace {
        self.face
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId; 4] {
        &self.nodes
    }

    #[inline]
    pub fn centroid(&self) -> [f64; 3] {
        self.centroid
    }

    #[inline]
    pub fn key(&self) -> FacetKey {
        FacetKey::of(&self.nodes)
    }

    /// The flag carried at [`SENTINEL_POSITION`].
    #[inline]
    pub fn sentinel_flag(&self) -> bool {
        self.exterior
    }

    /// Whether no other brick shares this facet.
    #[inline]
    pub fn is_exterior(&self) -> bool {
        self.exterior
    }

    pub(crate) fn set_exterior(&mut self, exterior: bool) {
        self.exterior = exterior;
    }
}

impl ElementNodes for Facet {
    const CELL_TYPE: CellType = CellType::Quadrilateral;

    fn node_ids(&self) -> &[NodeId] {
        &self.nodes
    }
}
