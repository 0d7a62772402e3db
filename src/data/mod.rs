//! Data module: nodes, bricks, facets and the mesh store

pub mod element;
pub mod facet;
pub mod mesh;
pub mod node;

pub use crate::debug_invariants::DebugInvariants;

pub use element::{Brick, ElementNodes, element_node};
pub use facet::{Facet, FacetKey, SENTINEL_POSITION};
pub use mesh::Mesh;
pub use node::{BoundaryMarker, Node};
