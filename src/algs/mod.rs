//! Re-export public algorithms.

pub mod boundary;
pub mod neighbours;
pub mod transform;
pub mod volume;

pub use boundary::{clear_boundary, mark_boundary, mark_flagged_facets};
pub use neighbours::{FacetSet, build_facets, extract_exterior_facets};
pub use transform::scale_nodes;
pub use volume::total_volume;
