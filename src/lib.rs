#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-skin
//!
//! mesh-skin extracts the exterior surface of 8-node hexahedral ("brick")
//! meshes and checks their quality. It is meant to run between a mesh
//! generator and a flow solver: load a mesh, verify that no element is
//! inverted, report the model volume, and mark the nodes of the outer skin
//! with a velocity boundary condition.
//!
//! ## Features
//! - Arena-style [`Mesh`](crate::data::mesh::Mesh) store with 0-based
//!   [`NodeId`](crate::topology::point::NodeId)/[`ElementId`](crate::topology::point::ElementId) handles
//! - Signed-volume quality check and model volume
//! - Exterior-facet detection by hashed, sorted facet keys (linear time)
//! - Gated boundary marking of exterior facets
//! - Simple-list (`.sli`) mesh I/O and Gmsh `.pos` views
//! - Optional parallel facet generation with the `rayon` feature
//!
//! ## Usage
//!
//! ```
//! use mesh_skin::prelude::*;
//!
//! let mut mesh = brick_grid(2, 1, 1, [0.0; 3], [2.0, 1.0, 1.0])?;
//! let mut reporter = CollectingReporter::default();
//! let summary = process(&mut mesh, &ProcessingConfig::default(), &mut reporter)?;
//! assert!(summary.volume.is_some_and(|v| (v - 2.0).abs() < 1e-12));
//! assert_eq!(summary.surface.map(|s| s.exterior_facets.len()), Some(10));
//! # Ok::<(), MeshSkinError>(())
//! ```
//!
//! ## Diagnostics
//! Library code never prints. Processing events go to a caller-supplied
//! [`Reporter`](crate::report::Reporter); internal progress goes to the
//! `log` facade at `debug` level.

pub mod algs;
pub mod config;
pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod mesh_generation;
pub mod pipeline;
pub mod report;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::boundary::{clear_boundary, mark_boundary, mark_flagged_facets};
    pub use crate::algs::neighbours::{FacetSet, build_facets, extract_exterior_facets};
    pub use crate::algs::volume::total_volume;
    pub use crate::config::ProcessingConfig;
    pub use crate::data::element::{Brick, ElementNodes, element_node};
    pub use crate::data::facet::{Facet, FacetKey};
    pub use crate::data::mesh::Mesh;
    pub use crate::data::node::{BoundaryMarker, Node};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::metrics::brick_signed_volume;
    pub use crate::geometry::quality::{QualityReport, is_element_valid};
    pub use crate::io::pos::PosWriter;
    pub use crate::io::sli::{SliReader, SliWriter};
    pub use crate::io::{MeshReader, MeshWriter};
    pub use crate::mesh_error::MeshSkinError;
    pub use crate::mesh_generation::brick_grid;
    pub use crate::pipeline::{ProcessingSummary, SurfaceSummary, extract_surface, process};
    pub use crate::report::{CollectingReporter, Event, LogReporter, Reporter};
    pub use crate::topology::point::{ElementId, NodeId};
}
