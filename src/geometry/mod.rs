//! Geometry utilities for mesh-skin.
//!
//! This module provides the geometric primitives (positions, centroids,
//! signed volumes, facet areas) and the signed-volume element quality check.

pub mod metrics;
pub mod quality;

pub use metrics::{brick_signed_volume, quad_centroid};
pub use quality::{QualityReport, is_element_valid};
