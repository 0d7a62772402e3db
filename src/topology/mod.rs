//! Top-level module for mesh topology abstractions.
//!
//! This module provides the handle types used to address nodes and elements,
//! and the fixed local numbering of the supported cell types:
//! - [`point`]: `NodeId` / `ElementId` arena handles
//! - [`cell_type`]: `CellType`, brick face table, `LocalFace`

pub mod cell_type;
pub mod point;

pub use cell_type::{CellType, LocalFace};
pub use point::{ElementId, NodeId};
