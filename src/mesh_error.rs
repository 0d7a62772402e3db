//! MeshSkinError: Unified error type for mesh-skin public APIs
//!
//! Every fallible operation in the crate returns this error instead of
//! panicking. Non-fatal conditions (degenerate elements, empty meshes) are not
//! errors; they are reported as [`Event`](crate::report::Event)s.

use crate::topology::cell_type::CellType;
use thiserror::Error;

/// Unified error type for mesh-skin operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshSkinError {
    /// A 1-based local node position outside the element's node range.
    #[error("local node {local} out of range for {cell:?}: expected 1..={max}")]
    LocalIndexOutOfRange {
        cell: CellType,
        local: usize,
        max: usize,
    },
    /// A local face number outside `1..=6`.
    #[error("local face {0} out of range: expected 1..=6")]
    LocalFaceOutOfRange(u8),
    /// A node reference that does not exist in the node store.
    #[error("node index {index} out of range (mesh has {len} nodes)")]
    NodeIndexOutOfRange { index: usize, len: usize },
    /// An element reference that does not exist in the element store.
    #[error("element index {index} out of range (mesh has {len} elements)")]
    ElementIndexOutOfRange { index: usize, len: usize },
    /// Generator arguments that cannot describe a mesh.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Malformed mesh input.
    #[error("mesh I/O parse error: {0}")]
    MeshIoParse(String),
    /// Underlying reader/writer failure.
    #[error("I/O error: {0}")]
    Io(String),
    /// Rejected processing parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for MeshSkinError {
    fn from(err: std::io::Error) -> Self {
        MeshSkinError::Io(err.to_string())
    }
}
