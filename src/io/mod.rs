//! Mesh I/O for the text formats understood by mesh-skin.
//!
//! - [`sli`]: the "simple list" mesh format (read and write).
//! - [`pos`]: Gmsh post-processing views for visual inspection (write only).
//!
//! External 1-based ids exist only inside these modules; everything they
//! hand to or take from the core uses 0-based [`NodeId`](crate::topology::point::NodeId)s.

pub mod pos;
pub mod sli;

use crate::data::mesh::Mesh;
use crate::mesh_error::MeshSkinError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Trait for mesh readers.
pub trait MeshReader {
    /// Parse a mesh from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<Mesh, MeshSkinError>;

    /// Parse a mesh from a file.
    fn read_path(&self, path: impl AsRef<Path>) -> Result<Mesh, MeshSkinError> {
        let file = File::open(path.as_ref())?;
        self.read(BufReader::new(file))
    }
}

/// Trait for mesh writers.
pub trait MeshWriter {
    /// Write a mesh to a writer.
    fn write<W: Write>(&self, writer: W, mesh: &Mesh) -> Result<(), MeshSkinError>;

    /// Write a mesh to a file, replacing it.
    fn write_path(&self, path: impl AsRef<Path>, mesh: &Mesh) -> Result<(), MeshSkinError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer, mesh)?;
        writer.flush()?;
        Ok(())
    }
}
