//! Gmsh post-processing (`.pos`) views.
//!
//! Each writer emits one parsed-format view:
//!
//! | view             | primitive | value                      |
//! |------------------|-----------|----------------------------|
//! | `nodes_ID`       | `SP`      | external node id           |
//! | `nodes_boundary` | `SP`      | boundary marker code (0/1) |
//! | `elements`       | `SH`      | external element id        |
//! | `surface`        | `SQ`      | external owning element id |

use crate::data::facet::Facet;
use crate::data::mesh::Mesh;
use crate::data::node::Node;
use crate::geometry::metrics::gather_vertices;
use crate::mesh_error::MeshSkinError;
use crate::topology::point::NodeId;
use std::io::Write;

/// Writer for Gmsh `.pos` views.
///
/// The node limit restricts node views to the first `limit` nodes.
#[derive(Debug, Default, Clone)]
pub struct PosWriter {
    node_limit: Option<usize>,
}

fn write_coords<W: Write>(writer: &mut W, vertices: &[[f64; 3]]) -> Result<(), MeshSkinError> {
    let mut first = true;
    for [x, y, z] in vertices {
        if !first {
            write!(writer, ",")?;
        }
        write!(writer, "{x},{y},{z}")?;
        first = false;
    }
    Ok(())
}

fn write_values<W: Write>(writer: &mut W, value: u64, count: usize) -> Result<(), MeshSkinError> {
    let values = vec![value.to_string(); count];
    write!(writer, "{}", values.join(","))?;
    Ok(())
}

impl PosWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
        }
    }

    fn limited<'a>(&self, nodes: &'a [Node]) -> &'a [Node] {
        match self.node_limit {
            Some(l) if l < nodes.len() => &nodes[..l],
            _ => nodes,
        }
    }

    fn write_view<W, F>(mut writer: W, name: &str, body: F) -> Result<(), MeshSkinError>
    where
        W: Write,
        F: FnOnce(&mut W) -> Result<(), MeshSkinError>,
    {
        writeln!(writer, "View \"{name}\" {{")?;
        body(&mut writer)?;
        writeln!(writer, "}};")?;
        Ok(())
    }

    fn write_node_points<W, F>(
        &self,
        writer: W,
        name: &str,
        nodes: &[Node],
        value: F,
    ) -> Result<(), MeshSkinError>
    where
        W: Write,
        F: Fn(NodeId, &Node) -> u64,
    {
        let nodes = self.limited(nodes);
        Self::write_view(writer, name, |w| {
            for (i, node) in nodes.iter().enumerate() {
                write!(w, "SP(")?;
                write_coords(w, &[node.position])?;
                writeln!(w, "){{{}}};", value(NodeId::new(i), node))?;
            }
            Ok(())
        })
    }

    /// `nodes_ID` view: every node labelled with its external id.
    pub fn write_node_ids<W: Write>(&self, writer: W, nodes: &[Node]) -> Result<(), MeshSkinError> {
        self.write_node_points(writer, "nodes_ID", nodes, |id, _| id.external())
    }

    /// `nodes_boundary` view: every node labelled with its marker code.
    pub fn write_node_boundary<W: Write>(
        &self,
        writer: W,
        nodes: &[Node],
    ) -> Result<(), MeshSkinError> {
        self.write_node_points(writer, "nodes_boundary", nodes, |_, n| {
            u64::from(n.boundary.code())
        })
    }

    /// `elements` view: one scalar hexahedron per brick.
    pub fn write_elements<W: Write>(&self, writer: W, mesh: &Mesh) -> Result<(), MeshSkinError> {
        Self::write_view(writer, "elements", |w| {
            for (id, brick) in mesh.element_ids().zip(mesh.elements()) {
                let vertices = gather_vertices(brick.nodes(), mesh.nodes())?;
                write!(w, "SH(")?;
                write_coords(w, &vertices)?;
                write!(w, "){{")?;
                write_values(w, id.external(), 8)?;
                writeln!(w, "}};")?;
            }
            Ok(())
        })
    }

    /// `surface` view: one scalar quadrangle per facet, valued by its owner.
    pub fn write_surface<'a, W, I>(
        &self,
        writer: W,
        facets: I,
        nodes: &[Node],
    ) -> Result<(), MeshSkinError>
    where
        W: Write,
        I: IntoIterator<Item = &'a Facet>,
    {
        Self::write_view(writer, "surface", |w| {
            for facet in facets {
                let vertices = gather_vertices(facet.nodes(), nodes)?;
                write!(w, "SQ(")?;
                write_coords(w, &vertices)?;
                write!(w, "){{")?;
                write_values(w, facet.element().external(), 4)?;
                writeln!(w, "}};")?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::neighbours::extract_exterior_facets;
    use crate::data::element::Brick;

    fn unit_cube() -> Mesh {
        let mut mesh = Mesh::new();
        for z in [0.0, 1.0] {
            for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
                mesh.add_node(Node::new([x, y, z]));
            }
        }
        mesh.add_element(Brick::from_indices([0, 1, 2, 3, 4, 5, 6, 7]))
            .unwrap();
        mesh
    }

    #[test]
    fn node_ids_view_uses_external_ids() {
        let mesh = unit_cube();
        let mut buf = Vec::new();
        PosWriter::with_node_limit(2)
            .write_node_ids(&mut buf, mesh.nodes())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "View \"nodes_ID\" {\nSP(0,0,0){1};\nSP(1,0,0){2};\n};\n");
    }

    #[test]
    fn element_view_repeats_id_per_corner() {
        let mesh = unit_cube();
        let mut buf = Vec::new();
        PosWriter::new().write_elements(&mut buf, &mesh).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("View \"elements\" {\nSH(0,0,0,1,0,0,"));
        assert!(text.contains("){1,1,1,1,1,1,1,1};"));
    }

    #[test]
    fn surface_view_has_one_quad_per_facet() {
        let mesh = unit_cube();
        let facets = extract_exterior_facets(mesh.elements(), mesh.nodes()).unwrap();
        let mut buf = Vec::new();
        PosWriter::new()
            .write_surface(&mut buf, &facets, mesh.nodes())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("SQ(").count(), 6);
        assert_eq!(text.matches("{1,1,1,1};").count(), 6);
    }
}
