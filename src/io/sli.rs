//! "Simple list" (`.sli`) mesh format.
//!
//! ```text
//! # comment
//! NODES <n>
//! <id> <x> <y> <z> [<flag 0|1> [<boundary 0|1>]]
//! ELEMENTS <m> 8
//! <id> <n1> <n2> <n3> <n4> <n5> <n6> <n7> <n8>
//! END
//! ```
//!
//! Ids are 1-based and must be contiguous, in file order. Blank lines and
//! anything after `#` are ignored. The trailing `END` is optional.

use crate::data::element::Brick;
use crate::data::mesh::Mesh;
use crate::data::node::{BoundaryMarker, Node};
use crate::io::{MeshReader, MeshWriter};
use crate::mesh_error::MeshSkinError;
use crate::topology::point::NodeId;
use std::io::{Read, Write};

fn parse_err(line: usize, message: impl std::fmt::Display) -> MeshSkinError {
    MeshSkinError::MeshIoParse(format!("line {line}: {message}"))
}

/// Reader for `.sli` meshes.
#[derive(Debug, Default, Clone)]
pub struct SliReader;

impl SliReader {
    fn parse_header(line: usize, text: &str, keyword: &str) -> Result<Vec<usize>, MeshSkinError> {
        let mut parts = text.split_whitespace();
        if parts.next() != Some(keyword) {
            return Err(parse_err(line, format!("expected {keyword} header, found `{text}`")));
        }
        parts
            .map(|raw| {
                raw.parse::<usize>()
                    .map_err(|_| parse_err(line, format!("invalid {keyword} count: {raw}")))
            })
            .collect()
    }

    fn parse_id(line: usize, raw: Option<&str>, expected: u64) -> Result<(), MeshSkinError> {
        let raw = raw.ok_or_else(|| parse_err(line, "missing id"))?;
        let id = raw
            .parse::<u64>()
            .map_err(|_| parse_err(line, format!("invalid id: {raw}")))?;
        if id != expected {
            return Err(parse_err(line, format!("expected id {expected}, found {id}")));
        }
        Ok(())
    }

    fn parse_coord(line: usize, raw: Option<&str>) -> Result<f64, MeshSkinError> {
        let raw = raw.ok_or_else(|| parse_err(line, "missing coordinate"))?;
        raw.parse::<f64>()
            .map_err(|_| parse_err(line, format!("invalid coordinate: {raw}")))
    }

    fn parse_bit(line: usize, raw: Option<&str>, what: &str) -> Result<u8, MeshSkinError> {
        match raw {
            None => Ok(0),
            Some("0") => Ok(0),
            Some("1") => Ok(1),
            Some(other) => Err(parse_err(line, format!("invalid {what}: {other}"))),
        }
    }

    fn parse_node(line: usize, text: &str, expected: u64) -> Result<Node, MeshSkinError> {
        let mut parts = text.split_whitespace();
        Self::parse_id(line, parts.next(), expected)?;
        let x = Self::parse_coord(line, parts.next())?;
        let y = Self::parse_coord(line, parts.next())?;
        let z = Self::parse_coord(line, parts.next())?;
        let flag = Self::parse_bit(line, parts.next(), "flag")?;
        let code = Self::parse_bit(line, parts.next(), "boundary marker")?;
        if let Some(extra) = parts.next() {
            return Err(parse_err(line, format!("unexpected token `{extra}`")));
        }
        let mut node = Node::new([x, y, z]).with_flag(flag == 1);
        if let Some(marker) = BoundaryMarker::from_code(code) {
            node.set_boundary(marker);
        }
        Ok(node)
    }

    fn parse_brick(line: usize, text: &str, expected: u64) -> Result<Brick, MeshSkinError> {
        let mut parts = text.split_whitespace();
        Self::parse_id(line, parts.next(), expected)?;
        let mut ids = [NodeId::new(0); 8];
        for slot in ids.iter_mut() {
            let raw = parts
                .next()
                .ok_or_else(|| parse_err(line, "brick needs 8 node ids"))?;
            let external = raw
                .parse::<u64>()
                .map_err(|_| parse_err(line, format!("invalid node id: {raw}")))?;
            *slot = NodeId::from_external(external)
                .ok_or_else(|| parse_err(line, "node ids start at 1"))?;
        }
        if let Some(extra) = parts.next() {
            return Err(parse_err(line, format!("unexpected token `{extra}`")));
        }
        Ok(Brick::new(ids))
    }
}

impl MeshReader for SliReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<Mesh, MeshSkinError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.split('#').next().unwrap_or("").trim()))
            .filter(|(_, l)| !l.is_empty());

        let (ln, header) = lines
            .next()
            .ok_or_else(|| MeshSkinError::MeshIoParse("missing NODES header".into()))?;
        let node_count = match Self::parse_header(ln, header, "NODES")?.as_slice() {
            [n] => *n,
            _ => return Err(parse_err(ln, "NODES header takes one count")),
        };

        let mut mesh = Mesh::new();
        for expected in 1..=node_count as u64 {
            let (ln, text) = lines
                .next()
                .ok_or_else(|| MeshSkinError::MeshIoParse("unexpected end of node list".into()))?;
            mesh.add_node(Self::parse_node(ln, text, expected)?);
        }

        let (ln, header) = lines
            .next()
            .ok_or_else(|| MeshSkinError::MeshIoParse("missing ELEMENTS header".into()))?;
        let element_count = match Self::parse_header(ln, header, "ELEMENTS")?.as_slice() {
            [m, 8] => *m,
            [_, k] => return Err(parse_err(ln, format!("unsupported element size {k}, expected 8"))),
            _ => return Err(parse_err(ln, "ELEMENTS header takes a count and a node count")),
        };

        for expected in 1..=element_count as u64 {
            let (ln, text) = lines.next().ok_or_else(|| {
                MeshSkinError::MeshIoParse("unexpected end of element list".into())
            })?;
            let brick = Self::parse_brick(ln, text, expected)?;
            mesh.add_element(brick).map_err(|e| parse_err(ln, e))?;
        }

        match lines.next() {
            None | Some((_, "END")) => {}
            Some((ln, other)) => return Err(parse_err(ln, format!("expected END, found `{other}`"))),
        }
        if let Some((ln, other)) = lines.next() {
            return Err(parse_err(ln, format!("content after END: `{other}`")));
        }

        log::debug!(
            "read sli mesh: {} nodes, {} elements",
            mesh.num_nodes(),
            mesh.num_elements()
        );
        Ok(mesh)
    }
}

/// Writer for `.sli` meshes.
///
/// With a node limit, only the first `limit` nodes are written; elements
/// must not reference the nodes left out.
#[derive(Debug, Default, Clone)]
pub struct SliWriter {
    node_limit: Option<usize>,
}

impl SliWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
        }
    }

    fn written_nodes(&self, mesh: &Mesh) -> usize {
        self.node_limit
            .map_or(mesh.num_nodes(), |l| l.min(mesh.num_nodes()))
    }
}

impl MeshWriter for SliWriter {
    fn write<W: Write>(&self, mut writer: W, mesh: &Mesh) -> Result<(), MeshSkinError> {
        let count = self.written_nodes(mesh);
        if let Some(bad) = mesh
            .elements()
            .iter()
            .flat_map(|b| b.nodes().iter())
            .find(|n| n.index() >= count)
        {
            return Err(MeshSkinError::NodeIndexOutOfRange {
                index: bad.index(),
                len: count,
            });
        }

        writeln!(writer, "NODES {count}")?;
        for (i, node) in mesh.nodes()[..count].iter().enumerate() {
            let [x, y, z] = node.position;
            writeln!(
                writer,
                "{} {x} {y} {z} {} {}",
                NodeId::new(i),
                u8::from(node.flag),
                node.boundary.code()
            )?;
        }
        writeln!(writer, "ELEMENTS {} 8", mesh.num_elements())?;
        for (id, brick) in mesh.element_ids().zip(mesh.elements()) {
            write!(writer, "{id}")?;
            for id in brick.nodes() {
                write!(writer, " {id}")?;
            }
            writeln!(writer)?;
        }
        writeln!(writer, "END")?;
        Ok(())
    }
}
