//! Arena-style mesh store: contiguous nodes and bricks.

use crate::data::element::Brick;
use crate::data::node::Node;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshSkinError;
use crate::topology::point::{ElementId, NodeId};

/// Nodes and 8-node bricks of one mesh.
///
/// Every element only references nodes that exist in the store; the
/// constructors enforce this so downstream passes can rely on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<Brick>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh from loaded parts, validating element node references.
    pub fn from_parts(nodes: Vec<Node>, elements: Vec<Brick>) -> Result<Self, MeshSkinError> {
        let mesh = Self { nodes, elements };
        mesh.validate_invariants()?;
        Ok(mesh)
    }

    /// Appends a node and returns its handle.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    /// Appends a brick whose nodes must already exist.
    pub fn add_element(&mut self, brick: Brick) -> Result<ElementId, MeshSkinError> {
        check_brick(&brick, self.nodes.len())?;
        self.elements.push(brick);
        Ok(ElementId::new(self.elements.len() - 1))
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable node view; the node count cannot change through it.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    #[inline]
    pub fn elements(&self) -> &[Brick] {
        &self.elements
    }

    /// Read-only elements alongside mutable nodes.
    #[inline]
    pub fn split_mut(&mut self) -> (&[Brick], &mut [Node]) {
        (&self.elements, &mut self.nodes)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, MeshSkinError> {
        let len = self.nodes.len();
        self.nodes
            .get(id.index())
            .ok_or(MeshSkinError::NodeIndexOutOfRange {
                index: id.index(),
                len,
            })
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, MeshSkinError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .ok_or(MeshSkinError::NodeIndexOutOfRange {
                index: id.index(),
                len,
            })
    }

    pub fn element(&self, id: ElementId) -> Result<&Brick, MeshSkinError> {
        let len = self.elements.len();
        self.elements
            .get(id.index())
            .ok_or(MeshSkinError::ElementIndexOutOfRange {
                index: id.index(),
                len,
            })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// True when there is nothing to process (no nodes or no elements).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() || self.elements.is_empty()
    }

    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId::new)
    }
}

fn check_brick(brick: &Brick, len: usize) -> Result<(), MeshSkinError> {
    match brick.nodes().iter().find(|n| n.index() >= len) {
        Some(n) => Err(MeshSkinError::NodeIndexOutOfRange {
            index: n.index(),
            len,
        }),
        None => Ok(()),
    }
}

impl DebugInvariants for Mesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Mesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshSkinError> {
        let len = self.nodes.len();
        self.elements.iter().try_for_each(|b| check_brick(b, len))
    }
}
