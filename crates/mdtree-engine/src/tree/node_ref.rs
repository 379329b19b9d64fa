use std::fmt;

use crate::parsing::source::{Span, preview};

use super::{
    arena::{Document, NodeData, NodeId},
    node::NodeKind,
    walk::{Preorder, WalkStatus, walk},
};

/// Literal bytes shown in a node's one-line form before truncation.
const DISPLAY_LITERAL_MAX: usize = 16;

/// A borrowed handle to one node of a [`Document`].
///
/// Handles are `Copy` and cannot outlive the document they point into.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    fn data(&self) -> &'a NodeData {
        self.doc.data(self.id)
    }

    fn link(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.map(|id| NodeRef::new(self.doc, id))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.data().kind
    }

    /// Raw text of Text, CodeSpan and CodeBlock nodes.
    pub fn literal(&self) -> Option<&'a [u8]> {
        self.kind().literal()
    }

    /// Source lines covered by a block node. Inline nodes have no span.
    pub fn span(&self) -> Option<Span> {
        self.data().span
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(self.data().parent)
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.link(self.data().first_child)
    }

    pub fn last_child(&self) -> Option<NodeRef<'a>> {
        self.link(self.data().last_child)
    }

    pub fn prev(&self) -> Option<NodeRef<'a>> {
        self.link(self.data().prev)
    }

    pub fn next(&self) -> Option<NodeRef<'a>> {
        self.link(self.data().next)
    }

    /// Direct children, first to last.
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.first_child(),
        }
    }

    /// Enter/leave events for this node's subtree.
    pub fn preorder(&self) -> Preorder<'a> {
        Preorder::new(*self)
    }

    /// Walks this node's subtree depth-first. See [`walk`].
    pub fn walk<F>(&self, visitor: F)
    where
        F: FnMut(NodeRef<'a>, bool) -> WalkStatus,
    {
        walk(*self, visitor);
    }

    /// Concatenated literal text of all Text and CodeSpan descendants.
    pub fn text_content(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.walk(|node, _| {
            match node.kind() {
                NodeKind::Text(lit) | NodeKind::CodeSpan(lit) => out.extend_from_slice(lit),
                NodeKind::LineBreak { .. } => out.push(b'\n'),
                _ => {}
            }
            WalkStatus::Continue
        });
        out
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

/// `Kind: 'literal'`, with the literal cut at 16 bytes.
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = self.literal().unwrap_or_default();
        write!(
            f,
            "{}: '{}'",
            self.kind().name(),
            preview(literal, DISPLAY_LITERAL_MAX)
        )
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", self.kind())
            .finish()
    }
}

/// Iterator over a node's direct children.
#[derive(Clone)]
pub struct Children<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}
