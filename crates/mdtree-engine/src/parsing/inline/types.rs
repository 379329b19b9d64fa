use crate::tree::NodeKind;

/// An inline node produced by [`parse_inline`](super::parse_inline), before
/// it is attached to the document arena.
///
/// Emphasis, Strong, Link and Image carry children; everything else is a leaf.
#[derive(Debug, PartialEq, Eq)]
pub struct Inline {
    pub kind: NodeKind,
    pub children: Vec<Inline>,
}

impl Inline {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            children: vec![],
        }
    }

    pub fn container(kind: NodeKind, children: Vec<Inline>) -> Self {
        Self { kind, children }
    }

    pub fn text(bytes: impl Into<Vec<u8>>) -> Self {
        Self::leaf(NodeKind::Text(bytes.into()))
    }

    /// Splits the node into its kind and children.
    pub fn into_parts(mut self) -> (NodeKind, Vec<Inline>) {
        let kind = std::mem::replace(&mut self.kind, NodeKind::Text(Vec::new()));
        (kind, std::mem::take(&mut self.children))
    }

    /// The literal of a Text node, for in-place edits during parsing.
    pub(crate) fn text_mut(&mut self) -> Option<&mut Vec<u8>> {
        match &mut self.kind {
            NodeKind::Text(lit) => Some(lit),
            _ => None,
        }
    }
}

/// Nesting depth is unbounded, so children are freed from a work list
/// instead of recursively.
impl Drop for Inline {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
