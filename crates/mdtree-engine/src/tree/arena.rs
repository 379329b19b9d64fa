use crate::parsing::{inline::Inline, source::Span};

use super::{
    node::NodeKind,
    node_ref::NodeRef,
    walk::{WalkStatus, walk},
};

/// Index of a node in its [`Document`]'s arena.
///
/// Ids are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The Document node is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena slot: the node's kind plus its tree links.
///
/// `first_child`, `last_child` and `next` describe ownership order within
/// the parent; `parent` and `prev` are back-references. All of them are
/// indices, so the tree has no reference cycles.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) span: Option<Span>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind, span: Option<Span>, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            span,
            parent,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
        }
    }
}

/// A parsed Markdown document.
///
/// Owns every node of the tree. Nodes are reached through [`NodeRef`] handles
/// borrowed from the document, starting at [`Document::root`]. The tree is
/// read-only once parsing returns.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    pub(crate) fn new(span: Span) -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document, Some(span), None)],
        }
    }

    /// The Document node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Total number of nodes, including the Document node.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in allocation order (not tree order).
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeRef::new(self, NodeId(i)))
    }

    /// Walks the whole document depth-first. See [`walk`].
    pub fn walk<'a, F>(&'a self, visitor: F)
    where
        F: FnMut(NodeRef<'a>, bool) -> WalkStatus,
    {
        walk(self.root(), visitor);
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    /// Appends a new last child to `parent`.
    pub(crate) fn append_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        span: Option<Span>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let last = self.nodes[parent.0].last_child;
        let mut data = NodeData::new(kind, span, Some(parent));
        data.prev = last;
        self.nodes.push(data);

        match last {
            Some(prev) => self.nodes[prev.0].next = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);
        id
    }

    /// Moves the end of a block node's span forward to `end`.
    pub(crate) fn extend_span(&mut self, id: NodeId, end: usize) {
        if let Some(span) = &mut self.nodes[id.0].span {
            span.end = span.end.max(end);
        }
    }

    /// Attaches parsed inline sub-trees as the last children of `parent`.
    ///
    /// Walks the sub-trees with an explicit stack; inline nesting has no
    /// depth limit.
    pub(crate) fn append_inlines(&mut self, parent: NodeId, inlines: Vec<Inline>) {
        let mut stack = vec![(parent, inlines.into_iter())];
        while let Some((parent, pending)) = stack.last_mut() {
            let parent = *parent;
            let Some(inline) = pending.next() else {
                stack.pop();
                continue;
            };
            let (kind, children) = inline.into_parts();
            let id = self.append_child(parent, kind, None);
            if !children.is_empty() {
                stack.push((id, children.into_iter()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> NodeKind {
        NodeKind::Text(s.as_bytes().to_vec())
    }

    #[test]
    fn new_document_has_only_root() {
        let doc = Document::new(Span::new(0, 0));
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.root().kind(), &NodeKind::Document);
        assert!(doc.root().parent().is_none());
        assert!(doc.root().first_child().is_none());
    }

    #[test]
    fn append_links_siblings_both_ways() {
        let mut doc = Document::new(Span::new(0, 10));
        let p = doc.append_child(NodeId::ROOT, NodeKind::Paragraph, Some(Span::new(0, 10)));
        let a = doc.append_child(p, text("a"), None);
        let b = doc.append_child(p, text("b"), None);
        let c = doc.append_child(p, text("c"), None);

        let para = doc.get(p).unwrap();
        assert_eq!(para.first_child().map(|n| n.id()), Some(a));
        assert_eq!(para.last_child().map(|n| n.id()), Some(c));

        let b_ref = doc.get(b).unwrap();
        assert_eq!(b_ref.prev().map(|n| n.id()), Some(a));
        assert_eq!(b_ref.next().map(|n| n.id()), Some(c));
        assert_eq!(b_ref.parent().map(|n| n.id()), Some(p));
        assert!(doc.get(a).unwrap().prev().is_none());
        assert!(doc.get(c).unwrap().next().is_none());
    }

    #[test]
    fn append_inlines_builds_nested_children() {
        let mut doc = Document::new(Span::new(0, 0));
        let p = doc.append_child(NodeId::ROOT, NodeKind::Paragraph, None);
        doc.append_inlines(
            p,
            vec![
                Inline::leaf(text("x ")),
                Inline::container(NodeKind::Emphasis, vec![Inline::leaf(text("y"))]),
            ],
        );

        let kinds: Vec<_> = doc.get(p).unwrap().children().map(|n| n.kind().name()).collect();
        assert_eq!(kinds, vec!["Text", "Emphasis"]);
        let em = doc.get(p).unwrap().last_child().unwrap();
        assert_eq!(em.first_child().unwrap().literal(), Some(&b"y"[..]));
    }

    #[test]
    fn append_inlines_handles_deep_nesting() {
        let mut node = Inline::text("core");
        for _ in 0..100_000 {
            node = Inline::container(NodeKind::Strong, vec![node]);
        }
        let mut doc = Document::new(Span::new(0, 0));
        let p = doc.append_child(NodeId::ROOT, NodeKind::Paragraph, None);
        doc.append_inlines(p, vec![node]);

        assert_eq!(doc.node_count(), 100_003);
        let mut current = doc.get(p).unwrap();
        while let Some(child) = current.first_child() {
            current = child;
        }
        assert_eq!(current.literal(), Some(&b"core"[..]));
    }

    #[test]
    fn extend_span_only_grows() {
        let mut doc = Document::new(Span::new(0, 20));
        let q = doc.append_child(NodeId::ROOT, NodeKind::BlockQuote, Some(Span::new(0, 5)));
        doc.extend_span(q, 12);
        doc.extend_span(q, 8);
        assert_eq!(doc.get(q).unwrap().span(), Some(Span::new(0, 12)));
    }

    #[test]
    fn document_is_send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<Document>();
    }

    #[test]
    fn get_out_of_range_is_none() {
        let doc = Document::new(Span::new(0, 0));
        assert!(doc.get(NodeId(5)).is_none());
    }
}
