use std::fmt::Write as _;

use crate::parsing::{blocks::kinds::ListMarker, source::lossy};

use super::{
    node::{LinkData, NodeKind},
    node_ref::NodeRef,
    walk::WalkEvent,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineOptions {
    /// Append ` @start..end` source spans to block nodes.
    pub spans: bool,
}

/// Renders a subtree as an indented outline, one node per line.
///
/// ```text
/// Document
///   Heading(1)
///     Text "Title"
/// ```
pub fn outline(node: NodeRef<'_>, options: OutlineOptions) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for event in node.preorder() {
        match event {
            WalkEvent::Enter(n) => {
                let _ = write!(out, "{}{}", "  ".repeat(depth), describe(n.kind()));
                if options.spans
                    && let Some(span) = n.span()
                {
                    let _ = write!(out, " @{}..{}", span.start, span.end);
                }
                out.push('\n');
                if n.is_container() {
                    depth += 1;
                }
            }
            WalkEvent::Leave(_) => depth = depth.saturating_sub(1),
        }
    }
    out
}

/// One-line description of a node kind and its data.
pub fn describe(kind: &NodeKind) -> String {
    match kind {
        NodeKind::List(data) => format!(
            "List({}, {})",
            marker(data.marker),
            if data.tight { "tight" } else { "loose" }
        ),
        NodeKind::ListItem(m) => format!("ListItem({})", marker(*m)),
        NodeKind::Heading(h) if h.setext => format!("Heading({}, setext)", h.level),
        NodeKind::Heading(h) => format!("Heading({})", h.level),
        NodeKind::CodeBlock(code) => {
            let style = if code.is_fenced() { "fenced" } else { "indented" };
            let info = if code.info.is_empty() {
                String::new()
            } else {
                format!(", info={:?}", lossy(&code.info))
            };
            format!("CodeBlock({style}{info}) {:?}", lossy(&code.literal))
        }
        NodeKind::Text(lit) => format!("Text {:?}", lossy(lit)),
        NodeKind::CodeSpan(lit) => format!("CodeSpan {:?}", lossy(lit)),
        NodeKind::Link(link) => format!("Link({})", link_parts(link)),
        NodeKind::Image(link) => format!("Image({})", link_parts(link)),
        NodeKind::LineBreak { hard: true } => "LineBreak(hard)".to_string(),
        NodeKind::LineBreak { hard: false } => "LineBreak(soft)".to_string(),
        other => other.name().to_string(),
    }
}

fn marker(m: ListMarker) -> String {
    match m {
        ListMarker::Bullet(b) => format!("'{}'", b as char),
        ListMarker::Ordered { number, delimiter } => format!("{number}{}", delimiter as char),
    }
}

fn link_parts(link: &LinkData) -> String {
    let mut s = format!("dest={:?}", lossy(&link.destination));
    if !link.title.is_empty() {
        let _ = write!(s, ", title={:?}", lossy(&link.title));
    }
    s
}
