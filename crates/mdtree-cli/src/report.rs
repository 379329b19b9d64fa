use std::io::{self, Write};

use mdtree_engine::{
    Document, NodeKind, NodeRef, OutlineOptions, WalkStatus, describe, outline,
    parsing::source::lossy,
};

/// Prints the first block of the document together with its neighbours.
pub fn first_node(doc: &Document, out: &mut impl Write) -> io::Result<()> {
    let Some(node) = doc.root().first_child() else {
        return writeln!(out, "The document is empty");
    };

    writeln!(out, "Type: {}", node.kind().name())?;
    if matches!(node.kind(), NodeKind::Heading(_)) {
        writeln!(out, "It is a heading")?;
    }
    writeln!(out, "Parent: {}", or_none(node.parent()))?;
    writeln!(out, "First child: {}", or_none(node.first_child()))?;
    writeln!(out, "Last child: {}", or_none(node.last_child()))?;
    writeln!(out, "Prev: {}", or_none(node.prev()))?;
    writeln!(out, "Next: {}", or_none(node.next()))?;
    writeln!(out, "Literal: {}", lossy(node.literal().unwrap_or_default()))?;
    writeln!(out, "Data: {}", kind_data(node.kind()))?;
    writeln!(out, "{node}")
}

/// Walks the whole tree announcing each paragraph and its leading text.
pub fn paragraphs(doc: &Document, out: &mut impl Write) -> io::Result<()> {
    let mut result = Ok(());
    doc.walk(|node, entering| {
        if !matches!(node.kind(), NodeKind::Paragraph) {
            return WalkStatus::Continue;
        }
        let written = if entering {
            announce_paragraph(node, out)
        } else {
            writeln!(out, "I'm leaving the paragraph")
        };
        match written {
            Ok(()) => WalkStatus::Continue,
            Err(err) => {
                result = Err(err);
                WalkStatus::Stop
            }
        }
    });
    result
}

pub fn dump(doc: &Document, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", outline(doc.root(), OutlineOptions { spans: true }))
}

fn announce_paragraph(node: NodeRef<'_>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "I found a paragraph")?;
    if let Some(text) = node.first_child()
        && let NodeKind::Text(literal) = text.kind()
    {
        writeln!(out, "{}", lossy(literal))?;
    }
    Ok(())
}

fn or_none(node: Option<NodeRef<'_>>) -> String {
    node.map_or_else(|| "<none>".to_string(), |n| n.to_string())
}

fn kind_data(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Heading(heading) => format!("{heading:?}"),
        NodeKind::List(_)
        | NodeKind::ListItem(_)
        | NodeKind::CodeBlock(_)
        | NodeKind::Link(_)
        | NodeKind::Image(_)
        | NodeKind::LineBreak { .. } => describe(kind),
        _ => "<none>".to_string(),
    }
}
