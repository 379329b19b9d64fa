use crate::tree::{Document, NodeKind, NodeRef, WalkEvent};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The root is the only Document node, has no parent and spans the input
/// - Every node is reachable exactly once from the root
/// - Child, parent and sibling links agree in both directions
/// - Block spans are within bounds and inside their parent's span
/// - Inline nodes have no span and no block children
/// - Leaf kinds have no children
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &[u8], doc: &Document) {
    let root = doc.root();
    assert!(
        matches!(root.kind(), NodeKind::Document),
        "root is not a Document: {:?}",
        root.kind()
    );
    assert!(root.parent().is_none(), "root has a parent");
    assert_eq!(
        root.span().map(|s| (s.start, s.end)),
        Some((0, src.len())),
        "root span does not cover the input"
    );

    let mut seen = vec![false; doc.node_count()];
    for event in root.preorder() {
        let WalkEvent::Enter(node) = event else {
            continue;
        };
        let idx = node.id().index();
        assert!(!seen[idx], "node {idx} reached twice");
        seen[idx] = true;

        if node.id() != root.id() {
            assert!(
                !matches!(node.kind(), NodeKind::Document),
                "extra Document node at {idx}"
            );
        }
        check_children(src, node);
    }

    let unreachable: Vec<_> = (0..seen.len()).filter(|&i| !seen[i]).collect();
    assert!(unreachable.is_empty(), "nodes not reachable from root: {unreachable:?}");
}

fn check_children(src: &[u8], node: NodeRef<'_>) {
    let children: Vec<_> = node.children().collect();
    if !node.is_container() {
        assert!(
            children.is_empty(),
            "leaf {} has {} children",
            node,
            children.len()
        );
    }

    assert_eq!(node.first_child(), children.first().copied(), "first_child of {node}");
    assert_eq!(node.last_child(), children.last().copied(), "last_child of {node}");

    let mut backwards = vec![];
    let mut cursor = node.last_child();
    while let Some(child) = cursor {
        assert!(
            backwards.len() < children.len(),
            "prev chain of {node} is longer than its next chain"
        );
        backwards.push(child);
        cursor = child.prev();
    }
    backwards.reverse();
    assert_eq!(backwards, children, "prev and next chains of {node} disagree");

    for child in children {
        assert_eq!(child.parent(), Some(node), "parent link of {child}");
        match (node.span(), child.span()) {
            (Some(outer), Some(inner)) => {
                assert!(
                    inner.start <= inner.end && inner.end <= src.len(),
                    "span out of bounds: {inner:?} (input len: {})",
                    src.len()
                );
                assert!(
                    outer.start <= inner.start && inner.end <= outer.end,
                    "span of {child} ({inner:?}) not contained in {node} ({outer:?})"
                );
            }
            (None, Some(span)) => panic!("block {child} at {span:?} inside inline {node}"),
            (_, None) => assert!(!child.kind().is_block(), "block {child} has no span"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("# Title\n\nbody *em* and `code`\n")]
    #[case("> - a\n>   b\n>\n> 1. c\n")]
    #[case("```\nunclosed")]
    #[case("[a](/u) ![i](/p \"t\") <https://x.org>")]
    fn parsed_documents_hold_invariants(#[case] src: &str) {
        check(src.as_bytes(), &parse(src.as_bytes()));
    }
}
