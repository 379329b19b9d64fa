//! Whole-document properties of the parser and walker.

use crate::parsing::{parse_document, snapshot};
use crate::tree::{NodeKind, WalkEvent, WalkStatus};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::empty(b"")]
#[case::blank_lines(b"\n\n\n")]
#[case::lone_cr(b"a\rb\r\n")]
#[case::invalid_utf8(b"caf\xe9 *\xff*\n> \xc3")]
#[case::nul_bytes(b"\0# \0\n\0")]
#[case::unclosed_everything(b"[a *b `c <d ![e ```\n> - 1. ")]
#[case::deep_quotes(b"> > > > > > > > > > > > x\n")]
#[case::deep_lists(b"- - - - - - - - - - - - x\n")]
#[case::brackets(b"[[[[[[[[[[]]]]]]]]]]((((((((((")]
#[case::mixed_tabs(b"\t-\tx\n \t> \t```\n\t\t\n")]
fn parse_is_total(#[case] src: &[u8]) {
    let doc = parse_document(src);
    assert!(matches!(doc.root().kind(), NodeKind::Document));
    snapshot::invariants(src, &doc);
}

#[rstest]
#[case::strong(format!("{}a{}", "*".repeat(100_000), "*".repeat(100_000)), 50_000)]
#[case::underscores(format!("{}a{}", "_".repeat(100_000), "_".repeat(100_000)), 50_000)]
#[case::images(format!("{}a{}", "![".repeat(100_000), "](u)".repeat(100_000)), 100_000)]
#[case::quoted_emphasis(format!("> {}a{}", "*".repeat(60_001), "*".repeat(60_001)), 30_001)]
fn parse_is_total_for_deep_inline_nesting(#[case] src: String, #[case] inline_depth: usize) {
    let doc = parse_document(src.as_bytes());
    snapshot::invariants(src.as_bytes(), &doc);

    let mut depth = 0usize;
    let mut deepest = 0usize;
    for event in doc.root().preorder() {
        match event {
            WalkEvent::Enter(node) if node.is_container() && !node.kind().is_block() => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            WalkEvent::Leave(node) if !node.kind().is_block() => depth -= 1,
            _ => {}
        }
    }
    assert_eq!(deepest, inline_depth);
}

#[test]
fn sibling_chains_agree() {
    let src = b"# A\n\n> b\n> - c\n>   - d\n\n1. e *f* [g](h)\n2. `i`\n\n---\n";
    let doc = parse_document(src);
    for node in doc.nodes() {
        let forward: Vec<_> = node.children().collect();
        let mut backward = vec![];
        let mut cursor = node.last_child();
        while let Some(child) = cursor {
            backward.push(child);
            cursor = child.prev();
        }
        backward.reverse();
        assert_eq!(forward, backward, "children of {node}");
    }
}

#[test]
fn atx_heading_with_text() {
    let doc = parse_document(b"# Title");
    let heading = doc.root().first_child().unwrap();
    match heading.kind() {
        NodeKind::Heading(h) => assert_eq!(h.level, 1),
        other => panic!("expected heading, got {other:?}"),
    }

    let text = heading.first_child().unwrap();
    assert_eq!(text.literal(), Some(&b"Title"[..]));
    assert!(text.next().is_none());
}

#[test]
fn blank_line_separates_paragraphs() {
    let doc = parse_document(b"line one\n\nline two");
    let kinds: Vec<_> = doc.root().children().map(|n| n.kind().name()).collect();
    assert_eq!(kinds, ["Paragraph", "Paragraph"]);
}

#[rstest]
#[case("")]
#[case("plain")]
#[case("# Hi\n\n> *a* **b**\n\n- one\n- two\n\n```\ncode\n```\n\n---\n")]
#[case("[link ![img](i.png)](u) `span` <http://x.y>\nnext  \nline")]
fn walk_visits_containers_twice_and_leaves_once(#[case] src: &str) {
    let doc = parse_document(src.as_bytes());
    let containers = doc.nodes().filter(|n| n.is_container()).count();
    let leaves = doc.node_count() - containers;

    let mut calls = 0;
    doc.walk(|_, _| {
        calls += 1;
        WalkStatus::Continue
    });
    assert_eq!(calls, 2 * containers + leaves);
}

#[test]
fn escaped_stars_stay_literal() {
    let doc = parse_document(b"\\*not emphasis\\*");
    let para = doc.root().first_child().unwrap();
    let children: Vec<_> = para.children().collect();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].literal(), Some(&b"*not emphasis*"[..]));
    assert!(
        !doc.nodes()
            .any(|n| matches!(n.kind(), NodeKind::Emphasis))
    );
}

#[test]
fn skip_children_on_list_still_leaves_it() {
    let doc = parse_document(b"- a\n- b\n\nafter");
    let mut events = vec![];
    doc.walk(|node, entering| {
        events.push((node.kind().name(), entering));
        if entering && matches!(node.kind(), NodeKind::List(_)) {
            WalkStatus::SkipChildren
        } else {
            WalkStatus::Continue
        }
    });
    assert_eq!(
        events,
        [
            ("Document", true),
            ("List", true),
            ("List", false),
            ("Paragraph", true),
            ("Text", true),
            ("Paragraph", false),
            ("Document", false),
        ]
    );
}

#[test]
fn stop_ends_the_walk() {
    let doc = parse_document(b"first\n\nsecond");
    let mut seen = vec![];
    doc.walk(|node, entering| {
        seen.push((node.kind().name(), entering));
        if matches!(node.kind(), NodeKind::Text(_)) {
            WalkStatus::Stop
        } else {
            WalkStatus::Continue
        }
    });
    assert_eq!(
        seen,
        [("Document", true), ("Paragraph", true), ("Text", true)]
    );
}

#[test]
fn walk_from_inner_node_stays_in_subtree() {
    let doc = parse_document(b"> quoted\n\noutside");
    let quote = doc.root().first_child().unwrap();
    let mut names = vec![];
    quote.walk(|node, entering| {
        if entering {
            names.push(node.kind().name());
        }
        WalkStatus::Continue
    });
    assert_eq!(names, ["BlockQuote", "Paragraph", "Text"]);
}
