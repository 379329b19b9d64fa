use crate::tree::{LinkData, NodeKind};

use super::{
    cursor::Cursor,
    kinds::{Autolink, CodeSpan, Emphasis, Escape, Flanking, InlineLink},
    types::Inline,
};

/// Trailing spaces before a line ending that turn it into a hard break.
const HARD_BREAK_SPACES: usize = 2;

/// A run of `*` or `_` that may still open or close emphasis.
#[derive(Debug, Clone, Copy)]
struct Delimiter {
    ch: u8,
    /// Index of the run's Text node in `InlineParser::nodes`.
    node: usize,
    /// Delimiter characters not yet used.
    count: usize,
    /// Length of the run as written, for the rule of three.
    orig_count: usize,
    flank: Flanking,
}

/// An unmatched `[` or `![`.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    node: usize,
    image: bool,
    /// False once a link has closed after this bracket; links cannot nest.
    active: bool,
    /// Delimiter stack height when the bracket was pushed.
    delim_bottom: usize,
}

/// Parses the raw inline content of a paragraph or heading.
///
/// Scans left to right building a flat node list. Emphasis delimiters and
/// link brackets are recorded on stacks and resolved into container nodes
/// once their closers are seen. Anything that fails to match stays text, so
/// every input produces a result.
///
/// # Precedence
/// Code spans and autolinks are raw: nothing inside them is parsed, and they
/// bind tighter than emphasis and links.
pub fn parse_inline(raw: &[u8]) -> Vec<Inline> {
    let mut parser = InlineParser::new(raw);
    parser.run();
    parser.finish()
}

struct InlineParser<'a> {
    cur: Cursor<'a>,
    nodes: Vec<Inline>,
    text: Vec<u8>,
    delimiters: Vec<Delimiter>,
    brackets: Vec<Bracket>,
}

impl<'a> InlineParser<'a> {
    fn new(raw: &'a [u8]) -> Self {
        Self {
            cur: Cursor::new(raw),
            nodes: vec![],
            text: vec![],
            delimiters: vec![],
            brackets: vec![],
        }
    }

    fn run(&mut self) {
        while let Some(b) = self.cur.peek() {
            match b {
                Escape::BACKSLASH => self.escape(),
                CodeSpan::TICK => self.code_span(),
                b if Emphasis::is_delimiter(b) => self.delimiter_run(b),
                InlineLink::OPEN => self.open_bracket(false),
                _ if self.cur.starts_with(InlineLink::IMAGE) => self.open_bracket(true),
                InlineLink::CLOSE => self.close_bracket(),
                Autolink::OPEN => self.autolink(),
                b'\n' => self.line_ending(),
                _ => {
                    self.text.push(b);
                    self.cur.bump();
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        self.flush_text();
        self.process_emphasis(0);
        normalize(self.nodes)
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.nodes.push(Inline::text(std::mem::take(&mut self.text)));
        }
    }

    fn push_node(&mut self, node: Inline) {
        self.flush_text();
        self.nodes.push(node);
    }

    fn escape(&mut self) {
        self.cur.bump();
        match self.cur.peek() {
            Some(b'\n') => {
                self.cur.bump();
                self.line_break(true);
            }
            Some(b) if Escape::is_escapable(b) => {
                self.text.push(b);
                self.cur.bump();
            }
            _ => self.text.push(Escape::BACKSLASH),
        }
    }

    fn code_span(&mut self) {
        let rest = self.cur.rest();
        match CodeSpan::parse(rest) {
            Some((content, len)) => {
                self.push_node(Inline::leaf(NodeKind::CodeSpan(content)));
                self.cur.bump_n(len);
            }
            None => {
                // An unmatched run is literal, all of it.
                let run = CodeSpan::run_length(rest);
                self.text.extend_from_slice(&rest[..run]);
                self.cur.bump_n(run);
            }
        }
    }

    fn delimiter_run(&mut self, ch: u8) {
        let start = self.cur.pos();
        let count = self.cur.run_of(ch);
        let flank = Emphasis::flanking(
            ch,
            self.cur.char_before(start),
            self.cur.char_at(start + count),
        );

        self.flush_text();
        let node = self.nodes.len();
        self.nodes.push(Inline::text(vec![ch; count]));
        if flank.can_open || flank.can_close {
            self.delimiters.push(Delimiter {
                ch,
                node,
                count,
                orig_count: count,
                flank,
            });
        }
        self.cur.bump_n(count);
    }

    fn open_bracket(&mut self, image: bool) {
        let marker: &[u8] = if image {
            InlineLink::IMAGE
        } else {
            &[InlineLink::OPEN]
        };
        self.flush_text();
        self.brackets.push(Bracket {
            node: self.nodes.len(),
            image,
            active: true,
            delim_bottom: self.delimiters.len(),
        });
        self.nodes.push(Inline::text(marker));
        self.cur.bump_n(marker.len());
    }

    fn close_bracket(&mut self) {
        self.cur.bump();
        let Some(opener) = self.brackets.pop() else {
            self.text.push(InlineLink::CLOSE);
            return;
        };
        let tail = if opener.active {
            InlineLink::tail(self.cur.rest())
        } else {
            None
        };
        let Some(tail) = tail else {
            self.text.push(InlineLink::CLOSE);
            return;
        };
        self.cur.bump_n(tail.len);

        self.flush_text();
        self.process_emphasis(opener.delim_bottom);
        let children: Vec<Inline> = self.nodes.drain(opener.node + 1..).collect();
        let data = LinkData {
            destination: tail.destination,
            title: tail.title,
        };
        let kind = if opener.image {
            NodeKind::Image(data)
        } else {
            NodeKind::Link(data)
        };
        self.nodes[opener.node] = Inline::container(kind, children);

        if !opener.image {
            for bracket in self.brackets.iter_mut().filter(|b| !b.image) {
                bracket.active = false;
            }
        }
    }

    fn autolink(&mut self) {
        match Autolink::parse(self.cur.rest()) {
            Some(link) => {
                let data = LinkData {
                    destination: link.destination,
                    title: vec![],
                };
                self.push_node(Inline::container(
                    NodeKind::Link(data),
                    vec![Inline::text(link.text)],
                ));
                self.cur.bump_n(link.len);
            }
            None => {
                self.text.push(Autolink::OPEN);
                self.cur.bump();
            }
        }
    }

    /// A line ending is a hard break after two or more spaces, else soft.
    fn line_ending(&mut self) {
        self.cur.bump();
        let spaces = self.text.iter().rev().take_while(|&&b| b == b' ').count();
        self.text.truncate(self.text.len() - spaces);
        self.line_break(spaces >= HARD_BREAK_SPACES);
    }

    fn line_break(&mut self, hard: bool) {
        self.push_node(Inline::leaf(NodeKind::LineBreak { hard }));
        while matches!(self.cur.peek(), Some(b' ' | b'\t')) {
            self.cur.bump();
        }
    }

    /// Pairs delimiters above `bottom` into Emphasis and Strong nodes, then
    /// drops every delimiter above `bottom` from the stack.
    fn process_emphasis(&mut self, bottom: usize) {
        let mut closer = bottom;
        while closer < self.delimiters.len() {
            if !self.delimiters[closer].flank.can_close {
                closer += 1;
                continue;
            }
            match self.find_opener(bottom, closer) {
                Some(opener) => closer = self.pair(opener, closer),
                None if self.delimiters[closer].flank.can_open => closer += 1,
                None => {
                    self.delimiters.remove(closer);
                }
            }
        }
        self.delimiters.truncate(bottom);
    }

    fn find_opener(&self, bottom: usize, closer: usize) -> Option<usize> {
        let c = self.delimiters[closer];
        (bottom..closer).rev().find(|&i| {
            let o = self.delimiters[i];
            o.ch == c.ch
                && o.flank.can_open
                && !Emphasis::blocks_pair((o.orig_count, o.flank), (c.orig_count, c.flank))
        })
    }

    /// Wraps the nodes between `opener` and `closer` in an Emphasis or Strong
    /// node and uses up the matched delimiter characters. Returns the stack
    /// index of the closer to look at next.
    fn pair(&mut self, opener: usize, closer: usize) -> usize {
        let used = if self.delimiters[opener].count >= 2 && self.delimiters[closer].count >= 2 {
            2
        } else {
            1
        };
        let open_node = self.delimiters[opener].node;
        let close_node = self.delimiters[closer].node;

        let children: Vec<Inline> = self.nodes.drain(open_node + 1..close_node).collect();
        let kind = if used == 2 {
            NodeKind::Strong
        } else {
            NodeKind::Emphasis
        };
        self.nodes.insert(open_node + 1, Inline::container(kind, children));

        // The closer's node now sits right after the new container.
        let moved_to = open_node + 2;
        self.delimiters.drain(opener + 1..closer);
        let mut closer = opener + 1;
        for d in &mut self.delimiters[closer..] {
            d.node = d.node - close_node + moved_to;
        }

        for idx in [opener, closer] {
            let d = &mut self.delimiters[idx];
            d.count -= used;
            if let Some(lit) = self.nodes[d.node].text_mut() {
                lit.truncate(d.count);
            }
        }

        if self.delimiters[closer].count == 0 {
            self.delimiters.remove(closer);
        }
        if self.delimiters[opener].count == 0 {
            self.delimiters.remove(opener);
            closer -= 1;
        }
        closer
    }
}

/// Merges adjacent Text nodes and drops empty ones left by used delimiters.
///
/// Containers are rebuilt bottom-up from an explicit stack of frames, one per
/// nesting level, so deep input cannot exhaust the call stack.
fn normalize(nodes: Vec<Inline>) -> Vec<Inline> {
    struct Frame {
        /// `None` for the top-level list.
        kind: Option<NodeKind>,
        input: std::vec::IntoIter<Inline>,
        out: Vec<Inline>,
    }

    let mut stack = vec![Frame {
        kind: None,
        input: nodes.into_iter(),
        out: vec![],
    }];
    loop {
        let Some(frame) = stack.last_mut() else {
            return vec![];
        };
        if let Some(node) = frame.input.next() {
            let (kind, children) = node.into_parts();
            if children.is_empty() {
                push_merged(&mut frame.out, Inline::leaf(kind));
            } else {
                stack.push(Frame {
                    kind: Some(kind),
                    input: children.into_iter(),
                    out: vec![],
                });
            }
            continue;
        }

        let Some(done) = stack.pop() else {
            return vec![];
        };
        match (done.kind, stack.last_mut()) {
            (Some(kind), Some(parent)) => {
                push_merged(&mut parent.out, Inline::container(kind, done.out));
            }
            _ => return done.out,
        }
    }
}

fn push_merged(out: &mut Vec<Inline>, node: Inline) {
    if let NodeKind::Text(lit) = &node.kind {
        if lit.is_empty() {
            return;
        }
        if let Some(prev) = out.last_mut().and_then(Inline::text_mut) {
            prev.extend_from_slice(lit);
            return;
        }
    }
    out.push(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Compact rendering: `Kind[children]` and quoted text.
    fn render(nodes: &[Inline]) -> String {
        nodes.iter().map(render_one).collect::<Vec<_>>().join(" ")
    }

    fn render_one(node: &Inline) -> String {
        let lossy = |b: &[u8]| String::from_utf8_lossy(b).into_owned();
        match &node.kind {
            NodeKind::Text(t) => format!("{:?}", lossy(t)),
            NodeKind::CodeSpan(t) => format!("Code({:?})", lossy(t)),
            NodeKind::LineBreak { hard: true } => "HardBreak".to_string(),
            NodeKind::LineBreak { hard: false } => "SoftBreak".to_string(),
            NodeKind::Link(l) | NodeKind::Image(l) => format!(
                "{}<{}>[{}]",
                node.kind.name(),
                lossy(&l.destination),
                render(&node.children)
            ),
            other => format!("{}[{}]", other.name(), render(&node.children)),
        }
    }

    fn parse(s: &str) -> String {
        render(&parse_inline(s.as_bytes()))
    }

    #[test]
    fn plain_text_is_one_node() {
        assert_eq!(parse("just words"), "\"just words\"");
        assert_eq!(parse(""), "");
    }

    #[rstest]
    #[case("*a*", "Emphasis[\"a\"]")]
    #[case("_a_", "Emphasis[\"a\"]")]
    #[case("**a**", "Strong[\"a\"]")]
    #[case("__a__", "Strong[\"a\"]")]
    #[case("***a***", "Emphasis[Strong[\"a\"]]")]
    #[case("*a **b** c*", "Emphasis[\"a \" Strong[\"b\"] \" c\"]")]
    #[case("**a*", "\"*\" Emphasis[\"a\"]")]
    #[case("*a**", "Emphasis[\"a\"] \"*\"")]
    #[case("a * b * c", "\"a * b * c\"")]
    #[case("snake_case_word", "\"snake_case_word\"")]
    #[case("x*y*z", "\"x\" Emphasis[\"y\"] \"z\"")]
    #[case("*a _b* c_", "Emphasis[\"a _b\"] \" c_\"")]
    #[case("*foo**bar**baz*", "Emphasis[\"foo\" Strong[\"bar\"] \"baz\"]")]
    fn emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case("a `b` c", "\"a \" Code(\"b\") \" c\"")]
    #[case("`*not em*`", "Code(\"*not em*\")")]
    #[case("``a`b``", "Code(\"a`b\")")]
    #[case("`open", "\"`open\"")]
    #[case("*a `*` b*", "Emphasis[\"a \" Code(\"*\") \" b\"]")]
    fn code_spans(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case(r"\*not emphasis\*", "\"*not emphasis*\"")]
    #[case(r"\\*a*", "\"\\\\\" Emphasis[\"a\"]")]
    #[case(r"\a", "\"\\\\a\"")]
    #[case(r"\[x](y)", "\"[x](y)\"")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case("[a](/u)", "Link</u>[\"a\"]")]
    #[case("![alt](i.png)", "Image<i.png>[\"alt\"]")]
    #[case("[*a*](/u) b", "Link</u>[Emphasis[\"a\"]] \" b\"")]
    #[case("[a]", "\"[a]\"")]
    #[case("[a] (/u)", "\"[a] (/u)\"")]
    #[case("[[a](/u)](/v)", "\"[\" Link</u>[\"a\"] \"](/v)\"")]
    #[case("![[a](/u)](/v)", "Image</v>[Link</u>[\"a\"]]")]
    #[case("*[a*](/u)", "\"*\" Link</u>[\"a*\"]")]
    #[case("a]b", "\"a]b\"")]
    #[case("[`]`](/u)", "Link</u>[Code(\"]\")]")]
    fn links(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[test]
    fn link_keeps_title() {
        let nodes = parse_inline(b"[a](/u \"T\")");
        let NodeKind::Link(data) = &nodes[0].kind else {
            panic!("expected link, got {:?}", nodes[0].kind);
        };
        assert_eq!(data.title, b"T");
    }

    #[rstest]
    #[case("<https://x.org>", "Link<https://x.org>[\"https://x.org\"]")]
    #[case("<a@b.co>", "Link<mailto:a@b.co>[\"a@b.co\"]")]
    #[case("a < b", "\"a < b\"")]
    #[case("<*x*>", "\"<\" Emphasis[\"x\"] \">\"")]
    fn autolinks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case("a\nb", "\"a\" SoftBreak \"b\"")]
    #[case("a  \nb", "\"a\" HardBreak \"b\"")]
    #[case("a \nb", "\"a\" SoftBreak \"b\"")]
    #[case("a\\\nb", "\"a\" HardBreak \"b\"")]
    #[case("a\n   b", "\"a\" SoftBreak \"b\"")]
    #[case("*a\nb*", "Emphasis[\"a\" SoftBreak \"b\"]")]
    fn line_breaks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    fn max_depth(nodes: &[Inline]) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Inline, usize)> = nodes.iter().map(|n| (n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        deepest
    }

    #[rstest]
    #[case::strong(format!("{}a{}", "*".repeat(100_000), "*".repeat(100_000)), 50_001)]
    #[case::images(format!("{}a{}", "![".repeat(30_000), "](u)".repeat(30_000)), 30_001)]
    fn deep_nesting_builds_full_depth(#[case] input: String, #[case] depth: usize) {
        let nodes = parse_inline(input.as_bytes());
        assert_eq!(nodes.len(), 1);
        assert_eq!(max_depth(&nodes), depth);
    }

    #[test]
    fn invalid_utf8_passes_through() {
        let nodes = parse_inline(b"a\xffb *c*");
        assert_eq!(nodes[0].kind, NodeKind::Text(b"a\xffb ".to_vec()));
        assert_eq!(nodes[1].kind, NodeKind::Emphasis);
    }
}
