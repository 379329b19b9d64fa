use log::trace;

use crate::{
    parsing::source::{LineRef, Span},
    tree::{CodeBlockData, Document, Fence, HeadingData, ListData, NodeId, NodeKind},
};

use super::{
    kinds::{BlockQuote, CodeBody, CodeFence, ListMarker, Paragraph},
    line::{CODE_INDENT, Line},
    open::{BlockStart, StartContext, try_open},
    types::{BlockState, OpenBlock},
};

/// Raw inline text of a paragraph or heading, waiting for the inline pass.
pub type PendingInline = (NodeId, Vec<u8>);

/// How an open block responded to the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    Matched,
    Failed,
    /// The line closed the block and nothing else is on it.
    Closed,
}

/// Builds the block structure of a document one line at a time.
///
/// Keeps the chain of open blocks from the Document down to the deepest open
/// block. Each line first continues as many of them as it can, then may open
/// new blocks, and finally adds its remainder to a paragraph or code block.
/// Blocks that were not continued stay open until something else is added,
/// which is what lets a paragraph run on lazily past a missing `>`.
pub struct BlockBuilder {
    doc: Document,
    stack: Vec<OpenBlock>,
    /// Per node index: the block's last line so far was blank.
    last_line_blank: Vec<bool>,
    /// Depth of the deepest block continued by the current line.
    last_matched: usize,
    /// No unmatched blocks are waiting to be closed.
    all_closed: bool,
    /// The line being processed.
    line: Span,
    pending: Vec<PendingInline>,
}

impl BlockBuilder {
    /// `len` is the length of the whole input, which the Document spans.
    pub fn new(len: usize) -> Self {
        Self {
            doc: Document::new(Span::new(0, len)),
            stack: vec![OpenBlock {
                id: NodeId::ROOT,
                state: BlockState::Document,
            }],
            last_line_blank: vec![false],
            last_matched: 0,
            all_closed: true,
            line: Span::default(),
            pending: vec![],
        }
    }

    pub fn push(&mut self, line: &LineRef<'_>) {
        self.line = line.span;
        let mut ln = Line::new(line.text);

        let mut matched = 0;
        for depth in 1..self.stack.len() {
            ln.find_next_nonspace();
            match self.continues(depth, &mut ln) {
                Continuation::Matched => matched = depth,
                Continuation::Failed => break,
                Continuation::Closed => {
                    self.extend_open_spans();
                    self.close_top();
                    return;
                }
            }
        }
        self.last_matched = matched;
        self.all_closed = matched == self.stack.len() - 1;

        let mut container = matched;
        let mut finished_leaf = None;
        let mut fence_opened = false;
        while !self.stack[container].state.is_code() {
            ln.find_next_nonspace();
            let cx = StartContext {
                container_is_paragraph: self.stack[container].state.is_paragraph(),
                tip_is_paragraph: self.tip().state.is_paragraph(),
            };
            let Some(start) = try_open(&mut ln, cx) else {
                ln.advance_next_nonspace();
                break;
            };

            self.close_unmatched();
            match start {
                BlockStart::BlockQuote => {
                    container = self.open_block(NodeKind::BlockQuote, BlockState::BlockQuote);
                }
                BlockStart::ListItem(item) => {
                    self.ensure_list(item.marker);
                    container =
                        self.open_block(NodeKind::ListItem(item.marker), BlockState::ListItem(item));
                }
                BlockStart::AtxHeading { level, content } => {
                    let id = self.add_child(NodeKind::Heading(HeadingData {
                        level,
                        setext: false,
                    }));
                    self.pending.push((id, content));
                    finished_leaf = Some(id);
                    break;
                }
                BlockStart::SetextHeading { level } => {
                    finished_leaf = self.setext(level);
                    break;
                }
                BlockStart::ThematicBreak => {
                    finished_leaf = Some(self.add_child(NodeKind::ThematicBreak));
                    break;
                }
                BlockStart::Fence { open, offset } => {
                    let fence = Fence {
                        kind: open.kind,
                        length: open.length,
                        offset,
                    };
                    let data = CodeBlockData {
                        fence: Some(fence),
                        info: open.info,
                        literal: vec![],
                    };
                    self.open_block(
                        NodeKind::CodeBlock(data),
                        BlockState::FencedCode {
                            fence,
                            lines: vec![],
                        },
                    );
                    fence_opened = true;
                    break;
                }
                BlockStart::IndentedCode => {
                    self.open_block(
                        NodeKind::CodeBlock(CodeBlockData::default()),
                        BlockState::IndentedCode { lines: vec![] },
                    );
                    break;
                }
            }
        }

        let blank = ln.is_blank();
        if let Some(id) = finished_leaf {
            self.mark_last_line_blank(id, false);
        } else if !self.all_closed && !blank && self.tip().state.is_paragraph() {
            trace!("lazy continuation at {}", self.line.start);
            self.add_line(&ln);
        } else {
            self.close_unmatched();
            let tip = self.tip();
            let id = tip.id;
            let accepts_lines = tip.state.accepts_lines();
            let empty_item = matches!(tip.state, BlockState::ListItem(_))
                && self.doc.data(id).first_child.is_none()
                && self.started_this_line(id);
            let keeps_blank = matches!(
                tip.state,
                BlockState::BlockQuote | BlockState::FencedCode { .. }
            ) || empty_item;

            if blank && let Some(last) = self.doc.data(id).last_child {
                self.last_line_blank[last.index()] = true;
            }
            self.mark_last_line_blank(id, blank && !keeps_blank);

            if accepts_lines {
                if !fence_opened {
                    self.add_line(&ln);
                }
            } else if !ln.at_end() && !blank {
                self.open_block(NodeKind::Paragraph, BlockState::Paragraph { lines: vec![] });
                ln.advance_next_nonspace();
                self.add_line(&ln);
            }
        }

        self.extend_open_spans();
    }

    /// Closes every open block and returns the tree with the inline text
    /// still to be parsed.
    pub fn finish(mut self) -> (Document, Vec<PendingInline>) {
        while !self.stack.is_empty() {
            self.close_top();
        }
        (self.doc, self.pending)
    }

    fn tip(&self) -> &OpenBlock {
        &self.stack[self.stack.len() - 1]
    }

    fn tip_mut(&mut self) -> &mut OpenBlock {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn continues(&self, depth: usize, ln: &mut Line<'_>) -> Continuation {
        let open = &self.stack[depth];
        let matched = match &open.state {
            BlockState::Document | BlockState::List => true,
            BlockState::BlockQuote => BlockQuote::consume_marker(ln),
            BlockState::ListItem(item) => {
                if ln.is_blank() {
                    // A list item can begin with at most one blank line.
                    let has_content = self.doc.data(open.id).first_child.is_some();
                    if has_content {
                        ln.advance_next_nonspace();
                    }
                    has_content
                } else if ln.indent() >= item.content_offset() {
                    ln.advance_offset(item.content_offset(), true);
                    true
                } else {
                    false
                }
            }
            BlockState::Paragraph { .. } => !ln.is_blank(),
            BlockState::FencedCode { fence, .. } => {
                if !ln.is_indented_code()
                    && CodeFence::closes(fence.kind, fence.length, ln.rest_from_nonspace())
                {
                    return Continuation::Closed;
                }
                ln.skip_spaces(fence.offset);
                true
            }
            BlockState::IndentedCode { .. } => {
                if ln.is_indented_code() {
                    ln.advance_offset(CODE_INDENT, true);
                    true
                } else if ln.is_blank() {
                    ln.advance_next_nonspace();
                    true
                } else {
                    false
                }
            }
        };
        if matched {
            Continuation::Matched
        } else {
            Continuation::Failed
        }
    }

    /// Closes blocks the current line did not continue.
    fn close_unmatched(&mut self) {
        if self.all_closed {
            return;
        }
        while self.stack.len() > self.last_matched + 1 {
            self.close_top();
        }
        self.all_closed = true;
    }

    /// Appends a block node under the deepest open block that can hold it,
    /// closing open blocks that cannot.
    fn add_child(&mut self, kind: NodeKind) -> NodeId {
        while self.stack.len() > 1 && !self.tip().state.can_contain(&kind) {
            self.close_top();
        }
        trace!("open {} at {}", kind.name(), self.line.start);
        let parent = self.tip().id;
        let id = self.doc.append_child(parent, kind, Some(self.line));
        self.last_line_blank.push(false);
        id
    }

    /// Adds a block that stays open for following lines. Returns its depth.
    fn open_block(&mut self, kind: NodeKind, state: BlockState) -> usize {
        let id = self.add_child(kind);
        self.stack.push(OpenBlock { id, state });
        self.stack.len() - 1
    }

    /// Opens a new list unless the open list takes items with this marker.
    fn ensure_list(&mut self, marker: ListMarker) {
        let continues = matches!(
            &self.doc.data(self.tip().id).kind,
            NodeKind::List(data) if data.marker.continues_list(marker)
        );
        if !continues {
            self.open_block(
                NodeKind::List(ListData {
                    marker,
                    tight: true,
                }),
                BlockState::List,
            );
        }
    }

    /// Turns the open paragraph into a setext heading that ends on this line.
    fn setext(&mut self, level: u8) -> Option<NodeId> {
        let tip = self.stack.last_mut()?;
        let BlockState::Paragraph { lines } = &mut tip.state else {
            return None;
        };
        let lines = std::mem::take(lines);
        let id = tip.id;
        self.stack.pop();

        *self.doc.kind_mut(id) = NodeKind::Heading(HeadingData {
            level,
            setext: true,
        });
        self.doc.extend_span(id, self.line.end);
        self.pending.push((id, Paragraph::raw_content(&lines)));
        Some(id)
    }

    fn add_line(&mut self, ln: &Line<'_>) {
        if let Some(lines) = self.tip_mut().state.lines_mut() {
            lines.push(ln.rest().into_owned());
        }
    }

    fn close_top(&mut self) {
        let Some(open) = self.stack.pop() else {
            return;
        };
        trace!("close {}", self.doc.data(open.id).kind.name());
        match open.state {
            BlockState::Paragraph { lines } => {
                self.pending.push((open.id, Paragraph::raw_content(&lines)));
            }
            BlockState::FencedCode { lines, .. } => {
                self.set_code(open.id, CodeBody::fenced(&lines));
            }
            BlockState::IndentedCode { lines } => {
                self.set_code(open.id, CodeBody::indented(&lines));
            }
            BlockState::List => {
                let tight = self.is_tight(open.id);
                if let NodeKind::List(data) = self.doc.kind_mut(open.id) {
                    data.tight = tight;
                }
            }
            BlockState::Document | BlockState::BlockQuote | BlockState::ListItem(_) => {}
        }
    }

    fn set_code(&mut self, id: NodeId, literal: Vec<u8>) {
        if let NodeKind::CodeBlock(code) = self.doc.kind_mut(id) {
            code.literal = literal;
        }
    }

    fn extend_open_spans(&mut self) {
        for open in &self.stack {
            self.doc.extend_span(open.id, self.line.end);
        }
    }

    fn started_this_line(&self, id: NodeId) -> bool {
        self.doc
            .data(id)
            .span
            .is_some_and(|span| span.start == self.line.start)
    }

    /// Records whether the last line was blank for `id` and its ancestors.
    fn mark_last_line_blank(&mut self, id: NodeId, blank: bool) {
        let mut current = Some(id);
        while let Some(node) = current {
            self.last_line_blank[node.index()] = blank;
            current = self.doc.data(node).parent;
        }
    }

    /// Whether a block, or the last descendant along its list/item chain,
    /// ended with a blank line.
    fn ends_with_blank(&self, mut id: NodeId) -> bool {
        loop {
            if self.last_line_blank[id.index()] {
                return true;
            }
            let data = self.doc.data(id);
            match (&data.kind, data.last_child) {
                (NodeKind::List(_) | NodeKind::ListItem(_), Some(last)) => id = last,
                _ => return false,
            }
        }
    }

    /// A list is loose if a blank line separates two of its items, or two
    /// blocks directly inside one of its items.
    fn is_tight(&self, list: NodeId) -> bool {
        let mut item = self.doc.data(list).first_child;
        while let Some(current) = item {
            let next_item = self.doc.data(current).next;
            if self.ends_with_blank(current) && next_item.is_some() {
                return false;
            }
            let mut sub = self.doc.data(current).first_child;
            while let Some(block) = sub {
                let next_sub = self.doc.data(block).next;
                if self.ends_with_blank(block) && (next_item.is_some() || next_sub.is_some()) {
                    return false;
                }
                sub = next_sub;
            }
            item = next_item;
        }
        true
    }
}
