//! # Parsing
//!
//! Markdown source to [`Document`] in two passes.
//!
//! ## Passes
//!
//! 1. **Blocks** (`blocks`): lines are fed to a `BlockBuilder`, which builds
//!    the block tree and collects the raw text of paragraphs and headings
//! 2. **Inlines** (`inline`): each collected text is parsed into inline nodes
//!    and attached under its block
//!
//! Parsing is total: every byte sequence yields a document. Malformed
//! constructs degrade to literal text and invalid UTF-8 passes through.

pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use log::debug;

use crate::tree::Document;
use blocks::BlockBuilder;
use inline::parse_inline;
use source::lines_with_spans;

/// Parses a whole document.
pub fn parse_document(src: &[u8]) -> Document {
    let mut builder = BlockBuilder::new(src.len());
    for line in lines_with_spans(src) {
        builder.push(&line);
    }
    let (mut doc, pending) = builder.finish();

    let blocks = doc.node_count();
    for (id, raw) in pending {
        doc.append_inlines(id, parse_inline(&raw));
    }
    debug!(
        "parsed {} bytes into {} block and {} inline nodes",
        src.len(),
        blocks,
        doc.node_count() - blocks
    );
    doc
}
