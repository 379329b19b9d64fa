//! Markdown to an arena-backed document tree.
//!
//! ```
//! use mdtree_engine::{NodeKind, WalkStatus, parse};
//!
//! let doc = parse(b"# Title\n\nSome *text*.");
//! let mut paragraphs = 0;
//! doc.walk(|node, entering| {
//!     if entering && matches!(node.kind(), NodeKind::Paragraph) {
//!         paragraphs += 1;
//!     }
//!     WalkStatus::Continue
//! });
//! assert_eq!(paragraphs, 1);
//! ```

pub mod io;
pub mod parsing;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use tree::*;

/// Parses Markdown source into a [`Document`].
///
/// Never fails: any byte sequence produces a tree.
pub fn parse(src: &[u8]) -> Document {
    parsing::parse_document(src)
}
