//! # Block Parsing
//!
//! Line-by-line block parsing over an open-block stack.
//!
//! ## Parsing Phases
//!
//! For each line the `BlockBuilder`:
//!
//! 1. **Continues** open blocks from the outermost in, consuming their
//!    prefixes (`>`, list item indentation, code indentation)
//! 2. **Opens** new blocks found in the rest of the line (`open`)
//! 3. **Adds** what remains to a paragraph or code block, possibly as a lazy
//!    paragraph continuation
//!
//! ## Modules
//!
//! - **`line`**: `Line`, a position in one line with tab-aware column tracking
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote,
//!   CodeFence, Heading, ListItem, ThematicBreak, Paragraph)
//! - **`types`**: `BlockState` and `OpenBlock` for blocks still taking lines
//! - **`open`**: `try_open` dispatch for block starts in precedence order
//! - **`builder`**: `BlockBuilder` producing the block tree plus the raw text
//!   for the inline pass
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Every block node spans the whole source lines it was built from

pub mod builder;
pub mod kinds;
pub mod line;
pub mod open;
pub mod types;

pub use builder::{BlockBuilder, PendingInline};
pub use open::{BlockStart, StartContext, try_open};
pub use types::{BlockState, OpenBlock};
