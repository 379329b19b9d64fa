//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a parsed document as a stable text outline with
//!   block spans, for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (link
//!   consistency, spans in bounds, child spans contained in parents, leaf
//!   kinds without children)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by snapshot tests over fixture documents rather
//! than a separate formal grammar. Every snapshot test also runs the
//! invariant checks, so a snapshot can never bless a malformed tree.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
