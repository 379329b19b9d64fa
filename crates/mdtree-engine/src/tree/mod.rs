//! # Document Tree
//!
//! Arena-backed tree produced by the parser.
//!
//! ## Modules
//!
//! - **`node`**: `NodeKind`, a closed enum carrying only each kind's own data
//! - **`arena`**: `Document` owning all nodes, `NodeId` indices and the link
//!   maintenance used while parsing
//! - **`node_ref`**: `NodeRef` borrowed handles for navigation
//! - **`walk`**: `Preorder` events and the `walk` visitor driver
//! - **`outline`**: indented text rendering for dumps and snapshot tests
//!
//! ## Key Invariants
//!
//! - The root is the only Document node and the only node without a parent
//! - `first_child` → `next` visits exactly a node's children; `last_child` →
//!   `prev` visits them in reverse
//! - Back-references are indices, so the tree has no ownership cycles

pub mod arena;
pub mod node;
pub mod node_ref;
pub mod outline;
pub mod walk;

pub use arena::{Document, NodeId};
pub use node::{CodeBlockData, Fence, HeadingData, LinkData, ListData, NodeKind};
pub use node_ref::{Children, NodeRef};
pub use outline::{OutlineOptions, describe, outline};
pub use walk::{Preorder, WalkEvent, WalkStatus, walk};
