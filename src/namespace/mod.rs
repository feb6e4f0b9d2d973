//! In-memory hierarchical namespace.
//!
//! A tree of file and directory nodes rooted at `/`, addressed by
//! `/`-delimited paths and mutated through POSIX-like operations. Nothing
//! here touches real storage.

mod namespace;
mod node;
mod path;

pub use namespace::{Namespace, NamespaceError};
pub use node::{Node, NodeKind, Stat};
