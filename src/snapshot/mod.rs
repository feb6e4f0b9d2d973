//! Textual snapshot of the namespace tree.
//!
//! `save` renders the whole tree as one JSON document; `load` reconstructs
//! an equivalent tree from that text, exact in kind, name, content, child
//! order, and both timestamps per node.

mod codec;

pub use codec::{SnapshotError, load, save};
