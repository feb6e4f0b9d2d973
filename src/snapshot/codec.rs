use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::namespace::{Namespace, Node};

/// Wire form of one tree node. The `kind` field discriminates the two
/// variants; instants are RFC 3339 strings (chrono's serde form), which keep
/// sub-second precision and parse back to the identical instant.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum SnapshotNode {
    File {
        name: String,
        content: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
    Directory {
        name: String,
        children: Vec<SnapshotNode>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

impl From<&Node> for SnapshotNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::File {
                name,
                content,
                created_at,
                updated_at,
            } => SnapshotNode::File {
                name: name.clone(),
                content: content.clone(),
                created_at: *created_at,
                updated_at: *updated_at,
            },
            Node::Directory {
                name,
                children,
                created_at,
                updated_at,
            } => SnapshotNode::Directory {
                name: name.clone(),
                children: children.iter().map(SnapshotNode::from).collect(),
                created_at: *created_at,
                updated_at: *updated_at,
            },
        }
    }
}

impl From<SnapshotNode> for Node {
    fn from(node: SnapshotNode) -> Self {
        match node {
            SnapshotNode::File {
                name,
                content,
                created_at,
                updated_at,
            } => Node::File {
                name,
                content,
                created_at,
                updated_at,
            },
            SnapshotNode::Directory {
                name,
                children,
                created_at,
                updated_at,
            } => Node::Directory {
                name,
                children: children.into_iter().map(Node::from).collect(),
                created_at,
                updated_at,
            },
        }
    }
}

/// Serializes the entire tree to its textual snapshot form.
pub fn save(namespace: &Namespace) -> Result<String, SnapshotError> {
    serde_json::to_string(&SnapshotNode::from(namespace.root())).context(SerializeSnafu)
}

/// Reconstructs a namespace from a textual snapshot.
///
/// All-or-nothing: a malformed payload fails with `CorruptSnapshot` and
/// produces nothing, so the caller's existing tree is never half-replaced.
pub fn load(text: &str) -> Result<Namespace, SnapshotError> {
    let root: SnapshotNode = serde_json::from_str(text).context(CorruptSnapshotSnafu)?;
    let mut root = Node::from(root);
    if !root.is_dir() {
        return CorruptRootSnafu.fail();
    }
    // Whatever the payload called it, the root is `/`.
    root.set_name("/");
    debug!("Reconstructed namespace from snapshot");
    Ok(Namespace::from_root(root))
}

#[derive(Debug, Snafu)]
pub enum SnapshotError {
    #[snafu(display("Corrupt snapshot: {}", source))]
    CorruptSnapshot { source: serde_json::Error },
    #[snafu(display("Corrupt snapshot: the root node must be a directory"))]
    CorruptRoot,
    #[snafu(display("Failed to serialize the namespace tree"))]
    SerializeError { source: serde_json::Error },
}
