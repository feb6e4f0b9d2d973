use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single entry in the namespace tree.
///
/// The two kinds are a closed set; operations dispatch by matching on the
/// variant rather than through any trait object. A node is owned exclusively
/// by its parent directory's `children` vector (or by the [`Namespace`] for
/// the root), which is what keeps the tree acyclic.
///
/// [`Namespace`]: crate::namespace::Namespace
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File {
        name: String,
        content: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
    Directory {
        name: String,
        children: Vec<Node>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },
}

impl Node {
    /// A fresh file node with both timestamps set to now.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Node::File {
            name: name.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A fresh empty directory node with both timestamps set to now.
    pub fn directory(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Node::Directory {
            name: name.into(),
            children: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    pub fn set_name(&mut self, new_name: impl Into<String>) {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => *name = new_name.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File { .. } => NodeKind::File,
            Node::Directory { .. } => NodeKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Node::File { created_at, .. } | Node::Directory { created_at, .. } => *created_at,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Node::File { updated_at, .. } | Node::Directory { updated_at, .. } => *updated_at,
        }
    }

    /// Builds the metadata descriptor for this node. Size is the content
    /// length for files and the immediate child count for directories.
    pub fn stat(&self) -> Stat {
        let size = match self {
            Node::File { content, .. } => content.len(),
            Node::Directory { children, .. } => children.len(),
        };
        Stat {
            kind: self.kind(),
            name: self.name().to_string(),
            size,
            created_at: self.created_at(),
            updated_at: self.updated_at(),
        }
    }
}

/// Discriminant of the two node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// Metadata descriptor returned by [`Namespace::stat`]. Instants serialize
/// as ISO-8601 strings.
///
/// [`Namespace::stat`]: crate::namespace::Namespace::stat
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub kind: NodeKind,
    pub name: String,
    pub size: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
