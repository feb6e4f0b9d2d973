use chrono::{DateTime, Utc};
use snafu::Snafu;
use tracing::debug;

use crate::namespace::node::{Node, Stat};
use crate::namespace::path::{segments, split_parent_leaf};

/// The in-memory namespace: an ownership tree of [`Node`]s rooted at `/`.
///
/// Every operation is synchronous and either fully applies its effect or
/// leaves the tree exactly as it was. Instances are independent and carry no
/// shared state; a caller that needs concurrent access must serialize calls
/// externally.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    root: Node,
}

/// Mutable view of one directory's fields, handed out by the internal walks
/// so callers can touch `children` and `updated_at` together.
struct DirHandle<'a> {
    children: &'a mut Vec<Node>,
    updated_at: &'a mut DateTime<Utc>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// An empty namespace: just the root directory `/`.
    pub fn new() -> Self {
        Self {
            root: Node::directory("/"),
        }
    }

    pub(crate) fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Walks the path from the root, one child-name lookup per segment.
    /// `"/"` resolves to the root without consuming segments. Absence is not
    /// an error; callers decide whether it is.
    pub fn resolve(&self, path: &str) -> Option<&Node> {
        self.resolve_segments(&segments(path))
    }

    /// True iff the path resolves. Never fails.
    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    /// Creates a file, building missing parent directories on demand.
    ///
    /// An existing file at `path` is an `AlreadyExists` error unless
    /// `overwrite` is set, in which case its content is replaced in place
    /// (same node, same `created_at`). A directory at `path` is always
    /// `AlreadyExists`: sibling names are unique across both kinds.
    pub fn create_file(
        &mut self,
        path: &str,
        content: impl Into<String>,
        overwrite: bool,
    ) -> Result<(), NamespaceError> {
        let Some((parents, leaf)) = split_parent_leaf(path) else {
            return InvalidPathSnafu { path }.fail();
        };
        self.validate_dir_chain(&parents, path)?;
        if let Some(existing) = self.resolve(path) {
            if !(existing.is_file() && overwrite) {
                return AlreadyExistsSnafu { path }.fail();
            }
        }

        let handle = self.get_or_create_dir(&parents, path)?;
        let position = handle.children.iter().position(|child| child.name() == leaf);
        match position {
            Some(index) => match &mut handle.children[index] {
                Node::File {
                    content: existing,
                    updated_at,
                    ..
                } => {
                    *existing = content.into();
                    *updated_at = Utc::now();
                    debug!("Overwrote file content at '{}'", path);
                }
                // The pre-checks above rejected every other occupant.
                Node::Directory { .. } => return AlreadyExistsSnafu { path }.fail(),
            },
            None => {
                handle.children.push(Node::file(leaf, content));
                *handle.updated_at = Utc::now();
                debug!("Created file at '{}'", path);
            }
        }
        Ok(())
    }

    /// Returns the content of the file at `path`. A directory at that path
    /// is reported as `NotFound`, same as an absent entry.
    pub fn read_file(&self, path: &str) -> Result<&str, NamespaceError> {
        match self.resolve(path) {
            Some(Node::File { content, .. }) => Ok(content),
            _ => NotFoundSnafu { path }.fail(),
        }
    }

    /// Replaces the content of an existing file and refreshes `updated_at`.
    pub fn write_file(&mut self, path: &str, content: impl Into<String>) -> Result<(), NamespaceError> {
        let content = content.into();
        self.update_file_content(path, |existing| *existing = content)
    }

    /// Appends to the content of an existing file and refreshes `updated_at`.
    pub fn append_file(&mut self, path: &str, content: impl AsRef<str>) -> Result<(), NamespaceError> {
        self.update_file_content(path, |existing| existing.push_str(content.as_ref()))
    }

    /// Removes the file at `path` from its parent directory.
    ///
    /// The parent chain must already exist. Only file entries are matched;
    /// removing a directory through `unlink` is intentionally unsupported.
    pub fn unlink(&mut self, path: &str) -> Result<(), NamespaceError> {
        let Some((parents, leaf)) = split_parent_leaf(path) else {
            return InvalidPathSnafu { path }.fail();
        };
        let Some(handle) = self.resolve_dir_mut(&parents) else {
            return NotFoundSnafu { path }.fail();
        };
        let position = handle
            .children
            .iter()
            .position(|child| child.name() == leaf && child.is_file());
        match position {
            Some(index) => {
                handle.children.remove(index);
                *handle.updated_at = Utc::now();
                debug!("Unlinked file at '{}'", path);
                Ok(())
            }
            None => NotFoundSnafu { path }.fail(),
        }
    }

    /// Creates the directory at `path` along with every missing ancestor.
    /// Calling it on an existing directory path is a no-op.
    pub fn mkdir(&mut self, path: &str) -> Result<(), NamespaceError> {
        self.get_or_create_dir(&segments(path), path)?;
        Ok(())
    }

    /// Returns the child names of the directory at `path`, in the
    /// directory's current insertion order.
    pub fn readdir(&self, path: &str) -> Result<Vec<String>, NamespaceError> {
        match self.resolve(path) {
            Some(Node::Directory { children, .. }) => Ok(children
                .iter()
                .map(|child| child.name().to_string())
                .collect()),
            Some(Node::File { .. }) => NotADirectorySnafu { path }.fail(),
            None => NotFoundSnafu { path }.fail(),
        }
    }

    /// Moves the node at `old_path` to `new_path`, building missing
    /// destination parents on demand.
    ///
    /// The move is a remove-then-insert ownership transfer; the node is
    /// never duplicated. Moving the root, or moving a directory underneath
    /// one of its own descendants, is an `InvalidOperation`; an occupied
    /// destination name is `AlreadyExists`. Renaming a node onto its own
    /// path is a no-op.
    pub fn rename(&mut self, old_path: &str, new_path: &str) -> Result<(), NamespaceError> {
        let Some((old_parents, old_leaf)) = split_parent_leaf(old_path) else {
            return InvalidOperationSnafu {
                message: "the root directory cannot be moved",
            }
            .fail();
        };
        let Some((new_parents, new_leaf)) = split_parent_leaf(new_path) else {
            return InvalidPathSnafu { path: new_path }.fail();
        };

        let old_segments = segments(old_path);
        if self.resolve_segments(&old_segments).is_none() {
            return NotFoundSnafu { path: old_path }.fail();
        }
        if new_parents == old_parents && new_leaf == old_leaf {
            return Ok(());
        }
        // A destination parent underneath the moved node would turn the
        // tree into a cycle.
        if new_parents.len() >= old_segments.len()
            && new_parents[..old_segments.len()] == old_segments[..]
        {
            return InvalidOperationSnafu {
                message: format!("cannot move '{old_path}' underneath itself ('{new_path}')"),
            }
            .fail();
        }
        self.validate_dir_chain(&new_parents, new_path)?;
        if let Some(Node::Directory { children, .. }) = self.resolve_segments(&new_parents) {
            if children.iter().any(|child| child.name() == new_leaf) {
                return AlreadyExistsSnafu { path: new_path }.fail();
            }
        }

        // All checks passed; from here the operation cannot fail halfway.
        let Some(source) = self.resolve_dir_mut(&old_parents) else {
            return NotFoundSnafu { path: old_path }.fail();
        };
        let Some(index) = source
            .children
            .iter()
            .position(|child| child.name() == old_leaf)
        else {
            return NotFoundSnafu { path: old_path }.fail();
        };
        let mut node = source.children.remove(index);
        *source.updated_at = Utc::now();

        node.set_name(new_leaf);
        let destination = self.get_or_create_dir(&new_parents, new_path)?;
        destination.children.push(node);
        *destination.updated_at = Utc::now();
        debug!("Renamed '{}' to '{}'", old_path, new_path);
        Ok(())
    }

    /// Returns the metadata descriptor of the node at `path`.
    pub fn stat(&self, path: &str) -> Result<Stat, NamespaceError> {
        match self.resolve(path) {
            Some(node) => Ok(node.stat()),
            None => NotFoundSnafu { path }.fail(),
        }
    }

    fn resolve_segments(&self, segs: &[&str]) -> Option<&Node> {
        let mut current = &self.root;
        for segment in segs {
            let Node::Directory { children, .. } = current else {
                return None;
            };
            current = children.iter().find(|child| child.name() == *segment)?;
        }
        Some(current)
    }

    /// Strict mutable walk to an existing directory; never creates anything.
    fn resolve_dir_mut(&mut self, segs: &[&str]) -> Option<DirHandle<'_>> {
        let mut current = &mut self.root;
        for segment in segs {
            let Node::Directory { children, .. } = current else {
                return None;
            };
            current = children.iter_mut().find(|child| child.name() == *segment)?;
        }
        match current {
            Node::Directory {
                children,
                updated_at,
                ..
            } => Some(DirHandle {
                children,
                updated_at,
            }),
            Node::File { .. } => None,
        }
    }

    /// Checks that no existing entry along `segs` is a file, so a later
    /// creation walk cannot fail after it has started mutating.
    fn validate_dir_chain(&self, segs: &[&str], path: &str) -> Result<(), NamespaceError> {
        let mut current = &self.root;
        for segment in segs {
            let Node::Directory { children, .. } = current else {
                return NotADirectorySnafu { path }.fail();
            };
            match children.iter().find(|child| child.name() == *segment) {
                Some(child) => current = child,
                None => return Ok(()),
            }
        }
        if current.is_dir() {
            Ok(())
        } else {
            NotADirectorySnafu { path }.fail()
        }
    }

    /// Walks `segs` from the root, creating each missing segment as a fresh
    /// empty directory (which also refreshes the owning parent's
    /// `updated_at`). Fails before mutating anything if an existing entry on
    /// the chain is a file.
    fn get_or_create_dir(&mut self, segs: &[&str], path: &str) -> Result<DirHandle<'_>, NamespaceError> {
        self.validate_dir_chain(segs, path)?;

        let mut current = &mut self.root;
        for segment in segs {
            let Node::Directory {
                children,
                updated_at,
                ..
            } = current
            else {
                // Unreachable after validation, but kept as a hard error.
                return NotADirectorySnafu { path }.fail();
            };
            let index = match children.iter().position(|child| child.name() == *segment) {
                Some(index) => index,
                None => {
                    *updated_at = Utc::now();
                    children.push(Node::directory(*segment));
                    debug!("Created directory '{}' under '{}'", segment, path);
                    children.len() - 1
                }
            };
            current = &mut children[index];
        }
        match current {
            Node::Directory {
                children,
                updated_at,
                ..
            } => Ok(DirHandle {
                children,
                updated_at,
            }),
            Node::File { .. } => NotADirectorySnafu { path }.fail(),
        }
    }

    fn update_file_content(
        &mut self,
        path: &str,
        apply: impl FnOnce(&mut String),
    ) -> Result<(), NamespaceError> {
        let mut current = &mut self.root;
        for segment in segments(path) {
            let Node::Directory { children, .. } = current else {
                return NotFoundSnafu { path }.fail();
            };
            match children.iter_mut().find(|child| child.name() == segment) {
                Some(child) => current = child,
                None => return NotFoundSnafu { path }.fail(),
            }
        }
        match current {
            Node::File {
                content, updated_at, ..
            } => {
                apply(content);
                *updated_at = Utc::now();
                Ok(())
            }
            Node::Directory { .. } => NotAFileSnafu { path }.fail(),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum NamespaceError {
    #[snafu(display("Invalid path '{}': a non-empty name is required", path))]
    InvalidPath { path: String },
    #[snafu(display("No such file or directory: '{}'", path))]
    NotFound { path: String },
    #[snafu(display("Not a file: '{}'", path))]
    NotAFile { path: String },
    #[snafu(display("Not a directory: '{}'", path))]
    NotADirectory { path: String },
    #[snafu(display("Entry already exists at '{}'", path))]
    AlreadyExists { path: String },
    #[snafu(display("Invalid operation: {}", message))]
    InvalidOperation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fresh_namespace_has_only_the_root() {
        let namespace = Namespace::new();
        assert!(namespace.exists("/"));
        assert_eq!(namespace.readdir("/").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn root_resolves_without_consuming_segments() {
        let namespace = Namespace::new();
        let root = namespace.resolve("/").expect("root must resolve");
        assert_eq!(root.name(), "/");
        assert!(root.is_dir());
    }

    #[rstest]
    #[case("/docs/readme.txt")]
    #[case("docs/readme.txt")]
    #[case("/docs//readme.txt/")]
    fn equivalent_path_spellings_resolve_identically(#[case] spelling: &str) {
        let mut namespace = Namespace::new();
        namespace
            .create_file("/docs/readme.txt", "hello", false)
            .unwrap();
        assert!(namespace.exists(spelling));
        assert_eq!(namespace.read_file(spelling).unwrap(), "hello");
    }

    #[test]
    fn create_file_builds_missing_parents() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a/b/c.txt", "x", false).unwrap();
        assert!(namespace.exists("/a"));
        assert!(namespace.exists("/a/b"));
        assert_eq!(namespace.readdir("/a/b").unwrap(), vec!["c.txt"]);
    }

    #[test]
    fn create_file_refreshes_parent_updated_at() {
        let mut namespace = Namespace::new();
        let before = namespace.stat("/").unwrap().updated_at;
        thread::sleep(Duration::from_millis(2));
        namespace.create_file("/a.txt", "", false).unwrap();
        assert!(namespace.stat("/").unwrap().updated_at > before);
    }

    #[test]
    fn create_file_without_overwrite_rejects_existing_file() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "old", false).unwrap();
        let result = namespace.create_file("/a.txt", "new", false);
        assert!(matches!(result, Err(NamespaceError::AlreadyExists { .. })));
        assert_eq!(namespace.read_file("/a.txt").unwrap(), "old");
    }

    #[test]
    fn create_file_with_overwrite_updates_in_place() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "old", false).unwrap();
        let before = namespace.stat("/a.txt").unwrap();
        thread::sleep(Duration::from_millis(2));
        namespace.create_file("/a.txt", "new", true).unwrap();
        let after = namespace.stat("/a.txt").unwrap();

        assert_eq!(namespace.read_file("/a.txt").unwrap(), "new");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        // In-place update, not a remove-and-append.
        assert_eq!(namespace.readdir("/").unwrap(), vec!["a.txt"]);
    }

    #[test]
    fn create_file_rejects_name_held_by_a_directory() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/docs").unwrap();
        for overwrite in [false, true] {
            let result = namespace.create_file("/docs", "x", overwrite);
            assert!(matches!(result, Err(NamespaceError::AlreadyExists { .. })));
        }
        assert!(namespace.resolve("/docs").unwrap().is_dir());
    }

    #[rstest]
    #[case("/")]
    #[case("")]
    fn create_file_rejects_leafless_paths(#[case] path: &str) {
        let mut namespace = Namespace::new();
        let result = namespace.create_file(path, "x", false);
        assert!(matches!(result, Err(NamespaceError::InvalidPath { .. })));
    }

    #[test]
    fn create_file_through_a_file_leaves_tree_untouched() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a", "file", false).unwrap();
        let before = namespace.clone();
        let result = namespace.create_file("/a/b/c.txt", "x", false);
        assert!(matches!(result, Err(NamespaceError::NotADirectory { .. })));
        assert_eq!(namespace, before);
    }

    #[test]
    fn read_file_after_create_returns_exact_content() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "X", false).unwrap();
        assert_eq!(namespace.read_file("/a.txt").unwrap(), "X");
    }

    #[test]
    fn read_file_reports_directories_as_not_found() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/docs").unwrap();
        assert!(matches!(
            namespace.read_file("/docs"),
            Err(NamespaceError::NotFound { .. })
        ));
        assert!(matches!(
            namespace.read_file("/absent"),
            Err(NamespaceError::NotFound { .. })
        ));
    }

    #[test]
    fn write_file_replaces_content() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "old", false).unwrap();
        namespace.write_file("/a.txt", "new").unwrap();
        assert_eq!(namespace.read_file("/a.txt").unwrap(), "new");
    }

    #[test]
    fn append_file_concatenates() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "X", false).unwrap();
        namespace.append_file("/a.txt", "Y").unwrap();
        assert_eq!(namespace.read_file("/a.txt").unwrap(), "XY");
    }

    #[test]
    fn write_file_on_a_directory_is_not_a_file() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/docs").unwrap();
        assert!(matches!(
            namespace.write_file("/docs", "x"),
            Err(NamespaceError::NotAFile { .. })
        ));
        assert!(matches!(
            namespace.append_file("/", "x"),
            Err(NamespaceError::NotAFile { .. })
        ));
    }

    #[test]
    fn write_file_on_absent_path_is_not_found() {
        let mut namespace = Namespace::new();
        assert!(matches!(
            namespace.write_file("/absent.txt", "x"),
            Err(NamespaceError::NotFound { .. })
        ));
    }

    #[test]
    fn unlink_removes_the_file_and_refreshes_the_parent() {
        let mut namespace = Namespace::new();
        namespace.create_file("/docs/a.txt", "x", false).unwrap();
        let before = namespace.stat("/docs").unwrap().updated_at;
        thread::sleep(Duration::from_millis(2));
        namespace.unlink("/docs/a.txt").unwrap();
        assert!(!namespace.exists("/docs/a.txt"));
        assert!(namespace.stat("/docs").unwrap().updated_at > before);
    }

    #[test]
    fn unlink_does_not_create_missing_parents() {
        let mut namespace = Namespace::new();
        let result = namespace.unlink("/no/such/file.txt");
        assert!(matches!(result, Err(NamespaceError::NotFound { .. })));
        assert!(!namespace.exists("/no"));
    }

    #[test]
    fn unlink_does_not_match_directories() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/docs").unwrap();
        let result = namespace.unlink("/docs");
        assert!(matches!(result, Err(NamespaceError::NotFound { .. })));
        assert!(namespace.exists("/docs"));
    }

    #[test]
    fn mkdir_is_idempotent() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/a/b/c").unwrap();
        namespace.mkdir("/a/b/c").unwrap();
        assert_eq!(namespace.readdir("/a/b").unwrap(), vec!["c"]);
        assert_eq!(namespace.readdir("/a").unwrap(), vec!["b"]);
    }

    #[test]
    fn mkdir_on_root_is_a_no_op() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/").unwrap();
        assert_eq!(namespace.readdir("/").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn mkdir_through_a_file_is_rejected() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a", "file", false).unwrap();
        let result = namespace.mkdir("/a/b");
        assert!(matches!(result, Err(NamespaceError::NotADirectory { .. })));
    }

    #[test]
    fn readdir_preserves_insertion_order() {
        let mut namespace = Namespace::new();
        namespace.create_file("/b.txt", "", false).unwrap();
        namespace.create_file("/a.txt", "", false).unwrap();
        namespace.mkdir("/c").unwrap();
        assert_eq!(namespace.readdir("/").unwrap(), vec!["b.txt", "a.txt", "c"]);
    }

    #[test]
    fn readdir_on_a_file_is_not_a_directory() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "", false).unwrap();
        assert!(matches!(
            namespace.readdir("/a.txt"),
            Err(NamespaceError::NotADirectory { .. })
        ));
    }

    #[test]
    fn rename_moves_within_a_directory() {
        let mut namespace = Namespace::new();
        namespace
            .create_file("/docs/readme.txt", "hi", false)
            .unwrap();
        namespace.rename("/docs/readme.txt", "/docs/guide.txt").unwrap();

        let listing = namespace.readdir("/docs").unwrap();
        assert!(listing.contains(&"guide.txt".to_string()));
        assert!(!listing.contains(&"readme.txt".to_string()));
        assert!(!namespace.exists("/docs/readme.txt"));
        assert_eq!(namespace.read_file("/docs/guide.txt").unwrap(), "hi");
    }

    #[test]
    fn rename_moves_across_directories_creating_parents() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a/x.txt", "x", false).unwrap();
        namespace.rename("/a/x.txt", "/b/c/y.txt").unwrap();
        assert!(!namespace.exists("/a/x.txt"));
        assert_eq!(namespace.read_file("/b/c/y.txt").unwrap(), "x");
    }

    #[test]
    fn rename_transfers_whole_subtrees() {
        let mut namespace = Namespace::new();
        namespace.create_file("/src/deep/f.txt", "f", false).unwrap();
        namespace.rename("/src", "/dst").unwrap();
        assert!(!namespace.exists("/src"));
        assert_eq!(namespace.read_file("/dst/deep/f.txt").unwrap(), "f");
    }

    #[test]
    fn rename_preserves_the_moved_nodes_created_at() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "x", false).unwrap();
        let before = namespace.stat("/a.txt").unwrap().created_at;
        namespace.rename("/a.txt", "/b.txt").unwrap();
        assert_eq!(namespace.stat("/b.txt").unwrap().created_at, before);
    }

    #[test]
    fn rename_of_absent_source_is_not_found() {
        let mut namespace = Namespace::new();
        assert!(matches!(
            namespace.rename("/absent", "/dest"),
            Err(NamespaceError::NotFound { .. })
        ));
    }

    #[test]
    fn rename_of_the_root_is_invalid() {
        let mut namespace = Namespace::new();
        assert!(matches!(
            namespace.rename("/", "/elsewhere"),
            Err(NamespaceError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn rename_into_own_descendant_is_rejected() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/a/b").unwrap();
        let before = namespace.clone();
        let result = namespace.rename("/a", "/a/b/a");
        assert!(matches!(result, Err(NamespaceError::InvalidOperation { .. })));
        assert_eq!(namespace, before);
    }

    #[test]
    fn rename_directly_under_itself_is_rejected() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/a").unwrap();
        assert!(matches!(
            namespace.rename("/a", "/a/b"),
            Err(NamespaceError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn rename_onto_an_occupied_name_is_rejected() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "a", false).unwrap();
        namespace.create_file("/b.txt", "b", false).unwrap();
        let result = namespace.rename("/a.txt", "/b.txt");
        assert!(matches!(result, Err(NamespaceError::AlreadyExists { .. })));
        assert_eq!(namespace.read_file("/a.txt").unwrap(), "a");
        assert_eq!(namespace.read_file("/b.txt").unwrap(), "b");
    }

    #[test]
    fn rename_onto_its_own_path_is_a_no_op() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a.txt", "a", false).unwrap();
        let before = namespace.clone();
        namespace.rename("/a.txt", "/a.txt").unwrap();
        assert_eq!(namespace, before);
    }

    #[test]
    fn rename_refreshes_both_parents() {
        let mut namespace = Namespace::new();
        namespace.create_file("/a/x.txt", "x", false).unwrap();
        namespace.mkdir("/b").unwrap();
        let a_before = namespace.stat("/a").unwrap().updated_at;
        let b_before = namespace.stat("/b").unwrap().updated_at;
        thread::sleep(Duration::from_millis(2));
        namespace.rename("/a/x.txt", "/b/x.txt").unwrap();
        assert!(namespace.stat("/a").unwrap().updated_at > a_before);
        assert!(namespace.stat("/b").unwrap().updated_at > b_before);
    }

    #[test]
    fn stat_sizes_files_and_directories_differently() {
        let mut namespace = Namespace::new();
        namespace.create_file("/docs/a.txt", "hello", false).unwrap();
        namespace.create_file("/docs/b.txt", "", false).unwrap();

        let file = namespace.stat("/docs/a.txt").unwrap();
        assert_eq!(file.size, 5);

        let dir = namespace.stat("/docs").unwrap();
        assert_eq!(dir.size, 2);
    }

    #[test]
    fn exists_tracks_create_and_unlink() {
        let mut namespace = Namespace::new();
        assert!(!namespace.exists("/a.txt"));
        namespace.create_file("/a.txt", "", false).unwrap();
        assert!(namespace.exists("/a.txt"));
        namespace.unlink("/a.txt").unwrap();
        assert!(!namespace.exists("/a.txt"));
    }

    #[test]
    fn full_session_walkthrough() {
        let mut namespace = Namespace::new();
        namespace.mkdir("/docs").unwrap();
        namespace
            .create_file("/docs/readme.txt", "Hello Virtual FS!", false)
            .unwrap();
        assert_eq!(
            namespace.read_file("/docs/readme.txt").unwrap(),
            "Hello Virtual FS!"
        );
        assert_eq!(namespace.readdir("/docs").unwrap(), vec!["readme.txt"]);

        namespace.rename("/docs/readme.txt", "/docs/guide.txt").unwrap();
        assert_eq!(namespace.readdir("/docs").unwrap(), vec!["guide.txt"]);

        namespace.unlink("/docs/guide.txt").unwrap();
        assert_eq!(namespace.readdir("/docs").unwrap(), Vec::<String>::new());
    }
}
