//! Path segmentation helpers.
//!
//! Paths are `/`-delimited strings. Empty segments carry no meaning and are
//! dropped during segmentation, so `"/a//b/"` and `"a/b"` address the same
//! node. `"/"` (and the empty string) segment to nothing, i.e. the root.

/// Splits a path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Splits a path into its parent chain and leaf name.
///
/// Returns `None` when the path has no leaf to speak of (the root or an
/// effectively empty path).
pub fn split_parent_leaf(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut parents = segments(path);
    let leaf = parents.pop()?;
    Some((parents, leaf))
}
