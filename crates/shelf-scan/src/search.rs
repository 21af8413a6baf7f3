//! Name search over a directory tree.

use std::path::Path;

use shelf_core::{Entry, ScanOptions};

use crate::walk::walk_entries;

/// Search for entries whose name contains `query`, case-insensitively.
///
/// With `recursive` unset only the immediate children of `root` are
/// examined. Recursive descent never enters hidden directories or
/// vendor-private subtrees (`Android/data`, `Android/obb`); those are
/// skipped silently rather than reported as failures. A pruned directory's
/// own name can still match; only descent is cut off, not membership.
pub fn search(root: &Path, query: &str, recursive: bool) -> Vec<Entry> {
    let options = ScanOptions {
        recursive,
        ..ScanOptions::new(root)
    };
    search_with_options(&options, query)
}

/// Search with full traversal configuration.
pub fn search_with_options(options: &ScanOptions, query: &str) -> Vec<Entry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    walk_entries(options)
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}
