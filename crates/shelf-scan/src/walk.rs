//! Shared jwalk traversal with descent pruning.

use jwalk::WalkDir;
use tracing::debug;

use shelf_core::{Entry, ScanOptions};

/// Walk the tree described by `options` and snapshot every reachable node
/// below the root.
///
/// Pruning happens at the per-directory read hook: hidden directories and
/// vendor-private subtrees keep their own entry in the output but are never
/// descended into. Unreadable directories and race-deleted nodes are skipped
/// without aborting the walk.
pub(crate) fn walk_entries(options: &ScanOptions) -> Vec<Entry> {
    let max_depth = if options.recursive {
        options.max_depth.map(|d| d as usize).unwrap_or(usize::MAX)
    } else {
        1
    };

    let prune = options.clone();
    let walker = WalkDir::new(&options.root)
        .skip_hidden(false)
        .max_depth(max_depth)
        .process_read_dir(move |_depth, _dir_path, _state, children| {
            for child in children.iter_mut().flatten() {
                if child.file_type.is_dir() {
                    let path = child.path();
                    let name = child.file_name.to_string_lossy();
                    if prune.should_prune(&name, &path) {
                        child.read_children_path = None;
                    }
                }
            }
        });

    let mut entries = Vec::new();
    for result in walker {
        let dir_entry = match result {
            Ok(dir_entry) => dir_entry,
            Err(err) => {
                debug!(error = %err, "walk entry skipped");
                continue;
            }
        };
        // The root itself is not part of its own listing.
        if dir_entry.depth == 0 {
            continue;
        }
        if let Some(entry) = Entry::from_path(&dir_entry.path()) {
            entries.push(entry);
        }
    }

    entries
}
