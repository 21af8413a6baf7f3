//! Flat directory listing.

use std::fs;
use std::path::Path;

use tracing::debug;

use shelf_core::Entry;

/// List the immediate children of a directory.
///
/// Returns an empty vector when `path` does not exist, is not a directory,
/// or cannot be read. A listing must never fail hard, because the target
/// may have been deleted between navigation and the read (or may be a
/// permission-restricted system folder). Individual children that cannot be
/// statted are skipped for the same reason.
///
/// Entries whose name starts with `.` are excluded unless `show_hidden` is
/// set. No ordering is applied; sorting is a separate step.
pub fn list_directory(path: &Path, show_hidden: bool) -> Vec<Entry> {
    let read_dir = match fs::read_dir(path) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "listing skipped");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for dir_entry in read_dir.flatten() {
        let name = dir_entry.file_name();
        if !show_hidden && name.to_string_lossy().starts_with('.') {
            continue;
        }
        if let Some(entry) = Entry::from_path(&dir_entry.path()) {
            entries.push(entry);
        }
    }

    entries
}
