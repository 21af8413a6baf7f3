//! Filesystem entry snapshots.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::filetype::{classify, mime_for_extension, FileKind};

/// A snapshot of one filesystem node at listing time.
///
/// Entries are immutable: a changed file is represented by re-listing, never
/// by mutating an existing snapshot. `kind` is derived from the extension
/// exactly once, when the snapshot is taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Basename of the node.
    pub name: CompactString,

    /// Absolute path, platform-native separators.
    pub path: PathBuf,

    /// Whether this node is a directory.
    pub is_directory: bool,

    /// Size in bytes (0 for directories).
    pub size: u64,

    /// Filesystem modification time.
    pub modified: SystemTime,

    /// Lowercased extension without the leading dot; empty if none.
    pub extension: CompactString,

    /// Classified kind; directories have none.
    pub kind: Option<FileKind>,
}

impl Entry {
    /// Stat a path and build a snapshot for it.
    ///
    /// Returns `None` when the node cannot be statted (race-deleted,
    /// permission denied) or has no basename; callers treat a missing
    /// snapshot as a skipped entry, never as a hard error.
    pub fn from_path(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        let name = CompactString::new(path.file_name()?.to_string_lossy());
        let is_directory = metadata.is_dir();
        let extension = path
            .extension()
            .map(|e| CompactString::new(e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        Some(Self {
            name,
            path: path.to_path_buf(),
            is_directory,
            size: if is_directory { 0 } else { metadata.len() },
            modified: metadata.modified().unwrap_or(UNIX_EPOCH),
            kind: (!is_directory).then(|| classify(&extension)),
            extension,
        })
    }

    /// MIME label for this entry's extension.
    pub fn mime_type(&self) -> &'static str {
        mime_for_extension(&self.extension)
    }

    /// Whether the entry name marks it as hidden.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
