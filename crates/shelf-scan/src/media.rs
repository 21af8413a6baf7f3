//! Media aggregation for the gallery view and the recent-files sweep.

use std::path::PathBuf;

use compact_str::CompactString;
use itertools::Itertools;

use shelf_core::{Entry, FileKind, ScanOptions, StorageLayout};

use crate::lister::list_directory;
use crate::walk::walk_entries;

/// Which media kinds a gallery aggregation should collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSelection {
    Images,
    Videos,
    ImagesAndVideos,
}

impl MediaSelection {
    fn matches(self, kind: FileKind) -> bool {
        match self {
            Self::Images => kind == FileKind::Image,
            Self::Videos => kind == FileKind::Video,
            Self::ImagesAndVideos => matches!(kind, FileKind::Image | FileKind::Video),
        }
    }
}

/// Media files grouped under one parent directory (an "album").
#[derive(Debug, Clone)]
pub struct MediaGroup {
    /// Basename of the parent directory.
    pub name: CompactString,

    /// Path of the parent directory.
    pub path: PathBuf,

    /// Members, most recently modified first.
    pub entries: Vec<Entry>,
}

impl MediaGroup {
    /// Modification time of the group's newest member.
    fn newest(&self) -> std::time::SystemTime {
        self.entries
            .first()
            .map(|e| e.modified)
            .unwrap_or(std::time::UNIX_EPOCH)
    }
}

/// Walk the tree under `options.root` and group matching media files by
/// their immediate parent directory.
///
/// Members within a group are ordered newest-first, and groups are ordered
/// by their newest member, newest-first, so the gallery shows the most
/// recently active album at the top.
pub fn collect_media(options: &ScanOptions, selection: MediaSelection) -> Vec<MediaGroup> {
    // Media never lives in app sandboxes; the gallery skips the whole
    // Android tree, not just the data/obb segments.
    let mut options = options.clone();
    if !options.private_segments.iter().any(|s| s == "Android") {
        options.private_segments.push("Android".to_string());
    }

    let grouped = walk_entries(&options)
        .into_iter()
        .filter(|entry| entry.kind.is_some_and(|kind| selection.matches(kind)))
        .filter_map(|entry| {
            entry
                .path
                .parent()
                .map(|parent| parent.to_path_buf())
                .map(|parent| (parent, entry))
        })
        .into_group_map();

    let mut groups: Vec<MediaGroup> = grouped
        .into_iter()
        .map(|(path, mut entries)| {
            entries.sort_by(|a, b| b.modified.cmp(&a.modified));
            let name = path
                .file_name()
                .map(|n| CompactString::new(n.to_string_lossy()))
                .unwrap_or_default();
            MediaGroup { name, path, entries }
        })
        .collect();

    groups.sort_by(|a, b| b.newest().cmp(&a.newest()));
    groups
}

/// The most recently modified files across the well-known directories.
///
/// A non-recursive sweep over the storage root and its quick-access
/// categories (trash excluded), files only, newest-first, truncated to
/// `limit`.
pub fn recent_files(layout: &StorageLayout, limit: usize) -> Vec<Entry> {
    let mut sweep = vec![layout.root().to_path_buf()];
    sweep.extend([
        layout.downloads(),
        layout.documents(),
        layout.pictures(),
        layout.music(),
        layout.movies(),
        layout.dcim(),
    ]);

    let mut files: Vec<Entry> = sweep
        .iter()
        .flat_map(|dir| list_directory(dir, false))
        .filter(|entry| !entry.is_directory)
        .collect();

    files.sort_by(|a, b| b.modified.cmp(&a.modified));
    files.truncate(limit);
    files
}
