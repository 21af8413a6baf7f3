//! Well-known storage roots and breadcrumb segments.

use std::path::{Path, PathBuf};

/// A named quick-access location under the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAccess {
    pub name: &'static str,
    pub path: PathBuf,
}

/// One breadcrumb segment for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub path: PathBuf,
}

/// Resolves the well-known category paths under a storage root.
///
/// All paths are plain concatenation under the root; nothing here touches
/// the filesystem or any persisted configuration.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn downloads(&self) -> PathBuf {
        self.root.join("Download")
    }

    pub fn dcim(&self) -> PathBuf {
        self.root.join("DCIM")
    }

    pub fn pictures(&self) -> PathBuf {
        self.root.join("Pictures")
    }

    pub fn music(&self) -> PathBuf {
        self.root.join("Music")
    }

    pub fn movies(&self) -> PathBuf {
        self.root.join("Movies")
    }

    pub fn documents(&self) -> PathBuf {
        self.root.join("Documents")
    }

    /// Hidden directory holding soft-deleted payloads and their sidecars.
    pub fn trash_root(&self) -> PathBuf {
        self.root.join(".trash")
    }

    /// Named quick-access locations, in presentation order.
    pub fn quick_access(&self) -> Vec<QuickAccess> {
        vec![
            QuickAccess { name: "Internal Storage", path: self.root.clone() },
            QuickAccess { name: "Downloads", path: self.downloads() },
            QuickAccess { name: "Documents", path: self.documents() },
            QuickAccess { name: "Pictures", path: self.pictures() },
            QuickAccess { name: "Music", path: self.music() },
            QuickAccess { name: "Movies", path: self.movies() },
            QuickAccess { name: "DCIM", path: self.dcim() },
            QuickAccess { name: "Trash", path: self.trash_root() },
        ]
    }

    /// Breadcrumb segments from the storage root down to `path`.
    ///
    /// The walk climbs parents until it reaches the root (or runs out of
    /// parents), then prepends the root segment itself.
    pub fn breadcrumbs(&self, path: &Path) -> Vec<Crumb> {
        let mut segments = Vec::new();
        let mut current = path.to_path_buf();

        while current != self.root && current != Path::new("/") && !current.as_os_str().is_empty() {
            let name = current
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            segments.insert(0, Crumb { name, path: current.clone() });
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        let root_name = if self.root == Path::new("/") {
            "Root".to_string()
        } else {
            self.root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Storage".to_string())
        };
        segments.insert(0, Crumb { name: root_name, path: self.root.clone() });

        segments
    }
}
