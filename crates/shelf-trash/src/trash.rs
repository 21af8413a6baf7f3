//! The trash bin: relocation, restore, purge.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use tracing::warn;

use shelf_core::{classify, Entry, StorageLayout};
use shelf_ops::{remove_recursive, resolve_collision, OperationKind, OperationOutcome};

use crate::record::{derived_name, is_sidecar, sidecar_path, TrashRecord};

/// Soft-delete store rooted at a fixed trash directory.
///
/// Payloads are stored as `<epoch-ms>_<name>` with a JSON sidecar each.
/// When a restore target's parent no longer exists, the item lands in the
/// fallback directory instead of failing.
#[derive(Debug, Clone)]
pub struct TrashBin {
    trash_root: PathBuf,
    fallback_dir: PathBuf,
}

impl TrashBin {
    pub fn new(trash_root: impl Into<PathBuf>, fallback_dir: impl Into<PathBuf>) -> Self {
        Self {
            trash_root: trash_root.into(),
            fallback_dir: fallback_dir.into(),
        }
    }

    /// The conventional bin for a storage layout: `.trash` under the root,
    /// Downloads as the restore fallback.
    pub fn for_layout(layout: &StorageLayout) -> Self {
        Self::new(layout.trash_root(), layout.downloads())
    }

    pub fn trash_root(&self) -> &Path {
        &self.trash_root
    }

    /// Relocate an item into the trash and write its sidecar.
    ///
    /// The trash root is created on demand. Returns `false` if the
    /// relocation itself fails; a failed sidecar write leaves the item
    /// trashed but degraded (restore will no longer know the original
    /// location) and still returns `true`.
    pub async fn move_to_trash(&self, path: &Path) -> bool {
        let bin = self.clone();
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || bin.move_to_trash_blocking(&path))
            .await
            .unwrap_or(false)
    }

    fn move_to_trash_blocking(&self, path: &Path) -> bool {
        let Some(record) = TrashRecord::for_item(path) else {
            return false;
        };

        if let Err(err) = fs::create_dir_all(&self.trash_root) {
            warn!(path = %self.trash_root.display(), error = %err, "cannot create trash root");
            return false;
        }

        let stored_name = format!(
            "{}_{}",
            record.deleted_at.timestamp_millis(),
            record.original_name
        );
        let trashed = match resolve_collision(&self.trash_root, &stored_name, false) {
            Ok(trashed) => trashed,
            Err(err) => {
                warn!(error = %err, "trash name resolution failed");
                return false;
            }
        };

        if let Err(err) = fs::rename(path, &trashed) {
            warn!(path = %path.display(), error = %err, "trash relocation failed");
            return false;
        }

        if let Err(err) = record.store(&sidecar_path(&trashed)) {
            warn!(path = %trashed.display(), error = %err, "trashed without sidecar");
        }

        true
    }

    /// Move a trashed item back to where it came from.
    ///
    /// The sidecar supplies the original location. If the original parent
    /// directory is gone, the item is restored into the fallback directory
    /// instead. An occupied target gets the usual `" (N)"` suffix. The
    /// sidecar is removed once the payload is back in place.
    pub async fn restore_from_trash(&self, trashed: &Path) -> bool {
        let bin = self.clone();
        let trashed = trashed.to_path_buf();
        tokio::task::spawn_blocking(move || bin.restore_blocking(&trashed))
            .await
            .unwrap_or(false)
    }

    fn restore_blocking(&self, trashed: &Path) -> bool {
        let sidecar = sidecar_path(trashed);
        let Some(record) = TrashRecord::load(&sidecar) else {
            warn!(path = %trashed.display(), "no sidecar, original location unknown");
            return false;
        };

        let parent = match record.original_path.parent() {
            Some(parent) if parent.is_dir() => parent.to_path_buf(),
            _ => self.fallback_dir.clone(),
        };
        if !parent.is_dir() && fs::create_dir_all(&parent).is_err() {
            return false;
        }

        let target = match resolve_collision(&parent, &record.original_name, trashed.is_dir()) {
            Ok(target) => target,
            Err(err) => {
                warn!(error = %err, "restore name resolution failed");
                return false;
            }
        };

        if let Err(err) = fs::rename(trashed, &target) {
            warn!(path = %trashed.display(), error = %err, "restore failed");
            return false;
        }

        if let Err(err) = fs::remove_file(&sidecar) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(path = %sidecar.display(), error = %err, "sidecar left behind");
            }
        }

        true
    }

    /// Permanently remove trashed payloads and their sidecars.
    ///
    /// Sidecar absence is not an error. Best-effort accounting, like any
    /// batch delete.
    pub async fn permanently_delete(&self, targets: Vec<PathBuf>) -> OperationOutcome {
        let requested = targets.len();
        match tokio::task::spawn_blocking(move || purge_blocking(targets)).await {
            Ok(outcome) => outcome,
            Err(err) => OperationOutcome::failed(
                OperationKind::Delete,
                requested,
                shelf_ops::ItemError::new(PathBuf::new(), format!("background task failed: {err}")),
            ),
        }
    }

    /// Unlink everything directly under the trash root.
    ///
    /// An absent or already-empty trash root counts as success.
    pub async fn empty_trash(&self) -> bool {
        let bin = self.clone();
        tokio::task::spawn_blocking(move || bin.empty_blocking())
            .await
            .unwrap_or(false)
    }

    fn empty_blocking(&self) -> bool {
        let read_dir = match fs::read_dir(&self.trash_root) {
            Ok(read_dir) => read_dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return true,
            Err(err) => {
                warn!(path = %self.trash_root.display(), error = %err, "cannot read trash root");
                return false;
            }
        };

        let mut all_removed = true;
        for child in read_dir.flatten() {
            if let Err(err) = remove_recursive(&child.path()) {
                warn!(path = %child.path().display(), error = %err, "purge failed");
                all_removed = false;
            }
        }
        all_removed
    }

    /// Snapshot the trash contents for display.
    ///
    /// Sidecars are excluded. Each payload's display name and date come
    /// from its sidecar when one exists; otherwise the name is derived by
    /// stripping the timestamp prefix and the date stays the stored mtime.
    /// Entry paths remain the stored trash paths, which is what restore and
    /// purge take.
    pub async fn list_trash(&self) -> Vec<Entry> {
        let bin = self.clone();
        tokio::task::spawn_blocking(move || bin.list_blocking())
            .await
            .unwrap_or_default()
    }

    fn list_blocking(&self) -> Vec<Entry> {
        let read_dir = match fs::read_dir(&self.trash_root) {
            Ok(read_dir) => read_dir,
            Err(_) => return Vec::new(),
        };

        let mut entries = Vec::new();
        for child in read_dir.flatten() {
            let path = child.path();
            if is_sidecar(&path) {
                continue;
            }
            let Some(mut entry) = Entry::from_path(&path) else {
                continue;
            };

            let display_name = match TrashRecord::load(&sidecar_path(&path)) {
                Some(record) => {
                    entry.modified = record.deleted_at.into();
                    record.original_name
                }
                None => derived_name(entry.name.as_str()).to_string(),
            };
            relabel(&mut entry, &display_name);
            entries.push(entry);
        }

        entries
    }
}

fn purge_blocking(targets: Vec<PathBuf>) -> OperationOutcome {
    let mut outcome = OperationOutcome::new(OperationKind::Delete, targets.len());

    for target in targets {
        match remove_recursive(&target) {
            Ok(()) => {
                let sidecar = sidecar_path(&target);
                if let Err(err) = fs::remove_file(&sidecar) {
                    if err.kind() != io::ErrorKind::NotFound {
                        warn!(path = %sidecar.display(), error = %err, "sidecar left behind");
                    }
                }
                outcome.record_success();
            }
            Err(err) => {
                warn!(path = %target.display(), error = %err, "purge failed");
                outcome.record_failure(target, err.to_string());
            }
        }
    }

    outcome
}

/// Re-label an entry with its pre-trash display name, reclassifying from
/// that name's extension.
fn relabel(entry: &mut Entry, display_name: &str) {
    entry.name = CompactString::new(display_name);
    entry.extension = Path::new(display_name)
        .extension()
        .map(|e| CompactString::new(e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    entry.kind = (!entry.is_directory).then(|| classify(&entry.extension));
}
