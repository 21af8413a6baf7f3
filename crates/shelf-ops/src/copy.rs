//! Recursive copy with collision-resolved destinations.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use shelf_core::OpError;

use crate::naming::resolve_collision;
use crate::outcome::{ItemError, OperationKind, OperationOutcome};

/// Copy each source into `dest_dir`.
///
/// Every source gets a collision-resolved destination name, so an existing
/// `a.txt` is never overwritten; the copy lands as `a (1).txt`. Directories
/// are copied recursively. Per-item failures are counted and the remaining
/// sources are still processed.
pub async fn copy(sources: Vec<PathBuf>, dest_dir: PathBuf) -> OperationOutcome {
    let requested = sources.len();
    match tokio::task::spawn_blocking(move || copy_blocking(sources, &dest_dir)).await {
        Ok(outcome) => outcome,
        Err(err) => OperationOutcome::failed(
            OperationKind::Copy,
            requested,
            ItemError::new(PathBuf::new(), format!("background task failed: {err}")),
        ),
    }
}

fn copy_blocking(sources: Vec<PathBuf>, dest_dir: &Path) -> OperationOutcome {
    let mut outcome = OperationOutcome::new(OperationKind::Copy, sources.len());

    if let Err(err) = fs::create_dir_all(dest_dir) {
        return OperationOutcome::failed(
            OperationKind::Copy,
            sources.len(),
            ItemError::new(dest_dir, format!("Failed to create destination: {err}")),
        );
    }

    for source in sources {
        match copy_one(&source, dest_dir) {
            Ok(_) => outcome.record_success(),
            Err(err) => {
                warn!(path = %source.display(), error = %err, "copy failed");
                outcome.record_failure(source, err.to_string());
            }
        }
    }

    outcome
}

/// Copy one source into `dest_dir` under a collision-resolved name.
pub(crate) fn copy_one(source: &Path, dest_dir: &Path) -> Result<PathBuf, OpError> {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| OpError::invalid_name("Source has no basename"))?;

    let is_dir = source.is_dir();
    if is_dir && dest_dir.starts_with(source) {
        return Err(OpError::other("Cannot copy a directory into itself"));
    }

    let dest = resolve_collision(dest_dir, &name, is_dir)?;
    copy_item(source, &dest)?;
    Ok(dest)
}

/// Copy a single item (file or directory) to an exact destination path.
pub(crate) fn copy_item(source: &Path, dest: &Path) -> Result<(), OpError> {
    if source.is_dir() {
        copy_dir_recursive(source, dest)
    } else {
        fs::copy(source, dest)
            .map(|_| ())
            .map_err(|err| OpError::io(source, err))
    }
}

fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<(), OpError> {
    fs::create_dir_all(dest).map_err(|err| OpError::io(dest, err))?;

    let read_dir = fs::read_dir(source).map_err(|err| OpError::io(source, err))?;
    for child in read_dir {
        let child = child.map_err(|err| OpError::io(source, err))?;
        let child_path = child.path();
        let child_dest = dest.join(child.file_name());

        if child_path.is_dir() {
            copy_dir_recursive(&child_path, &child_dest)?;
        } else {
            fs::copy(&child_path, &child_dest).map_err(|err| OpError::io(&child_path, err))?;
        }
    }

    Ok(())
}
