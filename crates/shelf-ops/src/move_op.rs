//! Move with rename fast path and copy-then-delete fallback.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use shelf_core::OpError;

use crate::copy::copy_item;
use crate::delete::remove_recursive;
use crate::naming::resolve_collision;
use crate::outcome::{ItemError, OperationKind, OperationOutcome};

/// Move each source into `dest_dir`.
///
/// An atomic rename is attempted first; when that fails (typically across
/// volumes) the item is copied and the source removed afterwards. An item
/// counts as moved once the destination exists: if the source cleanup then
/// fails, the leftover is logged but the item is not failed retroactively,
/// and nothing cleans it up automatically.
pub async fn move_items(sources: Vec<PathBuf>, dest_dir: PathBuf) -> OperationOutcome {
    let requested = sources.len();
    match tokio::task::spawn_blocking(move || move_blocking(sources, &dest_dir)).await {
        Ok(outcome) => outcome,
        Err(err) => OperationOutcome::failed(
            OperationKind::Move,
            requested,
            ItemError::new(PathBuf::new(), format!("background task failed: {err}")),
        ),
    }
}

fn move_blocking(sources: Vec<PathBuf>, dest_dir: &Path) -> OperationOutcome {
    let mut outcome = OperationOutcome::new(OperationKind::Move, sources.len());

    if let Err(err) = fs::create_dir_all(dest_dir) {
        return OperationOutcome::failed(
            OperationKind::Move,
            sources.len(),
            ItemError::new(dest_dir, format!("Failed to create destination: {err}")),
        );
    }

    for source in sources {
        match move_one(&source, dest_dir) {
            Ok(_) => outcome.record_success(),
            Err(err) => {
                warn!(path = %source.display(), error = %err, "move failed");
                outcome.record_failure(source, err.to_string());
            }
        }
    }

    outcome
}

fn move_one(source: &Path, dest_dir: &Path) -> Result<PathBuf, OpError> {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| OpError::invalid_name("Source has no basename"))?;

    let is_dir = source.is_dir();
    if is_dir && dest_dir.starts_with(source) {
        return Err(OpError::other("Cannot move a directory into itself"));
    }

    let dest = resolve_collision(dest_dir, &name, is_dir)?;

    if fs::rename(source, &dest).is_ok() {
        return Ok(dest);
    }

    // Cross-volume fallback: materialize the destination, then drop the
    // source. The move is complete once the destination exists.
    copy_item(source, &dest)?;
    if let Err(err) = remove_recursive(source) {
        warn!(path = %source.display(), error = %err, "moved but source left behind");
    }

    Ok(dest)
}
