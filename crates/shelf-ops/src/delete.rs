//! Recursive delete with best-effort accounting.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use shelf_core::OpError;

use crate::outcome::{ItemError, OperationKind, OperationOutcome};

/// Delete each target, directories recursively.
///
/// Targets are independent: a target whose subtree cannot be fully removed
/// counts as failed, and the remaining targets are still processed. The
/// result is the aggregate count, never an error.
pub async fn delete(targets: Vec<PathBuf>) -> OperationOutcome {
    let requested = targets.len();
    match tokio::task::spawn_blocking(move || delete_blocking(targets)).await {
        Ok(outcome) => outcome,
        Err(err) => OperationOutcome::failed(
            OperationKind::Delete,
            requested,
            ItemError::new(PathBuf::new(), format!("background task failed: {err}")),
        ),
    }
}

fn delete_blocking(targets: Vec<PathBuf>) -> OperationOutcome {
    let mut outcome = OperationOutcome::new(OperationKind::Delete, targets.len());

    for target in targets {
        match remove_recursive(&target) {
            Ok(()) => outcome.record_success(),
            Err(err) => {
                warn!(path = %target.display(), error = %err, "delete failed");
                outcome.record_failure(target, err.to_string());
            }
        }
    }

    outcome
}

/// Remove one node: contents first, depth-first, then the node itself.
///
/// Symlinks are unlinked, never followed.
pub fn remove_recursive(path: &Path) -> Result<(), OpError> {
    let metadata = fs::symlink_metadata(path).map_err(|err| OpError::io(path, err))?;

    if metadata.is_dir() {
        let read_dir = fs::read_dir(path).map_err(|err| OpError::io(path, err))?;
        for child in read_dir {
            let child = child.map_err(|err| OpError::io(path, err))?;
            remove_recursive(&child.path())?;
        }
        fs::remove_dir(path).map_err(|err| OpError::io(path, err))
    } else {
        fs::remove_file(path).map_err(|err| OpError::io(path, err))
    }
}
