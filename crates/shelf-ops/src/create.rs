//! File and directory creation.

use std::fs;
use std::path::Path;

use shelf_core::{Entry, OpError};

use crate::naming::validate_name;
use crate::run_blocking;

/// Create an empty directory named `name` inside `parent`.
///
/// Fails with `AlreadyExists` if any node occupies the target path, and
/// with `InvalidName` if `name` is not a valid single path component.
pub async fn create_folder(parent: &Path, name: &str) -> Result<Entry, OpError> {
    validate_name(name)?;
    let target = parent.join(name);

    run_blocking(move || {
        fs::create_dir(&target).map_err(|err| OpError::io(target.clone(), err))?;
        snapshot(target)
    })
    .await
}

/// Create an empty file named `name` inside `parent`.
pub async fn create_file(parent: &Path, name: &str) -> Result<Entry, OpError> {
    validate_name(name)?;
    let target = parent.join(name);

    run_blocking(move || {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(|err| OpError::io(target.clone(), err))?;
        snapshot(target)
    })
    .await
}

/// Snapshot a freshly created node; losing the race back to `NotFound`.
fn snapshot(target: std::path::PathBuf) -> Result<Entry, OpError> {
    Entry::from_path(&target).ok_or(OpError::NotFound { path: target })
}
