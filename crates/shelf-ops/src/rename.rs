//! Same-directory rename.

use std::fs;
use std::path::Path;

use shelf_core::{Entry, OpError};

use crate::naming::validate_name;
use crate::run_blocking;

/// Rename a file or directory in place.
///
/// The parent directory is held fixed: `new_name` must be a single path
/// component and the node stays where it is. Fails with `AlreadyExists` if
/// another node occupies the new path; renaming to the current name is a
/// no-op that succeeds.
pub async fn rename(path: &Path, new_name: &str) -> Result<Entry, OpError> {
    validate_name(new_name)?;
    let source = path.to_path_buf();
    let new_name = new_name.to_string();

    run_blocking(move || {
        if !source.exists() {
            return Err(OpError::NotFound { path: source });
        }

        let parent = source.parent().unwrap_or(Path::new("")).to_path_buf();
        let target = parent.join(&new_name);

        if target.exists() && target != source {
            return Err(OpError::AlreadyExists { path: target });
        }

        fs::rename(&source, &target).map_err(|err| OpError::io(source.clone(), err))?;
        Entry::from_path(&target).ok_or(OpError::NotFound { path: target })
    })
    .await
}
