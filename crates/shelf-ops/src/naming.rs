//! Name validation and collision-resolved destination naming.

use std::path::{Path, PathBuf};

use shelf_core::OpError;

/// Upper bound on `" (N)"` suffix attempts before giving up.
pub const MAX_RENAME_ATTEMPTS: u32 = 1000;

/// Validate a string as a single path component.
///
/// The UI validates names before calling in, but the engine re-checks so a
/// malformed name can never escape a parent directory.
pub fn validate_name(name: &str) -> Result<(), OpError> {
    if name.is_empty() {
        return Err(OpError::invalid_name("Name cannot be empty"));
    }
    if name.len() > 255 {
        return Err(OpError::invalid_name("Name is too long (max 255 characters)"));
    }
    if name.contains('/') {
        return Err(OpError::invalid_name("Name cannot contain '/'"));
    }
    if name.contains('\0') {
        return Err(OpError::invalid_name("Name cannot contain NUL"));
    }
    if name == "." || name == ".." {
        return Err(OpError::invalid_name("'.' and '..' are reserved names"));
    }
    Ok(())
}

/// Find a free destination path for `name` inside `dir`.
///
/// If `dir/name` is free it is returned as-is. Otherwise a `" (N)"` suffix
/// is tried for N = 1, 2, 3, ... (inserted before the extension for files,
/// appended to the whole name for directories) up to
/// [`MAX_RENAME_ATTEMPTS`]. Exhausting the bound is an error rather than an
/// overwrite.
pub fn resolve_collision(dir: &Path, name: &str, is_directory: bool) -> Result<PathBuf, OpError> {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let (stem, suffix) = split_name(name, is_directory);

    for n in 1..=MAX_RENAME_ATTEMPTS {
        let numbered = format!("{stem} ({n}){suffix}");
        let path = dir.join(&numbered);
        if !path.exists() {
            return Ok(path);
        }
    }

    Err(OpError::NameResolutionExhausted {
        name: name.to_string(),
    })
}

/// Split a name into the part the counter goes after and the part it goes
/// before. Directory names never have an extension peeled off.
fn split_name(name: &str, is_directory: bool) -> (String, String) {
    if is_directory {
        return (name.to_string(), String::new());
    }

    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => (
            stem.to_string_lossy().into_owned(),
            format!(".{}", ext.to_string_lossy()),
        ),
        _ => (name.to_string(), String::new()),
    }
}
