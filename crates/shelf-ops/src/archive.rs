//! Zip compression and extraction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use shelf_core::OpError;

use crate::naming::resolve_collision;
use crate::run_blocking;

/// Compress a file or directory into a `.zip` inside `output_dir`.
///
/// The archive lands at a collision-resolved path named after the source
/// (extension stripped for files). A directory is archived recursively with
/// its children at the archive root and empty subdirectories preserved. A
/// single file is staged through an ephemeral temporary directory first so
/// the archive holds just that file, never its siblings; the staging
/// directory is removed afterwards.
pub async fn compress(path: &Path, output_dir: &Path) -> Result<PathBuf, OpError> {
    let source = path.to_path_buf();
    let output_dir = output_dir.to_path_buf();
    run_blocking(move || compress_blocking(&source, &output_dir)).await
}

/// Extract a zip archive into a fresh directory inside `output_dir`.
///
/// The output directory is named after the archive stem, collision-resolved
/// so an earlier extraction is never overwritten.
pub async fn decompress(archive: &Path, output_dir: &Path) -> Result<PathBuf, OpError> {
    let archive = archive.to_path_buf();
    let output_dir = output_dir.to_path_buf();
    run_blocking(move || decompress_blocking(&archive, &output_dir)).await
}

fn compress_blocking(source: &Path, output_dir: &Path) -> Result<PathBuf, OpError> {
    if !source.exists() {
        return Err(OpError::NotFound {
            path: source.to_path_buf(),
        });
    }
    fs::create_dir_all(output_dir).map_err(|err| OpError::io(output_dir, err))?;

    let base = if source.is_dir() {
        source.file_name().map(|n| n.to_string_lossy().into_owned())
    } else {
        source.file_stem().map(|s| s.to_string_lossy().into_owned())
    }
    .ok_or_else(|| OpError::invalid_name("Source has no basename"))?;

    let zip_path = resolve_collision(output_dir, &format!("{base}.zip"), false)?;

    if source.is_dir() {
        write_archive(source, &zip_path)?;
    } else {
        let staging = tempfile::Builder::new()
            .prefix(".shelf-staging")
            .tempdir_in(output_dir)
            .map_err(|err| OpError::io(output_dir, err))?;
        let staged = staging
            .path()
            .join(source.file_name().unwrap_or_default());
        fs::copy(source, &staged).map_err(|err| OpError::io(source, err))?;
        write_archive(staging.path(), &zip_path)?;
        // staging and its contents are removed when the TempDir drops
    }

    Ok(zip_path)
}

/// Archive the children of `root` into a zip at `zip_path`.
fn write_archive(root: &Path, zip_path: &Path) -> Result<(), OpError> {
    let file = fs::File::create(zip_path).map_err(|err| OpError::io(zip_path, err))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_directory(&mut writer, root, Path::new(""), options)?;

    writer.finish().map_err(|err| zip_err(zip_path, err))?;
    Ok(())
}

fn add_directory(
    writer: &mut ZipWriter<fs::File>,
    dir: &Path,
    prefix: &Path,
    options: SimpleFileOptions,
) -> Result<(), OpError> {
    let read_dir = fs::read_dir(dir).map_err(|err| OpError::io(dir, err))?;

    for child in read_dir {
        let child = child.map_err(|err| OpError::io(dir, err))?;
        let path = child.path();
        let relative = prefix.join(child.file_name());
        // Zip entry names always use forward slashes.
        let entry_name = relative.to_string_lossy().replace('\\', "/");

        if path.is_dir() {
            writer
                .add_directory(entry_name.as_str(), options)
                .map_err(|err| zip_err(&path, err))?;
            add_directory(writer, &path, &relative, options)?;
        } else {
            writer
                .start_file(entry_name.as_str(), options)
                .map_err(|err| zip_err(&path, err))?;
            let mut source = fs::File::open(&path).map_err(|err| OpError::io(&path, err))?;
            io::copy(&mut source, writer).map_err(|err| OpError::io(&path, err))?;
        }
    }

    Ok(())
}

fn decompress_blocking(archive: &Path, output_dir: &Path) -> Result<PathBuf, OpError> {
    let file = fs::File::open(archive).map_err(|err| OpError::io(archive, err))?;
    let mut zip = ZipArchive::new(file).map_err(|err| zip_err(archive, err))?;

    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| OpError::invalid_name("Archive has no basename"))?;

    fs::create_dir_all(output_dir).map_err(|err| OpError::io(output_dir, err))?;
    let out_dir = resolve_collision(output_dir, &stem, true)?;
    fs::create_dir(&out_dir).map_err(|err| OpError::io(&out_dir, err))?;

    zip.extract(&out_dir).map_err(|err| zip_err(archive, err))?;
    Ok(out_dir)
}

fn zip_err(path: &Path, err: ZipError) -> OpError {
    match err {
        ZipError::Io(source) => OpError::io(path, source),
        other => OpError::other(format!("{}: {}", path.display(), other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_single_file_archives_without_siblings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("keep.txt"), b"keep me").unwrap();
        fs::write(temp.path().join("sibling.txt"), b"leave me").unwrap();
        let out = temp.path().join("out");

        let zip_path = compress(&temp.path().join("keep.txt"), &out).await.unwrap();
        assert_eq!(zip_path, out.join("keep.zip"));
        // Staging directory is gone once the archive is written.
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);

        let extracted = decompress(&zip_path, &out).await.unwrap();
        assert_eq!(extracted, out.join("keep"));
        assert_eq!(fs::read(extracted.join("keep.txt")).unwrap(), b"keep me");
        assert!(!extracted.join("sibling.txt").exists());
    }

    #[tokio::test]
    async fn test_directory_round_trip_preserves_structure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("project");
        fs::create_dir_all(src.join("src")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("readme.md"), b"# hi").unwrap();
        fs::write(src.join("src/lib.rs"), b"pub fn x() {}").unwrap();
        let out = temp.path().join("out");

        let zip_path = compress(&src, &out).await.unwrap();
        assert_eq!(zip_path, out.join("project.zip"));

        let extracted = decompress(&zip_path, &out).await.unwrap();
        assert_eq!(fs::read(extracted.join("readme.md")).unwrap(), b"# hi");
        assert!(extracted.join("src/lib.rs").exists());
        assert!(extracted.join("empty").is_dir());
    }

    #[tokio::test]
    async fn test_archive_name_is_collision_resolved() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"x").unwrap();
        let out = temp.path().join("out");

        let first = compress(&temp.path().join("a.txt"), &out).await.unwrap();
        let second = compress(&temp.path().join("a.txt"), &out).await.unwrap();
        assert_eq!(first, out.join("a.zip"));
        assert_eq!(second, out.join("a (1).zip"));
    }

    #[tokio::test]
    async fn test_extraction_dir_is_collision_resolved() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"x").unwrap();
        let out = temp.path().join("out");
        let zip_path = compress(&temp.path().join("a.txt"), &out).await.unwrap();

        let first = decompress(&zip_path, &out).await.unwrap();
        let second = decompress(&zip_path, &out).await.unwrap();
        assert_eq!(first, out.join("a"));
        assert_eq!(second, out.join("a (1)"));
    }

    #[tokio::test]
    async fn test_missing_source_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = compress(&temp.path().join("gone"), temp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, OpError::NotFound { .. }));
    }
}
