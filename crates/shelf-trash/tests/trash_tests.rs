use std::fs;

use tempfile::TempDir;

use shelf_core::{sort_entries, SortKey, SortOrder, SortSpec, StorageLayout};
use shelf_trash::{sidecar_path, TrashBin, TrashRecord};

#[tokio::test]
async fn test_trash_is_hidden_from_normal_listings() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());
    let bin = TrashBin::for_layout(&layout);

    fs::write(temp.path().join("junk.txt"), b"x").unwrap();
    assert!(bin.move_to_trash(&temp.path().join("junk.txt")).await);

    // `.trash` starts with a dot, so a default listing never shows it.
    let listing = shelf_scan::list_directory(temp.path(), false);
    assert!(listing.is_empty());

    let listing = shelf_scan::list_directory(temp.path(), true);
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name.as_str(), ".trash");
}

#[tokio::test]
async fn test_trash_listing_sorts_like_any_other() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());
    fs::create_dir_all(layout.downloads()).unwrap();
    let bin = TrashBin::for_layout(&layout);

    fs::write(temp.path().join("beta.txt"), b"b").unwrap();
    fs::write(temp.path().join("Alpha.txt"), b"a").unwrap();
    fs::create_dir(temp.path().join("folder")).unwrap();
    assert!(bin.move_to_trash(&temp.path().join("beta.txt")).await);
    assert!(bin.move_to_trash(&temp.path().join("Alpha.txt")).await);
    assert!(bin.move_to_trash(&temp.path().join("folder")).await);

    let sorted = sort_entries(
        bin.list_trash().await,
        SortSpec::new(SortKey::Name, SortOrder::Asc),
    );
    let names: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["folder", "Alpha.txt", "beta.txt"]);
    assert!(sorted[0].is_directory);
}

#[tokio::test]
async fn test_sidecar_on_disk_matches_schema() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());
    fs::create_dir_all(layout.downloads()).unwrap();
    let bin = TrashBin::for_layout(&layout);

    let original = temp.path().join("report.pdf");
    fs::write(&original, b"pdf").unwrap();
    assert!(bin.move_to_trash(&original).await);

    let trashed = bin.list_trash().await;
    let record = TrashRecord::load(&sidecar_path(&trashed[0].path)).unwrap();
    assert_eq!(record.original_path, original);
    assert_eq!(record.original_name, "report.pdf");

    let raw = fs::read_to_string(sidecar_path(&trashed[0].path)).unwrap();
    assert!(raw.contains("\"originalPath\""));
    assert!(raw.contains("\"deletedAt\""));
}

#[tokio::test]
async fn test_restore_directory_payload() {
    let temp = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp.path());
    fs::create_dir_all(layout.downloads()).unwrap();
    let bin = TrashBin::for_layout(&layout);

    let album = temp.path().join("album");
    fs::create_dir_all(album.join("inner")).unwrap();
    fs::write(album.join("inner/pic.jpg"), b"jpeg").unwrap();

    assert!(bin.move_to_trash(&album).await);
    assert!(!album.exists());

    let trashed = bin.list_trash().await;
    assert_eq!(trashed.len(), 1);
    assert!(trashed[0].is_directory);

    assert!(bin.restore_from_trash(&trashed[0].path).await);
    assert_eq!(fs::read(album.join("inner/pic.jpg")).unwrap(), b"jpeg");
}
