use std::fs;

use tempfile::TempDir;

use shelf_core::{ClipboardState, Entry, OpError};
use shelf_ops::{
    compress, copy, create_folder, decompress, delete, move_items, paste, rename, OutcomeStatus,
};

#[tokio::test]
async fn test_create_rename_create_scenario() {
    let temp = TempDir::new().unwrap();

    // First creation succeeds.
    let entry = create_folder(temp.path(), "New Folder").await.unwrap();
    assert!(entry.is_directory);

    // Same name again collides.
    let err = create_folder(temp.path(), "New Folder").await.unwrap_err();
    assert!(matches!(err, OpError::AlreadyExists { .. }));

    // After renaming the existing one away, creation succeeds again.
    rename(&temp.path().join("New Folder"), "Old Folder")
        .await
        .unwrap();
    let entry = create_folder(temp.path(), "New Folder").await.unwrap();
    assert_eq!(entry.name.as_str(), "New Folder");
    assert!(entry.is_directory);
    assert_eq!(entry.size, 0);
}

#[tokio::test]
async fn test_batch_accounting_across_operations() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("a")).unwrap();
    fs::write(root.join("a/file.txt"), b"a").unwrap();
    fs::write(root.join("c.txt"), b"c").unwrap();

    let outcome = delete(vec![
        root.join("a"),
        root.join("b"), // gone before the batch ran
        root.join("c.txt"),
    ])
    .await;

    assert_eq!(outcome.status(), OutcomeStatus::PartialFailure);
    assert_eq!((outcome.succeeded, outcome.requested), (2, 3));
    assert!(!root.join("a").exists());
    assert!(!root.join("c.txt").exists());
}

#[tokio::test]
async fn test_copy_then_move_pipeline() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("photo.jpg"), b"jpeg").unwrap();

    let staged = root.join("staged");
    let outcome = copy(vec![root.join("photo.jpg")], staged.clone()).await;
    assert!(outcome.is_success());

    let outcome = move_items(vec![staged.join("photo.jpg")], root.join("final")).await;
    assert!(outcome.is_success());
    assert!(root.join("final/photo.jpg").exists());
    assert!(!staged.join("photo.jpg").exists());
    // The original copy source is untouched.
    assert!(root.join("photo.jpg").exists());
}

#[tokio::test]
async fn test_cut_paste_via_clipboard() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("one.txt"), b"1").unwrap();
    fs::write(root.join("two.txt"), b"2").unwrap();
    let dst = root.join("moved");

    let mut clipboard = ClipboardState::default();
    let entries = vec![
        Entry::from_path(&root.join("one.txt")).unwrap(),
        Entry::from_path(&root.join("two.txt")).unwrap(),
    ];
    clipboard.set_cut(entries, root);

    let outcome = paste(&mut clipboard, &dst).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.succeeded, 2);
    assert!(clipboard.is_empty());
    assert!(dst.join("one.txt").exists());
    assert!(dst.join("two.txt").exists());

    // A second paste has nothing to do.
    let outcome = paste(&mut clipboard, &dst).await;
    assert_eq!(outcome.requested, 0);
}

#[tokio::test]
async fn test_zip_round_trip_keeps_content() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let src = root.join("notes");
    fs::create_dir_all(src.join("2024")).unwrap();
    fs::write(src.join("2024/january.md"), b"# jan").unwrap();
    fs::write(src.join("index.md"), b"# idx").unwrap();

    let zip_path = compress(&src, root).await.unwrap();
    let extracted = decompress(&zip_path, &root.join("restored")).await.unwrap();

    assert_eq!(fs::read(extracted.join("index.md")).unwrap(), b"# idx");
    assert_eq!(
        fs::read(extracted.join("2024/january.md")).unwrap(),
        b"# jan"
    );
}
