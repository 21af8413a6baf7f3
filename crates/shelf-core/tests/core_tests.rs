use std::fs;
use std::path::Path;

use tempfile::TempDir;

use shelf_core::{
    classify, sort_entries, ClipboardMode, ClipboardState, Entry, FileKind, SortKey, SortOrder,
    SortSpec, StorageLayout,
};

#[test]
fn test_entry_classification_is_taken_at_snapshot_time() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("track.MP3");
    fs::write(&path, b"not audio").unwrap();

    let entry = Entry::from_path(&path).unwrap();
    assert_eq!(entry.extension.as_str(), "mp3");
    assert_eq!(entry.kind, Some(FileKind::Audio));
    assert_eq!(entry.mime_type(), "audio/mpeg");

    // Classification is a pure function of the extension.
    assert_eq!(classify("mp3"), FileKind::Audio);
}

#[test]
fn test_sort_invariant_holds_for_every_spec() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("zebra")).unwrap();
    fs::create_dir(temp.path().join("apple")).unwrap();
    fs::write(temp.path().join("1.txt"), b"1").unwrap();
    fs::write(temp.path().join("2.jpg"), b"22").unwrap();

    let entries: Vec<Entry> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| Entry::from_path(&e.unwrap().path()))
        .collect();

    for key in [SortKey::Name, SortKey::Date, SortKey::Size, SortKey::Type] {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sorted = sort_entries(entries.clone(), SortSpec::new(key, order));
            let first_file = sorted.iter().position(|e| !e.is_directory).unwrap();
            assert!(
                sorted[first_file..].iter().all(|e| !e.is_directory),
                "directories must precede files for {key:?}/{order:?}"
            );
        }
    }
}

#[test]
fn test_layout_breadcrumbs_follow_quick_access() {
    let layout = StorageLayout::new("/storage/emulated/0");
    let downloads = layout.downloads();

    let crumbs = layout.breadcrumbs(&downloads.join("apks"));
    let names: Vec<_> = crumbs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["0", "Download", "apks"]);

    // Every quick-access path is one concatenation below the root (except
    // the root itself).
    for quick in layout.quick_access() {
        assert!(quick.path.starts_with(layout.root()));
    }
}

#[test]
fn test_clipboard_session_flow() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("held.txt");
    fs::write(&file, b"x").unwrap();
    let entry = Entry::from_path(&file).unwrap();

    let mut clipboard = ClipboardState::default();
    clipboard.set_copy(vec![entry.clone()], temp.path());
    assert_eq!(clipboard.mode(), ClipboardMode::Copy);

    // Cut replaces copy wholesale.
    clipboard.set_cut(vec![entry], temp.path());
    assert_eq!(clipboard.mode(), ClipboardMode::Move);
    assert_eq!(clipboard.source_dir(), temp.path());

    let taken = clipboard.take();
    assert!(clipboard.is_empty());
    assert_eq!(taken.paths(), vec![file]);
    assert!(Path::new(&taken.paths()[0]).exists());
}
