//! Entry ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Key to order a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Date,
    Size,
    Type,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Complete sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

/// Order entries by the given spec, directories first.
///
/// Directory precedence is fixed: it is never reversed by `SortOrder::Desc`,
/// which only flips the within-partition comparator. The sort is stable, so
/// entries comparing equal keep their input order.
pub fn sort_entries(mut entries: Vec<Entry>, spec: SortSpec) -> Vec<Entry> {
    entries.sort_by(|a, b| match (a.is_directory, b.is_directory) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => {
            let ordering = compare_by_key(a, b, spec.key);
            match spec.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        }
    });
    entries
}

fn compare_by_key(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Date => a.modified.cmp(&b.modified),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Type => a.extension.to_lowercase().cmp(&b.extension.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};

    fn file(name: &str, size: u64, modified_secs: u64) -> Entry {
        let extension = name
            .rfind('.')
            .filter(|&i| i > 0)
            .map(|i| name[i + 1..].to_lowercase())
            .unwrap_or_default();
        Entry {
            name: name.into(),
            path: PathBuf::from("/tmp").join(name),
            is_directory: false,
            size,
            modified: UNIX_EPOCH + Duration::from_secs(modified_secs),
            kind: Some(crate::filetype::classify(&extension)),
            extension: extension.into(),
        }
    }

    fn dir(name: &str) -> Entry {
        Entry {
            name: name.into(),
            path: PathBuf::from("/tmp").join(name),
            is_directory: true,
            size: 0,
            modified: UNIX_EPOCH,
            extension: "".into(),
            kind: None,
        }
    }

    #[test]
    fn test_directories_always_first() {
        let entries = vec![file("b.txt", 1, 1), dir("zzz"), file("a.txt", 2, 2), dir("aaa")];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            for key in [SortKey::Name, SortKey::Date, SortKey::Size, SortKey::Type] {
                let sorted = sort_entries(entries.clone(), SortSpec::new(key, order));
                assert!(sorted[0].is_directory && sorted[1].is_directory);
                assert!(!sorted[2].is_directory && !sorted[3].is_directory);
            }
        }
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let entries = vec![file("Banana.txt", 0, 0), file("apple.txt", 0, 0), file("Cherry.txt", 0, 0)];
        let sorted = sort_entries(entries, SortSpec::new(SortKey::Name, SortOrder::Asc));
        let names: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["apple.txt", "Banana.txt", "Cherry.txt"]);
    }

    #[test]
    fn test_desc_reverses_within_partition() {
        let entries = vec![dir("first"), dir("second"), file("a.txt", 1, 0), file("b.txt", 2, 0)];
        let asc = sort_entries(entries.clone(), SortSpec::new(SortKey::Size, SortOrder::Asc));
        let desc = sort_entries(entries, SortSpec::new(SortKey::Size, SortOrder::Desc));

        assert_eq!(asc[2].name.as_str(), "a.txt");
        assert_eq!(desc[2].name.as_str(), "b.txt");
        // Directories stay in front either way.
        assert!(desc[0].is_directory && desc[1].is_directory);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let entries = vec![file("one.txt", 5, 0), file("two.txt", 5, 0), file("three.txt", 5, 0)];
        let spec = SortSpec::new(SortKey::Size, SortOrder::Asc);
        let once = sort_entries(entries.clone(), spec);
        let twice = sort_entries(once.clone(), spec);
        let names: Vec<_> = once.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["one.txt", "two.txt", "three.txt"]);
        assert_eq!(
            twice.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            names
        );
    }

    #[test]
    fn test_type_sort_uses_extension() {
        let entries = vec![file("movie.mp4", 0, 0), file("notes.txt", 0, 0), file("track.aac", 0, 0)];
        let sorted = sort_entries(entries, SortSpec::new(SortKey::Type, SortOrder::Asc));
        let exts: Vec<_> = sorted.iter().map(|e| e.extension.as_str()).collect();
        assert_eq!(exts, ["aac", "mp4", "txt"]);
    }

    #[test]
    fn test_date_sort() {
        let entries = vec![file("new.txt", 0, 300), file("old.txt", 0, 100), file("mid.txt", 0, 200)];
        let sorted = sort_entries(entries, SortSpec::new(SortKey::Date, SortOrder::Desc));
        let names: Vec<_> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["new.txt", "mid.txt", "old.txt"]);
    }
}
