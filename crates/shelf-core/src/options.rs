//! Traversal configuration for recursive scans.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for recursive traversal (search, media aggregation).
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanOptions {
    /// Root path to traverse.
    pub root: PathBuf,

    /// Descend into subdirectories.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Maximum descent depth (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Descend into hidden directories (starting with `.`).
    #[builder(default = "false")]
    #[serde(default)]
    pub descend_hidden: bool,

    /// Path segments marking vendor-private subtrees that are never entered
    /// (they raise permission errors on stock devices).
    #[builder(default = "default_private_segments()")]
    #[serde(default = "default_private_segments")]
    pub private_segments: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_private_segments() -> Vec<String> {
    vec!["Android/data".to_string(), "Android/obb".to_string()]
}

impl ScanOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanOptions {
    /// Create a scan options builder.
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }

    /// Create simple options for traversing a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
            max_depth: None,
            descend_hidden: false,
            private_segments: default_private_segments(),
        }
    }

    /// Check whether a path crosses into a private subtree.
    ///
    /// A segment like `Android/data` matches any path whose components
    /// contain that sequence contiguously.
    pub fn is_private(&self, path: &Path) -> bool {
        let components: Vec<&str> = path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();

        self.private_segments.iter().any(|segment| {
            let parts: Vec<&str> = segment.split('/').filter(|p| !p.is_empty()).collect();
            !parts.is_empty()
                && components
                    .windows(parts.len())
                    .any(|window| window == parts.as_slice())
        })
    }

    /// Check whether descent into a directory should be pruned.
    pub fn should_prune(&self, name: &str, path: &Path) -> bool {
        (!self.descend_hidden && name.starts_with('.')) || self.is_private(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = ScanOptions::builder().root("/sdcard").build().unwrap();
        assert!(options.recursive);
        assert!(!options.descend_hidden);
        assert_eq!(options.max_depth, None);
        assert_eq!(options.private_segments.len(), 2);
    }

    #[test]
    fn test_builder_requires_root() {
        assert!(ScanOptions::builder().build().is_err());
        assert!(ScanOptions::builder().root("").build().is_err());
    }

    #[test]
    fn test_is_private_matches_contiguous_segments() {
        let options = ScanOptions::new("/sdcard");
        assert!(options.is_private(Path::new("/sdcard/Android/data/com.example")));
        assert!(options.is_private(Path::new("/sdcard/Android/obb")));
        assert!(!options.is_private(Path::new("/sdcard/Android/media")));
        assert!(!options.is_private(Path::new("/sdcard/data/Android")));
    }

    #[test]
    fn test_should_prune_hidden_dirs() {
        let options = ScanOptions::new("/sdcard");
        assert!(options.should_prune(".thumbnails", Path::new("/sdcard/.thumbnails")));
        assert!(!options.should_prune("DCIM", Path::new("/sdcard/DCIM")));

        let lenient = ScanOptions::builder()
            .root("/sdcard")
            .descend_hidden(true)
            .build()
            .unwrap();
        assert!(!lenient.should_prune(".thumbnails", Path::new("/sdcard/.thumbnails")));
    }
}
