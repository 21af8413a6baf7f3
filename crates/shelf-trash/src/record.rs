//! Sidecar metadata for trashed payloads.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suffix appended to a payload path to form its sidecar path.
const SIDECAR_SUFFIX: &str = ".meta";

/// Where a trashed item came from and when it was deleted.
///
/// Serialized as pretty JSON into a sidecar co-located with the payload.
/// Field names are camelCase on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashRecord {
    /// Absolute path the item lived at before deletion.
    pub original_path: PathBuf,

    /// Deletion time, ISO-8601.
    pub deleted_at: DateTime<Utc>,

    /// Basename the item had before deletion.
    pub original_name: String,
}

impl TrashRecord {
    /// Build a record for an item about to be trashed.
    ///
    /// Returns `None` when the path has no basename to record.
    pub fn for_item(original: &Path) -> Option<Self> {
        let original_name = original.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            original_path: original.to_path_buf(),
            deleted_at: Utc::now(),
            original_name,
        })
    }

    /// Read and parse a sidecar; `None` on any failure.
    pub fn load(sidecar: &Path) -> Option<Self> {
        let raw = fs::read_to_string(sidecar).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Write the record as pretty JSON at `sidecar`.
    pub fn store(&self, sidecar: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(sidecar, json)
    }
}

/// Sidecar path for a trashed payload: `<payload>.meta`.
pub fn sidecar_path(payload: &Path) -> PathBuf {
    let mut os: OsString = payload.as_os_str().to_owned();
    os.push(SIDECAR_SUFFIX);
    PathBuf::from(os)
}

/// Whether a path under the trash root is a sidecar rather than a payload.
pub fn is_sidecar(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(SIDECAR_SUFFIX))
        .unwrap_or(false)
}

/// Best-effort original name for a payload with no sidecar.
///
/// Stored names are `<epoch-ms>_<name>`; the split is at the first
/// underscore, so underscores in the original name survive. A stored name
/// with no underscore is returned whole.
pub fn derived_name(stored_name: &str) -> &str {
    match stored_name.split_once('_') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => stored_name,
    }
}
