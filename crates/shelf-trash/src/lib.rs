//! Soft-delete lifecycle for the shelf engine.
//!
//! Deleting from the UI does not unlink: the payload is relocated into a
//! trash root under a timestamp-prefixed name, and a JSON sidecar records
//! where it came from so it can be restored later. Items stay in the trash
//! until they are restored, purged individually, or the trash is emptied.
//!
//! A payload without a sidecar is degraded, not broken: its display name
//! is derived from the stored name and it can still be purged, it just
//! cannot be restored to its original location.

mod record;
mod trash;

pub use record::{derived_name, is_sidecar, sidecar_path, TrashRecord};
pub use trash::TrashBin;
