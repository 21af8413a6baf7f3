//! Core types for the shelf file manager engine.
//!
//! This crate provides the fundamental data structures shared by the rest of
//! the workspace: filesystem entry snapshots, the extension classification
//! table, sort configuration, clipboard state, well-known storage paths, and
//! the operation error taxonomy.

mod clipboard;
mod entry;
mod error;
mod filetype;
mod layout;
mod options;
mod sort;

pub use clipboard::{ClipboardMode, ClipboardState};
pub use entry::Entry;
pub use error::OpError;
pub use filetype::{classify, mime_for_extension, FileKind};
pub use layout::{Crumb, QuickAccess, StorageLayout};
pub use options::{ScanOptions, ScanOptionsBuilder};
pub use sort::{sort_entries, SortKey, SortOrder, SortSpec};
