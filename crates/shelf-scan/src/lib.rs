//! Read-only filesystem views for the shelf engine.
//!
//! This crate produces [`Entry`](shelf_core::Entry) snapshots from the
//! filesystem: flat directory listings, recursive name search, media
//! aggregation for the gallery, and the recent-files sweep. Nothing in here
//! mutates the filesystem, and nothing in here returns a hard error for an
//! unreadable path: a directory the process cannot see is presented as
//! empty, and a subtree the walker cannot enter is skipped.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_scan::{list_directory, search};
//! use std::path::Path;
//!
//! let entries = list_directory(Path::new("/storage/emulated/0"), false);
//! println!("{} visible entries", entries.len());
//!
//! let hits = search(Path::new("/storage/emulated/0"), "invoice", true);
//! println!("{} matches", hits.len());
//! ```

mod lister;
mod media;
mod search;
mod walk;

pub use lister::list_directory;
pub use media::{collect_media, recent_files, MediaGroup, MediaSelection};
pub use search::{search, search_with_options};

// Re-export core types for convenience
pub use shelf_core::{Entry, FileKind, ScanOptions, StorageLayout};
