//! Pending copy/cut clipboard state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// What a paste should do with the held entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    #[default]
    Copy,
    Move,
}

/// The session-held set of paths pending a paste.
///
/// Owned by the UI-layer session object and passed by reference into engine
/// calls; the engine itself never stores one. A new copy/cut replaces the
/// previous contents wholesale, and a paste consumes and clears the state.
#[derive(Debug, Clone, Default)]
pub struct ClipboardState {
    entries: Vec<Entry>,
    mode: ClipboardMode,
    source_dir: PathBuf,
}

impl ClipboardState {
    /// Replace the clipboard with entries staged for copying.
    pub fn set_copy(&mut self, entries: Vec<Entry>, source_dir: impl Into<PathBuf>) {
        *self = Self {
            entries,
            mode: ClipboardMode::Copy,
            source_dir: source_dir.into(),
        };
    }

    /// Replace the clipboard with entries staged for moving.
    pub fn set_cut(&mut self, entries: Vec<Entry>, source_dir: impl Into<PathBuf>) {
        *self = Self {
            entries,
            mode: ClipboardMode::Move,
            source_dir: source_dir.into(),
        };
    }

    /// Drop any pending entries.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Take the pending state, leaving the clipboard empty.
    pub fn take(&mut self) -> ClipboardState {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Paths of the held entries.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }
}
