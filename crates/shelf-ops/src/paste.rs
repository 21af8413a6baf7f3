//! Clipboard consumption.

use std::path::Path;

use shelf_core::{ClipboardMode, ClipboardState};

use crate::outcome::{OperationKind, OperationOutcome};
use crate::{copy, move_items};

/// Paste the clipboard's pending entries into `dest_dir`.
///
/// The clipboard is taken and cleared up front; a paste consumes the
/// pending set whether or not every item lands. Copy mode duplicates the
/// entries; move mode relocates them.
pub async fn paste(clipboard: &mut ClipboardState, dest_dir: &Path) -> OperationOutcome {
    let pending = clipboard.take();
    if pending.is_empty() {
        return OperationOutcome::new(OperationKind::Copy, 0);
    }

    let paths = pending.paths();
    match pending.mode() {
        ClipboardMode::Copy => copy(paths, dest_dir.to_path_buf()).await,
        ClipboardMode::Move => move_items(paths, dest_dir.to_path_buf()).await,
    }
}
