//! Mutating file operations for the shelf engine.
//!
//! This crate provides async file operations (create, rename, delete, copy,
//! move, compress, decompress) with collision-resolved naming and
//! partial-failure accounting. Single-item operations return a typed
//! [`OpError`]; batch operations fold per-item failures into an
//! [`OperationOutcome`] and never abort the remainder of the batch.
//!
//! Every operation offloads its filesystem work to a blocking task so the
//! caller's scheduling thread is never blocked by I/O. Operations hold no
//! state between calls; the only session-lifetime state is the
//! [`ClipboardState`](shelf_core::ClipboardState) consumed by [`paste`].

mod archive;
mod copy;
mod create;
mod delete;
mod move_op;
mod naming;
mod outcome;
mod paste;
mod rename;

pub use archive::{compress, decompress};
pub use copy::copy;
pub use create::{create_file, create_folder};
pub use delete::{delete, remove_recursive};
pub use move_op::move_items;
pub use naming::{resolve_collision, validate_name, MAX_RENAME_ATTEMPTS};
pub use outcome::{ItemError, OperationKind, OperationOutcome, OutcomeStatus};
pub use paste::paste;
pub use rename::rename;

pub use shelf_core::OpError;

/// Run a blocking filesystem closure off the async scheduler.
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T, OpError>
where
    F: FnOnce() -> Result<T, OpError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| OpError::other(format!("background task failed: {err}")))?
}
