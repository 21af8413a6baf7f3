//! Batch operation accounting.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The kind of batch operation an outcome describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    Copy,
    Move,
    Delete,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}

/// One item's failure within a batch operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemError {
    /// The path that caused the error.
    pub path: PathBuf,
    /// A human-readable error message.
    pub message: String,
}

impl ItemError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// How a completed batch operation went overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// Every requested item succeeded.
    Success,
    /// Some items succeeded, some failed.
    PartialFailure,
    /// No requested item succeeded.
    Failure,
}

/// Aggregate result of a batch operation.
///
/// Batch operations are best-effort: an item that fails is counted and the
/// remaining items are still processed. The contract to callers is the
/// aggregate count; the per-item `errors` list is carried for diagnostics on
/// top of that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// What was being done.
    pub kind: OperationKind,
    /// Number of top-level items that completed.
    pub succeeded: usize,
    /// Number of top-level items requested.
    pub requested: usize,
    /// Per-item failures, in processing order.
    pub errors: Vec<ItemError>,
}

impl OperationOutcome {
    /// Start accounting for a batch of `requested` items.
    pub fn new(kind: OperationKind, requested: usize) -> Self {
        Self {
            kind,
            succeeded: 0,
            requested,
            errors: Vec::new(),
        }
    }

    /// An outcome where the whole batch failed for one shared reason.
    pub fn failed(kind: OperationKind, requested: usize, error: ItemError) -> Self {
        Self {
            kind,
            succeeded: 0,
            requested,
            errors: vec![error],
        }
    }

    /// Count one completed item.
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    /// Count one failed item.
    pub fn record_failure(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.errors.push(ItemError::new(path, message));
    }

    /// Success iff every requested item completed; failure iff none did.
    pub fn status(&self) -> OutcomeStatus {
        if self.succeeded == self.requested {
            OutcomeStatus::Success
        } else if self.succeeded == 0 {
            OutcomeStatus::Failure
        } else {
            OutcomeStatus::PartialFailure
        }
    }

    /// Check if the operation was fully successful.
    pub fn is_success(&self) -> bool {
        self.status() == OutcomeStatus::Success
    }

    /// Get a human-readable summary of the operation.
    pub fn summary(&self) -> String {
        let action = match self.kind {
            OperationKind::Copy => "Copied",
            OperationKind::Move => "Moved",
            OperationKind::Delete => "Deleted",
        };

        if self.is_success() {
            format!("{} {} items", action, self.succeeded)
        } else {
            format!("{} {} of {} items", action, self.succeeded, self.requested)
        }
    }
}
