//! Error taxonomy for engine operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by single-item operations.
///
/// Batch operations never return these directly; they fold per-item failures
/// into an outcome count instead.
#[derive(Debug, Error)]
pub enum OpError {
    /// A node already occupies the target path.
    #[error("Already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// The supplied name cannot be used as a basename.
    #[error("Invalid name: {message}")]
    InvalidName { message: String },

    /// Path not found.
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    /// Collision resolution ran out of candidate names.
    #[error("No free name found for '{name}'")]
    NameResolutionExhausted { name: String },

    /// Generic I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl OpError {
    /// Create an I/O error with path context, mapping well-known kinds onto
    /// the taxonomy.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an invalid-name error.
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }

    /// Create an other error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_classifier() {
        let err = OpError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, OpError::NotFound { .. }));

        let err = OpError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "there"),
        );
        assert!(matches!(err, OpError::AlreadyExists { .. }));

        let err = OpError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, OpError::Io { .. }));
    }
}
