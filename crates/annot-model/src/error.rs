//! Error types shared by the annotation utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, transforming, or comparing
/// annotation files.
#[derive(Debug, Error)]
pub enum AnnotError {
    /// Input path missing or unreadable.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input violates the expected format beyond row-level recovery.
    #[error("format error in {path}: {message}")]
    Format { path: PathBuf, message: String },

    /// Fewer input files than the operation needs.
    #[error("expected at least {expected} input files, got {got}")]
    EmptyInputSet { expected: usize, got: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, AnnotError>;

impl AnnotError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a Format error.
    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an EmptyInputSet error.
    pub fn empty_input_set(expected: usize, got: usize) -> Self {
        Self::EmptyInputSet { expected, got }
    }
}
