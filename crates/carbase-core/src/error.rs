//! Error types for carbase core operations.
//!
//! Nothing in this module is fatal: every variant describes a condition the
//! caller can report and recover from. The CLI layer maps these to
//! user-facing messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Field;

/// Result type alias for carbase operations.
pub type Result<T> = std::result::Result<T, CarbaseError>;

/// Core error type for carbase operations.
#[derive(Debug, Error)]
pub enum CarbaseError {
    /// The data file could not be opened, read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A removal ordinal fell outside `1..=len`.
    #[error("Car number {ordinal} is out of range (valid: 1..={len})")]
    OutOfRange { ordinal: usize, len: usize },

    /// The match mode does not exist or does not fit the selected field.
    #[error("Invalid search mode: {0}")]
    InvalidMode(String),

    /// A text field is empty or holds whitespace, so the record cannot be
    /// written as one token per field.
    #[error("Car number {ordinal} cannot be saved: {field} must be a single word without spaces")]
    UnsavableRecord { ordinal: usize, field: Field },

    /// The field selector does not name a record field.
    #[error("Invalid search field: {0}")]
    InvalidField(String),
}

impl CarbaseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CarbaseError::Io {
            path: path.into(),
            source,
        }
    }
}
