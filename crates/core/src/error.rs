//! Error types for the contact repository
//!
//! This module defines the errors raised below the command layer.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Only [`Error::InvalidInput`] is a hard failure at the repository boundary.
//! [`Error::CapacityExceeded`] is produced by fixed-size backends and turned
//! into a logged soft failure by the repository.

use std::io;
use thiserror::Error;

/// Result type alias for repository operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contact repository
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was absent (blank contact, unknown option name)
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    /// Fixed-size backend has no free slot
    #[error("capacity exceeded: backend holds at most {capacity} contacts")]
    CapacityExceeded {
        /// Slot count of the backend
        capacity: usize,
    },

    /// I/O error during bulk load/save
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed delimited-text data
    #[error("CSV error: {reason}")]
    Csv {
        /// Parser/writer message
        reason: String,
    },
}

impl Error {
    /// Build an [`Error::InvalidInput`]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Build an [`Error::Csv`]
    pub fn csv(reason: impl Into<String>) -> Self {
        Error::Csv {
            reason: reason.into(),
        }
    }

    /// True for the hard-failure category
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}
