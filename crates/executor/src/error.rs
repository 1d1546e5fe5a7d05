//! Error types for command execution.
//!
//! Only hard failures surface here. Soft failures (full store, missing
//! `file` argument, unreadable file, unknown verb) are logged on the
//! repository's event bus and the command still returns an [`Output`](crate::Output).
//!
//! Errors are:
//! - **Structured**: each variant has typed fields
//! - **Serializable**: can be converted to/from JSON

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Example
///
/// ```ignore
/// use rolodex_executor::{Command, Error};
///
/// match executor.execute(Command::parse("add")) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::InvalidInput { reason }) => println!("rejected: {}", reason),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Required argument absent (e.g. adding a contact with no fields)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}
