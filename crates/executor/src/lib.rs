//! # Rolodex Executor
//!
//! The command layer over the contact repository. It provides:
//! - [`Command`] - one parsed input line (verb plus field map)
//! - [`Executor`] - dispatches commands to the repository
//! - [`Output`] - what a command produced
//! - [`RolodexConfig`] - `rolodex.toml` session settings
//!
//! ## Quick Start
//!
//! ```text
//! use rolodex_executor::{Executor, Output};
//!
//! let mut executor = Executor::default();
//! executor.execute_line("add firstname=Jo;lastname=Li;city=X")?;
//!
//! if let Output::Contacts(found) = executor.execute_line("find lastname=L*")? {
//!     for contact in found {
//!         println!("{}", contact);
//!     }
//! }
//! ```
//!
//! ## Verbs
//!
//! | Verb | Fields | Output |
//! |------|--------|--------|
//! | `add` | contact fields | the stored contact |
//! | `remove` | filter fields | the removed contact |
//! | `find` | filter fields | matching contacts |
//! | `list` | - | every contact |
//! | `load` | `file` | the loaded collection |
//! | `save` | `file` | unit |
//! | `quit` | - | quit |

#![warn(missing_docs)]

mod command;
mod config;
mod convert;
mod error;
mod executor;
mod output;
pub mod parse;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::{Command, Verb, FILE_FIELD, MESSAGE_FIELD};
pub use config::{RolodexConfig, CONFIG_FILE_NAME, DEFAULT_PROMPT};
pub use convert::{contact_from_args, filter_from_args};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use parse::{Args, ParsedLine};

// Re-export repository types so users don't need the lower crates directly
pub use rolodex_core::{
    CaseSensitivity, Contact, ContactField, ContactFilter, ContactId, ContactOrdering, EventBus,
    LogEvent, LogLevel, LogSink, RecordingSink, TracingSink,
};
pub use rolodex_storage::{BackendKind, ContactExchange, CsvExchange, Repository};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
