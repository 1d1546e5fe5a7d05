//! Core types for Rolodex
//!
//! This crate defines the foundational types used throughout the system:
//! - Contact / ContactId: The record model and its repository-assigned identity
//! - ContactOrdering: Total order used by every repository backend
//! - ContactFilter: Per-field predicates for search and remove-by-criteria
//! - EventBus / LogSink: Synchronous leveled log events
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod error;
pub mod event;
pub mod filter;
pub mod ordering;

pub use contact::{Contact, ContactBuilder, ContactField, ContactId};
pub use error::{Error, Result};
pub use event::{EventBus, LogEvent, LogLevel, LogSink, RecordingSink, TracingSink};
pub use filter::{ContactFilter, FieldPattern, WILDCARD};
pub use ordering::{CaseSensitivity, ContactOrdering};
