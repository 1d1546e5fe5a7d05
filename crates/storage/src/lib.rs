//! Storage layer for rolodex
//!
//! This crate implements the ordered contact repository with:
//! - `Backend`: storage strategy trait (array, hash table, sorted list)
//! - `Repository`: identifier assignment, identity removal, search
//! - `CsvExchange`: bulk load/save in delimited text
//!
//! # Ordering
//!
//! Every backend yields contacts in the repository's `ContactOrdering`.
//! Backend choice changes cost, never the observable order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod backend;
pub mod exchange;
pub mod hashed;
pub mod repository;
pub mod sorted;

pub use array::{ArrayBackend, DEFAULT_CAPACITY};
pub use backend::{Backend, BackendKind, ContactIter};
pub use exchange::{ContactExchange, CsvExchange};
pub use hashed::HashBackend;
pub use repository::Repository;
pub use sorted::SortedListBackend;
