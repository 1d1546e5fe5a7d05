//! Rolodex - ordered in-memory contact repository with a line protocol
//!
//! Contacts are kept sorted by last name, first name, then the remaining
//! fields and the identifier. A small text protocol drives the repository:
//! `add`, `remove`, `find`, `list`, `load`, `save`, `quit`.
//!
//! # Quick Start
//!
//! ```ignore
//! use rolodex::{Executor, Output};
//!
//! let mut executor = Executor::default();
//! executor.execute_line("add firstname=Jo;lastname=Li;city=X")?;
//!
//! let listed = executor.execute_line("list")?;
//! assert_eq!(listed.contacts().len(), 1);
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which owns a [`Repository`].
//! The repository delegates storage to one of three backends (array, hash
//! table, sorted list); every backend yields the same order.

// Re-export the public API from rolodex-executor
pub use rolodex_executor::*;
