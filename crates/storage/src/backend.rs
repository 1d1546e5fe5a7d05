//! Backend abstraction for contact storage
//!
//! A [`Backend`] only stores and orders records. Identifier assignment,
//! validation and logging live in [`Repository`](crate::Repository), so every
//! backend shares one identity contract. Backends differ in cost, never in
//! observable order: `iter` always yields contacts in [`ContactOrdering`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use rolodex_core::{Contact, ContactId, ContactOrdering, Error, Result};

use crate::array::{ArrayBackend, DEFAULT_CAPACITY};
use crate::hashed::HashBackend;
use crate::sorted::SortedListBackend;

/// Ordered, read-only view over stored contacts
pub type ContactIter<'a> = Box<dyn Iterator<Item = &'a Contact> + 'a>;

/// Storage strategy behind a repository
pub trait Backend: Send {
    /// Which strategy this is
    fn kind(&self) -> BackendKind;

    /// Number of stored contacts
    fn len(&self) -> usize;

    /// True if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if a stored contact carries this identifier
    fn contains_id(&self, id: ContactId) -> bool;

    /// Store a contact that already carries an identifier
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] when a fixed-size backend is full.
    fn insert(&mut self, contact: Contact, ordering: ContactOrdering) -> Result<()>;

    /// Remove the first stored contact identical to `contact`
    ///
    /// Remaining contacts keep their relative order.
    fn remove(&mut self, contact: &Contact, ordering: ContactOrdering) -> Option<Contact>;

    /// Every stored contact in `ordering`
    fn iter(&self, ordering: ContactOrdering) -> ContactIter<'_>;

    /// Restore order after the repository switches to `ordering`
    fn reorder(&mut self, ordering: ContactOrdering);

    /// Drop every stored contact
    fn clear(&mut self);
}

/// Available storage strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Fixed-size slot array with insertion-sort shifting
    Array,
    /// Hash table keyed by identifier, sorted on read
    Hash,
    /// Growable vector kept sorted by binary-search insertion
    #[default]
    Sorted,
}

impl BackendKind {
    /// All strategies
    pub const ALL: [BackendKind; 3] = [BackendKind::Array, BackendKind::Hash, BackendKind::Sorted];

    /// Config/flag spelling
    pub const fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Array => "array",
            BackendKind::Hash => "hash",
            BackendKind::Sorted => "sorted",
        }
    }

    /// Build an empty backend of this kind
    ///
    /// `capacity` is the slot count for [`BackendKind::Array`] and ignored
    /// by the growable backends.
    pub fn build(self, capacity: usize) -> Box<dyn Backend> {
        match self {
            BackendKind::Array => Box::new(ArrayBackend::with_capacity(capacity)),
            BackendKind::Hash => Box::new(HashBackend::new()),
            BackendKind::Sorted => Box::new(SortedListBackend::new()),
        }
    }

    /// Build with the default array capacity
    pub fn build_default(self) -> Box<dyn Backend> {
        self.build(DEFAULT_CAPACITY)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "unknown backend '{}', expected one of: array, hash, sorted",
                    s
                ))
            })
    }
}
