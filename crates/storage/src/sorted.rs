//! Sorted-list backend
//!
//! A growable `Vec` kept in order at all times. Insertion finds its slot by
//! binary search (upper bound); lookup for removal is a binary search too,
//! since the ordering is total and compares equal only for identical records.

use rolodex_core::{Contact, ContactId, ContactOrdering, Result};
use std::cmp::Ordering;

use crate::backend::{Backend, BackendKind, ContactIter};

/// Sorted growable list
#[derive(Debug, Default)]
pub struct SortedListBackend {
    contacts: Vec<Contact>,
}

impl SortedListBackend {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for SortedListBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sorted
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn contains_id(&self, id: ContactId) -> bool {
        self.contacts.iter().any(|c| c.id() == Some(id))
    }

    fn insert(&mut self, contact: Contact, ordering: ContactOrdering) -> Result<()> {
        let at = self
            .contacts
            .partition_point(|c| ordering.compare(c, &contact) != Ordering::Greater);
        self.contacts.insert(at, contact);
        Ok(())
    }

    fn remove(&mut self, contact: &Contact, ordering: ContactOrdering) -> Option<Contact> {
        let at = self
            .contacts
            .partition_point(|c| ordering.compare(c, contact) == Ordering::Less);
        match self.contacts.get(at) {
            Some(stored) if stored == contact => Some(self.contacts.remove(at)),
            _ => None,
        }
    }

    fn iter(&self, _ordering: ContactOrdering) -> ContactIter<'_> {
        Box::new(self.contacts.iter())
    }

    fn reorder(&mut self, ordering: ContactOrdering) {
        self.contacts.sort_by(|a, b| ordering.compare(a, b));
    }

    fn clear(&mut self) {
        self.contacts.clear();
    }
}
