//! Hash-table backend
//!
//! Contacts are keyed by identifier in an `FxHashMap`. The table keeps no
//! order of its own; the read view sorts on every call.

use rolodex_core::{Contact, ContactId, ContactOrdering, Error, Result};
use rustc_hash::FxHashMap;

use crate::backend::{Backend, BackendKind, ContactIter};

/// Identifier-keyed hash table
#[derive(Debug, Default)]
pub struct HashBackend {
    contacts: FxHashMap<ContactId, Contact>,
}

impl HashBackend {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for HashBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Hash
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn contains_id(&self, id: ContactId) -> bool {
        self.contacts.contains_key(&id)
    }

    fn insert(&mut self, contact: Contact, _ordering: ContactOrdering) -> Result<()> {
        let id = contact
            .id()
            .ok_or_else(|| Error::invalid_input("hash backend requires an assigned id"))?;
        self.contacts.insert(id, contact);
        Ok(())
    }

    fn remove(&mut self, contact: &Contact, _ordering: ContactOrdering) -> Option<Contact> {
        let id = contact.id()?;
        match self.contacts.get(&id) {
            Some(stored) if stored == contact => self.contacts.remove(&id),
            _ => None,
        }
    }

    fn iter(&self, ordering: ContactOrdering) -> ContactIter<'_> {
        let mut sorted: Vec<&Contact> = self.contacts.values().collect();
        sorted.sort_by(|a, b| ordering.compare(a, b));
        Box::new(sorted.into_iter())
    }

    fn reorder(&mut self, _ordering: ContactOrdering) {
        // sorted on every read
    }

    fn clear(&mut self) {
        self.contacts.clear();
    }
}
