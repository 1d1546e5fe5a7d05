//! Fixed-size array backend
//!
//! Contacts live in a preallocated slot array. Insertion places the new
//! contact at the end and walks it backwards into position (one
//! insertion-sort pass, O(n) worst case). Removal shifts the tail left.

use rolodex_core::{Contact, ContactId, ContactOrdering, Error, Result};
use std::cmp::Ordering;

use crate::backend::{Backend, BackendKind, ContactIter};

/// Slot count used when none is configured
pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity sorted slot array
#[derive(Debug)]
pub struct ArrayBackend {
    slots: Box<[Option<Contact>]>,
    count: usize,
}

impl ArrayBackend {
    /// Backend with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Backend with the given slot count
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            count: 0,
        }
    }

    /// Total slot count
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn occupied(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.slots[..self.count].iter().flatten()
    }
}

impl Default for ArrayBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ArrayBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Array
    }

    fn len(&self) -> usize {
        self.count
    }

    fn contains_id(&self, id: ContactId) -> bool {
        self.occupied().any(|c| c.id() == Some(id))
    }

    fn insert(&mut self, contact: Contact, ordering: ContactOrdering) -> Result<()> {
        if self.count == self.slots.len() {
            return Err(Error::CapacityExceeded {
                capacity: self.slots.len(),
            });
        }

        self.slots[self.count] = Some(contact);

        // walk it back to its spot
        let mut i = self.count;
        while i > 0 {
            let in_order = match (&self.slots[i - 1], &self.slots[i]) {
                (Some(prev), Some(cur)) => ordering.compare(prev, cur) != Ordering::Greater,
                _ => true,
            };
            if in_order {
                break;
            }
            self.slots.swap(i - 1, i);
            i -= 1;
        }

        self.count += 1;
        Ok(())
    }

    fn remove(&mut self, contact: &Contact, _ordering: ContactOrdering) -> Option<Contact> {
        let found = self.slots[..self.count]
            .iter()
            .position(|slot| slot.as_ref() == Some(contact))?;

        self.slots[found..self.count].rotate_left(1);
        self.count -= 1;
        self.slots[self.count].take()
    }

    fn iter(&self, _ordering: ContactOrdering) -> ContactIter<'_> {
        Box::new(self.occupied())
    }

    fn reorder(&mut self, ordering: ContactOrdering) {
        self.slots[..self.count].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => ordering.compare(a, b),
            _ => Ordering::Equal,
        });
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
    }
}
