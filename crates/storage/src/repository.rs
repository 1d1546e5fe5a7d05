//! Ordered contact repository
//!
//! The repository owns a [`Backend`], the ordering policy, and the
//! identifier counter. It enforces:
//! - The collection is always sorted by the ordering key
//! - Identifiers are issued once and never reused, even after removal;
//!   once `u64::MAX` has been issued, adds that need a fresh one are refused
//! - Removal is by identity (every field including the identifier)
//!
//! Every mutation is reported on the repository's [`EventBus`].

use rolodex_core::{
    Contact, ContactFilter, ContactId, ContactOrdering, Error, EventBus, LogSink, Result,
};
use std::sync::Arc;
use tracing::debug;

use crate::backend::{Backend, BackendKind, ContactIter};

/// Ordered contact collection with identifier assignment
pub struct Repository {
    backend: Box<dyn Backend>,
    ordering: ContactOrdering,
    // None once u64::MAX has been issued
    next_id: Option<ContactId>,
    events: EventBus,
}

impl Repository {
    /// Repository over the given backend, ordinal ordering, no listeners
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            ordering: ContactOrdering::ordinal(),
            next_id: Some(ContactId::FIRST),
            events: EventBus::new(),
        }
    }

    /// Repository over a fresh backend of the given kind
    pub fn with_kind(kind: BackendKind) -> Self {
        Self::new(kind.build_default())
    }

    /// Use a different ordering policy
    pub fn with_ordering(mut self, ordering: ContactOrdering) -> Self {
        self.set_ordering(ordering);
        self
    }

    /// Switch the ordering policy, re-sorting anything already stored
    pub fn set_ordering(&mut self, ordering: ContactOrdering) {
        if ordering != self.ordering {
            debug!(len = self.len(), ?ordering, "re-sorting repository");
            self.backend.reorder(ordering);
            self.ordering = ordering;
        }
    }

    /// Publish on an existing bus instead of a private one
    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    /// Register a log listener
    pub fn subscribe(&self, sink: Arc<dyn LogSink>) {
        self.events.subscribe(sink);
    }

    /// The bus this repository publishes on
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Ordering policy in effect
    pub fn ordering(&self) -> ContactOrdering {
        self.ordering
    }

    /// Storage strategy in use
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Number of stored contacts
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// The identifier the next unidentified contact will receive
    ///
    /// `None` once every identifier has been issued.
    pub fn next_id(&self) -> Option<ContactId> {
        self.next_id
    }

    /// Every contact in order
    ///
    /// Each call iterates the current state from the start.
    pub fn contacts(&self) -> ContactIter<'_> {
        self.backend.iter(self.ordering)
    }

    /// Contacts matching the filter, in order
    pub fn search<'a>(&'a self, filter: &'a ContactFilter) -> impl Iterator<Item = &'a Contact> + 'a {
        filter.apply(self.contacts())
    }

    /// Insert a contact, assigning an identifier if it has none
    ///
    /// A contact that already carries an identifier keeps it, and the counter
    /// moves past it. If that identifier is already stored, a fresh one is
    /// issued instead so identifiers stay unique.
    ///
    /// Returns `Ok(None)` when a fixed-size backend is full or no fresh
    /// identifier is left; the failure is logged and nothing is stored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the contact is blank.
    pub fn add(&mut self, contact: Contact) -> Result<Option<Contact>> {
        if contact.is_blank() {
            self.events.error("Add: blank contact provided (skipping)");
            return Err(Error::invalid_input("contact to add has no fields set"));
        }

        let id = match contact.id() {
            Some(id) if self.backend.contains_id(id) => {
                let Some(fresh) = self.allocate_id() else {
                    return Ok(None);
                };
                self.events.warning(format!(
                    "Add: ID {} already in use, assigned {} instead",
                    id, fresh
                ));
                fresh
            }
            Some(id) => {
                self.advance_past(id);
                id
            }
            None => match self.allocate_id() {
                Some(id) => id,
                None => return Ok(None),
            },
        };

        let with_id = contact.with_id(id);
        self.events.info(format!(
            "Add: adding new contact with ID {} ({} {})",
            id,
            with_id.first_name(),
            with_id.last_name()
        ));

        match self.backend.insert(with_id.clone(), self.ordering) {
            Ok(()) => {
                self.events.info(format!("Add: complete ({})", id));
                Ok(Some(with_id))
            }
            Err(Error::CapacityExceeded { capacity }) => {
                self.events.error(format!(
                    "Add: inserting contact failed - contact list full ({} slots)",
                    capacity
                ));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Add each contact in order and return the full collection
    ///
    /// # Errors
    ///
    /// Stops at the first blank contact; contacts before it stay added.
    pub fn add_all<I>(&mut self, contacts: I) -> Result<ContactIter<'_>>
    where
        I: IntoIterator<Item = Contact>,
    {
        let before = self.len();
        for contact in contacts {
            self.add(contact)?;
        }
        self.events
            .info(format!("Added {} contacts", self.len().saturating_sub(before)));
        Ok(self.contacts())
    }

    /// Replace everything with the given contacts
    ///
    /// Clears the collection, resets the identifier counter, then behaves
    /// like [`Repository::add_all`].
    pub fn load<I>(&mut self, contacts: I) -> Result<ContactIter<'_>>
    where
        I: IntoIterator<Item = Contact>,
    {
        debug!(dropped = self.len(), "clearing repository for load");
        self.backend.clear();
        self.next_id = Some(ContactId::FIRST);

        let before = self.len();
        for contact in contacts {
            self.add(contact)?;
        }
        self.events
            .info(format!("Loaded {} contacts", self.len() - before));
        Ok(self.contacts())
    }

    /// Remove the stored contact identical to `contact`
    ///
    /// A contact without an identifier never matches. Returns the removed
    /// record, or `None` if nothing matched.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the contact is blank.
    pub fn remove(&mut self, contact: &Contact) -> Result<Option<Contact>> {
        if contact.is_blank() {
            self.events.error("Remove: blank contact provided");
            return Err(Error::invalid_input("contact to remove has no fields set"));
        }

        self.events.verbose(format!(
            "Remove: Searching for contact ({} {})",
            contact.first_name(),
            contact.last_name()
        ));

        match self.backend.remove(contact, self.ordering) {
            Some(removed) => {
                self.events.info(format!(
                    "Remove: removed contact {} ({} {})",
                    removed.id().map(|id| id.to_string()).unwrap_or_default(),
                    removed.first_name(),
                    removed.last_name()
                ));
                Ok(Some(removed))
            }
            None => {
                self.events
                    .warning("Remove: Contact not found.  No action taken.");
                Ok(None)
            }
        }
    }

    /// Remove the first contact (in order) matching the filter
    pub fn remove_matching(&mut self, filter: &ContactFilter) -> Result<Option<Contact>> {
        let first = self.search(filter).next().cloned();
        match first {
            Some(contact) => self.remove(&contact),
            None => {
                self.events
                    .warning("Remove: no contact matches the filter.  No action taken.");
                Ok(None)
            }
        }
    }

    fn allocate_id(&mut self) -> Option<ContactId> {
        let Some(id) = self.next_id else {
            self.events
                .error("Add: no identifiers left to assign.  No action taken.");
            return None;
        };
        self.next_id = id.next();
        Some(id)
    }

    // The counter only moves forward, so every stored id stays below it
    fn advance_past(&mut self, id: ContactId) {
        self.next_id = match (self.next_id, id.next()) {
            (Some(current), Some(after)) => Some(current.max(after)),
            _ => None,
        };
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("backend", &self.backend.kind())
            .field("len", &self.backend.len())
            .field("ordering", &self.ordering)
            .field("next_id", &self.next_id)
            .finish()
    }
}
