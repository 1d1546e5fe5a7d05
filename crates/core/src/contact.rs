//! Contact record and identifier types
//!
//! This module defines the record model held by the repository:
//! - ContactId: Repository-assigned numeric identifier
//! - ContactField: The six text fields of a contact
//! - Contact: Immutable contact record with an optional identifier

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::ordering::ContactOrdering;

/// Repository-assigned contact identifier
///
/// Identifiers start at 1 and are issued from a monotonically increasing
/// counter. Once issued, an identifier is never reused within the lifetime
/// of the repository that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// The first identifier a fresh repository issues
    pub const FIRST: ContactId = ContactId(1);

    /// Create a ContactId from its numeric value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Numeric value of this identifier
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier immediately after this one, `None` past `u64::MAX`
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl From<u64> for ContactId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// The text fields of a contact
///
/// The declaration order is the ordering key after the last name/first name
/// pair, see [`ContactField::SORT_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Street address
    Street,
    /// City
    City,
    /// State or region
    State,
    /// Postal code
    Zip,
}

impl ContactField {
    /// All fields in record order
    pub const ALL: [ContactField; 6] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Street,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
    ];

    /// Fields in ordering-key order: last name, first name, then the address
    pub const SORT_ORDER: [ContactField; 6] = [
        ContactField::LastName,
        ContactField::FirstName,
        ContactField::Street,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
    ];

    /// Canonical lowercase key used by the command protocol and CSV headers
    pub const fn key(&self) -> &'static str {
        match self {
            ContactField::FirstName => "firstname",
            ContactField::LastName => "lastname",
            ContactField::Street => "street",
            ContactField::City => "city",
            ContactField::State => "state",
            ContactField::Zip => "zip",
        }
    }

    /// Look up a field by key, ignoring ASCII case
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A contact record
///
/// Fields are private: a contact is immutable once built. The repository
/// produces a new record via [`Contact::with_id`] when it assigns an
/// identifier, it never mutates the caller's value.
///
/// Equality is *identity*: every field including the identifier must match.
/// Use [`Contact::is_equivalent`] to compare without the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ContactId>,
    first_name: String,
    last_name: String,
    street: String,
    city: String,
    state: String,
    zip: String,
}

impl Contact {
    /// Create a contact without an identifier
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// Start building a contact field by field
    pub fn builder() -> ContactBuilder {
        ContactBuilder::default()
    }

    /// Produce a copy of this contact carrying the given identifier
    pub fn with_id(self, id: ContactId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Identifier, absent until assigned by a repository
    pub fn id(&self) -> Option<ContactId> {
        self.id
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Street address
    pub fn street(&self) -> &str {
        &self.street
    }

    /// City
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or region
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Postal code
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// Value of a single text field
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Street => &self.street,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
        }
    }

    /// True if every non-identifier field matches
    pub fn is_equivalent(&self, other: &Contact) -> bool {
        ContactField::ALL
            .iter()
            .all(|&field| self.field(field) == other.field(field))
    }

    /// True if no text field carries a value
    ///
    /// A blank contact stands in for an absent argument: the repository
    /// rejects it as invalid input.
    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|&field| self.field(field).is_empty())
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        ContactOrdering::ordinal().compare(self, other)
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "[{}] ", id)?,
            None => f.write_str("[-] ")?,
        }
        write!(
            f,
            "{} {}, {}, {}, {} {}",
            self.first_name, self.last_name, self.street, self.city, self.state, self.zip
        )
    }
}

/// Field-by-field constructor for [`Contact`]
#[derive(Debug, Clone, Default)]
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    /// Set a field by name
    pub fn field(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        let slot = match field {
            ContactField::FirstName => &mut self.contact.first_name,
            ContactField::LastName => &mut self.contact.last_name,
            ContactField::Street => &mut self.contact.street,
            ContactField::City => &mut self.contact.city,
            ContactField::State => &mut self.contact.state,
            ContactField::Zip => &mut self.contact.zip,
        };
        *slot = value;
        self
    }

    /// Set the given name
    pub fn first_name(self, value: impl Into<String>) -> Self {
        self.field(ContactField::FirstName, value)
    }

    /// Set the family name
    pub fn last_name(self, value: impl Into<String>) -> Self {
        self.field(ContactField::LastName, value)
    }

    /// Set the street address
    pub fn street(self, value: impl Into<String>) -> Self {
        self.field(ContactField::Street, value)
    }

    /// Set the city
    pub fn city(self, value: impl Into<String>) -> Self {
        self.field(ContactField::City, value)
    }

    /// Set the state or region
    pub fn state(self, value: impl Into<String>) -> Self {
        self.field(ContactField::State, value)
    }

    /// Set the postal code
    pub fn zip(self, value: impl Into<String>) -> Self {
        self.field(ContactField::Zip, value)
    }

    /// Pre-assign an identifier (used when reloading saved contacts)
    pub fn id(mut self, id: ContactId) -> Self {
        self.contact.id = Some(id);
        self
    }

    /// Finish building
    pub fn build(self) -> Contact {
        self.contact
    }
}
