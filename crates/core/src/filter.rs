//! Field filter for search and remove-by-criteria
//!
//! A [`ContactFilter`] is a conjunction of per-field patterns. Fields without
//! a pattern match everything, so an empty filter matches every contact.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::contact::{Contact, ContactField};

/// Wildcard marking a partial match at either end of a pattern
pub const WILDCARD: char = '*';

/// Match rule for a single field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "text", rename_all = "lowercase")]
pub enum FieldPattern {
    /// Whole value must equal the text
    Exact(String),
    /// Value must start with the text
    Prefix(String),
    /// Value must end with the text
    Suffix(String),
    /// Value must contain the text
    Contains(String),
}

impl FieldPattern {
    /// Parse raw command text into a pattern
    ///
    /// `Jo*` is a prefix match, `*son` a suffix match, `*an*` a contains match,
    /// anything else is exact.
    pub fn parse(raw: &str) -> Self {
        let (leading, rest) = match raw.strip_prefix(WILDCARD) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (trailing, inner) = match rest.strip_suffix(WILDCARD) {
            Some(inner) => (true, inner),
            None => (false, rest),
        };
        let inner = inner.to_string();
        match (leading, trailing) {
            (false, false) => FieldPattern::Exact(inner),
            (false, true) => FieldPattern::Prefix(inner),
            (true, false) => FieldPattern::Suffix(inner),
            (true, true) => FieldPattern::Contains(inner),
        }
    }

    /// True if the value satisfies this pattern
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldPattern::Exact(text) => value == text,
            FieldPattern::Prefix(text) => value.starts_with(text.as_str()),
            FieldPattern::Suffix(text) => value.ends_with(text.as_str()),
            FieldPattern::Contains(text) => value.contains(text.as_str()),
        }
    }
}

/// Conjunction of field patterns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFilter {
    patterns: BTreeMap<ContactField, FieldPattern>,
}

impl ContactFilter {
    /// Filter matching every contact
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the pattern for a field
    pub fn with(mut self, field: ContactField, pattern: FieldPattern) -> Self {
        self.patterns.insert(field, pattern);
        self
    }

    /// Add an exact-match pattern for a field
    pub fn exact(self, field: ContactField, text: impl Into<String>) -> Self {
        self.with(field, FieldPattern::Exact(text.into()))
    }

    /// Add a pattern parsed from raw text, honouring `*` wildcards
    pub fn matching(self, field: ContactField, raw: &str) -> Self {
        self.with(field, FieldPattern::parse(raw))
    }

    /// Pattern for a field, if any
    pub fn pattern(&self, field: ContactField) -> Option<&FieldPattern> {
        self.patterns.get(&field)
    }

    /// True if no field is constrained
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if the contact satisfies every pattern
    pub fn matches(&self, contact: &Contact) -> bool {
        self.patterns
            .iter()
            .all(|(&field, pattern)| pattern.matches(contact.field(field)))
    }

    /// Lazily select matching contacts, preserving input order
    pub fn apply<'a, I>(&'a self, contacts: I) -> impl Iterator<Item = &'a Contact> + 'a
    where
        I: IntoIterator<Item = &'a Contact>,
        I::IntoIter: 'a,
    {
        contacts.into_iter().filter(move |c| self.matches(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Contact> {
        vec![
            Contact::new("Ann", "Lee", "1 Oak", "Austin", "TX", "73301"),
            Contact::new("Bob", "Leeds", "2 Elm", "Boston", "MA", "02101"),
            Contact::new("Cy", "Ng", "3 Ash", "Austin", "TX", "73301"),
        ]
    }

    #[test]
    fn test_parse_patterns() {
        assert_eq!(FieldPattern::parse("Lee"), FieldPattern::Exact("Lee".into()));
        assert_eq!(FieldPattern::parse("Lee*"), FieldPattern::Prefix("Lee".into()));
        assert_eq!(FieldPattern::parse("*ds"), FieldPattern::Suffix("ds".into()));
        assert_eq!(FieldPattern::parse("*ee*"), FieldPattern::Contains("ee".into()));
        assert_eq!(FieldPattern::parse("*"), FieldPattern::Suffix(String::new()));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let all = people();
        let filter = ContactFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&all).count(), 3);
    }

    #[test]
    fn test_exact_match() {
        let all = people();
        let filter = ContactFilter::new().exact(ContactField::LastName, "Lee");
        let names: Vec<_> = filter.apply(&all).map(|c| c.first_name()).collect();
        assert_eq!(names, vec!["Ann"]);
    }

    #[test]
    fn test_partial_match() {
        let all = people();
        let filter =
            ContactFilter::new().with(ContactField::LastName, FieldPattern::parse("Lee*"));
        assert_eq!(filter.apply(&all).count(), 2);
    }

    #[test]
    fn test_conjunction() {
        let all = people();
        let filter = ContactFilter::new()
            .exact(ContactField::City, "Austin")
            .exact(ContactField::FirstName, "Cy");
        let names: Vec<_> = filter.apply(&all).map(|c| c.last_name()).collect();
        assert_eq!(names, vec!["Ng"]);
    }

    #[test]
    fn test_apply_does_not_consume_input() {
        let all = people();
        let filter = ContactFilter::new().exact(ContactField::State, "TX");
        assert_eq!(filter.apply(&all).count(), 2);
        assert_eq!(filter.apply(&all).count(), 2);
        assert_eq!(all.len(), 3);
    }
}
