//! Ordering policy for contacts
//!
//! The ordering key is: last name, first name, street, city, state, zip,
//! then the identifier (absent sorts before present). Two contacts compare
//! equal only when they are identical.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::contact::{Contact, ContactField};
use crate::error::Error;

/// How text fields are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitivity {
    /// Compare by code point
    #[default]
    Ordinal,
    /// Compare case-folded first, then by code point to break ties
    IgnoreCase,
}

impl CaseSensitivity {
    /// Config/flag spelling
    pub const fn as_str(&self) -> &'static str {
        match self {
            CaseSensitivity::Ordinal => "ordinal",
            CaseSensitivity::IgnoreCase => "ignore-case",
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseSensitivity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ordinal" => Ok(CaseSensitivity::Ordinal),
            "ignore-case" => Ok(CaseSensitivity::IgnoreCase),
            other => Err(Error::invalid_input(format!(
                "unknown ordering '{}', expected \"ordinal\" or \"ignore-case\"",
                other
            ))),
        }
    }
}

/// Total order over contacts used by every repository backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactOrdering {
    case: CaseSensitivity,
}

impl ContactOrdering {
    /// Ordering with the given case policy
    pub const fn new(case: CaseSensitivity) -> Self {
        Self { case }
    }

    /// Code-point ordering
    pub const fn ordinal() -> Self {
        Self::new(CaseSensitivity::Ordinal)
    }

    /// Case-insensitive ordering
    pub const fn ignore_case() -> Self {
        Self::new(CaseSensitivity::IgnoreCase)
    }

    /// Case policy in effect
    pub const fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }

    /// Compare two contacts by the ordering key
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        ContactField::SORT_ORDER
            .iter()
            .map(|&field| self.compare_text(a.field(field), b.field(field)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.id().cmp(&b.id()))
    }

    /// True if the sequence is in non-decreasing order
    pub fn is_sorted<'a, I>(&self, contacts: I) -> bool
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let mut iter = contacts.into_iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for next in iter {
            if self.compare(prev, next) == Ordering::Greater {
                return false;
            }
            prev = next;
        }
        true
    }

    fn compare_text(&self, a: &str, b: &str) -> Ordering {
        match self.case {
            CaseSensitivity::Ordinal => a.cmp(b),
            CaseSensitivity::IgnoreCase => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
                .then_with(|| a.cmp(b)),
        }
    }
}
