//! Conversions between protocol arguments and repository types.
//!
//! Also maps internal repository errors to the executor's [`Error`].

use rolodex_core::{Contact, ContactField, ContactFilter};

use crate::parse::Args;
use crate::Error;

/// Convert a repository error to an executor error.
impl From<rolodex_core::Error> for Error {
    fn from(err: rolodex_core::Error) -> Self {
        match err {
            rolodex_core::Error::InvalidInput { reason } => Error::InvalidInput { reason },
            rolodex_core::Error::Io(e) => Error::Io {
                reason: e.to_string(),
            },
            rolodex_core::Error::Csv { reason } => Error::Io { reason },
            // the repository recovers from this before it can escape
            rolodex_core::Error::CapacityExceeded { capacity } => Error::Internal {
                reason: format!("unhandled capacity failure ({} slots)", capacity),
            },
        }
    }
}

/// Build a contact from the contact fields present in `args`
///
/// Missing fields are empty; unrelated keys are ignored.
pub fn contact_from_args(args: &Args) -> Contact {
    ContactField::ALL
        .into_iter()
        .fold(Contact::builder(), |builder, field| match args.get(field.key()) {
            Some(value) => builder.field(field, value),
            None => builder,
        })
        .build()
}

/// Build a filter from the contact fields present in `args`
///
/// Values with a leading or trailing `*` become partial matches.
pub fn filter_from_args(args: &Args) -> ContactFilter {
    ContactField::ALL
        .into_iter()
        .fold(ContactFilter::new(), |filter, field| match args.get(field.key()) {
            Some(value) => filter.matching(field, value),
            None => filter,
        })
}
