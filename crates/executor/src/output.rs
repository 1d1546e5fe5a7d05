//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; the mapping is listed on
//! each [`Command`](crate::Command) variant.

use rolodex_core::Contact;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// use rolodex_executor::{Command, Output};
///
/// match executor.execute(Command::parse("list"))? {
///     Output::Contacts(contacts) => contacts.iter().for_each(|c| println!("{}", c)),
///     _ => unreachable!("list always returns Contacts"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Selected or affected contacts, in order
    Contacts(Vec<Contact>),

    /// No return value (save)
    Unit,

    /// The session should end
    Quit,
}

impl Output {
    /// Contacts carried by this output, if any
    pub fn contacts(&self) -> &[Contact] {
        match self {
            Output::Contacts(contacts) => contacts,
            Output::Unit | Output::Quit => &[],
        }
    }

    /// True for [`Output::Quit`]
    pub fn is_quit(&self) -> bool {
        matches!(self, Output::Quit)
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Contacts(Vec::new())
    }
}
