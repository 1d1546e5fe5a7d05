//! Command enum for the contact protocol.
//!
//! Every input line becomes exactly one [`Command`]. Commands are:
//! - **Self-contained**: the parsed field map travels with the command
//! - **Serializable**: can be converted to/from JSON
//! - **Closed**: unknown verbs and unparseable lines are commands too

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parse::{parse_line, Args, ParsedLine};

/// Field carrying the diagnostic of an [`Command::Error`]
pub const MESSAGE_FIELD: &str = "message";

/// Field naming the file for load and save
pub const FILE_FIELD: &str = "file";

/// The closed set of verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Insert one contact
    Add,
    /// Remove the first contact matching the fields
    Remove,
    /// List contacts matching the fields
    Find,
    /// List every contact
    List,
    /// Replace all contacts with a file's contents
    Load,
    /// Write all contacts to a file
    Save,
    /// End the session
    Quit,
    /// Any verb not in this set
    Unknown,
    /// Line had no verb
    Error,
}

impl Verb {
    /// Verbs a user can type
    pub const KNOWN: [Verb; 7] = [
        Verb::Add,
        Verb::Remove,
        Verb::Find,
        Verb::List,
        Verb::Load,
        Verb::Save,
        Verb::Quit,
    ];

    /// Protocol spelling
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verb::Add => "add",
            Verb::Remove => "remove",
            Verb::Find => "find",
            Verb::List => "list",
            Verb::Load => "load",
            Verb::Save => "save",
            Verb::Quit => "quit",
            Verb::Unknown => "unknown",
            Verb::Error => "error",
        }
    }

    /// Map a typed token to a verb; matching is exact
    pub fn from_token(token: &str) -> Verb {
        Verb::KNOWN
            .into_iter()
            .find(|verb| verb.as_str() == token)
            .unwrap_or(Verb::Unknown)
    }

    /// True for verbs whose result is printed
    pub const fn is_listing(&self) -> bool {
        matches!(self, Verb::Find | Verb::List)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, executable operation.
///
/// # Example
///
/// ```text
/// use rolodex_executor::{Command, Verb};
///
/// let cmd = Command::parse("add firstname=Jo;lastname=Li");
/// assert_eq!(cmd.verb(), Verb::Add);
/// assert_eq!(cmd.args().get("lastname"), Some("Li"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verb", rename_all = "lowercase")]
pub enum Command {
    /// Insert a contact built from the fields.
    /// Returns: `Output::Contacts` with the stored record (empty if the store is full)
    Add {
        /// Contact fields
        args: Args,
    },

    /// Remove the first contact, in order, matching the fields.
    /// Returns: `Output::Contacts` with the removed record (empty if none matched)
    Remove {
        /// Filter fields
        args: Args,
    },

    /// Contacts matching the fields, in order.
    /// Returns: `Output::Contacts`
    Find {
        /// Filter fields
        args: Args,
    },

    /// Every contact, in order.
    /// Returns: `Output::Contacts`
    List {
        /// Ignored
        args: Args,
    },

    /// Replace every contact with the contents of `file`.
    /// Returns: `Output::Contacts` with the loaded collection
    Load {
        /// Must carry `file`
        args: Args,
    },

    /// Write every contact to `file`.
    /// Returns: `Output::Unit`
    Save {
        /// Must carry `file`
        args: Args,
    },

    /// End the session.
    /// Returns: `Output::Quit`
    Quit {
        /// Ignored
        args: Args,
    },

    /// A verb outside the known set.
    /// Returns: `Output::Contacts` (always empty)
    Unknown {
        /// The token as typed
        name: String,
        /// Fields found on the line
        args: Args,
    },

    /// A line with no verb.
    /// Returns: `Output::Contacts` (always empty)
    Error {
        /// Carries `message`
        args: Args,
    },
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Command {
        match parse_line(line) {
            ParsedLine {
                verb: Some(verb),
                args,
            } => Command::from_verb(&verb, args),
            ParsedLine { verb: None, .. } => Command::syntax_error(line),
        }
    }

    /// Build a command from a verb token and its fields
    pub fn from_verb(token: &str, args: Args) -> Command {
        match Verb::from_token(token) {
            Verb::Add => Command::Add { args },
            Verb::Remove => Command::Remove { args },
            Verb::Find => Command::Find { args },
            Verb::List => Command::List { args },
            Verb::Load => Command::Load { args },
            Verb::Save => Command::Save { args },
            Verb::Quit => Command::Quit { args },
            Verb::Unknown | Verb::Error => Command::Unknown {
                name: token.to_string(),
                args,
            },
        }
    }

    /// Error command for a line without a verb
    pub fn syntax_error(line: &str) -> Command {
        Command::Error {
            args: Args::new().with(
                MESSAGE_FIELD,
                format!("Unable to parse verb. ({})", line),
            ),
        }
    }

    /// The verb this command dispatches on
    pub fn verb(&self) -> Verb {
        match self {
            Command::Add { .. } => Verb::Add,
            Command::Remove { .. } => Verb::Remove,
            Command::Find { .. } => Verb::Find,
            Command::List { .. } => Verb::List,
            Command::Load { .. } => Verb::Load,
            Command::Save { .. } => Verb::Save,
            Command::Quit { .. } => Verb::Quit,
            Command::Unknown { .. } => Verb::Unknown,
            Command::Error { .. } => Verb::Error,
        }
    }

    /// Verb as it appeared on the line (the raw token for unknown verbs)
    pub fn name(&self) -> &str {
        match self {
            Command::Unknown { name, .. } => name,
            other => other.verb().as_str(),
        }
    }

    /// Parsed field map
    pub fn args(&self) -> &Args {
        match self {
            Command::Add { args }
            | Command::Remove { args }
            | Command::Find { args }
            | Command::List { args }
            | Command::Load { args }
            | Command::Save { args }
            | Command::Quit { args }
            | Command::Unknown { args, .. }
            | Command::Error { args } => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_verbs() {
        for verb in Verb::KNOWN {
            assert_eq!(Command::parse(verb.as_str()).verb(), verb);
        }
    }

    #[test]
    fn test_verb_matching_is_exact() {
        let cmd = Command::parse("LIST");
        assert_eq!(cmd.verb(), Verb::Unknown);
        assert_eq!(cmd.name(), "LIST");
    }

    #[test]
    fn test_error_verb_typed_is_unknown() {
        // "error" is internal; typing it is just an unknown verb
        assert_eq!(Command::parse("error").verb(), Verb::Unknown);
    }

    #[test]
    fn test_unparseable_line() {
        let cmd = Command::parse(";;;");
        assert_eq!(cmd.verb(), Verb::Error);
        assert_eq!(
            cmd.args().get(MESSAGE_FIELD),
            Some("Unable to parse verb. (;;;)")
        );
    }

    #[test]
    fn test_args_attached() {
        let cmd = Command::parse("load file=contacts.csv");
        assert_eq!(cmd.verb(), Verb::Load);
        assert_eq!(cmd.args().get(FILE_FIELD), Some("contacts.csv"));
    }

    #[test]
    fn test_listing_verbs() {
        assert!(Verb::List.is_listing());
        assert!(Verb::Find.is_listing());
        assert!(!Verb::Add.is_listing());
        assert!(!Verb::Quit.is_listing());
    }
}
