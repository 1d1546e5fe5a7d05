//! Session configuration via `rolodex.toml`
//!
//! Every key is optional. Command-line flags override whatever the file says.

use rolodex_core::{CaseSensitivity, ContactOrdering};
use rolodex_storage::{BackendKind, Repository, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "rolodex.toml";

/// Prompt printed before each interactive line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Session configuration loaded from `rolodex.toml`.
///
/// # Example
///
/// ```toml
/// backend = "array"
/// capacity = 500
/// ordering = "ignore-case"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RolodexConfig {
    /// Storage strategy: `"array"`, `"hash"` or `"sorted"`.
    pub backend: BackendKind,
    /// Slot count for the array backend.
    pub capacity: usize,
    /// Name comparison: `"ordinal"` or `"ignore-case"`.
    pub ordering: CaseSensitivity,
    /// Interactive prompt.
    pub prompt: String,
    /// Echo verbose events (input echo, timings) to the transcript.
    pub echo_verbose: bool,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            capacity: DEFAULT_CAPACITY,
            ordering: CaseSensitivity::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            echo_verbose: false,
        }
    }
}

impl RolodexConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Rolodex configuration
#
# Storage strategy: "array", "hash" or "sorted" (default)
#   "array"  = fixed slot count, add fails softly when full
#   "hash"   = identifier-keyed table, sorted on read
#   "sorted" = growable list kept in order
backend = "sorted"

# Slot count for the array backend (default: 100)
capacity = 100

# Name comparison: "ordinal" (default) or "ignore-case"
ordering = "ordinal"

# Interactive prompt
prompt = "> "

# Echo verbose events (input echo, command timings)
echo_verbose = false
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unknown keys or bad values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidInput {
            reason: format!("Failed to parse config: {}", e),
        })
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| Error::InvalidInput {
            reason: format!("Failed to parse config file '{}': {}", path.display(), e),
        })
    }

    /// Ordering policy selected by this config.
    pub fn contact_ordering(&self) -> ContactOrdering {
        ContactOrdering::new(self.ordering)
    }

    /// Empty repository built to this config.
    pub fn build_repository(&self) -> Repository {
        Repository::new(self.backend.build(self.capacity)).with_ordering(self.contact_ordering())
    }
}
