//! Line tokenizer for the text command protocol
//!
//! Grammar: `<verb>[ <field>=<value>[;<field>=<value>...]]`
//!
//! Parsing runs in two stages:
//! 1. The verb is the first run of word characters after leading whitespace.
//! 2. `field=value` pairs are scanned across the whole line. A field is a
//!    run of word characters immediately followed by `=`; the value is
//!    everything up to the next `;` or end of line and must be non-empty.
//!
//! Field names are case-insensitive and the last duplicate wins. Values are
//! kept raw (no trimming).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between `field=value` pairs
pub const PAIR_SEPARATOR: char = ';';

/// Separator between a field name and its value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Word characters: letters, digits and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Field-name to value map with case-insensitive keys
///
/// Keys are stored lowercased. Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Args {
    fields: BTreeMap<String, String>,
}

impl Args {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_lowercase(), value.into());
    }

    /// Builder-style [`Args::insert`]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for a field, any case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_lowercase()).map(String::as_str)
    }

    /// True if the field is present
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if no field was given
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for Args {
    fn from(map: BTreeMap<String, String>) -> Self {
        let mut args = Args::new();
        for (k, v) in map {
            args.insert(&k, v);
        }
        args
    }
}

impl From<Args> for BTreeMap<String, String> {
    fn from(args: Args) -> Self {
        args.fields
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Args {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut args = Args::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

/// Result of tokenizing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Leading word token, or `None` if the line has none
    pub verb: Option<String>,
    /// Fields found on the line (empty when there is no verb)
    pub args: Args,
}

/// Tokenize one line
pub fn parse_line(line: &str) -> ParsedLine {
    match leading_word(line.trim_start()) {
        Some(verb) => ParsedLine {
            verb: Some(verb.to_string()),
            args: FieldScanner::new(line).collect(),
        },
        None => ParsedLine {
            verb: None,
            args: Args::new(),
        },
    }
}

fn leading_word(text: &str) -> Option<&str> {
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(text.len(), |(i, _)| i);
    (end > 0).then(|| &text[..end])
}

/// Iterator over the `field=value` pairs of a line, left to right
#[derive(Debug, Clone)]
pub struct FieldScanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> FieldScanner<'a> {
    /// Scan `line` from the start
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'a> Iterator for FieldScanner<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.line.len() {
            let rest = &self.line[self.pos..];

            let word_len = rest
                .char_indices()
                .find(|&(_, c)| !is_word_char(c))
                .map_or(rest.len(), |(i, _)| i);

            if word_len == 0 {
                // skip one non-word char
                let step = rest.chars().next().map_or(1, char::len_utf8);
                self.pos += step;
                continue;
            }

            let key = &rest[..word_len];
            let after_key = &rest[word_len..];

            if let Some(value_part) = after_key.strip_prefix(KEY_VALUE_SEPARATOR) {
                let value_len = value_part
                    .find(PAIR_SEPARATOR)
                    .unwrap_or(value_part.len());
                if value_len > 0 {
                    let value = &value_part[..value_len];
                    self.pos += word_len + KEY_VALUE_SEPARATOR.len_utf8() + value_len;
                    return Some((key, value));
                }
            }

            self.pos += word_len;
        }
        None
    }
}
