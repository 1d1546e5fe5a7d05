//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one contact per line, log messages as-is, `(error) ...`
//! - **JSON** (`--json`): `serde_json::to_string_pretty` for results, one
//!   compact object per log event

use rolodex_executor::{Contact, Error, LogEvent, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a listing result.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_contacts(output.contacts()),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Format a log event echoed to the transcript.
pub fn format_event(event: &LogEvent, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            serde_json::to_string(event).unwrap_or_else(|_| event.message.clone())
        }
        OutputMode::Human => event.message.clone(),
    }
}

fn format_contacts(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
