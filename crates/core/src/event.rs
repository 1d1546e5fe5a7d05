//! Leveled log events and the sinks that receive them
//!
//! The repository and the command layer publish [`LogEvent`]s on an
//! [`EventBus`]. Delivery is synchronous and in-process: every subscribed
//! [`LogSink`] sees every event, in subscription order, before `emit` returns.
//! Nothing is queued or dropped.

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Severity of a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail (timings, raw input)
    Verbose,
    /// Normal progress
    Info,
    /// Recoverable surprise (e.g. nothing removed)
    Warning,
    /// Soft failure that was recovered
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// A single leveled message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Severity
    pub level: LogLevel,
    /// Rendered message
    pub message: String,
}

impl LogEvent {
    /// Create an event
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Receiver of log events
pub trait LogSink: Send + Sync {
    /// Called once per event, synchronously
    fn on_event(&self, event: &LogEvent);
}

impl<F> LogSink for F
where
    F: Fn(&LogEvent) + Send + Sync,
{
    fn on_event(&self, event: &LogEvent) {
        self(event)
    }
}

/// Publish/subscribe hub for log events
///
/// Clones share one listener list, so a sink subscribed through any clone
/// receives events emitted through every other clone.
#[derive(Clone, Default)]
pub struct EventBus {
    sinks: Arc<RwLock<Vec<Arc<dyn LogSink>>>>,
}

impl EventBus {
    /// Bus with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&self, sink: Arc<dyn LogSink>) {
        self.sinks.write().push(sink);
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Deliver an event to every listener
    pub fn emit(&self, level: LogLevel, message: impl Into<String>) {
        let event = LogEvent::new(level, message);
        // Snapshot so a sink may subscribe from inside on_event
        let sinks = self.sinks.read().clone();
        for sink in &sinks {
            sink.on_event(&event);
        }
    }

    /// Emit at [`LogLevel::Verbose`]
    pub fn verbose(&self, message: impl Into<String>) {
        self.emit(LogLevel::Verbose, message);
    }

    /// Emit at [`LogLevel::Info`]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogLevel::Info, message);
    }

    /// Emit at [`LogLevel::Warning`]
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(LogLevel::Warning, message);
    }

    /// Emit at [`LogLevel::Error`]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogLevel::Error, message);
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn on_event(&self, event: &LogEvent) {
        match event.level {
            LogLevel::Verbose => tracing::debug!(target: "rolodex", "{}", event.message),
            LogLevel::Info => tracing::info!(target: "rolodex", "{}", event.message),
            LogLevel::Warning => tracing::warn!(target: "rolodex", "{}", event.message),
            LogLevel::Error => tracing::error!(target: "rolodex", "{}", event.message),
        }
    }
}

/// Keeps every event it receives, for inspection in tests and transcripts
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingSink {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<LogEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Messages recorded at the given level
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn on_event(&self, event: &LogEvent) {
        self.events.lock().push(event.clone());
    }
}
