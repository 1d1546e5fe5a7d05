//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test file.

#![allow(dead_code)]

use std::sync::Arc;

pub use rolodex::{
    BackendKind, Command, Contact, ContactId, Error, Executor, LogLevel, Output, RecordingSink,
    Repository,
};

// ============================================================================
// Executors
// ============================================================================

/// One executor per backend, each with a recording listener.
pub fn executors() -> Vec<(BackendKind, Executor, Arc<RecordingSink>)> {
    BackendKind::ALL
        .into_iter()
        .map(|kind| {
            let (executor, sink) = recorded(kind);
            (kind, executor, sink)
        })
        .collect()
}

/// Executor over a fresh backend of `kind` with a recording listener.
pub fn recorded(kind: BackendKind) -> (Executor, Arc<RecordingSink>) {
    let executor = Executor::new(Repository::with_kind(kind));
    let sink = Arc::new(RecordingSink::new());
    executor.subscribe(sink.clone());
    (executor, sink)
}

// ============================================================================
// Assertions
// ============================================================================

/// Run one line, panicking on hard failure.
pub fn run(executor: &mut Executor, line: &str) -> Output {
    executor
        .execute_line(line)
        .unwrap_or_else(|e| panic!("{:?} failed: {}", line, e))
}

/// Last names in listing order.
pub fn last_names(executor: &Executor) -> Vec<String> {
    executor
        .repository()
        .contacts()
        .map(|c| c.last_name().to_string())
        .collect()
}

/// Identifiers in listing order.
pub fn ids(executor: &Executor) -> Vec<u64> {
    executor
        .repository()
        .contacts()
        .filter_map(|c| c.id())
        .map(|id| id.as_u64())
        .collect()
}
