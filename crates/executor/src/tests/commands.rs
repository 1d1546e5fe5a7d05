//! Command-by-command behavior through the line protocol.

use std::sync::Arc;

use crate::{Command, ContactId, Error, Executor, LogLevel, Output, RecordingSink};

/// Create a test executor with a recording listener.
fn create_test_executor() -> (Executor, Arc<RecordingSink>) {
    let executor = Executor::default();
    let sink = Arc::new(RecordingSink::new());
    executor.subscribe(sink.clone());
    (executor, sink)
}

fn run(executor: &mut Executor, line: &str) -> Output {
    executor.execute_line(line).unwrap()
}

// =============================================================================
// Add / List
// =============================================================================

#[test]
fn test_add_then_list() {
    let (mut executor, _) = create_test_executor();
    run(
        &mut executor,
        "add firstname=Jo;lastname=Li;street=1 Oak;city=X;state=Y;zip=1",
    );

    let listed = run(&mut executor, "list");
    let contacts = listed.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id(), Some(ContactId::FIRST));
    assert_eq!(contacts[0].first_name(), "Jo");
    assert_eq!(contacts[0].last_name(), "Li");
    assert_eq!(contacts[0].street(), "1 Oak");
    assert_eq!(contacts[0].city(), "X");
    assert_eq!(contacts[0].state(), "Y");
    assert_eq!(contacts[0].zip(), "1");
}

#[test]
fn test_add_returns_stored_contact() {
    let (mut executor, sink) = create_test_executor();
    let output = run(&mut executor, "add firstname=Jo;lastname=Li");
    assert_eq!(output.contacts()[0].id(), Some(ContactId::FIRST));
    assert!(sink
        .messages_at(LogLevel::Info)
        .contains(&"Add: adding new contact with ID 1 (Jo Li)".to_string()));
}

#[test]
fn test_add_without_fields_is_hard_failure() {
    let (mut executor, _) = create_test_executor();
    let err = executor.execute_line("add").unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(executor.repository().is_empty());
}

#[test]
fn test_list_is_sorted() {
    let (mut executor, _) = create_test_executor();
    for last in ["c", "a", "b"] {
        run(&mut executor, &format!("add lastname={}", last));
    }
    let lasts: Vec<_> = run(&mut executor, "list")
        .contacts()
        .iter()
        .map(|c| c.last_name().to_string())
        .collect();
    assert_eq!(lasts, vec!["a", "b", "c"]);
}

// =============================================================================
// Find / Remove
// =============================================================================

#[test]
fn test_find_by_field() {
    let (mut executor, _) = create_test_executor();
    run(&mut executor, "add firstname=Jo;lastname=Li;city=X");
    run(&mut executor, "add firstname=Al;lastname=Ng;city=Y");

    let found = run(&mut executor, "find city=Y");
    assert_eq!(found.contacts().len(), 1);
    assert_eq!(found.contacts()[0].first_name(), "Al");
}

#[test]
fn test_find_with_wildcard() {
    let (mut executor, _) = create_test_executor();
    run(&mut executor, "add firstname=Jo;lastname=Lim");
    run(&mut executor, "add firstname=Al;lastname=Li");
    run(&mut executor, "add firstname=Bo;lastname=Ng");

    let found = run(&mut executor, "find lastname=Li*");
    assert_eq!(found.contacts().len(), 2);
}

#[test]
fn test_find_without_fields_lists_everything() {
    let (mut executor, _) = create_test_executor();
    run(&mut executor, "add lastname=a");
    run(&mut executor, "add lastname=b");
    assert_eq!(run(&mut executor, "find").contacts().len(), 2);
}

#[test]
fn test_remove_by_fields() {
    let (mut executor, sink) = create_test_executor();
    run(&mut executor, "add firstname=Jo;lastname=Li");
    run(&mut executor, "add firstname=Al;lastname=Ng");

    let removed = run(&mut executor, "remove lastname=Li");
    assert_eq!(removed.contacts()[0].first_name(), "Jo");
    assert_eq!(executor.repository().len(), 1);
    assert!(sink
        .messages_at(LogLevel::Info)
        .contains(&"Remove: removed contact 1 (Jo Li)".to_string()));
}

#[test]
fn test_remove_no_match() {
    let (mut executor, sink) = create_test_executor();
    run(&mut executor, "add firstname=Jo;lastname=Li");
    let removed = run(&mut executor, "remove lastname=Zed");
    assert!(removed.contacts().is_empty());
    assert_eq!(executor.repository().len(), 1);
    assert_eq!(sink.messages_at(LogLevel::Warning).len(), 1);
}

#[test]
fn test_remove_without_fields_takes_first() {
    let (mut executor, _) = create_test_executor();
    run(&mut executor, "add lastname=b");
    run(&mut executor, "add lastname=a");
    let removed = run(&mut executor, "remove");
    assert_eq!(removed.contacts()[0].last_name(), "a");
}

// =============================================================================
// Quit / Unknown / Error
// =============================================================================

#[test]
fn test_quit() {
    let (mut executor, _) = create_test_executor();
    assert!(run(&mut executor, "quit").is_quit());
}

#[test]
fn test_unknown_verb_logs_and_does_nothing() {
    let (mut executor, sink) = create_test_executor();
    run(&mut executor, "add lastname=a");

    let output = run(&mut executor, "bogus;;;");
    assert!(output.contacts().is_empty());
    assert_eq!(executor.repository().len(), 1);
    assert_eq!(
        sink.messages_at(LogLevel::Error),
        vec!["Unknown command: bogus".to_string()]
    );
}

#[test]
fn test_unparseable_line_logs_and_does_nothing() {
    let (mut executor, sink) = create_test_executor();
    run(&mut executor, "add lastname=a");

    for line in [";;;", "", "   ", "=lastname=b"] {
        let output = run(&mut executor, line);
        assert_eq!(output, Output::default());
    }
    assert_eq!(executor.repository().len(), 1);
    let errors = sink.messages_at(LogLevel::Error);
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[0], "Unable to parse verb. (;;;)");
}

#[test]
fn test_uppercase_verb_is_unknown() {
    let (mut executor, sink) = create_test_executor();
    run(&mut executor, "ADD lastname=a");
    assert!(executor.repository().is_empty());
    assert_eq!(
        sink.messages_at(LogLevel::Error),
        vec!["Unknown command: ADD".to_string()]
    );
}

// =============================================================================
// Verbose events
// =============================================================================

#[test]
fn test_input_and_timing_reported_verbose() {
    let (mut executor, sink) = create_test_executor();
    run(&mut executor, "list");

    let verbose = sink.messages_at(LogLevel::Verbose);
    assert_eq!(verbose[0], "input: list");
    assert!(verbose[1].starts_with("list completed after: "));
    assert!(verbose[1].ends_with(" ms"));
}

#[test]
fn test_timing_reported_even_on_failure() {
    let (mut executor, sink) = create_test_executor();
    let _ = executor.execute(Command::parse("add"));
    let verbose = sink.messages_at(LogLevel::Verbose);
    assert!(verbose.iter().any(|m| m.starts_with("add completed after: ")));
}
