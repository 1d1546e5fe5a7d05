//! Tests for the execute_many batch execution method.
//!
//! These tests verify that batch command execution works correctly,
//! including error handling and result ordering.

use crate::{Command, Error, Executor, Output};

#[test]
fn test_execute_many_empty() {
    let mut executor = Executor::default();
    let results = executor.execute_many(vec![]);
    assert!(results.is_empty());
}

#[test]
fn test_execute_many_preserves_order() {
    let mut executor = Executor::default();
    let results = executor.execute_many(vec![
        Command::parse("add firstname=a;lastname=x"),
        Command::parse("add firstname=b;lastname=x"),
        Command::parse("list"),
        Command::parse("quit"),
    ]);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().contacts()[0].first_name(), "a");
    assert_eq!(results[1].as_ref().unwrap().contacts()[0].first_name(), "b");
    assert_eq!(results[2].as_ref().unwrap().contacts().len(), 2);
    assert_eq!(results[3], Ok(Output::Quit));
}

#[test]
fn test_execute_many_continues_after_error() {
    let mut executor = Executor::default();
    let results = executor.execute_many(vec![
        Command::parse("add"),
        Command::parse("add lastname=after"),
        Command::parse("list"),
    ]);

    assert!(matches!(results[0], Err(Error::InvalidInput { .. })));
    assert!(results[1].is_ok());
    assert_eq!(results[2].as_ref().unwrap().contacts().len(), 1);
}

#[test]
fn test_execute_many_does_not_stop_at_quit() {
    // quit is an output, not a control signal, at this layer
    let mut executor = Executor::default();
    let results = executor.execute_many(vec![
        Command::parse("quit"),
        Command::parse("add lastname=later"),
    ]);
    assert!(results[0].as_ref().unwrap().is_quit());
    assert_eq!(executor.repository().len(), 1);
}
