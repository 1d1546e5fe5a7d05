//! Load and save through the line protocol.

use std::sync::Arc;
use tempfile::TempDir;

use crate::{ContactId, Executor, LogLevel, Output, RecordingSink};

fn create_test_executor() -> (Executor, Arc<RecordingSink>) {
    let executor = Executor::default();
    let sink = Arc::new(RecordingSink::new());
    executor.subscribe(sink.clone());
    (executor, sink)
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");

    let (mut executor, _) = create_test_executor();
    executor
        .execute_line("add firstname=Jo;lastname=Li;street=1 Oak;city=X;state=Y;zip=1")
        .unwrap();
    executor
        .execute_line("add firstname=Al;lastname=Ng;city=Z")
        .unwrap();
    let saved = executor
        .execute_line(&format!("save file={}", path.display()))
        .unwrap();
    assert_eq!(saved, Output::Unit);
    let before = executor.execute_line("list").unwrap();

    let (mut fresh, sink) = create_test_executor();
    fresh.execute_line("add lastname=residue").unwrap();
    let loaded = fresh
        .execute_line(&format!("load file={}", path.display()))
        .unwrap();

    assert_eq!(loaded, before);
    assert_eq!(fresh.execute_line("list").unwrap(), before);
    assert!(sink
        .messages_at(LogLevel::Info)
        .contains(&"Loaded 2 contacts".to_string()));
    assert_eq!(fresh.repository().next_id(), Some(ContactId::new(3)));
}

#[test]
fn test_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    std::fs::write(&path, "stale content that is much longer than the new file\n".repeat(20))
        .unwrap();

    let (mut executor, _) = create_test_executor();
    executor.execute_line("add lastname=only").unwrap();
    executor
        .execute_line(&format!("save file={}", path.display()))
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("stale"));
}

#[test]
fn test_load_without_file_is_soft_failure() {
    let (mut executor, sink) = create_test_executor();
    executor.execute_line("add lastname=keep").unwrap();

    let output = executor.execute_line("load").unwrap();
    assert!(output.contacts().is_empty());
    assert_eq!(executor.repository().len(), 1);
    assert_eq!(
        sink.messages_at(LogLevel::Error),
        vec!["Load command requires a 'file' argument with the path to an existing CSV file."
            .to_string()]
    );
}

#[test]
fn test_load_missing_path_is_soft_failure() {
    let dir = TempDir::new().unwrap();
    let (mut executor, sink) = create_test_executor();
    executor.execute_line("add lastname=keep").unwrap();

    executor
        .execute_line(&format!("load file={}", dir.path().join("nope.csv").display()))
        .unwrap();
    assert_eq!(executor.repository().len(), 1);
    assert_eq!(
        sink.messages_at(LogLevel::Error),
        vec!["Load command 'file' argument must refer to an existing CSV file.".to_string()]
    );
}

#[test]
fn test_load_malformed_file_is_soft_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "id,firstname\nnot-a-number,Jo\n").unwrap();

    let (mut executor, sink) = create_test_executor();
    executor.execute_line("add lastname=keep").unwrap();
    executor
        .execute_line(&format!("load file={}", path.display()))
        .unwrap();

    assert_eq!(executor.repository().len(), 1);
    assert_eq!(sink.messages_at(LogLevel::Error).len(), 1);
}

#[test]
fn test_save_without_file_is_soft_failure() {
    let (mut executor, sink) = create_test_executor();
    assert_eq!(executor.execute_line("save").unwrap(), Output::Unit);
    assert_eq!(
        sink.messages_at(LogLevel::Error),
        vec!["Save command requires a 'file' argument with the path to a new or existing CSV file."
            .to_string()]
    );
}

#[test]
fn test_save_to_unwritable_path_is_soft_failure() {
    let dir = TempDir::new().unwrap();
    let (mut executor, sink) = create_test_executor();
    executor.execute_line("add lastname=a").unwrap();
    let target = dir.path().join("missing-dir").join("out.csv");
    assert_eq!(
        executor
            .execute_line(&format!("save file={}", target.display()))
            .unwrap(),
        Output::Unit
    );
    assert_eq!(sink.messages_at(LogLevel::Error).len(), 1);
}
