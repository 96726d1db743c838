//! Unit tests for the history module
//!
//! Tests cover:
//! - Recording rules (trimming, empty lines, duplicate suppression)
//! - The bounded overwriting window
//! - Oldest-to-newest listing
//! - Fuzzy suggestion ranking

use cyclebuf::{CommandHistory, DEFAULT_HISTORY_CAPACITY};

#[test]
fn test_default_window_is_eight_lines() {
    assert_eq!(DEFAULT_HISTORY_CAPACITY, 8);
    let mut history = CommandHistory::new();
    for i in 0..12 {
        history.record(&format!("command-{i}"));
    }
    assert_eq!(history.len(), 8);
    // The four oldest lines were overwritten.
    assert_eq!(history.entries().first().unwrap(), "command-4");
    assert_eq!(history.entries().last().unwrap(), "command-11");
}

#[test]
fn test_entries_listed_oldest_to_newest() {
    let mut history = CommandHistory::with_capacity(4);
    history.record("spawn goblin");
    history.record("give sword");
    history.record("teleport home");
    assert_eq!(
        history.entries(),
        vec!["spawn goblin", "give sword", "teleport home"]
    );
}

#[test]
fn test_blank_input_suggests_recent_first() {
    let mut history = CommandHistory::with_capacity(4);
    history.record("first");
    history.record("second");
    history.record("third");
    assert_eq!(history.suggestions(""), vec!["third", "second", "first"]);
    assert_eq!(history.suggestions("   "), vec!["third", "second", "first"]);
}

#[test]
fn test_suggestions_filter_by_fuzzy_match() {
    let mut history = CommandHistory::with_capacity(8);
    history.record("spawn goblin");
    history.record("spawn dragon");
    history.record("quit");
    let matched = history.suggestions("spawn");
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|line| line.starts_with("spawn")));
    assert!(history.suggestions("zzzz").is_empty());
}

#[test]
fn test_duplicate_of_last_entry_is_dropped() {
    let mut history = CommandHistory::with_capacity(4);
    history.record("status");
    history.record("status");
    history.record("help");
    history.record("status");
    assert_eq!(history.entries(), vec!["status", "help", "status"]);
}

#[test]
fn test_clear_forgets_everything() {
    let mut history = CommandHistory::with_capacity(4);
    history.record("one");
    history.record("two");
    history.clear();
    assert!(history.is_empty());
    assert!(history.entries().is_empty());
    history.record("three");
    assert_eq!(history.entries(), vec!["three"]);
}
