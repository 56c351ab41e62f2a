// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Behavioral tests for automaton construction, scanning and cancellation.

use crate::data_structures::aho_corasick_automaton::{
    AutomatonError, PatternAutomaton, Result, ScanCancellation,
};

fn built(patterns: &[&str]) -> PatternAutomaton {
    let mut automaton = PatternAutomaton::new();
    for pattern in patterns {
        automaton.add_pattern(pattern).unwrap();
    }
    automaton.build().unwrap();
    automaton
}

fn events(automaton: &PatternAutomaton, text: &str) -> Vec<(String, usize)> {
    automaton
        .search(text)
        .unwrap()
        .map(|event| {
            let event = event.unwrap();
            let pattern = automaton.pattern_text(event.pattern).unwrap().to_string();
            (pattern, event.end)
        })
        .collect()
}

#[test]
fn test_textbook_pattern_set() {
    let automaton = built(&["he", "she", "his", "hers"]);

    let found = events(&automaton, "ahishers");

    assert_eq!(
        found,
        vec![
            ("his".to_string(), 3),
            ("he".to_string(), 5),
            ("she".to_string(), 5),
            ("hers".to_string(), 7),
        ]
    );
}

#[test]
fn test_overlapping_outputs_inherited_through_failure_links() {
    let automaton = built(&["ab", "b"]);

    // Reaching the "ab" state must also report the nested "b".
    let found = events(&automaton, "ab");

    assert_eq!(
        found,
        vec![("ab".to_string(), 1), ("b".to_string(), 1)]
    );
}

#[test]
fn test_no_matches_on_disjoint_text() {
    let automaton = built(&["needle", "haystack"]);
    assert!(events(&automaton, "completely unrelated").is_empty());
}

#[test]
fn test_empty_text_yields_nothing() {
    let automaton = built(&["he"]);
    assert!(events(&automaton, "").is_empty());
}

#[test]
fn test_empty_automaton_searches_cleanly() {
    let mut automaton = PatternAutomaton::new();
    automaton.build().unwrap();

    let found: Vec<_> = automaton.search("anything at all").unwrap().collect();
    assert!(found.is_empty());
}

#[test]
fn test_duplicate_insertion_is_idempotent() {
    let mut once = PatternAutomaton::new();
    let first = once.add_pattern("kope").unwrap();
    let second = once.add_pattern("kope").unwrap();
    assert_eq!(first, second);
    assert_eq!(once.pattern_count(), 1);

    let mut twice = PatternAutomaton::new();
    twice.add_pattern("kope").unwrap();
    assert_eq!(once.node_count(), twice.node_count());

    once.build().unwrap();
    twice.build().unwrap();
    let text = "kope kope";
    let once_events: Vec<_> = once.search(text).unwrap().collect();
    let twice_events: Vec<_> = twice.search(text).unwrap().collect();
    assert_eq!(once_events.len(), 2);
    assert_eq!(once_events.len(), twice_events.len());
}

#[test]
fn test_empty_pattern_is_rejected() {
    let mut automaton = PatternAutomaton::new();
    assert_eq!(
        automaton.add_pattern(""),
        Err(AutomatonError::EmptyPattern)
    );
    assert_eq!(automaton.pattern_count(), 0);
}

#[test]
fn test_search_before_build_is_rejected() {
    let mut automaton = PatternAutomaton::new();
    automaton.add_pattern("he").unwrap();

    assert!(matches!(
        automaton.search("ahishers"),
        Err(AutomatonError::NotBuilt)
    ));
    assert!(!automaton.is_built());
}

#[test]
fn test_mutation_after_build_is_rejected() {
    let mut automaton = built(&["he"]);

    assert_eq!(
        automaton.add_pattern("she"),
        Err(AutomatonError::AlreadyBuilt)
    );
    assert_eq!(automaton.build(), Err(AutomatonError::AlreadyBuilt));
    assert!(automaton.is_built());
}

#[test]
fn test_positions_are_character_indices() {
    let automaton = built(&["fé", "é"]);

    // "café" is five bytes but four characters; both matches end at
    // character position 3.
    let found = events(&automaton, "café");

    assert_eq!(
        found,
        vec![("fé".to_string(), 3), ("é".to_string(), 3)]
    );
}

#[test]
fn test_pattern_metadata_accessors() {
    let mut automaton = PatternAutomaton::new();
    let id = automaton.add_pattern("café").unwrap();

    assert_eq!(automaton.pattern_text(id), Some("café"));
    assert_eq!(automaton.pattern_char_len(id), Some(4));
    assert_eq!(automaton.pattern_count(), 1);
}

#[test]
fn test_stream_is_fused() {
    let automaton = built(&["ab"]);
    let mut stream = automaton.search("ab").unwrap();

    assert!(stream.next().is_some());
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn test_cancelled_scan_yields_single_error_then_fuses() {
    let automaton = built(&["a"]);
    let text = "a".repeat(4096);

    let token = ScanCancellation::new();
    token.cancel();

    let mut stream = automaton.search_cancellable(&text, token).unwrap();
    let mut ok_count = 0;
    let mut err = None;
    for item in stream.by_ref() {
        match item {
            Ok(_) => ok_count += 1,
            Err(e) => {
                err = Some(e);
                break;
            }
        }
    }

    assert_eq!(err, Some(AutomatonError::Cancelled));
    assert!(ok_count < 4096);
    assert!(stream.next().is_none());
}

#[test]
fn test_uncancelled_token_does_not_disturb_scan() {
    let automaton = built(&["a"]);
    let text = "a".repeat(4096);

    let token = ScanCancellation::new();
    let found: Result<Vec<_>> = automaton
        .search_cancellable(&text, token)
        .unwrap()
        .collect();

    assert_eq!(found.unwrap().len(), 4096);
}
