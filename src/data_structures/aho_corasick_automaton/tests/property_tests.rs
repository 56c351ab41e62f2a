// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Aho-Corasick pattern automaton.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::data_structures::aho_corasick_automaton::PatternAutomaton;

// Strategy for pattern sets over a tiny alphabet, so overlaps, nesting and
// duplicates are common rather than rare.
fn patterns_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[ab]{1,4}").unwrap(), 1..8)
}

// Strategy for scan texts over the same alphabet.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,64}").unwrap()
}

fn build_automaton(patterns: &[String]) -> PatternAutomaton {
    let mut automaton = PatternAutomaton::new();
    for pattern in patterns {
        automaton.add_pattern(pattern).unwrap();
    }
    automaton.build().unwrap();
    automaton
}

// Collects scan results as (pattern text, end position) pairs, sorted so
// that outputs of different automatons are comparable.
fn automaton_events(automaton: &PatternAutomaton, text: &str) -> Vec<(String, usize)> {
    let mut events: Vec<(String, usize)> = automaton
        .search(text)
        .unwrap()
        .map(|event| {
            let event = event.unwrap();
            let pattern = automaton.pattern_text(event.pattern).unwrap().to_string();
            (pattern, event.end)
        })
        .collect();
    events.sort();
    events
}

// Oracle: for every character position, report each distinct pattern whose
// occurrence ends exactly there, by direct slice comparison.
fn naive_events(patterns: &[String], text: &str) -> Vec<(String, usize)> {
    let mut seen = HashSet::new();
    let unique: Vec<&String> = patterns.iter().filter(|p| seen.insert(p.as_str())).collect();

    let chars: Vec<char> = text.chars().collect();
    let mut events = Vec::new();
    for end in 0..chars.len() {
        for pattern in &unique {
            let pattern_chars: Vec<char> = pattern.chars().collect();
            let len = pattern_chars.len();
            if len <= end + 1 && chars[end + 1 - len..=end] == pattern_chars[..] {
                events.push(((*pattern).clone(), end));
            }
        }
    }
    events.sort();
    events
}

proptest! {
    // Property: a single automaton pass reports exactly the occurrences a
    // position-by-position slice comparison finds.
    #[test]
    fn prop_matches_naive_reference(
        patterns in patterns_strategy(),
        text in text_strategy()
    ) {
        let automaton = build_automaton(&patterns);
        prop_assert_eq!(automaton_events(&automaton, &text), naive_events(&patterns, &text));
    }

    // Property: inserting every pattern twice produces an automaton
    // indistinguishable from one built with single insertions.
    #[test]
    fn prop_duplicate_insertion_is_idempotent(
        patterns in patterns_strategy(),
        text in text_strategy()
    ) {
        let once = build_automaton(&patterns);

        let doubled: Vec<String> = patterns
            .iter()
            .chain(patterns.iter())
            .cloned()
            .collect();
        let twice = build_automaton(&doubled);

        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.pattern_count(), twice.pattern_count());
        prop_assert_eq!(
            automaton_events(&once, &text),
            automaton_events(&twice, &text)
        );
    }

    // Property: insertion order does not affect what a scan reports.
    #[test]
    fn prop_insertion_order_is_irrelevant(
        (patterns, shuffled) in patterns_strategy()
            .prop_flat_map(|patterns| {
                let shuffled = Just(patterns.clone()).prop_shuffle();
                (Just(patterns), shuffled)
            }),
        text in text_strategy()
    ) {
        let original = build_automaton(&patterns);
        let reordered = build_automaton(&shuffled);

        prop_assert_eq!(original.node_count(), reordered.node_count());
        prop_assert_eq!(
            automaton_events(&original, &text),
            automaton_events(&reordered, &text)
        );
    }

    // Property: every reported event corresponds to a real occurrence
    // ending at the reported character position.
    #[test]
    fn prop_events_are_real_occurrences(
        patterns in patterns_strategy(),
        text in text_strategy()
    ) {
        let automaton = build_automaton(&patterns);
        let chars: Vec<char> = text.chars().collect();

        for (pattern, end) in automaton_events(&automaton, &text) {
            let pattern_chars: Vec<char> = pattern.chars().collect();
            let len = pattern_chars.len();
            prop_assert!(len <= end + 1);
            prop_assert_eq!(&chars[end + 1 - len..=end], &pattern_chars[..]);
        }
    }
}
