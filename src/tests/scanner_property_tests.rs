// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the similarity scanner.
//!
//! These exercise the scoring layer as a whole, complementing the
//! automaton-level properties that check raw match reporting.

use proptest::prelude::*;

use crate::config::detection::{DetectionConfig, ScoringMode};
use crate::detection::SimilarityScanner;

use super::test_utils::{candidate_strategy, corpus_strategy};

proptest! {
    // Property: under match-event scoring, the reported score is exactly
    // hit_count / candidate_chars * 100.
    #[test]
    fn prop_match_event_score_formula(
        corpus in corpus_strategy(6),
        candidate in candidate_strategy(48)
    ) {
        prop_assume!(!candidate.is_empty());

        let scanner = SimilarityScanner::default();
        let report = scanner.check_similarity(&candidate, &corpus).unwrap();

        let expected = report.hit_count as f64 / report.candidate_chars as f64 * 100.0;
        prop_assert!((report.score_percent - expected).abs() < 1e-9);
        prop_assert_eq!(report.candidate_chars, candidate.chars().count());
    }

    // Property: empty corpus entries change nothing; the scan behaves as if
    // they had been filtered out beforehand.
    #[test]
    fn prop_empty_entries_are_skipped(
        corpus in corpus_strategy(6),
        candidate in candidate_strategy(48)
    ) {
        prop_assume!(!candidate.is_empty());

        let mut padded = corpus.clone();
        padded.insert(0, String::new());
        padded.push(String::new());

        let scanner = SimilarityScanner::default();
        let clean_report = scanner.check_similarity(&candidate, &corpus).unwrap();
        let padded_report = scanner.check_similarity(&candidate, &padded).unwrap();

        prop_assert_eq!(clean_report, padded_report);
    }

    // Property: character-coverage scores are a percentage of the candidate
    // and can never leave [0, 100].
    #[test]
    fn prop_coverage_score_is_bounded(
        corpus in corpus_strategy(6),
        candidate in candidate_strategy(48)
    ) {
        prop_assume!(!candidate.is_empty());

        let scanner = SimilarityScanner::new(DetectionConfig {
            scoring: ScoringMode::CharacterCoverage,
            ..DetectionConfig::default()
        });
        let report = scanner.check_similarity(&candidate, &corpus).unwrap();

        prop_assert!(report.score_percent >= 0.0);
        prop_assert!(report.score_percent <= 100.0);
    }

    // Property: the verdict is exactly the strict threshold comparison.
    #[test]
    fn prop_verdict_consistent_with_score(
        corpus in corpus_strategy(6),
        candidate in candidate_strategy(48)
    ) {
        prop_assume!(!candidate.is_empty());

        let scanner = SimilarityScanner::default();
        let report = scanner.check_similarity(&candidate, &corpus).unwrap();

        prop_assert_eq!(
            report.verdict.is_flagged(),
            report.score_percent > report.threshold_percent
        );
    }
}
