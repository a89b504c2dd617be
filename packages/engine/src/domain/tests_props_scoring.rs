//! Property tests for the scoring formula (pure domain).

use proptest::prelude::*;

use engine_test_support::props::proptest_config;

use crate::domain::scoring::{round_score, score_outcome, ScoreOutcome};

proptest! {
    #![proptest_config(proptest_config())]

    /// Exact hits always pay the flat bonus plus the actual.
    #[test]
    fn prop_exact_hit_formula(n in 0u8..=26) {
        prop_assert_eq!(round_score(n, n), 10 + i16::from(n));
    }

    /// Misses always pay ten minus the larger count, regardless of which
    /// side was larger.
    #[test]
    fn prop_miss_formula(bid in 0u8..=26, actual in 0u8..=26) {
        prop_assume!(bid != actual);
        let expected = 10 - i16::from(bid.max(actual));
        prop_assert_eq!(round_score(bid, actual), expected);
        prop_assert_eq!(round_score(actual, bid), expected);
    }

    /// A miss never outscores an exact hit at the same actual.
    #[test]
    fn prop_exact_dominates_misses(bid in 0u8..=26, actual in 0u8..=26) {
        prop_assume!(bid != actual);
        prop_assert!(round_score(bid, actual) < round_score(actual, actual));
    }

    /// Outcome classification agrees with the score's sign and exactness.
    #[test]
    fn prop_outcome_consistent(bid in 0u8..=26, actual in 0u8..=26) {
        let score = round_score(bid, actual);
        match score_outcome(bid, actual) {
            ScoreOutcome::Exact => prop_assert_eq!(bid, actual),
            ScoreOutcome::Missed => {
                prop_assert_ne!(bid, actual);
                prop_assert!(score >= 0);
            }
            ScoreOutcome::Penalized => {
                prop_assert_ne!(bid, actual);
                prop_assert!(score < 0);
            }
        }
    }
}
