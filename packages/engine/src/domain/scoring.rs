//! Per-round scoring: exact bids are rewarded, misses penalized by the
//! larger of the two counts.

use serde::{Deserialize, Serialize};

/// Score for one player in one round.
///
/// An exact hit pays `10 + actual`, so the bonus grows with the size of the
/// bid. A miss pays `10 - max(bid, actual)`, which goes negative once the
/// larger of the two counts exceeds 10. Total over all non-negative inputs.
pub fn round_score(bid: u8, actual: u8) -> i16 {
    if actual == bid {
        10 + i16::from(actual)
    } else {
        10 - i16::from(bid.max(actual))
    }
}

/// Classification of a scored (bid, actual) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreOutcome {
    /// Bid matched the actual exactly.
    Exact,
    /// Missed, but the penalty left the score non-negative.
    Missed,
    /// Missed badly enough that the round scored below zero.
    Penalized,
}

pub fn score_outcome(bid: u8, actual: u8) -> ScoreOutcome {
    if bid == actual {
        ScoreOutcome::Exact
    } else if round_score(bid, actual) < 0 {
        ScoreOutcome::Penalized
    } else {
        ScoreOutcome::Missed
    }
}
