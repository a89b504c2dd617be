use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::players::{Player, PlayerId};

/// Round lifecycle phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Collecting bids.
    Bids,
    /// Bids locked, collecting actual results.
    Actuals,
    /// Finalized; scores count toward the tallies.
    Done,
}

/// One played unit: `round_no` tricks at stake, bid for and then accounted
/// for by every player.
///
/// The `bids`/`actuals`/`scores` key set is fixed at creation to the session
/// roster and never changes afterwards; `None` marks an entry not yet made.
/// Every field below the maps is derived, re-computed from scratch by
/// [`crate::domain::round_lifecycle::recompute`] after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// 1-based round number; also the trick budget at stake this round.
    pub round_no: u8,
    /// Bid per player (`None` = player has not bid yet).
    pub bids: BTreeMap<PlayerId, Option<u8>>,
    /// Recorded tricks per player (`None` = not yet recorded).
    pub actuals: BTreeMap<PlayerId, Option<u8>>,
    /// Score per player; zero until both bid and actual are present.
    pub scores: BTreeMap<PlayerId, i16>,
    /// Sum of `scores` across players (informational only).
    pub round_total: i16,
    /// All bids present and their sum equals `round_no` (the one disallowed
    /// bidding configuration).
    pub bids_invalid: bool,
    /// All actuals present and their sum does not equal `round_no` (tricks
    /// taken must account for every trick at stake).
    pub actuals_invalid: bool,
    /// Lifecycle stage; only the guarded transitions move it.
    pub phase: Phase,
}

impl Round {
    /// Fresh round in the `Bids` phase with every entry unset.
    pub fn empty(round_no: u8, players: &[Player]) -> Self {
        let unset: BTreeMap<PlayerId, Option<u8>> =
            players.iter().map(|p| (p.id, None)).collect();
        Self {
            round_no,
            bids: unset.clone(),
            actuals: unset,
            scores: players.iter().map(|p| (p.id, 0)).collect(),
            round_total: 0,
            bids_invalid: false,
            actuals_invalid: false,
            phase: Phase::Bids,
        }
    }

    pub fn bids_complete(&self) -> bool {
        self.bids.values().all(Option::is_some)
    }

    pub fn actuals_complete(&self) -> bool {
        self.actuals.values().all(Option::is_some)
    }

    /// Guard for `Bids → Actuals`.
    pub fn can_lock_bids(&self) -> bool {
        self.phase == Phase::Bids && self.bids_complete() && !self.bids_invalid
    }

    /// Guard for `Actuals → Done`.
    pub fn can_finalize(&self) -> bool {
        self.phase == Phase::Actuals && self.actuals_complete() && !self.actuals_invalid
    }
}
