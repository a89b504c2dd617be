//! Public snapshot API for observing a session without exposing internals.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::players::PlayerId;
use crate::domain::rules::dealer_for_round;
use crate::domain::session::Session;
use crate::domain::state::{Phase, Round};
use crate::domain::tally::find_leaders;

/// Public info about one seated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
}

/// One round as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round_no: u8,
    /// Dealer for this round (rotates through the roster seat by seat).
    pub dealer: PlayerId,
    pub phase: Phase,
    pub bids: BTreeMap<PlayerId, Option<u8>>,
    pub actuals: BTreeMap<PlayerId, Option<u8>>,
    pub scores: BTreeMap<PlayerId, i16>,
    pub round_total: i16,
    pub bids_invalid: bool,
    pub actuals_invalid: bool,
    /// The lock action is offerable right now.
    pub can_lock_bids: bool,
    /// The finalize action is offerable right now.
    pub can_finalize: bool,
}

/// Aggregated standings snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TallySnapshot {
    pub cumulative: BTreeMap<PlayerId, i16>,
    pub share_pct: BTreeMap<PlayerId, f64>,
    pub exact_hits: BTreeMap<PlayerId, u8>,
    pub cum_total: i16,
    /// Players tied at the maximum cumulative score.
    pub leaders: BTreeSet<PlayerId>,
}

/// Top-level snapshot combining roster, rounds, and standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<PlayerPublic>,
    pub round_count: u8,
    /// First round not yet finalized; `None` once the game is over.
    pub current_round: Option<usize>,
    pub rounds: Vec<RoundSnapshot>,
    pub tally: TallySnapshot,
}

/// Entry point: produce a snapshot of the current session. Never panics.
pub fn snapshot(session: &Session) -> SessionSnapshot {
    let players: Vec<PlayerPublic> = session
        .players()
        .iter()
        .map(|p| PlayerPublic {
            id: p.id,
            name: p.name.clone(),
        })
        .collect();

    let rounds: Vec<RoundSnapshot> = session
        .rounds()
        .iter()
        .map(|rd| snapshot_round(session, rd))
        .collect();

    let tallies = session.tallies();
    let leaders = find_leaders(&tallies.cumulative);
    let tally = TallySnapshot {
        cumulative: tallies.cumulative,
        share_pct: tallies.share_pct,
        exact_hits: tallies.exact_hits,
        cum_total: tallies.cum_total,
        leaders,
    };

    SessionSnapshot {
        players,
        round_count: session.round_count(),
        current_round: session.current_round_index(),
        rounds,
        tally,
    }
}

fn snapshot_round(session: &Session, round: &Round) -> RoundSnapshot {
    let dealer_seat = dealer_for_round(round.round_no, session.players().len());
    RoundSnapshot {
        round_no: round.round_no,
        dealer: session.players()[dealer_seat].id,
        phase: round.phase,
        bids: round.bids.clone(),
        actuals: round.actuals.clone(),
        scores: round.scores.clone(),
        round_total: round.round_total,
        bids_invalid: round.bids_invalid,
        actuals_invalid: round.actuals_invalid,
        can_lock_bids: round.can_lock_bids(),
        can_finalize: round.can_finalize(),
    }
}
