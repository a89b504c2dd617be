//! Round engine: setters re-derive every field from the full round state;
//! the phase moves only through the four guarded transitions below.
//!
//! Transitions whose precondition does not hold are silent no-ops that
//! return `false`. Callers are expected to consult the matching guard
//! ([`Round::can_lock_bids`], [`Round::can_finalize`]) before offering the
//! action, so a failed transition is not an error.

use std::collections::BTreeMap;

use crate::domain::players::PlayerId;
use crate::domain::scoring::round_score;
use crate::domain::state::{Phase, Round};
use crate::errors::domain::{DomainError, ValidationKind};

/// Replace the full bids map and re-derive the round.
///
/// Callable in any phase (the phase is untouched); only meaningful while
/// the round is still collecting bids. The incoming map must cover exactly
/// the round's roster.
pub fn set_bids(
    round: &mut Round,
    new_bids: BTreeMap<PlayerId, Option<u8>>,
) -> Result<(), DomainError> {
    require_same_roster(round, &new_bids)?;
    round.bids = new_bids;
    recompute(round);
    Ok(())
}

/// Set a single player's bid (`None` clears it) and re-derive the round.
pub fn set_bid(round: &mut Round, player: PlayerId, bid: Option<u8>) -> Result<(), DomainError> {
    let Some(slot) = round.bids.get_mut(&player) else {
        return Err(unknown_player(player));
    };
    *slot = bid;
    recompute(round);
    Ok(())
}

/// Replace the full actuals map and re-derive the round.
pub fn set_actuals(
    round: &mut Round,
    new_actuals: BTreeMap<PlayerId, Option<u8>>,
) -> Result<(), DomainError> {
    require_same_roster(round, &new_actuals)?;
    round.actuals = new_actuals;
    recompute(round);
    Ok(())
}

/// Set a single player's actual (`None` clears it) and re-derive the round.
pub fn set_actual(
    round: &mut Round,
    player: PlayerId,
    actual: Option<u8>,
) -> Result<(), DomainError> {
    let Some(slot) = round.actuals.get_mut(&player) else {
        return Err(unknown_player(player));
    };
    *slot = actual;
    recompute(round);
    Ok(())
}

/// Re-derive scores, the round total, and both validity flags from the full
/// round state.
///
/// A partially filled round never trips a validity flag: the sum rules are
/// checked only once every player has the respective entry set. Idempotent;
/// every derived field is a pure function of `(bids, actuals, round_no)`.
pub fn recompute(round: &mut Round) {
    let budget = u16::from(round.round_no);

    round.bids_invalid = round.bids_complete() && sum_set(&round.bids) == budget;
    round.actuals_invalid = round.actuals_complete() && sum_set(&round.actuals) != budget;

    let mut round_total = 0i16;
    for (player, slot) in round.scores.iter_mut() {
        let bid = round.bids.get(player).copied().flatten();
        let actual = round.actuals.get(player).copied().flatten();
        let score = match (bid, actual) {
            (Some(b), Some(a)) => round_score(b, a),
            _ => 0,
        };
        *slot = score;
        round_total += score;
    }
    round.round_total = round_total;
}

/// `Bids → Actuals`, iff every bid is set and the bid-sum rule holds.
pub fn lock_bids(round: &mut Round) -> bool {
    if !round.can_lock_bids() {
        return false;
    }
    round.phase = Phase::Actuals;
    true
}

/// `Actuals → Done`, iff every actual is set and accounts for all tricks.
pub fn finalize(round: &mut Round) -> bool {
    if !round.can_finalize() {
        return false;
    }
    round.phase = Phase::Done;
    true
}

/// `Actuals → Bids`: reopen bidding, clearing every recorded actual.
///
/// Bids are preserved; scores drop back to zero and `actuals_invalid`
/// clears because the actuals are incomplete again.
pub fn unlock(round: &mut Round) -> bool {
    if round.phase != Phase::Actuals {
        return false;
    }
    for slot in round.actuals.values_mut() {
        *slot = None;
    }
    round.phase = Phase::Bids;
    recompute(round);
    true
}

/// `Done → Actuals`: phase-only rollback for corrections; stored bids,
/// actuals, and scores are untouched.
pub fn revert_final(round: &mut Round) -> bool {
    if round.phase != Phase::Done {
        return false;
    }
    round.phase = Phase::Actuals;
    true
}

fn sum_set(entries: &BTreeMap<PlayerId, Option<u8>>) -> u16 {
    entries.values().flatten().map(|&v| u16::from(v)).sum()
}

fn require_same_roster(
    round: &Round,
    incoming: &BTreeMap<PlayerId, Option<u8>>,
) -> Result<(), DomainError> {
    if incoming.keys().eq(round.bids.keys()) {
        return Ok(());
    }
    Err(DomainError::validation(
        ValidationKind::UnknownPlayer,
        "entry map must cover exactly the session roster",
    ))
}

fn unknown_player(player: PlayerId) -> DomainError {
    DomainError::validation(
        ValidationKind::UnknownPlayer,
        format!("player {player} is not part of this round"),
    )
}
