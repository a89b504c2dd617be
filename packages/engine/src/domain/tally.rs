//! Cross-round aggregation over finalized rounds.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::players::{Player, PlayerId};
use crate::domain::state::{Phase, Round};

/// Aggregated standings over every finalized round.
#[derive(Debug, Clone, PartialEq)]
pub struct Tallies {
    /// Running score total per player, `Done` rounds only.
    pub cumulative: BTreeMap<PlayerId, i16>,
    /// `100 * cumulative / cum_total` per player; all zeros unless
    /// `cum_total` is positive. A presentation percentage, not a
    /// probability: individual shares can be negative or exceed 100 when
    /// scores carry mixed signs.
    pub share_pct: BTreeMap<PlayerId, f64>,
    /// Rounds in which the player's bid matched their actual, `Done` rounds
    /// only.
    pub exact_hits: BTreeMap<PlayerId, u8>,
    /// Sum of `cumulative` across players.
    pub cum_total: i16,
}

/// Fold all `Done` rounds into per-player standings.
///
/// Rounds still collecting bids or actuals contribute nothing, whatever
/// speculative scores they hold internally.
pub fn compute_tallies(rounds: &[Round], players: &[Player]) -> Tallies {
    let mut cumulative: BTreeMap<PlayerId, i16> = players.iter().map(|p| (p.id, 0)).collect();
    let mut exact_hits: BTreeMap<PlayerId, u8> = players.iter().map(|p| (p.id, 0)).collect();

    for round in rounds.iter().filter(|rd| rd.phase == Phase::Done) {
        for player in players {
            if let Some(total) = cumulative.get_mut(&player.id) {
                *total += round.scores.get(&player.id).copied().unwrap_or(0);
            }
            let bid = round.bids.get(&player.id).copied().flatten();
            let actual = round.actuals.get(&player.id).copied().flatten();
            if let (Some(b), Some(a)) = (bid, actual) {
                if b == a {
                    if let Some(hits) = exact_hits.get_mut(&player.id) {
                        *hits += 1;
                    }
                }
            }
        }
    }

    let cum_total: i16 = cumulative.values().sum();
    let share_pct = cumulative
        .iter()
        .map(|(&player, &score)| {
            let pct = if cum_total > 0 {
                100.0 * f64::from(score) / f64::from(cum_total)
            } else {
                0.0
            };
            (player, pct)
        })
        .collect();

    Tallies {
        cumulative,
        share_pct,
        exact_hits,
        cum_total,
    }
}

/// Every player tied at the maximum cumulative score; empty for no players.
pub fn find_leaders(cumulative: &BTreeMap<PlayerId, i16>) -> BTreeSet<PlayerId> {
    let Some(max) = cumulative.values().copied().max() else {
        return BTreeSet::new();
    };
    cumulative
        .iter()
        .filter(|&(_, &score)| score == max)
        .map(|(&player, _)| player)
        .collect()
}
