//! Session lifecycle: pre-game roster editing and the live round sequence.
//!
//! Roster edits only exist before a session starts; a running session's
//! players are immutable, and "change players" rebuilds the session from a
//! fresh roster.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::players::{Player, PlayerId};
use crate::domain::round_lifecycle;
use crate::domain::rules::{clamp_player_count, rounds_for_players, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{Phase, Round};
use crate::domain::tally::{compute_tallies, Tallies};
use crate::errors::domain::{DomainError, ValidationKind};

fn placeholder_name(slot: usize) -> String {
    format!("Player {slot}")
}

/// Editable pre-game player list (2–6 seats).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Roster of `player_count` seats (clamped) with placeholder names.
    pub fn new(player_count: usize) -> Self {
        let count = clamp_player_count(player_count);
        Self {
            names: (1..=count).map(placeholder_name).collect(),
        }
    }

    /// Roster from explicit names: extras beyond the six-seat maximum are
    /// truncated, and missing seats up to the two-seat minimum are filled
    /// with placeholders.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .take(MAX_PLAYERS)
            .collect();
        while names.len() < MIN_PLAYERS {
            names.push(placeholder_name(names.len() + 1));
        }
        Self { names }
    }

    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Rounds the current table size would play: ⌊52 / P⌋.
    pub fn round_count(&self) -> u8 {
        rounds_for_players(self.player_count())
    }

    /// Resize the table, clamped to `2..=6`. Existing names are preserved by
    /// position; new seats get placeholder names; trailing seats are dropped
    /// when shrinking.
    pub fn set_player_count(&mut self, new_count: usize) {
        let count = clamp_player_count(new_count);
        if count < self.names.len() {
            self.names.truncate(count);
        } else {
            for slot in self.names.len() + 1..=count {
                self.names.push(placeholder_name(slot));
            }
        }
    }

    pub fn set_name(
        &mut self,
        slot_index: usize,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        let count = self.names.len();
        let Some(entry) = self.names.get_mut(slot_index) else {
            return Err(DomainError::validation(
                ValidationKind::RosterIndex,
                format!("seat {slot_index} out of 0..{count}"),
            ));
        };
        *entry = name.into();
        Ok(())
    }

    pub fn clear_name(&mut self, slot_index: usize) -> Result<(), DomainError> {
        self.set_name(slot_index, "")
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when every seat has a non-blank name; the start gate.
    pub fn is_complete(&self) -> bool {
        self.names.iter().all(|name| !name.trim().is_empty())
    }
}

/// A live game: fixed roster, `⌊52 / P⌋` rounds owned exclusively by the
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    players: Vec<Player>,
    rounds: Vec<Round>,
}

impl Session {
    /// Start a game from the roster: sequential ids `p1..pN`, blank or
    /// whitespace-only names replaced by positional placeholders, and every
    /// round open for bidding.
    pub fn start(roster: &Roster) -> Self {
        let players: Vec<Player> = roster
            .names()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let trimmed = name.trim();
                let name = if trimmed.is_empty() {
                    placeholder_name(index + 1)
                } else {
                    trimmed.to_string()
                };
                Player::new(PlayerId::new((index + 1) as u8), name)
            })
            .collect();

        let round_count = rounds_for_players(players.len());
        let rounds = (1..=round_count)
            .map(|round_no| Round::empty(round_no, &players))
            .collect();

        info!(
            players = players.len(),
            rounds = round_count,
            "session started"
        );
        Self { players, rounds }
    }

    /// Fresh session with the same player names; all round progress is
    /// discarded.
    pub fn restart(&self) -> Self {
        info!("session restarted");
        Self::start(&self.to_roster())
    }

    /// Back to the setup step, preserving the current names for editing.
    pub fn to_roster(&self) -> Roster {
        Roster::from_names(self.players.iter().map(|p| p.name.clone()))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn round_count(&self) -> u8 {
        self.rounds.len() as u8
    }

    /// Index of the first round not yet finalized; `None` once every round
    /// is done.
    pub fn current_round_index(&self) -> Option<usize> {
        self.rounds.iter().position(|rd| rd.phase != Phase::Done)
    }

    /// Aggregated standings over the finalized rounds, computed on demand.
    pub fn tallies(&self) -> Tallies {
        compute_tallies(&self.rounds, &self.players)
    }

    pub fn set_bids(
        &mut self,
        index: usize,
        new_bids: BTreeMap<PlayerId, Option<u8>>,
    ) -> Result<(), DomainError> {
        round_lifecycle::set_bids(self.round_mut(index)?, new_bids)
    }

    pub fn set_bid(
        &mut self,
        index: usize,
        player: PlayerId,
        bid: Option<u8>,
    ) -> Result<(), DomainError> {
        round_lifecycle::set_bid(self.round_mut(index)?, player, bid)
    }

    pub fn set_actuals(
        &mut self,
        index: usize,
        new_actuals: BTreeMap<PlayerId, Option<u8>>,
    ) -> Result<(), DomainError> {
        round_lifecycle::set_actuals(self.round_mut(index)?, new_actuals)
    }

    pub fn set_actual(
        &mut self,
        index: usize,
        player: PlayerId,
        actual: Option<u8>,
    ) -> Result<(), DomainError> {
        round_lifecycle::set_actual(self.round_mut(index)?, player, actual)
    }

    /// Lock round `index` for actual entry. `Ok(false)` when the guard does
    /// not hold.
    pub fn lock_bids(&mut self, index: usize) -> Result<bool, DomainError> {
        let advanced = round_lifecycle::lock_bids(self.round_mut(index)?);
        if advanced {
            debug!(round = index + 1, "bids locked");
        }
        Ok(advanced)
    }

    /// Finalize round `index`. `Ok(false)` when the guard does not hold.
    pub fn finalize_round(&mut self, index: usize) -> Result<bool, DomainError> {
        let advanced = round_lifecycle::finalize(self.round_mut(index)?);
        if advanced {
            debug!(round = index + 1, "round finalized");
        }
        Ok(advanced)
    }

    /// Reopen bidding on round `index`, clearing its actuals.
    pub fn unlock_round(&mut self, index: usize) -> Result<bool, DomainError> {
        let reverted = round_lifecycle::unlock(self.round_mut(index)?);
        if reverted {
            debug!(round = index + 1, "bids unlocked");
        }
        Ok(reverted)
    }

    /// Roll round `index` back from `Done` to actual entry.
    pub fn revert_final(&mut self, index: usize) -> Result<bool, DomainError> {
        let reverted = round_lifecycle::revert_final(self.round_mut(index)?);
        if reverted {
            debug!(round = index + 1, "finalization reverted");
        }
        Ok(reverted)
    }

    /// Store a full bids map and lock in one step (the bids dialog's save
    /// button).
    pub fn set_and_lock_bids(
        &mut self,
        index: usize,
        new_bids: BTreeMap<PlayerId, Option<u8>>,
    ) -> Result<bool, DomainError> {
        self.set_bids(index, new_bids)?;
        self.lock_bids(index)
    }

    /// Store a full actuals map and finalize in one step (the actuals
    /// dialog's save button).
    pub fn set_and_finalize_actuals(
        &mut self,
        index: usize,
        new_actuals: BTreeMap<PlayerId, Option<u8>>,
    ) -> Result<bool, DomainError> {
        self.set_actuals(index, new_actuals)?;
        self.finalize_round(index)
    }

    fn round_mut(&mut self, index: usize) -> Result<&mut Round, DomainError> {
        let count = self.rounds.len();
        self.rounds.get_mut(index).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::RoundIndex,
                format!("round index {index} out of 0..{count}"),
            )
        })
    }
}
