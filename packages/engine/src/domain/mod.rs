//! Domain layer: pure game logic types and helpers.

pub mod players;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tally;


#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_tally;

// Re-exports for ergonomics
pub use players::{Player, PlayerId};
pub use rules::{dealer_for_round, rounds_for_players, valid_call_range};
pub use scoring::{round_score, score_outcome, ScoreOutcome};
pub use state::{Phase, Round};
