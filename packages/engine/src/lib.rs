#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::players::{Player, PlayerId};
pub use domain::round_lifecycle::{
    finalize, lock_bids, recompute, revert_final, set_actual, set_actuals, set_bid, set_bids,
    unlock,
};
pub use domain::rules::{dealer_for_round, rounds_for_players};
pub use domain::scoring::{round_score, score_outcome, ScoreOutcome};
pub use domain::session::{Roster, Session};
pub use domain::snapshot::{snapshot, SessionSnapshot};
pub use domain::state::{Phase, Round};
pub use domain::tally::{compute_tallies, find_leaders, Tallies};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}
