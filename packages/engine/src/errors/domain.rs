//! Domain-level error type used across the engine's fallible surface.
//!
//! Guarded phase transitions are deliberately not represented here: a
//! transition whose precondition fails leaves the round untouched and
//! reports `false`, and the two validity conditions travel as data flags
//! on the round itself. `DomainError` covers API misuse the type system
//! cannot prevent, such as a bids map whose key set does not match the
//! session roster, or an index outside the round list.

use thiserror::Error;

/// Validation kinds raised by engine entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A bids/actuals map referenced a player id the round does not know,
    /// or failed to cover the full roster.
    UnknownPlayer,
    /// A roster slot index outside the current player count.
    RosterIndex,
    /// A round index outside the session's round list.
    RoundIndex,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
}
