//! Domain-level error type used across all engine operations.
//!
//! Every validation failure carries enough detail for the caller to
//! re-render the decision point (the legal bet range, the playable
//! card set). Operations never partially mutate state on failure and
//! never retry internally; re-prompting is a caller concern.

use thiserror::Error;

use crate::domain::cards_types::Card;

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Round,
    Card,
    Other(String),
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bet missing from or outside the legal range for this bidder.
    /// Recovered by re-prompting with `legal`.
    #[error("invalid bet (legal bets: {legal:?})")]
    InvalidBet { legal: Vec<u8> },

    /// Card not in hand or not in the currently playable subset.
    /// Recovered by re-prompting with `playable`.
    #[error("invalid card (playable: {playable:?})")]
    InvalidCard { playable: Vec<Card> },

    /// Caller programming error: an operation invoked before its
    /// precondition holds (trick not complete, round not complete,
    /// acting out of turn). Never recovered by re-prompting.
    #[error("premature operation: {0}")]
    PrematureOperation(String),

    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),

    /// Input/construction-time rule violation
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn premature(detail: impl Into<String>) -> Self {
        Self::PrematureOperation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
