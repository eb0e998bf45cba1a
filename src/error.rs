//! Error types for deck operations.

use thiserror::Error;

/// Errors returned by the secure random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The lower bound is greater than the upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested inclusive lower bound.
        min: i64,
        /// Requested exclusive upper bound.
        max: i64,
    },
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
    /// Not enough cards in the deck to deal the full amount.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the deck at the time of the request.
        remaining: usize,
    },
}
