//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `2..=14`.
    #[error("invalid rank {0}, expected 2..=14")]
    InvalidRank(u8),
    /// Suit index outside `0..=3`.
    #[error("invalid suit index {0}, expected 0..=3")]
    InvalidSuit(u8),
}

/// Errors that can occur when removing cards from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// No cards left to remove.
    #[error("no cards left to remove")]
    Empty,
    /// The index source picked a position past the end of the pile.
    #[error("index {index} out of range for pile of {len} cards")]
    IndexOutOfRange {
        /// The index that was picked.
        index: usize,
        /// The number of cards in the pile.
        len: usize,
    },
}

/// Errors that can occur while running a round.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Invalid round phase for this operation.
    #[error("invalid round phase for this operation")]
    InvalidState,
    /// A pile operation failed.
    #[error(transparent)]
    Pile(#[from] PileError),
    /// The presentation surface failed to read or write.
    #[error("presentation surface failed: {0}")]
    Io(#[from] io::Error),
}
