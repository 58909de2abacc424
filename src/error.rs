//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when reading a card's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// An ace is worth 1 or 11 and has no single point value.
    #[error("ace has no single point value")]
    AceAmbiguous,
}

/// Errors that can occur when dealing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

impl From<ShoeError> for DealError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::EmptyShoe,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

impl From<ShoeError> for ActionError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::EmptyShoe,
        }
    }
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is in progress.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}
