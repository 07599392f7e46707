//! Error types for game operations.

use thiserror::Error;

/// Error returned when drawing from an empty deck.
///
/// The deck is built once and never refilled, so this is fatal to the round:
/// there is no reshuffle to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

impl From<DeckExhausted> for DealError {
    fn from(_: DeckExhausted) -> Self {
        Self::NotEnoughCards
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckExhausted> for ActionError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}

/// Errors that can occur during dealer play and outcome resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckExhausted> for ShowdownError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}
