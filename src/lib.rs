//! A single-player twenty-one round engine with an automated dealer.
//!
//! The crate provides a [`Game`] type that manages one round: the initial
//! deal, the player's hit/stand decisions, the dealer's fixed draw-to-17
//! play, and winner resolution by distance from 21. All input and rendering
//! belong to the caller; the engine only exposes state and per-phase
//! methods.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameState};
//!
//! let mut game = Game::new("Alice", 42);
//! game.deal().expect("fresh deck has enough cards");
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! ```

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckExhausted, ShowdownError};
pub use game::{Decision, Game, GameState};
pub use hand::Hand;
pub use player::{DEALER_NAME, Player};
pub use result::{RoundOutcome, RoundSummary};
