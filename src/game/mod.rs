//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;

mod actions;
mod dealer;
mod decision;
pub mod state;

pub use decision::Decision;
pub use state::GameState;

/// Cards drawn during the initial deal: two each for player and dealer.
const INITIAL_DEAL: usize = 4;

/// A single round of twenty-one: one player against the automated dealer.
///
/// The game owns the deck and both hands and is driven through per-phase
/// methods (`deal`, `hit`, `stand`, `dealer_play`, `outcome`). Calls made
/// in the wrong state are rejected, so a driver loop can rely on
/// [`GameState`] alone to decide what to do next.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards remaining to draw.
    deck: Deck,
    /// The human player.
    player: Player,
    /// The automated dealer.
    dealer: Player,
    /// Current round state.
    state: GameState,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// The deck is shuffled once with a [`ChaCha8Rng`] seeded from `seed`,
    /// so the same seed always produces the same round.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Game;
    ///
    /// let game = Game::new("Alice", 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(player_name: impl Into<String>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self::with_deck(player_name, deck)
    }

    /// Creates a new game over a prepared deck.
    ///
    /// The deck is used as-is, without shuffling. This is the entry point
    /// for harnesses that need a fixed draw order.
    #[must_use]
    pub fn with_deck(player_name: impl Into<String>, deck: Deck) -> Self {
        Self {
            deck,
            player: Player::new(player_name),
            dealer: Player::dealer(),
            state: GameState::AwaitingDeal,
        }
    }

    /// Deals the opening hands: two cards each, alternating player, dealer,
    /// player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already underway or the deck holds
    /// fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::AwaitingDeal {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..INITIAL_DEAL / 2 {
            self.player.hand_mut().draw_from(&mut self.deck)?;
            self.dealer.hand_mut().draw_from(&mut self.deck)?;
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
