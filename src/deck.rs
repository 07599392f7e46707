//! Deck construction, shuffling, and drawing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckExhausted;

/// An ordered deck of cards.
///
/// The deck is built once per game and depleted by draws; it is never
/// refilled. Cards are drawn from the front of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front of the vector first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card deck in suit-major, ascending-rank order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The first element of `cards` is the next card drawn. Useful for
    /// harnesses that need a fixed draw order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Performs an unbiased Fisher-Yates permutation. Shuffling a partially
    /// depleted deck is legal and simply permutes what remains.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        if self.cards.is_empty() {
            return Err(DeckExhausted);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the remaining cards, next draw first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
