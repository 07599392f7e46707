//! Hand representation and scoring.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckExhausted;

/// Point value of a single card.
///
/// An Ace always counts as 1; there is no soft/hard promotion to 11 in this
/// rule set. Face cards count as 10.
const fn card_value(rank: u8) -> u8 {
    match rank {
        1..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// An ordered sequence of cards held by one participant.
///
/// A hand only grows, one card per draw; it never shrinks or reorders
/// within a round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Draws one card from the deck and appends it to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] when the deck is empty.
    pub fn draw_from(&mut self, deck: &mut Deck) -> Result<Card, DeckExhausted> {
        let card = deck.draw()?;
        self.cards.push(card);
        Ok(card)
    }

    /// Appends an already-drawn card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// The score is the sum of `min(rank, 10)` over all held cards: an Ace
    /// counts as 1, number cards at face value, face cards as 10. Recomputed
    /// from the cards on every call.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card_value(card.rank)))
    }

    /// Returns whether the hand is a blackjack (exactly two cards scoring 21).
    ///
    /// With an Ace counting as 1, no two-card hand can actually reach 21, so
    /// this never holds for a hand drawn from a standard deck. The flag is
    /// still reported so renderers see the full hand state.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
