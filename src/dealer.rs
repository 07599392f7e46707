//! Automated dealer play policy.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckExhausted;
use crate::hand::Hand;

/// The dealer stands as soon as their score reaches this value.
pub const STAND_THRESHOLD: u8 = 17;

/// Plays out a hand under the fixed dealer policy.
///
/// Draws one card at a time while the hand scores below
/// [`STAND_THRESHOLD`], then stands. The policy never looks at the
/// opposing hand and is deterministic given the deck order.
///
/// Returns the cards drawn, in draw order (possibly none).
///
/// # Errors
///
/// Returns [`DeckExhausted`] if the deck runs out while the hand must
/// still draw.
pub fn play(hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, DeckExhausted> {
    let mut drawn = Vec::new();

    while hand.score() < STAND_THRESHOLD {
        drawn.push(hand.draw_from(deck)?);
    }

    Ok(drawn)
}
