//! Player identity.

use crate::hand::Hand;

/// Name given to the automated dealer.
pub const DEALER_NAME: &str = "Dealer";

/// A participant in the round: a name and the hand they hold.
///
/// The dealer is an ordinary `Player` with [`DEALER_NAME`]; the automated
/// play policy lives in [`crate::dealer`] rather than on a dealer subtype,
/// so any hand-bearing participant could be driven by it.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name.
    name: String,
    /// The player's hand.
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Creates the automated dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self::new(DEALER_NAME)
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns mutable access to the player's hand.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
