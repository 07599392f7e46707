use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the drawn card takes the player over 21, the round ends
    /// immediately and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.player.hand_mut().draw_from(&mut self.deck)?;

        if self.player.hand().is_bust() {
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Ends the player's turn and hands play over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.state = GameState::DealerTurn;
        Ok(())
    }
}
