use crate::card::Card;
use crate::dealer;
use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundSummary};

use super::{Game, GameState};

impl Game {
    /// Dealer plays out their hand under the fixed policy.
    ///
    /// The dealer draws until reaching 17 or higher, possibly not at all,
    /// then the round is over. See [`crate::dealer::play`].
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = dealer::play(self.dealer.hand_mut(), &mut self.deck)?;

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Resolves the finished round into a [`RoundSummary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over yet.
    pub fn outcome(&self) -> Result<RoundSummary, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let player = self.player.hand();
        let dealer = self.dealer.hand();
        let player_score = player.score();
        let dealer_score = dealer.score();

        Ok(RoundSummary {
            outcome: RoundOutcome::from_scores(player_score, dealer_score),
            player_score,
            dealer_score,
            player_bust: player.is_bust(),
            dealer_bust: dealer.is_bust(),
            player_blackjack: player.is_blackjack(),
            dealer_blackjack: dealer.is_blackjack(),
        })
    }
}
