//! Round outcome types and winner resolution.

/// Result of a round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or finishes farther from 21).
    PlayerWin,
    /// Dealer wins (player busts or finishes farther from 21).
    DealerWin,
    /// Push (both bust, or equal scores).
    Push,
}

impl RoundOutcome {
    /// Resolves the winner from the two final scores.
    ///
    /// Rules, in precedence order: both bust is a push; a lone bust loses;
    /// equal scores push; otherwise the hand closer to 21 wins. When
    /// neither hand is bust the distance comparison is equivalent to
    /// comparing raw scores, since both are at most 21.
    #[must_use]
    pub const fn from_scores(player: u8, dealer: u8) -> Self {
        let player_bust = player > 21;
        let dealer_bust = dealer > 21;

        match (player_bust, dealer_bust) {
            (true, true) => Self::Push,
            (true, false) => Self::DealerWin,
            (false, true) => Self::PlayerWin,
            (false, false) => {
                if player == dealer {
                    Self::Push
                } else if player.abs_diff(21) < dealer.abs_diff(21) {
                    Self::PlayerWin
                } else {
                    Self::DealerWin
                }
            }
        }
    }
}

/// Snapshot of a finished round.
///
/// Everything a renderer needs to announce the result: the outcome plus
/// both hands' final scores and status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Who won the round.
    pub outcome: RoundOutcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the player's hand is a two-card 21.
    pub player_blackjack: bool,
    /// Whether the dealer's hand is a two-card 21.
    pub dealer_blackjack: bool,
}
