//! Player decision tokens.

/// A player's answer at a draw prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}

impl Decision {
    /// Parses a decision token.
    ///
    /// Recognizes `"s"` as [`Decision::Hit`] and `"n"` as
    /// [`Decision::Stand`], ignoring ASCII case. Any other input returns
    /// `None`, which callers should treat as a re-ask rather than an error.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("s") {
            Some(Self::Hit)
        } else if token.eq_ignore_ascii_case("n") {
            Some(Self::Stand)
        } else {
            None
        }
    }
}
