//! Game state types.

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// No cards have been dealt.
    #[default]
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer hand revealed; dealer is drawing.
    DealerTurn,
    /// Round has been resolved.
    RoundOver,
}

impl GameState {
    /// Returns the state name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::PlayerTurn => "PlayerTurn",
            Self::DealerTurn => "DealerTurn",
            Self::RoundOver => "RoundOver",
        }
    }
}
