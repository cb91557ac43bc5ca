//! Round result types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::event::GameEvent;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player was already over 21 when standing and the table ends the round
    /// there. Only produced with `GameOptions::player_bust_loses_immediately`.
    PlayerBusts,
    /// Dealer went over 21.
    DealerBusts,
    /// Dealer matched or beat the player.
    DealerWins,
    /// Player finished higher than the dealer.
    PlayerWins,
}

/// Which side took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl Outcome {
    /// Compares final values once the dealer has played. Ties go to the dealer.
    ///
    /// A dealer bust always pays the player; otherwise the higher value wins.
    /// The player's value is not checked for a bust here.
    #[must_use]
    pub const fn resolve(player_value: u8, dealer_value: u8) -> Self {
        if dealer_value > 21 {
            Self::DealerBusts
        } else if dealer_value >= player_value {
            Self::DealerWins
        } else {
            Self::PlayerWins
        }
    }

    /// Returns the side that won.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::DealerBusts | Self::PlayerWins => Winner::Player,
            Self::PlayerBusts | Self::DealerWins => Winner::Dealer,
        }
    }

    /// Returns the announcement shown to the table.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBusts => "Player busts! Dealer wins.",
            Self::DealerBusts => "Dealer busts! Player wins.",
            Self::DealerWins => "Dealer wins.",
            Self::PlayerWins => "Player wins.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew after the reveal, in draw order.
    pub dealer_draws: Vec<Card>,
    /// Notifications produced while resolving, in order.
    pub events: Vec<GameEvent>,
}

impl RoundResult {
    /// Returns the side that won.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.outcome.winner()
    }
}
