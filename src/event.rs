//! Notifications the engine hands to the transport layer.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

use crate::result::Outcome;

/// Actor name used for events the dealer produces.
pub const DEALER: &str = "Dealer";

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The actor took a card.
    Hits,
    /// The actor ended their turn.
    Stands,
    /// The round was settled.
    Resolved(Outcome),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hits => f.write_str("hits"),
            Self::Stands => f.write_str("stands"),
            Self::Resolved(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

/// An `(actor, action)` pair to broadcast to everyone watching a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEvent {
    /// Who acted.
    pub actor: String,
    /// What they did.
    pub action: Action,
}

impl GameEvent {
    /// Creates a new event.
    pub fn new(actor: impl Into<String>, action: Action) -> Self {
        Self {
            actor: actor.into(),
            action,
        }
    }

    /// Creates the dealer's announcement for a settled round.
    #[must_use]
    pub fn resolved(outcome: Outcome) -> Self {
        Self::new(DEALER, Action::Resolved(outcome))
    }
}

/// A free-form `(player, move)` relay message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Who made the move.
    pub player: String,
    /// Description of the move.
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub action: String,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            action: action.into(),
        }
    }
}

impl From<&GameEvent> for Move {
    fn from(event: &GameEvent) -> Self {
        Self {
            player: event.actor.clone(),
            action: event.action.to_string(),
        }
    }
}

impl From<GameEvent> for Move {
    fn from(event: GameEvent) -> Self {
        Self::from(&event)
    }
}
