//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("deck exhausted")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur when the player stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StandError {
    /// The round is neither waiting on the player nor in the dealer's turn.
    #[error("invalid game state for standing")]
    InvalidState,
    /// The shoe ran out while the dealer had to draw.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors returned by [`Lobby`](crate::Lobby) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// No game is running under the given id.
    #[error("unknown game")]
    UnknownGame,
    /// Drawing a card failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Standing failed.
    #[error(transparent)]
    Stand(#[from] StandError),
}
