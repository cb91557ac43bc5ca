use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, DrawError};

use super::{GameState, Session};

impl Session {
    /// Removes and returns the next card of the shoe.
    ///
    /// The card is not added to any hand and the shoe is never refilled.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] when the shoe is exhausted.
    pub fn draw_card(&mut self) -> Result<Card, DrawError> {
        self.deck.draw()
    }

    /// Player action: Hit (draw a card into the player's hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting on the player or the
    /// shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.draw().map_err(|_| ActionError::NoCards)?;
        self.player.add_card(card);

        debug!(%card, value = self.player.value(), "player hits");

        Ok(card)
    }
}
