use tracing::{debug, info};

use crate::error::StandError;
use crate::event::{Action, GameEvent};
use crate::result::{Outcome, RoundResult};

use super::{GameState, Session};

impl Session {
    /// Ends the player's turn and plays the round out.
    ///
    /// This function:
    /// 1. Reveals the dealer's hole card and records that `actor` stands
    /// 2. Draws dealer cards one at a time while the dealer is under 17
    /// 3. Compares the final values and records the outcome
    ///
    /// The dealer plays out even when the player is already over 21, unless
    /// `GameOptions::player_bust_loses_immediately` is set. Ties go to the
    /// dealer.
    ///
    /// If the shoe ran out during an earlier call, the round is still in
    /// [`GameState::DealerTurn`] and calling this again resumes the dealer's
    /// draws. The stand is not recorded twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is neither waiting on the player nor in
    /// the dealer's turn, or the shoe runs out while the dealer must draw. In
    /// the latter case the round stays in [`GameState::DealerTurn`] and
    /// [`Session::round_events`] keeps the stand.
    pub fn player_stands(&mut self, actor: &str) -> Result<RoundResult, StandError> {
        let player_value = self.player.value();

        match self.state {
            GameState::PlayerTurn => {
                self.reveal_dealer_hand();
                self.state = GameState::DealerTurn;
                self.events.push(GameEvent::new(actor, Action::Stands));
                debug!(actor, player_value, dealer_value = self.dealer.value(), "player stands");
            }
            GameState::DealerTurn => debug!(actor, "resuming dealer turn"),
            GameState::Idle | GameState::RoundOver => return Err(StandError::InvalidState),
        }

        let forfeit = self.options.player_bust_loses_immediately && self.player.is_bust();
        let mut dealer_value = self.dealer.value();

        if !forfeit {
            while self.options.dealer_draws(dealer_value, self.dealer.is_soft()) {
                let Ok(card) = self.deck.draw() else {
                    debug!(dealer_value, "shoe ran out during dealer turn");
                    return Err(StandError::NoCards);
                };
                self.dealer.add_card(card);
                self.dealer_draws.push(card);
                dealer_value = self.dealer.value();
                debug!(%card, dealer_value, "dealer draws");
            }
        }

        let outcome = if forfeit {
            Outcome::PlayerBusts
        } else {
            Outcome::resolve(player_value, dealer_value)
        };
        self.events.push(GameEvent::resolved(outcome));
        self.state = GameState::RoundOver;

        info!(%outcome, player_value, dealer_value, "round resolved");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            dealer_draws: self.dealer_draws.clone(),
            events: self.events.clone(),
        })
    }
}
