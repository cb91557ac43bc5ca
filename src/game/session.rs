use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::event::GameEvent;
use crate::hand::{Hand, visible_cards};
use crate::options::GameOptions;

use super::GameState;

/// State of a single game: the shoe, both hands and the dealer reveal flag.
///
/// A session is owned by whoever hosts the game. Sessions share nothing, so
/// separate games never interfere with one another.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Cards left in the shoe.
    pub(super) deck: Deck,
    /// Player's hand.
    pub(super) player: Hand,
    /// Dealer's hand. The first card is the up card.
    pub(super) dealer: Hand,
    /// Whether the dealer's hole card is shown.
    pub(super) dealer_revealed: bool,
    /// Current round state.
    pub(super) state: GameState,
    /// Options the round was dealt with.
    pub(super) options: GameOptions,
    /// Events emitted so far this round, in order.
    pub(super) events: Vec<GameEvent>,
    /// Cards the dealer has drawn this round.
    pub(super) dealer_draws: Vec<Card>,
}

impl Session {
    /// Deals a round from `deck`: two cards to the player, then two to the dealer.
    ///
    /// A short deck leaves the hands short instead of failing. If not even one
    /// card could be dealt the session stays [`GameState::Idle`].
    #[must_use]
    pub fn deal(deck: Deck, options: GameOptions) -> Self {
        let mut session = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_revealed: false,
            state: GameState::Idle,
            options,
            events: Vec::new(),
            dealer_draws: Vec::new(),
        };

        for _ in 0..2 {
            if let Ok(card) = session.deck.draw() {
                session.player.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Ok(card) = session.deck.draw() {
                session.dealer.add_card(card);
            }
        }

        if !session.player.is_empty() {
            session.state = GameState::PlayerTurn;
        }

        debug!(
            player = session.player.len(),
            dealer = session.dealer.len(),
            remaining = session.deck.len(),
            "dealt initial hands"
        );

        session
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the options the round was dealt with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn player_hand(&self) -> &[Card] {
        self.player.cards()
    }

    /// Returns the full dealer hand, including the hole card.
    #[must_use]
    pub fn dealer_hand(&self) -> &[Card] {
        self.dealer.cards()
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's full hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// Shows the dealer's hole card. Calling this again has no effect.
    pub const fn reveal_dealer_hand(&mut self) {
        self.dealer_revealed = true;
    }

    /// Returns whether the dealer's hole card is shown.
    #[must_use]
    pub const fn is_dealer_revealed(&self) -> bool {
        self.dealer_revealed
    }

    /// Returns the dealer cards a player may see.
    ///
    /// Only the up card until the hand is revealed; the whole hand afterwards.
    #[must_use]
    pub fn visible_dealer_hand(&self) -> &[Card] {
        visible_cards(self.dealer.cards(), self.dealer_revealed)
    }

    /// Returns the value of the visible dealer cards.
    #[must_use]
    pub fn visible_dealer_value(&self) -> u8 {
        crate::hand::hand_value(self.visible_dealer_hand())
    }

    /// Returns the events emitted so far this round.
    ///
    /// After a stand fails part way through the dealer's turn this still holds
    /// the stand, so a host can relay it.
    #[must_use]
    pub fn round_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether either hand has reached or passed 21.
    ///
    /// Exactly 21 ends play without being a bust; anything over 21 is a bust.
    /// Hands with no cards are never over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        [&self.player, &self.dealer]
            .into_iter()
            .any(|hand| hand.is_bust() || hand.is_twenty_one())
    }
}
