//! Hosting many games at once.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::LobbyError;
use crate::event::{Action, GameEvent};
use crate::game::{Engine, GameState, Session};
use crate::hub::{Broadcast, ConnectionId, GameHub};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::sync::Mutex;

/// A shared table room: one [`Session`] per game id plus the group hub.
///
/// Every game owns an independent session, and all access goes through the
/// lobby's locks, so a lobby may be shared between connection handlers.
/// Locks are always taken in the order engine, sessions, hub.
#[derive(Debug)]
pub struct Lobby {
    /// Shuffles and deals new rounds.
    engine: Mutex<Engine>,
    /// Running games (`game_id` -> session).
    sessions: Mutex<HashMap<String, Session>>,
    /// Group membership.
    hub: Mutex<GameHub>,
}

impl Lobby {
    /// Creates an empty lobby with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            engine: Mutex::new(Engine::new(options, seed)),
            sessions: Mutex::new(HashMap::new()),
            hub: Mutex::new(GameHub::new()),
        }
    }

    /// Adds a connection to a game group.
    pub fn join_game(&self, connection: ConnectionId, game_id: &str) {
        self.hub.lock().join_game(connection, game_id);
    }

    /// Removes a connection from a game group.
    ///
    /// Returns whether the connection was a member.
    pub fn leave_game(&self, connection: ConnectionId, game_id: &str) -> bool {
        self.hub.lock().leave_game(connection, game_id)
    }

    /// Removes a connection from every group.
    pub fn disconnect(&self, connection: ConnectionId) {
        self.hub.lock().disconnect(connection);
    }

    /// Returns the members of a game group.
    #[must_use]
    pub fn members(&self, game_id: &str) -> Vec<ConnectionId> {
        self.hub.lock().members(game_id).to_vec()
    }

    /// Relays an arbitrary move to the game group.
    #[must_use]
    pub fn send_move(&self, game_id: &str, player: &str, action: &str) -> Broadcast {
        self.hub.lock().send_move(game_id, player, action)
    }

    /// Deals a fresh round for `game_id`, replacing any round in progress.
    pub fn start_game(&self, game_id: &str) {
        let mut engine = self.engine.lock();
        let mut sessions = self.sessions.lock();
        let session = sessions.entry(String::from(game_id)).or_default();
        engine.initialize(session);
        drop(sessions);
        drop(engine);

        info!(game_id, "round started");
    }

    /// Deals a round for `game_id` from a prepared shoe instead of a shuffled
    /// one, replacing any round in progress.
    pub fn start_game_with(&self, game_id: &str, deck: Deck) {
        let options = *self.engine.lock().options();
        self.sessions
            .lock()
            .insert(String::from(game_id), Session::deal(deck, options));

        info!(game_id, "round started from a prepared shoe");
    }

    /// Drops the session for `game_id`.
    ///
    /// Returns whether a game was running.
    pub fn end_game(&self, game_id: &str) -> bool {
        self.sessions.lock().remove(game_id).is_some()
    }

    /// Returns the number of running games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.sessions.lock().len()
    }

    fn with_session<R>(
        &self,
        game_id: &str,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, LobbyError> {
        self.sessions.with(|sessions| {
            sessions
                .get_mut(game_id)
                .map(f)
                .ok_or(LobbyError::UnknownGame)
        })
    }

    /// Draws the next card of the game's shoe without adding it to a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or its shoe is empty.
    pub fn draw_card(&self, game_id: &str) -> Result<Card, LobbyError> {
        Ok(self.with_session(game_id, Session::draw_card)??)
    }

    /// Player hits and the move is relayed to the group.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown, not waiting on the player, or
    /// its shoe is empty.
    pub fn hit(&self, game_id: &str, actor: &str) -> Result<(Card, Broadcast), LobbyError> {
        let card = self.with_session(game_id, Session::hit)??;
        let broadcast = self
            .hub
            .lock()
            .publish(game_id, &GameEvent::new(actor, Action::Hits));
        Ok((card, broadcast))
    }

    /// Player stands; the dealer plays out and the result is relayed.
    ///
    /// Returns the round result and one broadcast per event, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown, not waiting on the player, or
    /// the shoe runs out while the dealer draws. After the last case the stand
    /// is still available from [`Lobby::round_events`].
    pub fn player_stands(
        &self,
        game_id: &str,
        actor: &str,
    ) -> Result<(RoundResult, Vec<Broadcast>), LobbyError> {
        let result = self.with_session(game_id, |session| session.player_stands(actor))??;

        let hub = self.hub.lock();
        let broadcasts = result
            .events
            .iter()
            .map(|event| hub.publish(game_id, event))
            .collect();
        drop(hub);

        Ok((result, broadcasts))
    }

    /// Relays every event of the game's current round, in order.
    ///
    /// Useful after [`Lobby::player_stands`] fails part way through the
    /// dealer's turn: the stand has already happened and can still be sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn round_events(&self, game_id: &str) -> Result<Vec<Broadcast>, LobbyError> {
        let events = self.with_session(game_id, |session| session.round_events().to_vec())?;
        let hub = self.hub.lock();
        let broadcasts = events
            .iter()
            .map(|event| hub.publish(game_id, event))
            .collect();
        drop(hub);
        Ok(broadcasts)
    }

    /// Returns the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn player_hand(&self, game_id: &str) -> Result<Vec<Card>, LobbyError> {
        self.with_session(game_id, |session| session.player_hand().to_vec())
    }

    /// Returns the dealer cards players may see.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn visible_dealer_hand(&self, game_id: &str) -> Result<Vec<Card>, LobbyError> {
        self.with_session(game_id, |session| session.visible_dealer_hand().to_vec())
    }

    /// Returns whether either hand has reached or passed 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn is_game_over(&self, game_id: &str) -> Result<bool, LobbyError> {
        self.with_session(game_id, |session| session.is_game_over())
    }

    /// Returns the round state of a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn state(&self, game_id: &str) -> Result<GameState, LobbyError> {
        self.with_session(game_id, |session| session.state())
    }
}
