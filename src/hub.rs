//! Game groups and move fan-out.
//!
//! The hub only tracks which connections watch which game and works out who
//! should receive a message. Delivering it over the wire is up to the host.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::{debug, info};

use crate::event::{GameEvent, Move};

/// Client-side method name broadcasts are delivered under.
pub const RECEIVE_MOVE: &str = "ReceiveMove";

/// Identifies one connected client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// A message addressed to every member of a game group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    /// The game the message belongs to.
    pub game_id: String,
    /// Connections that should receive it, in join order.
    pub recipients: Vec<ConnectionId>,
    /// The relayed move.
    pub message: Move,
}

impl Broadcast {
    /// Returns the client-side method name for this message.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        RECEIVE_MOVE
    }
}

/// Tracks game group membership.
#[derive(Debug, Default)]
pub struct GameHub {
    groups: HashMap<String, Vec<ConnectionId>>,
}

impl GameHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `connection` to the group for `game_id`. Joining twice is a no-op.
    pub fn join_game(&mut self, connection: ConnectionId, game_id: &str) {
        let members = self.groups.entry(String::from(game_id)).or_default();
        if !members.contains(&connection) {
            members.push(connection);
            info!(%connection, game_id, members = members.len(), "joined game");
        }
    }

    /// Removes `connection` from the group for `game_id`.
    ///
    /// Returns whether the connection was a member.
    pub fn leave_game(&mut self, connection: ConnectionId, game_id: &str) -> bool {
        let Some(members) = self.groups.get_mut(game_id) else {
            return false;
        };

        let before = members.len();
        members.retain(|&id| id != connection);
        let removed = members.len() != before;

        if members.is_empty() {
            self.groups.remove(game_id);
        }
        if removed {
            info!(%connection, game_id, "left game");
        }

        removed
    }

    /// Removes `connection` from every group it joined.
    pub fn disconnect(&mut self, connection: ConnectionId) {
        self.groups.retain(|_, members| {
            members.retain(|&id| id != connection);
            !members.is_empty()
        });
        debug!(%connection, "disconnected");
    }

    /// Returns the members of a game group in join order.
    #[must_use]
    pub fn members(&self, game_id: &str) -> &[ConnectionId] {
        self.groups
            .get(game_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether `connection` belongs to the group for `game_id`.
    #[must_use]
    pub fn is_member(&self, connection: ConnectionId, game_id: &str) -> bool {
        self.members(game_id).contains(&connection)
    }

    /// Returns the number of groups with at least one member.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.groups.len()
    }

    /// Addresses a `(player, move)` pair to everyone in the group.
    ///
    /// A game nobody has joined yields a broadcast with no recipients.
    #[must_use]
    pub fn send_move(&self, game_id: &str, player: &str, action: &str) -> Broadcast {
        self.relay(game_id, Move::new(player, action))
    }

    /// Addresses an engine event to everyone in the group.
    #[must_use]
    pub fn publish(&self, game_id: &str, event: &GameEvent) -> Broadcast {
        self.relay(game_id, Move::from(event))
    }

    fn relay(&self, game_id: &str, message: Move) -> Broadcast {
        let recipients = self.members(game_id).to_vec();
        debug!(
            game_id,
            player = %message.player,
            action = %message.action,
            recipients = recipients.len(),
            "relaying move"
        );

        Broadcast {
            game_id: String::from(game_id),
            recipients,
            message,
        }
    }
}
