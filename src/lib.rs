//! A single-hand blackjack engine with optional `no_std` support.
//!
//! The crate provides an [`Engine`] that deals rounds into caller-owned
//! [`Session`]s, covering dealing, hand valuation, dealer play, and outcome
//! resolution. A [`GameHub`] tracks which connections watch which game, and a
//! [`Lobby`] ties both together for hosts running many games at once.
//!
//! # Example
//!
//! ```
//! use bjlive::{Engine, GameOptions};
//!
//! let mut engine = Engine::new(GameOptions::default(), 42);
//! let mut session = engine.new_session();
//! assert_eq!(session.visible_dealer_hand().len(), 1);
//!
//! let result = session.player_stands("alice").unwrap();
//! assert!(result.dealer_value >= 17 || result.player_value > 21);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod hub;
pub mod lobby;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DrawError, LobbyError, StandError};
pub use event::{Action, GameEvent, Move};
pub use game::{Engine, GameState, Session};
pub use hand::{Hand, hand_value, is_soft, visible_cards};
pub use hub::{Broadcast, ConnectionId, GameHub, RECEIVE_MOVE};
pub use lobby::Lobby;
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, Winner};
