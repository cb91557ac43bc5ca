//! Game engine and per-game session state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::options::GameOptions;

mod actions;
mod dealer;
mod session;
pub mod state;

pub use session::Session;
pub use state::GameState;

/// Deals fresh rounds into [`Session`]s.
///
/// The engine only owns the table options and the shuffle RNG. All round
/// state lives in the session the caller passes in, so one engine can serve
/// any number of independent games.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Game options.
    options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Engine {
    /// Creates a new engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlive::{Engine, GameOptions};
    ///
    /// let mut engine = Engine::new(GameOptions::default(), 42);
    /// let session = engine.new_session();
    /// assert_eq!(session.player_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Creates and shuffles a shoe according to the table options.
    pub fn shuffled_deck(&mut self) -> Deck {
        Deck::generate(self.options.decks, &mut self.rng)
    }

    /// Starts a new round in `session` with a freshly shuffled shoe.
    ///
    /// Any previous round in the session is discarded.
    pub fn initialize(&mut self, session: &mut Session) {
        let deck = self.shuffled_deck();
        debug!(decks = self.options.decks, cards = deck.len(), "shuffled shoe");
        *session = Session::deal(deck, self.options);
    }

    /// Returns a session with a freshly dealt round.
    pub fn new_session(&mut self) -> Session {
        let mut session = Session::default();
        self.initialize(&mut session);
        session
    }
}
