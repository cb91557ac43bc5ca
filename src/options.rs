//! Game configuration options.

/// Value at which the dealer stops drawing.
pub const DEALER_STANDS_AT: u8 = 17;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjlive::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of 52-card decks shuffled into each shoe.
    pub decks: u8,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether a player already over 21 loses on standing without the dealer
    /// drawing. Off by default, where the dealer plays out and values are
    /// compared as usual.
    pub player_bust_loses_immediately: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            stand_on_soft_17: true,
            player_bust_loses_immediately: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlive::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlive::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether a busted player loses at once when standing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjlive::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_bust_loses_immediately(true);
    /// assert!(options.player_bust_loses_immediately);
    /// ```
    #[must_use]
    pub const fn with_player_bust_loses_immediately(mut self, enabled: bool) -> Self {
        self.player_bust_loses_immediately = enabled;
        self
    }

    /// Returns whether the dealer must draw on the given hand value.
    #[must_use]
    pub const fn dealer_draws(&self, value: u8, is_soft: bool) -> bool {
        value < DEALER_STANDS_AT
            || (value == DEALER_STANDS_AT && is_soft && !self.stand_on_soft_17)
    }
}
