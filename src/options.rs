//! Game configuration options.

/// Configuration options for a Match and Play game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use match_and_play::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_max_players(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of cards dealt to each player.
    pub hand_size: u8,
    /// Maximum number of players at the table.
    pub max_players: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            max_players: 8,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// A hand size of zero is accepted here but [`Game::deal`] rejects it
    /// with [`DealError::EmptyHand`].
    ///
    /// [`Game::deal`]: crate::Game::deal
    /// [`DealError::EmptyHand`]: crate::DealError::EmptyHand
    ///
    /// # Example
    ///
    /// ```
    /// use match_and_play::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the maximum number of players.
    ///
    /// A limit below two leaves no way to seat enough players, so
    /// [`Game::deal`] fails with [`DealError::NotEnoughPlayers`].
    ///
    /// [`Game::deal`]: crate::Game::deal
    /// [`DealError::NotEnoughPlayers`]: crate::DealError::NotEnoughPlayers
    ///
    /// # Example
    ///
    /// ```
    /// use match_and_play::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(3);
    /// assert_eq!(options.max_players, 3);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players;
        self
    }

    /// Returns the number of cards the deal consumes for `players` players,
    /// including the card turned up to start the discard pile.
    #[must_use]
    pub const fn cards_needed(&self, players: usize) -> usize {
        players * self.hand_size as usize + 1
    }
}
