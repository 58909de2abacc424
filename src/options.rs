//! Game configuration options.

use core::num::NonZeroU8;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::num::NonZeroU8;
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(NonZeroU8::new(6).unwrap())
///     .with_starting_balance(1_000)
///     .with_starting_bet(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks shuffled into the shoe at every deal.
    pub decks: NonZeroU8,
    /// Account balance a new game starts with.
    pub starting_balance: i64,
    /// Bet a new game starts with.
    pub starting_bet: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: NonZeroU8::MIN,
            starting_balance: 200,
            starting_bet: 5,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use core::num::NonZeroU8;
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(NonZeroU8::new(6).unwrap());
    /// assert_eq!(options.decks.get(), 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: NonZeroU8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting account balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the starting bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bet(10);
    /// assert_eq!(options.starting_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_starting_bet(mut self, bet: i64) -> Self {
        self.starting_bet = bet;
        self
    }
}
