//! Round engine and state management.

use alloc::vec::Vec;
use core::num::NonZeroU8;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::ReshuffleError;
use crate::hand::{HandEvaluation, Totals};
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{GameStatus, Ledger};
use state::Table;

/// A single-player blackjack engine.
///
/// The game owns the shoe, both hands, the round status and the ledger. Every
/// operation takes the table lock once, so calls on one game are serialized.
/// The random source is supplied at construction and reused for every shuffle.
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    table: Mutex<Table>,
    rng: Mutex<R>,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game shuffling with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, GameStatus};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), GameStatus::NotStarted);
    /// assert_eq!(game.balance(), 200);
    /// assert_eq!(game.bet(), 5);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game shuffling with the given random source.
    ///
    /// The shoe and both hands start empty; the first [`Game::deal`] builds
    /// the shoe.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        let ledger = Ledger {
            balance: options.starting_balance,
            bet: options.starting_bet,
        };

        Self {
            options,
            table: Mutex::new(Table::new(ledger)),
            rng: Mutex::new(rng),
        }
    }

    /// Builds a fresh shoe and shuffles it with the game's random source.
    fn shuffled_shoe(&self) -> Shoe {
        let mut shoe = Shoe::build(self.options.decks);
        shoe.shuffle(&mut *self.rng.lock());
        shoe
    }

    /// Replaces the shoe with a freshly built and shuffled one.
    ///
    /// [`Game::deal`] already does this at the start of every round; this is
    /// for callers that want to inspect the shoe before dealing.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        let mut table = self.table.lock();
        if !table.status.can_deal() {
            return Err(ReshuffleError::InvalidState);
        }

        table.shoe = self.shuffled_shoe();
        drop(table);

        tracing::debug!(decks = self.options.decks.get(), "shoe reshuffled");
        Ok(())
    }

    /// Returns the number of decks in a fresh shoe.
    #[must_use]
    pub const fn number_of_decks(&self) -> NonZeroU8 {
        self.options.decks
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().shoe.len()
    }

    /// Returns the undealt cards, next card first.
    #[must_use]
    pub fn shoe_cards(&self) -> Vec<Card> {
        self.table.lock().shoe.cards()
    }

    /// Returns the current round status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.table.lock().status
    }

    /// Returns the dealer's cards. The hole card stays face down until the
    /// player stands.
    #[must_use]
    pub fn dealer_cards(&self) -> Vec<Card> {
        self.table.lock().dealer.cards().to_vec()
    }

    /// Returns the player's cards.
    #[must_use]
    pub fn player_cards(&self) -> Vec<Card> {
        self.table.lock().player.cards().to_vec()
    }

    /// Returns the valid totals of the dealer's hand, hole card included.
    #[must_use]
    pub fn dealer_totals(&self) -> Totals {
        self.table.lock().dealer.totals()
    }

    /// Returns the totals of the dealer's face-up cards.
    #[must_use]
    pub fn dealer_visible_totals(&self) -> Totals {
        self.table.lock().dealer.visible_totals()
    }

    /// Returns the valid totals of the player's hand.
    #[must_use]
    pub fn player_totals(&self) -> Totals {
        self.table.lock().player.totals()
    }

    /// Classifies the dealer's hand.
    #[must_use]
    pub fn dealer_evaluation(&self) -> HandEvaluation {
        self.table.lock().dealer.evaluation()
    }

    /// Classifies the player's hand.
    #[must_use]
    pub fn player_evaluation(&self) -> HandEvaluation {
        self.table.lock().player.evaluation()
    }
}
