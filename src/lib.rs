//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages one round at a time: it
//! builds and shuffles the shoe, deals to the player and the dealer, resolves
//! hits and stands, plays out the dealer and settles the bet against the
//! player's balance. Presentation and input are left to the caller.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, GameStatus, HandEvaluation};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.balance(), 195);
//!
//! if game.player_evaluation() == HandEvaluation::LessThan21 {
//!     game.player_hit().unwrap();
//! }
//! if game.status() == GameStatus::InProgress {
//!     let settlement = game.player_stand().unwrap();
//!     assert_eq!(game.balance(), 195 + settlement.payout);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, CardError, DealError, ReshuffleError, ShoeError};
pub use game::{DEALER_STANDS_ON, Game, GameStatus, Ledger};
pub use hand::{Hand, HandEvaluation, Totals, evaluate};
pub use options::GameOptions;
pub use result::{Outcome, Settlement};
pub use shoe::Shoe;
