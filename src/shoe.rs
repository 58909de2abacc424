//! The shoe: one or more decks dealt from the front.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::NonZeroU8;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered stack of cards consumed from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates an empty shoe.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Builds an unshuffled shoe of `decks` standard 52-card decks.
    ///
    /// Each deck is laid out suit by suit, two through ace.
    #[must_use]
    pub fn build(decks: NonZeroU8) -> Self {
        let decks = usize::from(decks.get());
        let mut cards = VecDeque::with_capacity(decks * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Creates a shoe that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the shoe in place with the supplied random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the card at the front of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if there are no cards left.
    pub fn deal_one(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop_front().ok_or(ShoeError::Empty)
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
