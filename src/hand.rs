//! Hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

const BLACKJACK: u8 = 21;

/// The valid totals of a hand.
///
/// At most two totals are tracked: every ace counted as 1 (hard), and exactly
/// one ace counted as 11 (soft). A second ace at 11 always busts, so no other
/// combination can be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Totals {
    /// Even the hard total is over 21.
    Bust,
    /// A single valid total.
    One(u8),
    /// Hard and soft totals, both valid, hard first.
    Two(u8, u8),
}

impl Totals {
    /// Computes the totals of `cards`. Face-down cards are counted.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut non_ace_sum: u8 = 0;
        let mut aces: u8 = 0;

        for card in cards {
            match card.rank.point_value() {
                Some(value) => non_ace_sum = non_ace_sum.saturating_add(value),
                None => aces = aces.saturating_add(1),
            }
        }

        let hard = non_ace_sum.saturating_add(aces);
        if hard > BLACKJACK {
            return Self::Bust;
        }
        if aces == 0 {
            return Self::One(hard);
        }

        let soft = hard + 10;
        if soft > BLACKJACK {
            Self::One(hard)
        } else {
            Self::Two(hard, soft)
        }
    }

    /// Returns the highest valid total, or `None` if bust.
    #[must_use]
    pub const fn best(&self) -> Option<u8> {
        match *self {
            Self::Bust => None,
            Self::One(total) | Self::Two(_, total) => Some(total),
        }
    }

    /// Returns the lowest valid total, or `None` if bust.
    #[must_use]
    pub const fn lowest(&self) -> Option<u8> {
        match *self {
            Self::Bust => None,
            Self::One(total) | Self::Two(total, _) => Some(total),
        }
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        matches!(self, Self::Bust)
    }

    /// Returns whether `total` is one of the valid totals.
    #[must_use]
    pub const fn contains(&self, total: u8) -> bool {
        match *self {
            Self::Bust => false,
            Self::One(a) => a == total,
            Self::Two(a, b) => a == total || b == total,
        }
    }

    /// Returns the valid totals in ascending order. Empty if bust.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        match *self {
            Self::Bust => Vec::new(),
            Self::One(a) => alloc::vec![a],
            Self::Two(a, b) => alloc::vec![a, b],
        }
    }
}

/// Classification of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandEvaluation {
    /// No valid total.
    Bust,
    /// Holds an ace and a ten-valued card.
    ///
    /// This fires for any hand size, so `10 + 10 + A` is a blackjack too.
    Blackjack,
    /// One of the valid totals is exactly 21.
    Has21,
    /// Every valid total is below 21.
    LessThan21,
}

/// Classifies `cards`.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandEvaluation {
    let totals = Totals::of(cards);
    if totals.is_bust() {
        return HandEvaluation::Bust;
    }

    let has_ace = cards.iter().any(Card::is_ace);
    let has_ten = cards.iter().any(|c| c.rank.is_ten_valued());
    if has_ace && has_ten {
        HandEvaluation::Blackjack
    } else if totals.contains(BLACKJACK) {
        HandEvaluation::Has21
    } else {
        HandEvaluation::LessThan21
    }
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the valid totals.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::of(&self.cards)
    }

    /// Returns the totals of the face-up cards only.
    #[must_use]
    pub fn visible_totals(&self) -> Totals {
        let visible: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| c.is_face_up())
            .copied()
            .collect();
        Totals::of(&visible)
    }

    /// Returns the highest valid total, or `None` if bust.
    #[must_use]
    pub fn best_total(&self) -> Option<u8> {
        self.totals().best()
    }

    /// Classifies the hand.
    #[must_use]
    pub fn evaluation(&self) -> HandEvaluation {
        evaluate(&self.cards)
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
