//! Round outcome and settlement types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWon,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWon,
    /// Equal totals; the stake is returned.
    Draw,
}

impl Outcome {
    /// Returns the amount credited back to the account for `bet`.
    ///
    /// The bet is unvalidated, so the arithmetic wraps on overflow.
    #[must_use]
    pub const fn payout(self, bet: i64) -> i64 {
        match self {
            Self::PlayerWon => bet.wrapping_mul(2),
            Self::Draw => bet,
            Self::DealerWon => 0,
        }
    }
}

/// What happened when the player stood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Amount credited to the account.
    pub payout: i64,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_draws: Vec<Card>,
    /// The dealer's best total, or `None` if the dealer busted.
    pub dealer_total: Option<u8>,
    /// The player's best total.
    pub player_total: Option<u8>,
}
