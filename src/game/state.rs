//! Round state types.

use crate::hand::Hand;
use crate::result::Outcome;
use crate::shoe::Shoe;

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Waiting for the player to hit or stand.
    InProgress,
    /// Round is over.
    Resolved(Outcome),
}

impl GameStatus {
    /// Returns the outcome if the round is resolved.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            Self::NotStarted | Self::InProgress => None,
        }
    }

    /// Returns whether a new round may be dealt.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The player's money.
///
/// Neither field is validated; negative bets and overdrafts are the caller's
/// business. Debits and credits wrap on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ledger {
    /// Account balance.
    pub balance: i64,
    /// Bet debited at every deal.
    pub bet: i64,
}

/// Everything a round mutates, held under one lock.
#[derive(Debug, Clone)]
pub(super) struct Table {
    pub(super) shoe: Shoe,
    pub(super) dealer: Hand,
    pub(super) player: Hand,
    pub(super) status: GameStatus,
    pub(super) ledger: Ledger,
}

impl Table {
    pub(super) const fn new(ledger: Ledger) -> Self {
        Self {
            shoe: Shoe::new(),
            dealer: Hand::new(),
            player: Hand::new(),
            status: GameStatus::NotStarted,
            ledger,
        }
    }

    /// Resolves the round and credits the payout for `outcome`.
    pub(super) fn settle(&mut self, outcome: Outcome) -> i64 {
        let payout = outcome.payout(self.ledger.bet);
        self.ledger.balance = self.ledger.balance.wrapping_add(payout);
        self.status = GameStatus::Resolved(outcome);
        payout
    }
}
