use rand::RngCore;

use crate::error::DealError;
use crate::shoe::Shoe;

use super::{Game, GameStatus, Ledger};

impl<R: RngCore> Game<R> {
    /// Deals a new round.
    ///
    /// A fresh shoe is built and shuffled, then the player, dealer, player
    /// and dealer each receive one card. The dealer's first card is dealt
    /// face down. The bet is debited from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn deal(&self) -> Result<(), DealError> {
        if !self.status().can_deal() {
            return Err(DealError::InvalidState);
        }

        let shoe = self.shuffled_shoe();
        self.deal_from(shoe)
    }

    /// Deals a new round from `shoe` as ordered.
    ///
    /// The table is only touched once all four cards are out, so a short shoe
    /// leaves the previous round as it was.
    pub(super) fn deal_from(&self, mut shoe: Shoe) -> Result<(), DealError> {
        let mut table = self.table.lock();
        if !table.status.can_deal() {
            return Err(DealError::InvalidState);
        }

        let first = shoe.deal_one()?;
        let mut hole = shoe.deal_one()?;
        hole.hide();
        let second = shoe.deal_one()?;
        let up = shoe.deal_one()?;

        table.shoe = shoe;
        table.player.clear();
        table.player.add_card(first);
        table.player.add_card(second);
        table.dealer.clear();
        table.dealer.add_card(hole);
        table.dealer.add_card(up);

        table.ledger.balance = table.ledger.balance.wrapping_sub(table.ledger.bet);
        table.status = GameStatus::InProgress;

        tracing::debug!(
            bet = table.ledger.bet,
            balance = table.ledger.balance,
            cards_remaining = table.shoe.len(),
            "round dealt"
        );
        drop(table);

        Ok(())
    }

    /// Returns the current bet.
    #[must_use]
    pub fn bet(&self) -> i64 {
        self.table.lock().ledger.bet
    }

    /// Sets the bet for the next deal. The amount is not validated.
    pub fn set_bet(&self, amount: i64) {
        self.table.lock().ledger.bet = amount;
    }

    /// Returns the account balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.table.lock().ledger.balance
    }

    /// Sets the account balance. The amount is not validated.
    pub fn set_balance(&self, amount: i64) {
        self.table.lock().ledger.balance = amount;
    }

    /// Returns a copy of the ledger.
    #[must_use]
    pub fn ledger(&self) -> Ledger {
        self.table.lock().ledger
    }
}
