use rand::RngCore;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandEvaluation;
use crate::result::{Outcome, Settlement};

use super::state::Table;
use super::{Game, GameStatus, dealer};

fn ensure_in_progress(table: &Table) -> Result<(), ActionError> {
    if table.status == GameStatus::InProgress {
        Ok(())
    } else {
        Err(ActionError::InvalidState)
    }
}

impl<R: RngCore> Game<R> {
    /// Player action: Hit (draw a card).
    ///
    /// If the player busts the round resolves as [`Outcome::DealerWon`] and
    /// nothing is credited.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the shoe is empty.
    pub fn player_hit(&self) -> Result<Card, ActionError> {
        let mut table = self.table.lock();
        ensure_in_progress(&table)?;

        let card = table.shoe.deal_one()?;
        table.player.add_card(card);

        let evaluation = table.player.evaluation();
        if evaluation == HandEvaluation::Bust {
            table.settle(Outcome::DealerWon);
        }

        tracing::debug!(
            %card,
            ?evaluation,
            balance = table.ledger.balance,
            "player hit"
        );
        drop(table);

        Ok(card)
    }

    /// Player action: Stand (end the turn).
    ///
    /// The dealer's hole card is revealed, the dealer draws to 17 and the
    /// round is settled against the player's best total.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the shoe runs out while
    /// the dealer must draw.
    pub fn player_stand(&self) -> Result<Settlement, ActionError> {
        let mut table = self.table.lock();
        ensure_in_progress(&table)?;

        table.dealer.reveal();
        let dealer_draws = dealer::dealer_play(&mut table)?;
        let settlement = dealer::showdown(&mut table, dealer_draws);

        tracing::debug!(
            outcome = ?settlement.outcome,
            payout = settlement.payout,
            dealer_total = ?settlement.dealer_total,
            player_total = ?settlement.player_total,
            balance = table.ledger.balance,
            "round settled"
        );
        drop(table);

        Ok(settlement)
    }
}
