use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShoeError;
use crate::result::{Outcome, Settlement};

use super::state::Table;

/// The dealer stands once its best total reaches this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// Dealer plays out their hand.
///
/// The dealer draws while the hand is not bust and its best total is 16 or
/// less. A soft 17 stands.
///
/// Returns the cards drawn by the dealer.
pub(super) fn dealer_play(table: &mut Table) -> Result<Vec<Card>, ShoeError> {
    let mut drawn_cards = Vec::new();

    while table
        .dealer
        .best_total()
        .is_some_and(|total| total < DEALER_STANDS_ON)
    {
        let card = table.shoe.deal_one()?;
        table.dealer.add_card(card);
        drawn_cards.push(card);

        tracing::trace!(%card, totals = ?table.dealer.totals(), "dealer draw");
    }

    Ok(drawn_cards)
}

/// Compares best totals, credits the payout and resolves the round.
pub(super) fn showdown(table: &mut Table, dealer_draws: Vec<Card>) -> Settlement {
    let dealer_total = table.dealer.best_total();
    let player_total = table.player.best_total();

    let outcome = match (dealer_total, player_total) {
        (None, _) => Outcome::PlayerWon,
        (Some(dealer), Some(player)) if dealer > player => Outcome::DealerWon,
        (Some(dealer), Some(player)) if dealer == player => Outcome::Draw,
        (Some(_), Some(_)) => Outcome::PlayerWon,
        // Unreachable while the player can only stand with a live hand.
        (Some(_), None) => Outcome::DealerWon,
    };

    let payout = table.settle(outcome);

    Settlement {
        outcome,
        payout,
        dealer_draws,
        dealer_total,
        player_total,
    }
}
