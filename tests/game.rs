//! Game integration tests.

use core::num::NonZeroU8;

use bjround::{
    ActionError, Card, DEALER_STANDS_ON, DECK_SIZE, DealError, Game, GameOptions, GameStatus,
    HandEvaluation, Outcome, Rank, ReshuffleError, Totals,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn decks(n: u8) -> NonZeroU8 {
    NonZeroU8::new(n).unwrap()
}

/// Deals and stands on the initial hand for seeds in turn until `accept`
/// returns true for the settled game.
fn find_round(accept: impl Fn(&Game, Outcome) -> bool) -> Game {
    for seed in 0..2_000 {
        let game = Game::new(GameOptions::default(), seed);
        game.deal().unwrap();
        let settlement = game.player_stand().unwrap();
        if accept(&game, settlement.outcome) {
            return game;
        }
    }
    panic!("no seed produced the requested round");
}

#[test]
fn new_game_defaults() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.balance(), 200);
    assert_eq!(game.bet(), 5);
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert_eq!(game.number_of_decks().get(), 1);
    assert_eq!(game.cards_remaining(), 0);
    assert!(game.player_cards().is_empty());
    assert!(game.dealer_cards().is_empty());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(decks(4))
        .with_starting_balance(1_000)
        .with_starting_bet(25);

    assert_eq!(options.decks.get(), 4);
    assert_eq!(options.starting_balance, 1_000);
    assert_eq!(options.starting_bet, 25);

    let game = Game::new(options, 1);
    assert_eq!(game.balance(), 1_000);
    assert_eq!(game.bet(), 25);
}

#[test]
fn deal_uses_a_fresh_shoe_each_round() {
    let game = Game::new(GameOptions::default().with_decks(decks(2)), 7);

    game.deal().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.balance(), 195);
    assert_eq!(game.player_cards().len(), 2);
    assert_eq!(game.dealer_cards().len(), 2);
    assert_eq!(game.cards_remaining(), 2 * DECK_SIZE - 4);

    game.player_stand().unwrap();
    game.deal().unwrap();
    assert_eq!(game.player_cards().len(), 2);
    assert_eq!(game.dealer_cards().len(), 2);
    assert_eq!(game.cards_remaining(), 2 * DECK_SIZE - 4);
}

#[test]
fn dealt_and_remaining_cards_form_one_deck() {
    let rng = ChaCha8Rng::seed_from_u64(11);
    let game = Game::with_rng(GameOptions::default(), rng);
    game.deal().unwrap();

    let player = game.player_cards();
    let dealer = game.dealer_cards();
    let shoe = game.shoe_cards();

    let mut all: Vec<Card> = player.iter().chain(dealer.iter()).copied().collect();
    all.extend(shoe);
    for card in &mut all {
        card.reveal();
    }
    all.sort_by_key(|c| (c.rank, c.suit as u8));

    let mut fresh = bjround::Shoe::build(decks(1)).cards();
    fresh.sort_by_key(|c| (c.rank, c.suit as u8));
    assert_eq!(all, fresh);
}

#[test]
fn same_seed_deals_the_same_round() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    a.deal().unwrap();
    b.deal().unwrap();

    assert_eq!(a.player_cards(), b.player_cards());
    assert_eq!(a.dealer_cards(), b.dealer_cards());
    assert_eq!(a.shoe_cards(), b.shoe_cards());
}

#[test]
fn dealer_hole_card_hidden_until_stand() {
    let game = Game::new(GameOptions::default(), 3);
    game.deal().unwrap();

    let dealer = game.dealer_cards();
    assert!(!dealer[0].is_face_up());
    assert!(dealer[1].is_face_up());
    assert!(game.player_cards().iter().all(Card::is_face_up));

    game.player_stand().unwrap();
    assert!(game.dealer_cards().iter().all(Card::is_face_up));
}

#[test]
fn deal_rejected_while_in_progress() {
    let game = Game::new(GameOptions::default(), 5);
    game.deal().unwrap();

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.balance(), 195);
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);
}

#[test]
fn actions_rejected_before_deal() {
    let game = Game::new(GameOptions::default(), 5);

    assert_eq!(game.player_hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.player_stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.balance(), 200);
}

#[test]
fn hit_after_resolution_is_rejected() {
    let game = Game::new(GameOptions::default(), 8);
    game.deal().unwrap();
    game.player_stand().unwrap();

    let cards = game.player_cards();
    let balance = game.balance();
    assert_eq!(game.player_hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.player_cards(), cards);
    assert_eq!(game.balance(), balance);
}

#[test]
fn reads_are_stable() {
    let game = Game::new(GameOptions::default(), 21);
    game.deal().unwrap();

    assert_eq!(game.player_cards(), game.player_cards());
    assert_eq!(game.status(), game.status());
    assert_eq!(game.dealer_totals(), game.dealer_totals());
    assert_eq!(game.player_evaluation(), game.player_evaluation());
}

#[test]
fn hitting_until_bust_resolves_for_dealer() {
    let game = Game::new(GameOptions::default(), 13);
    game.deal().unwrap();

    while game.status() == GameStatus::InProgress {
        game.player_hit().unwrap();
    }

    assert_eq!(game.player_evaluation(), HandEvaluation::Bust);
    assert_eq!(game.player_totals(), Totals::Bust);
    assert_eq!(game.status(), GameStatus::Resolved(Outcome::DealerWon));
    assert_eq!(game.balance(), 195);
}

#[test]
fn dealer_bust_credits_twice_the_bet() {
    let game = find_round(|game, _| game.dealer_evaluation() == HandEvaluation::Bust);

    assert_eq!(game.status(), GameStatus::Resolved(Outcome::PlayerWon));
    assert_eq!(game.balance(), 205);
}

#[test]
fn tie_credits_the_bet() {
    let game = find_round(|_, outcome| outcome == Outcome::Draw);

    assert_eq!(game.player_totals().best(), game.dealer_totals().best());
    assert_eq!(game.balance(), 200);
}

#[test]
fn dealer_win_credits_nothing() {
    let game = find_round(|_, outcome| outcome == Outcome::DealerWon);

    assert!(game.dealer_totals().best() > game.player_totals().best());
    assert_eq!(game.balance(), 195);
}

#[test]
fn dealer_finishes_between_17_and_bust() {
    for seed in 0..200 {
        let game = Game::new(GameOptions::default(), seed);
        game.deal().unwrap();
        let settlement = game.player_stand().unwrap();

        match game.dealer_totals().best() {
            Some(total) => assert!(total >= DEALER_STANDS_ON, "seed {seed}"),
            None => assert!(!settlement.dealer_draws.is_empty(), "seed {seed}"),
        }

        // The hand before the last draw was still live and below 17.
        let dealer = game.dealer_cards();
        if !settlement.dealer_draws.is_empty() {
            let before = &dealer[..dealer.len() - 1];
            let best = Totals::of(before).best();
            assert!(best.is_some_and(|t| t < DEALER_STANDS_ON), "seed {seed}");
        }
    }
}

#[test]
fn ledger_balances_over_many_rounds() {
    let game = Game::new(GameOptions::default().with_starting_balance(1_000), 17);

    for _ in 0..100 {
        let before = game.balance();
        game.deal().unwrap();
        assert_eq!(game.balance(), before - 5);

        let payout = if game.player_evaluation() == HandEvaluation::LessThan21
            && game.player_totals().best() < Some(12)
        {
            game.player_hit().unwrap();
            if game.status() == GameStatus::InProgress {
                game.player_stand().unwrap().payout
            } else {
                0
            }
        } else {
            game.player_stand().unwrap().payout
        };

        let outcome = game.status().outcome().unwrap();
        assert_eq!(payout, outcome.payout(5));
        assert_eq!(game.balance(), before - 5 + payout);
    }
}

#[test]
fn setters_are_unvalidated() {
    let game = Game::new(GameOptions::default(), 2);
    game.set_balance(-50);
    game.set_bet(-10);
    assert_eq!(game.balance(), -50);
    assert_eq!(game.bet(), -10);

    game.deal().unwrap();
    assert_eq!(game.balance(), -40);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn reshuffle_between_rounds() {
    let game = Game::new(GameOptions::default().with_decks(decks(3)), 4);
    game.reshuffle().unwrap();
    assert_eq!(game.cards_remaining(), 3 * DECK_SIZE);
    assert_eq!(game.status(), GameStatus::NotStarted);

    let top = game.shoe_cards();
    game.reshuffle().unwrap();
    assert_ne!(top, game.shoe_cards());
}

#[test]
fn three_card_ten_ten_ace_counts_as_blackjack() {
    let hand = [
        Card::new(Rank::Ten, bjround::Suit::Hearts),
        Card::new(Rank::Ten, bjround::Suit::Clubs),
        Card::new(Rank::Ace, bjround::Suit::Spades),
    ];

    assert_eq!(Totals::of(&hand), Totals::One(21));
    assert_eq!(bjround::evaluate(&hand), HandEvaluation::Blackjack);
}
