//! CLI blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Card, Game, GameOptions, GameStatus, Outcome, Suit, Totals};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    // Engine events go to stderr; run with `2>bjround.log` to keep them.
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let balance = game.balance();
        let current = game.bet();
        let Some(bet) = prompt_i64(
            &format!("Balance {balance}. Bet amount (Enter keeps {current}, 0 to quit): "),
            current,
        ) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }
        game.set_bet(bet);

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while game.status() == GameStatus::InProgress {
            print_table(&game);

            match prompt_line("[h]it [s]tand: ").as_str() {
                "h" | "hit" => match game.player_hit() {
                    Ok(card) => println!("You draw {}", format_card(&card)),
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => match game.player_stand() {
                    Ok(settlement) => {
                        if !settlement.dealer_draws.is_empty() {
                            println!("Dealer draws {} card(s).", settlement.dealer_draws.len());
                        }
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&game);
        match game.status() {
            GameStatus::Resolved(Outcome::PlayerWon) => println!("You win."),
            GameStatus::Resolved(Outcome::DealerWon) => println!("Dealer wins."),
            GameStatus::Resolved(Outcome::Draw) => println!("Push."),
            GameStatus::NotStarted | GameStatus::InProgress => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_i64(prompt: &str, default: i64) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(default);
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let dealer = game.dealer_cards();
    let dealer_view = dealer
        .iter()
        .map(|card| {
            if card.is_face_up() {
                format_card(card)
            } else {
                "??".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\nDealer: {dealer_view} ({})",
        format_totals(game.dealer_visible_totals())
    );

    let player = game.player_cards();
    let player_view = player.iter().map(format_card).collect::<Vec<_>>().join(" ");
    println!(
        "You:    {player_view} ({}, {:?})",
        format_totals(game.player_totals()),
        game.player_evaluation()
    );
    println!();
}

fn format_totals(totals: Totals) -> String {
    match totals {
        Totals::Bust => "bust".to_string(),
        Totals::One(total) => total.to_string(),
        Totals::Two(hard, soft) => format!("{hard}/{soft}"),
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
