//! CLI blackjack session.
//!
//! Set `RUST_LOG=debug` to watch every draw.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Card, DealerHand, Engine, RoundState, SessionOptions};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Welcome to Blackjack! (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut engine = Engine::new(SessionOptions::default(), seed);

    loop {
        if engine.is_session_over() {
            println!("Game Over. You're out of money!");
            break;
        }

        println!("\nWallet: ${}", engine.wallet());
        let input = prompt_line("Bet amount (q to quit): ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = engine.start_round_str(&input) {
            println!("Invalid bet: {err}");
            continue;
        }
        println!("Round started. Your move.");

        while engine.state() == RoundState::PlayerTurn {
            print_table(&engine);
            println!("{}", format_actions(&engine));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => engine.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => engine.stand().map(|_| ()),
                "d" | "double" => engine.double_down().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&engine);
        if let Some(message) = engine.last_outcome_text() {
            println!(
                "{message} Wallet: ${} | High score: ${}",
                engine.wallet(),
                engine.high_score()
            );
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table<S>(engine: &Engine<S>) {
    let player = engine.player_hand();
    println!(
        "\nYour Hand: {} (Total: {})",
        format_cards(player.cards()),
        player.value()
    );
    println!("Dealer's Hand: {}", format_dealer(engine.dealer_hand()));
}

fn format_cards(cards: &[Card]) -> String {
    let labels: Vec<String> = cards.iter().map(ToString::to_string).collect();
    format!("[{}]", labels.join(", "))
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        format!("{} (Total: {})", format_cards(dealer.cards()), dealer.value())
    } else {
        let up = dealer
            .up_card()
            .map_or_else(String::new, |card| card.to_string());
        format!("[{up}, ?]")
    }
}

fn format_actions<S>(engine: &Engine<S>) -> String {
    let double = if engine.can_double() {
        colorize("[d]double", "32")
    } else {
        colorize("[d]double", "90")
    };
    format!(
        "Actions: {} {} {}",
        colorize("[h]hit", "32"),
        colorize("[s]stand", "32"),
        double
    )
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
