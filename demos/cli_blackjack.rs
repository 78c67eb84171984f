//! CLI blackjack demo.
//!
//! Set `RUST_LOG=bjsolo=debug` to see the engine's transitions.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjsolo::{Card, DealerHand, Event, Game, GameOptions, GameState, Hand, Seat, Suit};
use tracing_subscriber::EnvFilter;

const DEAL_DELAY: Duration = Duration::from_millis(350);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), 500, seed);

    loop {
        let balance = game.balance();
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            continue;
        }
        replay_events(&mut game);

        while let GameState::PlayerTurn { hand_index } = game.state() {
            print_table(&game);

            println!("{}", format_actions(&game));
            let action = prompt_line(&format!("Action (hand {hand_index}): "));

            let result = match action.as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double().map(|_| ()),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            replay_events(&mut game);
        }

        if game.state() == GameState::Settled {
            print_table(&game);
        }
    }
}

/// Prints queued events, pausing on the dealer's cards like a real deal.
fn replay_events(game: &mut Game) {
    for event in game.drain_events() {
        match event {
            Event::CardDealt {
                card,
                seat: Seat::Dealer,
                face_down,
                ..
            } => {
                if face_down {
                    println!("Dealer takes a hole card.");
                } else {
                    println!("Dealer draws {}.", format_card(&card));
                }
                thread::sleep(DEAL_DELAY);
            }
            Event::CardDealt {
                card,
                seat: Seat::Player,
                hand_index,
                ..
            } => {
                println!("You draw {} on hand {hand_index}.", format_card(&card));
            }
            Event::HoleCardRevealed { card } => {
                println!("Dealer reveals {}.", format_card(&card));
                thread::sleep(DEAL_DELAY);
            }
            Event::HandSplit => println!("Hand split."),
            Event::RoundSettled { result } => {
                for hand in &result.hands {
                    println!(
                        "Hand {}: {} (bet {}, paid {})",
                        hand.hand_index,
                        hand.outcome.message(),
                        hand.bet,
                        hand.payout
                    );
                }
                println!("Net {}", result.net);
            }
            Event::BalanceChanged { balance, wager } => {
                println!("Balance {balance} | on the table {wager}");
            }
            Event::StateChanged { .. } | Event::ScoreChanged { .. } => {}
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    if let Some(dealer) = game.dealer_hand() {
        let shown = if dealer.is_hole_revealed() {
            format!("Dealer's Cards: {}", dealer.value())
        } else {
            format!("Dealer's Up Card: {}", dealer.visible_value())
        };
        println!("\nDealer: {} ({shown})", format_dealer(dealer));
    }

    let active = game.active_hand();
    let wagers = game.ledger().wagers();
    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if Some(index) == active { "*" } else { " " };
        let bet = wagers.get(index).copied().unwrap_or(0);
        println!(
            "{} Hand {}: {} | Your Cards: {} | bet {} | {:?}",
            marker,
            index,
            format_hand(hand),
            hand.value(),
            bet,
            hand.status()
        );
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let availability = game.available_actions();
    let parts = [
        format_action("hit", "h", availability.hit),
        format_action("stand", "s", availability.stand),
        format_action("double", "d", availability.double),
        format_action("split", "p", availability.split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
