//! CLI blackjack demo.
//!
//! Set `RUST_LOG=bjlive=debug` to watch the engine's tracing output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjlive::{
    Card, ConnectionId, GameOptions, GameState, Lobby, Move, Suit, Winner, hand_value,
};
use tracing_subscriber::EnvFilter;

const GAME_ID: &str = "cli";
const PLAYER: &str = "You";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let lobby = Lobby::new(GameOptions::default(), seed);
    lobby.join_game(ConnectionId(0), GAME_ID);

    let mut wins = 0u32;
    let mut losses = 0u32;

    loop {
        lobby.start_game(GAME_ID);

        while lobby.state(GAME_ID) == Ok(GameState::PlayerTurn) {
            print_table(&lobby);

            if lobby.is_game_over(GAME_ID).unwrap_or(false) {
                println!("Someone reached 21.");
            }

            println!("Actions: {} {}", colorize("[h]it", "32"), colorize("[s]tand", "32"));
            match prompt_line("Action: ").as_str() {
                "h" | "hit" => match lobby.hit(GAME_ID, PLAYER) {
                    Ok((card, broadcast)) => {
                        let Move { player, action } = &broadcast.message;
                        println!("{player} {action}: {}", format_card(&card));
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => match lobby.player_stands(GAME_ID, PLAYER) {
                    Ok((result, broadcasts)) => {
                        print_table(&lobby);
                        if !result.dealer_draws.is_empty() {
                            println!("Dealer draws {} card(s).", result.dealer_draws.len());
                        }
                        for broadcast in broadcasts {
                            println!("> {} {}", broadcast.message.player, broadcast.message.action);
                        }
                        match result.winner() {
                            Winner::Player => wins += 1,
                            Winner::Dealer => losses += 1,
                        }
                    }
                    Err(err) => {
                        println!("Round error: {err}");
                        break;
                    }
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        println!("Score: {wins} won, {losses} lost");
        if matches!(prompt_line("Another round? (y/n): ").as_str(), "n" | "no" | "q") {
            println!("Goodbye.");
            break;
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

fn print_table(lobby: &Lobby) {
    let dealer = lobby.visible_dealer_hand(GAME_ID).unwrap_or_default();
    let hidden = lobby.state(GAME_ID) == Ok(GameState::PlayerTurn);
    let mut dealer_view = format_cards(&dealer);
    if hidden && !dealer.is_empty() {
        dealer_view.push_str(" ??");
    }
    println!("\nDealer: {dealer_view} (value {})", hand_value(&dealer));

    let player = lobby.player_hand(GAME_ID).unwrap_or_default();
    println!("You:    {} (value {})\n", format_cards(&player), hand_value(&player));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank_label();
    let colored_rank = if card.is_ace() || card.rank > 10 {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    format!("{colored_rank}{}", colorize(suit, color_code))
}
