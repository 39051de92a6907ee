//! CLI demo driving the game engine the way a GUI host would: issue a
//! command, then re-render the observable state and react to the events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rondars::{Card, Game, GameEvent, Suit};

fn main() {
    println!("Ronda CLI demo");
    println!("Commands: [p]lay card, [t]ake, [a]nnounce, [n]ew game, [q]uit");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    print_table(&game);

    loop {
        let command = prompt_line("Command: ");

        let events = match command.as_str() {
            "p" | "play" => game.play_card(),
            "t" | "take" => game.take(),
            "a" | "announce" => game.announce(),
            "n" | "new" => game.new_game(),
            "q" | "quit" => return,
            _ => {
                println!("Unknown command.");
                continue;
            }
        };

        if events.is_empty() {
            println!("Nothing happened. Start the next game with 'n'.");
            continue;
        }

        print_table(&game);

        for event in events {
            if let GameEvent::GameOver(winner) = event {
                println!("Game over: {winner}");
            }
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

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    println!("Your hand:     {}", format_hand(game.player_hand.cards()));
    println!("Opponent hand: {}", format_hand(game.opponent_hand.cards()));
    println!(
        "Scores - you: {} | opponent: {}",
        game.player_score, game.opponent_score
    );
    println!();
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Coins => ("o", "33"),
        Suit::Cups => ("c", "31"),
        Suit::Swords => ("e", "34"),
        Suit::Clubs => ("b", "32"),
    };

    let colored_suit = colorize(suit, color_code);
    format!("{}{colored_suit}", card.rank)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
