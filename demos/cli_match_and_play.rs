//! CLI Match and Play example.
//!
//! Every seat is a human at the same console. Player names come from the
//! command line (`cargo run --example cli_match_and_play -- Chandu Ammu`);
//! two default names are used otherwise. Set `RUST_LOG=debug` to follow the
//! engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use match_and_play::{
    Card, DrawOutcome, Effect, Game, GameOptions, MoveSource, Presenter, RunOutcome,
    SelectionError, Suit, TurnView,
};

const TURN_LIMIT: usize = 10_000;

fn main() {
    env_logger::init();
    println!("Match and Play CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.len() < 2 {
        names = vec!["Chandu".to_string(), "Ammu".to_string()];
    }
    for name in names {
        if let Err(err) = game.join(name.clone()) {
            println!("{name} cannot join: {err}");
        }
    }

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            return;
        }

        let mut console = Console;
        let mut table = Table::seated_at(&game);
        match game.run(&mut console, &mut table, TURN_LIMIT) {
            Ok(RunOutcome::Winner(_)) => {}
            Ok(RunOutcome::TurnLimit) => println!("No winner after {TURN_LIMIT} turns."),
            Err(err) => {
                println!("Game error: {err}");
                return;
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => game.reset(),
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

struct Console;

impl MoveSource for Console {
    fn select_card(&mut self, _view: &TurnView) -> Option<usize> {
        let input = prompt_line("Choose index of the card: ");
        if input == "q" || input == "quit" {
            std::process::exit(0);
        }
        input.parse().ok()
    }

    fn select_suit(&mut self, _view: &TurnView) -> Option<Suit> {
        prompt_line("Enter new suit (Hearts, Diamonds, Clubs, Spades): ")
            .parse()
            .ok()
    }
}

struct Table {
    names: Vec<String>,
}

impl Table {
    fn seated_at(game: &Game) -> Self {
        let names = (0..game.player_count())
            .filter_map(|seat| u8::try_from(seat).ok())
            .filter_map(|seat| game.player_name(seat))
            .collect();
        Self { names }
    }

    fn name(&self, player_id: u8) -> &str {
        self.names
            .get(usize::from(player_id))
            .map_or("Unknown player", String::as_str)
    }
}

impl Presenter for Table {
    fn turn_started(&mut self, view: &TurnView) {
        println!(
            "\nDeck: {} cards remaining | direction {:?}",
            view.cards_remaining, view.direction
        );
        println!(
            "Top of discard pile: {} (suit to follow: {})",
            format_card(&view.top),
            view.current_suit
        );
        println!("{}'s turn. Hand:", view.player_name);
        for (index, card) in view.hand.iter().enumerate() {
            let marker = if view.playable.contains(&index) { "*" } else { " " };
            println!("{marker} [{index}] {}", format_card(card));
        }
    }

    fn invalid_selection(&mut self, _player_id: u8, error: SelectionError) {
        println!("Invalid index ({error}). Try again.");
    }

    fn invalid_suit(&mut self, _player_id: u8) {
        println!("Invalid suit. Try again.");
    }

    fn card_drawn(&mut self, player_id: u8, outcome: DrawOutcome) {
        println!("{}: {outcome}", self.name(player_id));
    }

    fn card_played(&mut self, player_id: u8, card: Card) {
        println!("{} played: {}", self.name(player_id), format_card(&card));
    }

    fn effect_applied(&mut self, effect: Effect) {
        match effect {
            Effect::DrawOne => println!("Next player must draw one card. (Power Card Effect)"),
            Effect::Reverse => println!("Direction of play changes. (Power Card Effect)"),
            Effect::SwitchSuit => println!("Jack played: choose the next suit."),
            Effect::Normal => {}
        }
    }

    fn suit_changed(&mut self, suit: Suit) {
        println!("Suit changed to {suit} by playing a Jack.");
    }

    fn winner(&mut self, _player_id: u8, name: &str) {
        println!("\n{} wins!", colorize(name, "33"));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => std::process::exit(0),
        Ok(_) => input.trim().to_lowercase(),
        Err(_) => String::new(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
