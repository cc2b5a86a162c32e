use std::env;
use std::fs;
use std::process;

mod game;
mod helpers;
mod ports;

use game::{BoardCatalog, BoardError, InMemoryPlayerRepository, Player, PlayerRepository, TurnEngine};
use ports::{ConsoleDecisionPort, ConsoleOutputPort, DecisionPort, OutputPort};

const DEFAULT_INITIAL_MONEY: i64 = 8000;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("Failed to start the game: {}", error);
        process::exit(1);
    }
}

fn run() -> Result<(), BoardError> {
    // An optional argument points at a JSON board; otherwise play the
    // built-in standard board.
    let board = match env::args().nth(1) {
        Some(path) => BoardCatalog::from_json(&fs::read_to_string(path)?)?,
        None => BoardCatalog::standard(),
    };

    let mut decisions = ConsoleDecisionPort::new();
    let repository = setup_players(&mut decisions);

    let mut engine = TurnEngine::new(Box::new(repository), board, Box::new(decisions));
    let mut output = ConsoleOutputPort;

    // Drive each turn's event chain to its end before moving on.
    while !engine.is_game_over() {
        let mut event = engine.advance_turn();
        loop {
            output.publish(&event);
            match event.into_action().and_then(|action| engine.resume(action)) {
                Some(next) => event = next,
                None => break,
            }
        }
    }
    let mut remaining = engine.registry().find_all();
    remaining.retain(|player| player.has_assets());
    match remaining.first() {
        Some(winner) => println!(
            "Game over. {} wins with {} in cash!",
            winner.name,
            helpers::format_money(winner.money)
        ),
        None => println!("Game over."),
    }
    Ok(())
}

/// Console dialogue collecting the roster: player count (2..=6),
/// initial money and names, all with sensible defaults.
fn setup_players(decisions: &mut ConsoleDecisionPort) -> InMemoryPlayerRepository {
    let count = decisions
        .request_int("How many players? (2-6): ")
        .max(2)
        .min(6);

    let mut money = decisions.request_int(&format!(
        "Initial money per player? (suggested 5000-10000, default {}): ",
        DEFAULT_INITIAL_MONEY
    ));
    if money <= 0 {
        money = DEFAULT_INITIAL_MONEY;
    }

    let mut repository = InMemoryPlayerRepository::new();
    for i in 1..=count {
        let mut name = decisions.request_line(&format!(
            "Name of player {} (default: Player {}): ",
            i, i
        ));
        if name.is_empty() {
            name = format!("Player {}", i);
        }
        repository.save(&Player::new(i as u32, &name, money));
    }
    repository
}
