mod globals;

mod board;
pub use board::{
    BoardCatalog, BoardError, CardKind, CardTile, Color, CompanyTile, CountryTile,
    SpecialCategory, SpecialTile, StationTile, Tile,
};

mod player;
pub use player::{InMemoryPlayerRepository, Player, PlayerRepository};

mod property;
pub use property::{PropertyLedger, PropertyState};

mod event;
pub use event::{EventKind, GameEvent, Obligation, TurnAction};

mod dice;
pub use dice::{Dice, RandomDice};

mod cards;
pub use cards::{CardEffect, CardResolver, DeckCardResolver, DrawCard};

mod engine;
pub use engine::TurnEngine;

mod settlement;

#[cfg(test)]
mod tests;

/// An amount of game money. Payments are clipped so a player's
/// cash can reach exactly 0 but never go negative.
pub type Money = i64;

/// A stable player identifier, assigned at creation.
pub type PlayerId = u32;

/// A 1-based board position. Positions wrap at the board length.
pub type Position = u8;

/// Tunable rule constants of the game.
///
/// The start-bonus figures differ between historical rule sets,
/// so they are configurable instead of hard-coded into the engine.
#[derive(Debug, Clone, Copy)]
pub struct GameRules {
    /// Credited immediately when a player's move wraps past the start tile.
    pub pass_start_bonus: Money,
    /// Total start income for a turn that ends exactly on the start tile.
    /// A player who also passed start this turn is topped up to this amount.
    pub stop_start_award: Money,
    /// Number of turns a player sits out after being sent to jail.
    pub jail_turns: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            pass_start_bonus: 2000,
            stop_start_award: 4000,
            jail_turns: 2,
        }
    }
}
