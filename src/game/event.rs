use super::{Money, PlayerId, Position};
use std::fmt;
use std::time::SystemTime;

/// The closed set of event kinds the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Narration only; acknowledging it ends the chain.
    Summary,
    PurchasePrompt,
    BuildPrompt,
    RedeemPrompt,
    TollPrompt,
    TaxPrompt,
    /// The mortgage-or-bankrupt offer loop.
    MortgagePrompt,
    GameOver,
}

impl EventKind {
    /// A short tag for output adapters and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            EventKind::Summary => "SUMMARY",
            EventKind::PurchasePrompt => "PURCHASE",
            EventKind::BuildPrompt => "BUILD",
            EventKind::RedeemPrompt => "REDEEM",
            EventKind::TollPrompt => "TOLL",
            EventKind::TaxPrompt => "TAX",
            EventKind::MortgagePrompt => "MORTGAGE",
            EventKind::GameOver => "GAME_OVER",
        }
    }
}

/// A pending payment the settle chain is trying to cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Obligation {
    /// A voluntary purchase; paid to the bank, abandonable.
    Purchase { position: Position, price: Money },
    /// Toll owed to another player.
    Toll { recipient: PlayerId, amount: Money },
    /// Tax owed to the bank.
    Tax { amount: Money },
}

impl Obligation {
    pub fn amount(&self) -> Money {
        match self {
            Obligation::Purchase { price, .. } => *price,
            Obligation::Toll { amount, .. } => *amount,
            Obligation::Tax { amount } => *amount,
        }
    }
}

/// The continuation carried by an interactive event. The driver hands
/// it back to the engine to produce the next link of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// Wait for the player to read the summary, then end the chain.
    Acknowledge,
    /// Offer the turn-start redeem menu, then roll as usual.
    RedeemChoice { player: PlayerId, turn: u32 },
    /// Ask whether to buy the tile just landed on.
    Purchase { player: PlayerId, position: Position },
    /// Offer house/hotel construction on the player's own tile.
    Build { player: PlayerId, position: Position },
    /// Run one step of the mortgage-or-bankrupt fallback chain.
    Settle {
        player: PlayerId,
        obligation: Obligation,
    },
}

/// An immutable record of something that happened during a turn.
/// Events are produced, rendered and discarded; only interactive ones
/// carry an action.
#[derive(Debug, Clone)]
pub struct GameEvent {
    /// Unique within the engine's lifetime, monotonically increasing.
    pub id: u64,
    pub occurred_at: SystemTime,
    pub player_id: Option<PlayerId>,
    pub kind: EventKind,
    /// Human-readable narration, rendered by the output sink.
    pub text: String,
    pub action: Option<TurnAction>,
}

impl GameEvent {
    /// Take the continuation, consuming the event.
    pub fn into_action(self) -> Option<TurnAction> {
        self.action
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
