use super::board::CardKind;
use super::globals::{STANDARD_CHANCE_CARDS, STANDARD_FATE_CARDS};
use super::{Money, Player};
use crate::helpers::format_money;
use rand::Rng;

/// What a drawn card does to the player who drew it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    /// Receive money from the bank.
    Collect(Money),
    /// Pay the bank, clipped to the cash on hand.
    Pay(Money),
    /// Sit out the next turn.
    SkipNextTurn,
}

/// A chance or fate card definition.
#[derive(Debug, Clone)]
pub struct DrawCard {
    pub id: u32,
    pub title: String,
    pub effect: CardEffect,
    pub flavor: String,
}

impl DrawCard {
    /// Apply the card to the player and return the narration,
    /// including what actually changed.
    pub fn apply(&self, player: &mut Player) -> String {
        let outcome = match self.effect {
            CardEffect::Collect(amount) => {
                player.money += amount;
                format!(
                    "Collect {}. Cash: {}.",
                    format_money(amount),
                    format_money(player.money)
                )
            }
            CardEffect::Pay(amount) => {
                let paid = amount.min(player.money);
                player.money -= paid;
                format!(
                    "Pay {}. Cash: {}.",
                    format_money(paid),
                    format_money(player.money)
                )
            }
            CardEffect::SkipNextTurn => {
                player.paused = true;
                "Your next turn is skipped.".to_owned()
            }
        };
        format!("[{}] {} {}", self.title, self.flavor, outcome)
    }
}

/// Collaborator that resolves a card draw. The engine hands over the
/// landing player, the resolver applies any side effects and returns
/// the narrative; the engine persists the player afterward.
pub trait CardResolver {
    fn draw(&mut self, kind: CardKind, player: &mut Player) -> String;
}

/// Draws uniformly from a fixed chance deck and a fixed fate deck.
#[derive(Debug, Clone)]
pub struct DeckCardResolver {
    chance: Vec<DrawCard>,
    fate: Vec<DrawCard>,
}

impl DeckCardResolver {
    pub fn new(chance: Vec<DrawCard>, fate: Vec<DrawCard>) -> DeckCardResolver {
        DeckCardResolver { chance, fate }
    }

    /// The standard decks.
    pub fn standard() -> DeckCardResolver {
        DeckCardResolver::new(STANDARD_CHANCE_CARDS.clone(), STANDARD_FATE_CARDS.clone())
    }
}

impl CardResolver for DeckCardResolver {
    fn draw(&mut self, kind: CardKind, player: &mut Player) -> String {
        let deck = match kind {
            CardKind::Chance => &self.chance,
            CardKind::Fate => &self.fate,
        };
        if deck.is_empty() {
            return "The deck is empty; nothing happens.".to_owned();
        }
        let index = rand::thread_rng().gen_range(0..deck.len());
        deck[index].apply(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_clips_to_available_cash() {
        let card = DrawCard {
            id: 1,
            title: "Doctor's Fee".to_owned(),
            effect: CardEffect::Pay(1000),
            flavor: "That cough was not nothing.".to_owned(),
        };
        let mut player = Player::new(1, "Alice", 400);
        let text = card.apply(&mut player);
        assert_eq!(player.money, 0);
        assert!(text.contains("Pay $400"));
    }

    #[test]
    fn collect_and_skip_effects() {
        let mut player = Player::new(1, "Alice", 100);

        let collect = DrawCard {
            id: 2,
            title: "Inheritance".to_owned(),
            effect: CardEffect::Collect(2000),
            flavor: "A distant relative remembers you.".to_owned(),
        };
        collect.apply(&mut player);
        assert_eq!(player.money, 2100);

        let skip = DrawCard {
            id: 3,
            title: "Storm".to_owned(),
            effect: CardEffect::SkipNextTurn,
            flavor: "All flights grounded.".to_owned(),
        };
        skip.apply(&mut player);
        assert!(player.paused);
    }

    #[test]
    fn standard_decks_resolve_to_narration() {
        let mut resolver = DeckCardResolver::standard();
        let mut player = Player::new(1, "Alice", 8000);
        let text = resolver.draw(CardKind::Chance, &mut player);
        assert!(!text.is_empty());
        let text = resolver.draw(CardKind::Fate, &mut player);
        assert!(!text.is_empty());
    }
}
