use super::{Money, PlayerId, Position};
use std::collections::{HashMap, HashSet};

/// A player and their asset state.
#[derive(Debug, Clone)]
pub struct Player {
    /// Stable identifier, assigned at creation.
    pub id: PlayerId,
    pub name: String,
    /// Cash on hand. Reaches 0 at worst; payments clip to what's available.
    pub money: Money,
    /// Current board position, 1-based.
    pub position: Position,
    /// Positions of tiles this player owns.
    pub owned_tiles: HashSet<Position>,
    /// Positions of owned tiles currently mortgaged to the bank.
    /// Always a subset of `owned_tiles`.
    pub mortgaged_tiles: HashSet<Position>,
    /// Skip the next turn (set by some card effects).
    pub paused: bool,
    /// Turns left to sit out in jail.
    pub jail_turns_remaining: u8,
}

impl Player {
    pub fn new(id: PlayerId, name: &str, money: Money) -> Player {
        Player {
            id,
            name: name.to_owned(),
            money,
            position: 1,
            owned_tiles: HashSet::new(),
            mortgaged_tiles: HashSet::new(),
            paused: false,
            jail_turns_remaining: 0,
        }
    }

    /// Record a newly bought tile. Return whether it was in fact new.
    pub fn add_owned_tile(&mut self, position: Position) -> bool {
        self.owned_tiles.insert(position)
    }

    /// Record a newly mortgaged tile. Return whether it was in fact new.
    pub fn add_mortgaged_tile(&mut self, position: Position) -> bool {
        self.mortgaged_tiles.insert(position)
    }

    /// Surrender every tile, owned and mortgaged, back to the bank.
    pub fn release_all_tiles(&mut self) {
        self.owned_tiles.clear();
        self.mortgaged_tiles.clear();
    }

    /// Whether the player still counts as being in the game:
    /// positive cash or at least one owned tile.
    pub fn has_assets(&self) -> bool {
        self.money > 0 || !self.owned_tiles.is_empty()
    }
}

/// Persistence seam for player state. The engine reads the roster
/// through this every turn and writes through after every mutation.
pub trait PlayerRepository {
    fn save(&mut self, player: &Player);
    fn find_by_id(&self, id: PlayerId) -> Option<Player>;
    /// All players, ordered by ascending id. Turn order follows this.
    fn find_all(&self) -> Vec<Player>;
    fn delete_by_id(&mut self, id: PlayerId);
}

/// Keeps the roster in a plain map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: HashMap<PlayerId, Player>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> InMemoryPlayerRepository {
        InMemoryPlayerRepository {
            players: HashMap::new(),
        }
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn save(&mut self, player: &Player) {
        self.players.insert(player.id, player.clone());
    }

    fn find_by_id(&self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Player> {
        let mut all: Vec<Player> = self.players.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        all
    }

    fn delete_by_id(&mut self, id: PlayerId) {
        self.players.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_all_orders_by_id() {
        let mut repo = InMemoryPlayerRepository::new();
        repo.save(&Player::new(3, "Carol", 8000));
        repo.save(&Player::new(1, "Alice", 8000));
        repo.save(&Player::new(2, "Bob", 8000));

        let ids: Vec<u32> = repo.find_all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn save_overwrites_and_delete_removes() {
        let mut repo = InMemoryPlayerRepository::new();
        let mut player = Player::new(1, "Alice", 8000);
        repo.save(&player);

        player.money = 5000;
        repo.save(&player);
        assert_eq!(repo.find_by_id(1).unwrap().money, 5000);

        repo.delete_by_id(1);
        assert!(repo.find_by_id(1).is_none());
        assert!(repo.find_all().is_empty());
    }

    #[test]
    fn has_assets_counts_cash_or_tiles() {
        let mut player = Player::new(1, "Alice", 0);
        assert!(!player.has_assets());

        player.add_owned_tile(2);
        assert!(player.has_assets());

        player.release_all_tiles();
        player.money = 1;
        assert!(player.has_assets());
    }
}
