use super::board::{BoardCatalog, Color, Tile};
use super::{PlayerId, Position};
use std::collections::{HashMap, HashSet};

/// Mutable per-position building and mortgage state. Created lazily on
/// first access; a fresh tile is unbuilt and unmortgaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyState {
    /// Houses on the tile (0..=4).
    pub house_count: u8,
    /// Hotels on the tile (0 or 1). A hotel replaces all four houses.
    pub hotel_count: u8,
    pub mortgaged: bool,
}

impl PropertyState {
    pub fn can_build_house(&self) -> bool {
        !self.mortgaged && self.house_count < 4 && self.hotel_count == 0
    }

    pub fn can_build_hotel(&self) -> bool {
        !self.mortgaged && self.house_count == 4 && self.hotel_count == 0
    }

    pub fn can_build(&self) -> bool {
        self.can_build_house() || self.can_build_hotel()
    }

    /// Add a house. Return whether anything was built.
    pub fn build_house(&mut self) -> bool {
        if self.can_build_house() {
            self.house_count += 1;
            return true;
        }
        false
    }

    /// Convert four houses into a hotel. Return whether anything was built.
    pub fn build_hotel(&mut self) -> bool {
        if self.can_build_hotel() {
            self.house_count = 0;
            self.hotel_count = 1;
            return true;
        }
        false
    }

    pub fn has_buildings(&self) -> bool {
        self.house_count > 0 || self.hotel_count > 0
    }
}

/// Tracks who owns each purchasable tile and its building state.
/// A position absent from the ownership map is bank-owned.
#[derive(Debug, Default)]
pub struct PropertyLedger {
    owners: HashMap<Position, PlayerId>,
    states: HashMap<Position, PropertyState>,
}

impl PropertyLedger {
    pub fn new() -> PropertyLedger {
        PropertyLedger::default()
    }

    pub fn owner_of(&self, position: Position) -> Option<PlayerId> {
        self.owners.get(&position).copied()
    }

    pub fn assign_owner(&mut self, position: Position, owner: PlayerId) {
        self.owners.insert(position, owner);
    }

    /// A copy of the state at `position`, defaulting to unbuilt.
    pub fn state(&self, position: Position) -> PropertyState {
        self.states.get(&position).copied().unwrap_or_default()
    }

    pub fn state_mut(&mut self, position: Position) -> &mut PropertyState {
        self.states.entry(position).or_default()
    }

    /// Return every position in `positions` to the bank, discarding
    /// ownership entries and building states alike.
    pub fn release_positions(&mut self, positions: &HashSet<Position>) {
        for position in positions {
            self.owners.remove(position);
            self.states.remove(position);
        }
    }

    /// Whether `owner` holds every country tile of `color`, mortgaged
    /// or not. Monopoly doubles the toll of the whole group.
    pub fn has_monopoly(&self, board: &BoardCatalog, owner: PlayerId, color: Color) -> bool {
        board.is_monopoly(owner, color, |position| self.owner_of(position))
    }

    /// Count the owner's unmortgaged stations; station tolls scale
    /// with this rather than with raw ownership.
    pub fn unmortgaged_stations_of(&self, board: &BoardCatalog, owner: PlayerId) -> usize {
        self.unmortgaged_of(board, owner, |tile| matches!(tile, Tile::Station(_)))
    }

    /// Count the owner's unmortgaged companies; both companies
    /// unmortgaged raises the spin multiplier tenfold.
    pub fn unmortgaged_companies_of(&self, board: &BoardCatalog, owner: PlayerId) -> usize {
        self.unmortgaged_of(board, owner, |tile| matches!(tile, Tile::Company(_)))
    }

    fn unmortgaged_of(
        &self,
        board: &BoardCatalog,
        owner: PlayerId,
        kind: impl Fn(&Tile) -> bool,
    ) -> usize {
        self.owners
            .iter()
            .filter(|(position, id)| {
                **id == owner
                    && board.tile(**position).map_or(false, |t| kind(t))
                    && !self.state(**position).mortgaged
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardCatalog;

    #[test]
    fn building_progression_and_invariants() {
        let mut state = PropertyState::default();
        assert!(state.can_build_house());
        assert!(!state.can_build_hotel());

        for expected in 1..=4 {
            assert!(state.build_house());
            assert_eq!(state.house_count, expected);
        }
        // Four houses: no fifth house, hotel now allowed.
        assert!(!state.build_house());
        assert!(state.can_build_hotel());
        assert!(state.build_hotel());
        assert_eq!(state.house_count, 0);
        assert_eq!(state.hotel_count, 1);
        // With a hotel in place nothing further can be built.
        assert!(!state.can_build());
    }

    #[test]
    fn mortgage_blocks_building() {
        let mut state = PropertyState::default();
        state.mortgaged = true;
        assert!(!state.can_build_house());
        assert!(!state.build_house());

        state.mortgaged = false;
        state.house_count = 4;
        state.mortgaged = true;
        assert!(!state.build_hotel());
    }

    #[test]
    fn release_returns_tiles_to_the_bank() {
        let mut ledger = PropertyLedger::new();
        ledger.assign_owner(2, 1);
        ledger.assign_owner(4, 1);
        ledger.state_mut(2).house_count = 3;
        ledger.state_mut(2).mortgaged = true;

        let mut positions = HashSet::new();
        positions.insert(2);
        positions.insert(4);
        ledger.release_positions(&positions);

        assert_eq!(ledger.owner_of(2), None);
        assert_eq!(ledger.owner_of(4), None);
        assert_eq!(ledger.state(2), PropertyState::default());
    }

    #[test]
    fn unmortgaged_counts_ignore_mortgaged_tiles() {
        let board = BoardCatalog::standard();
        let mut ledger = PropertyLedger::new();
        // Stations at 6 and 16, companies at 13 and 29.
        ledger.assign_owner(6, 1);
        ledger.assign_owner(16, 1);
        ledger.assign_owner(13, 1);
        ledger.assign_owner(29, 1);

        assert_eq!(ledger.unmortgaged_stations_of(&board, 1), 2);
        assert_eq!(ledger.unmortgaged_companies_of(&board, 1), 2);

        ledger.state_mut(16).mortgaged = true;
        ledger.state_mut(29).mortgaged = true;
        assert_eq!(ledger.unmortgaged_stations_of(&board, 1), 1);
        assert_eq!(ledger.unmortgaged_companies_of(&board, 1), 1);
        assert_eq!(ledger.unmortgaged_stations_of(&board, 2), 0);
    }
}
