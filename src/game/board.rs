use super::globals::STANDARD_TILES;
use super::{Money, PlayerId, Position};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// The color sets of country tiles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

/// The two draw-card decks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Chance,
    Fate,
}

/// What a special tile does when stopped on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCategory {
    Start,
    JailVisit,
    GoToJail,
    Tax,
    FreeParking,
    Other,
}

/// A purchasable country tile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTile {
    pub position: Position,
    pub name: String,
    pub color: Color,
    pub sell_price: Money,
    /// Toll charged while the tile carries no buildings.
    pub base_toll: Money,
    /// Toll by house count; each entry already includes the base toll.
    pub house_toll: Vec<Money>,
    pub hotel_toll: Money,
    pub build_house_cost: Money,
    pub build_hotel_cost: Money,
    pub mortgage_price: Money,
}

impl CountryTile {
    /// Return the toll for the tile's current building state,
    /// before any monopoly doubling.
    pub fn toll(&self, state: super::PropertyState) -> Money {
        if state.hotel_count > 0 {
            self.hotel_toll
        } else if state.house_count > 0 {
            let index = state.house_count as usize - 1;
            self.house_toll.get(index).copied().unwrap_or(self.base_toll)
        } else {
            self.base_toll
        }
    }

    /// Mortgage value: half of what was spent on buildings, plus the
    /// bare-land mortgage price. Redeeming costs the same amount.
    pub fn mortgage_value(&self, state: super::PropertyState) -> Money {
        let buildings = state.house_count as Money * self.build_house_cost
            + state.hotel_count as Money * self.build_hotel_cost;
        buildings / 2 + self.mortgage_price
    }
}

/// A purchasable train station tile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTile {
    pub position: Position,
    pub name: String,
    pub sell_price: Money,
    pub mortgage_price: Money,
    /// Toll by the owner's count of unmortgaged stations (1..=4).
    pub toll_by_ownership: [Money; 4],
}

impl StationTile {
    /// Return the toll for an owner holding `count` unmortgaged stations.
    pub fn toll_for_count(&self, count: usize) -> Money {
        if count == 0 || count > 4 {
            return 0;
        }
        self.toll_by_ownership[count - 1]
    }
}

/// A purchasable company tile. The toll is a fresh spin of the wheel
/// each landing, so the tile itself carries no toll table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTile {
    pub position: Position,
    pub name: String,
    pub sell_price: Money,
    pub mortgage_price: Money,
}

/// A chance or fate draw tile.
#[derive(Debug, Clone)]
pub struct CardTile {
    pub position: Position,
    pub name: String,
    pub kind: CardKind,
}

/// A non-purchasable special tile.
#[derive(Debug, Clone)]
pub struct SpecialTile {
    pub position: Position,
    pub name: String,
    pub category: SpecialCategory,
    pub description: String,
}

/// A tile on the board.
#[derive(Debug, Clone)]
pub enum Tile {
    Country(CountryTile),
    Station(StationTile),
    Company(CompanyTile),
    Card(CardTile),
    Special(SpecialTile),
}

impl Tile {
    pub fn position(&self) -> Position {
        match self {
            Tile::Country(t) => t.position,
            Tile::Station(t) => t.position,
            Tile::Company(t) => t.position,
            Tile::Card(t) => t.position,
            Tile::Special(t) => t.position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tile::Country(t) => &t.name,
            Tile::Station(t) => &t.name,
            Tile::Company(t) => &t.name,
            Tile::Card(t) => &t.name,
            Tile::Special(t) => &t.name,
        }
    }

    /// The purchase price, for tiles the bank can sell.
    pub fn sell_price(&self) -> Option<Money> {
        match self {
            Tile::Country(t) => Some(t.sell_price),
            Tile::Station(t) => Some(t.sell_price),
            Tile::Company(t) => Some(t.sell_price),
            _ => None,
        }
    }

    /// The mortgage value in the tile's current building state, for
    /// tiles that can be mortgaged. Also the cost of redeeming.
    pub fn mortgage_value(&self, state: super::PropertyState) -> Option<Money> {
        match self {
            Tile::Country(t) => Some(t.mortgage_value(state)),
            Tile::Station(t) => Some(t.mortgage_price),
            Tile::Company(t) => Some(t.mortgage_price),
            _ => None,
        }
    }
}

/// Errors raised while assembling a board catalog. These are fatal at
/// startup; the engine is never constructed over a bad board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read board config: {0}")]
    Io(#[from] std::io::Error),
    #[error("board has no tiles")]
    Empty,
    #[error("tile positions are 1-based; found position 0 ({name})")]
    ZeroPosition { name: String },
    #[error("two tiles share position {0}")]
    DuplicatePosition(Position),
    #[error("unknown tile kind `{kind}` at position {position}")]
    UnknownKind { position: Position, kind: String },
}

#[derive(Deserialize)]
struct BoardFile {
    map: Vec<MapEntry>,
    #[serde(default)]
    countries: Vec<CountryTile>,
    #[serde(default)]
    stations: Vec<StationTile>,
    #[serde(default)]
    companies: Vec<CompanyTile>,
}

#[derive(Deserialize)]
struct MapEntry {
    position: Position,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    special: Option<SpecialCategory>,
    #[serde(default)]
    description: Option<String>,
}

/// Immutable, position-indexed lookup of tile definitions. Built once
/// before the engine and read-only for its lifetime.
#[derive(Debug, Clone)]
pub struct BoardCatalog {
    tiles: HashMap<Position, Tile>,
    length: Position,
}

impl BoardCatalog {
    /// Assemble a catalog from tile definitions, validating that the
    /// board is non-empty with unique 1-based positions.
    pub fn new(tiles: Vec<Tile>) -> Result<BoardCatalog, BoardError> {
        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        let mut map = HashMap::new();
        let mut length = 0;
        for tile in tiles {
            let position = tile.position();
            if position == 0 {
                return Err(BoardError::ZeroPosition {
                    name: tile.name().to_owned(),
                });
            }
            if map.insert(position, tile).is_some() {
                return Err(BoardError::DuplicatePosition(position));
            }
            if position > length {
                length = position;
            }
        }
        Ok(BoardCatalog { tiles: map, length })
    }

    /// The built-in standard 40-tile board.
    pub fn standard() -> BoardCatalog {
        BoardCatalog::new(STANDARD_TILES.clone()).expect("standard board data is valid")
    }

    /// Load a catalog from a JSON document with `map`, `countries`,
    /// `stations` and `companies` sections. Map entries of purchasable
    /// kinds are placeholders; their details come from the dedicated
    /// sections.
    pub fn from_json(text: &str) -> Result<BoardCatalog, BoardError> {
        let file: BoardFile = serde_json::from_str(text)?;
        let mut tiles = Vec::new();
        for entry in file.map {
            match entry.kind.as_str() {
                "special" => {
                    let description = entry.description.clone().unwrap_or_else(|| entry.name.clone());
                    tiles.push(Tile::Special(SpecialTile {
                        position: entry.position,
                        name: entry.name,
                        category: entry.special.unwrap_or(SpecialCategory::Other),
                        description,
                    }));
                }
                "chance" => tiles.push(Tile::Card(CardTile {
                    position: entry.position,
                    name: entry.name,
                    kind: CardKind::Chance,
                })),
                "fate" => tiles.push(Tile::Card(CardTile {
                    position: entry.position,
                    name: entry.name,
                    kind: CardKind::Fate,
                })),
                "country" | "trainStation" | "company" => {}
                other => {
                    return Err(BoardError::UnknownKind {
                        position: entry.position,
                        kind: other.to_owned(),
                    });
                }
            }
        }
        tiles.extend(file.countries.into_iter().map(Tile::Country));
        tiles.extend(file.stations.into_iter().map(Tile::Station));
        tiles.extend(file.companies.into_iter().map(Tile::Company));
        BoardCatalog::new(tiles)
    }

    /// The board length, i.e. the highest tile position.
    pub fn len(&self) -> Position {
        self.length
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// A display name for any position, even ones without a tile.
    pub fn tile_name(&self, position: Position) -> String {
        match self.tiles.get(&position) {
            Some(tile) => tile.name().to_owned(),
            None => format!("Tile {}", position),
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// All country tiles sharing a color group.
    pub fn countries_in_group(&self, color: Color) -> Vec<&CountryTile> {
        let mut group: Vec<&CountryTile> = self
            .tiles()
            .filter_map(|tile| match tile {
                Tile::Country(c) if c.color == color => Some(c),
                _ => None,
            })
            .collect();
        group.sort_by_key(|c| c.position);
        group
    }

    /// Position of the jail-visit tile, where sent-to-jail players sit.
    pub fn jail_position(&self) -> Option<Position> {
        self.tiles.values().find_map(|tile| match tile {
            Tile::Special(s) if s.category == SpecialCategory::JailVisit => Some(s.position),
            _ => None,
        })
    }

    /// Whether `owner` holds every country tile of `color`.
    pub fn is_monopoly(
        &self,
        owner: PlayerId,
        color: Color,
        owner_of: impl Fn(Position) -> Option<PlayerId>,
    ) -> bool {
        let group = self.countries_in_group(color);
        !group.is_empty() && group.iter().all(|c| owner_of(c.position) == Some(owner))
    }
}
