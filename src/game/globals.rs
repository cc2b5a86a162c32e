use super::board::{
    CardKind, CardTile, Color, CompanyTile, CountryTile, SpecialCategory, SpecialTile, StationTile,
    Tile,
};
use super::cards::{CardEffect, DrawCard};
use super::Money;
use lazy_static::lazy_static;

fn country(
    position: u8,
    name: &str,
    color: Color,
    sell_price: Money,
    base_toll: Money,
    house_toll: [Money; 4],
    hotel_toll: Money,
    build_house_cost: Money,
    build_hotel_cost: Money,
    mortgage_price: Money,
) -> Tile {
    Tile::Country(CountryTile {
        position,
        name: name.to_owned(),
        color,
        sell_price,
        base_toll,
        house_toll: house_toll.to_vec(),
        hotel_toll,
        build_house_cost,
        build_hotel_cost,
        mortgage_price,
    })
}

fn station(position: u8, name: &str) -> Tile {
    Tile::Station(StationTile {
        position,
        name: name.to_owned(),
        sell_price: 2000,
        mortgage_price: 1000,
        toll_by_ownership: [250, 500, 1000, 2000],
    })
}

fn company(position: u8, name: &str) -> Tile {
    Tile::Company(CompanyTile {
        position,
        name: name.to_owned(),
        sell_price: 1500,
        mortgage_price: 750,
    })
}

fn special(position: u8, name: &str, category: SpecialCategory, description: &str) -> Tile {
    Tile::Special(SpecialTile {
        position,
        name: name.to_owned(),
        category,
        description: description.to_owned(),
    })
}

fn card(position: u8, kind: CardKind) -> Tile {
    let name = match kind {
        CardKind::Chance => "Chance",
        CardKind::Fate => "Fate",
    };
    Tile::Card(CardTile {
        position,
        name: name.to_owned(),
        kind,
    })
}

fn draw_card(id: u32, title: &str, effect: CardEffect, flavor: &str) -> DrawCard {
    DrawCard {
        id,
        title: title.to_owned(),
        effect,
        flavor: flavor.to_owned(),
    }
}

lazy_static! {
    /// The standard 40-tile board: 22 countries in 8 color groups,
    /// 4 train stations, 2 companies, 6 card tiles and 6 special tiles.
    pub static ref STANDARD_TILES: Vec<Tile> = vec![
        special(1, "Start", SpecialCategory::Start, "Collect a bonus each time you pass."),
        country(2, "United States", Color::Brown, 600, 200, [400, 800, 1600, 2400], 3000, 500, 2500, 300),
        card(3, CardKind::Fate),
        country(4, "Canada", Color::Brown, 600, 200, [400, 800, 1600, 2400], 3000, 500, 2500, 300),
        special(5, "Income Tax", SpecialCategory::Tax, "Pay an income tax of 2000."),
        station(6, "New York Station"),
        country(7, "Argentina", Color::LightBlue, 1000, 300, [600, 1200, 2000, 3200], 4000, 500, 2500, 500),
        card(8, CardKind::Chance),
        country(9, "Mexico", Color::LightBlue, 1000, 300, [600, 1200, 2000, 3200], 4000, 500, 2500, 500),
        country(10, "Cuba", Color::LightBlue, 1200, 400, [800, 1400, 2400, 3600], 4500, 500, 2500, 600),
        special(11, "Jail", SpecialCategory::JailVisit, "Just visiting."),
        country(12, "France", Color::Pink, 1400, 500, [1000, 1800, 2800, 4000], 5000, 1000, 3000, 700),
        company(13, "Electric Company"),
        country(14, "Germany", Color::Pink, 1400, 500, [1000, 1800, 2800, 4000], 5000, 1000, 3000, 700),
        country(15, "Italy", Color::Pink, 1600, 600, [1200, 2000, 3000, 4500], 5500, 1000, 3000, 800),
        station(16, "Paris Station"),
        country(17, "Spain", Color::Orange, 1800, 700, [1400, 2200, 3400, 5000], 6000, 1000, 3000, 900),
        card(18, CardKind::Fate),
        country(19, "Greece", Color::Orange, 1800, 700, [1400, 2200, 3400, 5000], 6000, 1000, 3000, 900),
        country(20, "Netherlands", Color::Orange, 2000, 800, [1600, 2400, 3600, 5400], 6500, 1000, 3000, 1000),
        special(21, "Free Parking", SpecialCategory::FreeParking, "Take a break."),
        country(22, "United Kingdom", Color::Red, 2200, 900, [1800, 2600, 3900, 5800], 7000, 1500, 3500, 1100),
        card(23, CardKind::Chance),
        country(24, "Russia", Color::Red, 2200, 900, [1800, 2600, 3900, 5800], 7000, 1500, 3500, 1100),
        country(25, "Thailand", Color::Red, 2400, 1000, [2000, 2800, 4200, 6200], 7500, 1500, 3500, 1200),
        station(26, "Tokyo Station"),
        country(27, "Turkey", Color::Yellow, 2600, 1100, [2200, 3000, 4500, 6600], 8000, 1500, 3500, 1300),
        country(28, "Australia", Color::Yellow, 2600, 1100, [2200, 3000, 4500, 6600], 8000, 1500, 3500, 1300),
        company(29, "Water Company"),
        country(30, "Singapore", Color::Yellow, 2800, 1200, [2400, 3200, 4800, 7000], 8500, 1500, 3500, 1400),
        special(31, "Go To Jail", SpecialCategory::GoToJail, "Go directly to jail."),
        country(32, "South Korea", Color::Green, 3000, 1300, [2600, 3400, 5100, 7400], 9000, 2000, 4000, 1500),
        country(33, "China", Color::Green, 3000, 1300, [2600, 3400, 5100, 7400], 9000, 2000, 4000, 1500),
        card(34, CardKind::Fate),
        country(35, "Hong Kong", Color::Green, 3200, 1400, [2800, 3600, 5400, 7800], 9500, 2000, 4000, 1600),
        station(36, "Beijing Station"),
        card(37, CardKind::Chance),
        country(38, "Japan", Color::Blue, 3500, 1600, [3200, 4200, 6000, 8600], 10000, 2000, 4000, 1750),
        special(39, "Property Tax", SpecialCategory::Tax, "Pay a property tax of 1000."),
        country(40, "Brazil", Color::Blue, 4000, 2000, [4000, 5000, 7000, 10000], 12000, 2000, 4000, 2000),
    ];

    /// The standard chance deck.
    pub static ref STANDARD_CHANCE_CARDS: Vec<DrawCard> = vec![
        draw_card(1, "Bank Error", CardEffect::Collect(1500), "A bank error lands in your favor."),
        draw_card(2, "Cooking Contest", CardEffect::Collect(1000), "Your street-food stall wins first prize."),
        draw_card(3, "Speeding Fine", CardEffect::Pay(500), "Caught doing 80 in a 50 zone."),
        draw_card(4, "Street Repairs", CardEffect::Pay(800), "The city bills you for street repairs."),
        draw_card(5, "Tax Refund", CardEffect::Collect(600), "The revenue service owes you after all."),
        draw_card(6, "Customs Inspection", CardEffect::SkipNextTurn, "Your luggage is held at the border."),
    ];

    /// The standard fate deck.
    pub static ref STANDARD_FATE_CARDS: Vec<DrawCard> = vec![
        draw_card(1, "Inheritance", CardEffect::Collect(2000), "A distant relative remembers you."),
        draw_card(2, "Doctor's Fee", CardEffect::Pay(1000), "That cough was not nothing."),
        draw_card(3, "Insurance Premium", CardEffect::Pay(600), "The annual premium comes due."),
        draw_card(4, "Concert Tickets", CardEffect::Collect(400), "You resell two tickets at a markup."),
        draw_card(5, "Caught in a Storm", CardEffect::SkipNextTurn, "All flights grounded until it clears."),
        draw_card(6, "Birthday", CardEffect::Collect(800), "Everyone chips in for your birthday."),
    ];
}
