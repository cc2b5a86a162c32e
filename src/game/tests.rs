use super::*;
use crate::ports::DecisionPort;
use std::collections::VecDeque;

/*********        SCRIPTED COLLABORATORS        *********/

/// Decision port fed from a fixed script of integer answers.
struct ScriptedDecisions {
    ints: VecDeque<i64>,
}

impl ScriptedDecisions {
    fn new(ints: &[i64]) -> ScriptedDecisions {
        ScriptedDecisions {
            ints: ints.iter().copied().collect(),
        }
    }
}

impl DecisionPort for ScriptedDecisions {
    fn request_int(&mut self, prompt: &str) -> i64 {
        match self.ints.pop_front() {
            Some(value) => value,
            None => panic!("unexpected integer prompt: {}", prompt),
        }
    }

    fn request_line(&mut self, _prompt: &str) -> String {
        String::new()
    }
}

/// Dice that play back fixed rolls and spins, and panic if the engine
/// rolls when it should not.
struct FixedDice {
    rolls: VecDeque<(u8, u8)>,
    spins: VecDeque<u32>,
}

impl FixedDice {
    fn rolls(rolls: &[(u8, u8)]) -> FixedDice {
        FixedDice {
            rolls: rolls.iter().copied().collect(),
            spins: VecDeque::new(),
        }
    }

    fn with_spins(mut self, spins: &[u32]) -> FixedDice {
        self.spins = spins.iter().copied().collect();
        self
    }
}

impl Dice for FixedDice {
    fn roll_pair(&mut self) -> (u8, u8) {
        self.rolls.pop_front().expect("unexpected dice roll")
    }

    fn spin(&mut self) -> u32 {
        self.spins.pop_front().expect("unexpected wheel spin")
    }
}

/// Card resolver with no side effects.
struct SilentCards;

impl CardResolver for SilentCards {
    fn draw(&mut self, _kind: CardKind, _player: &mut Player) -> String {
        String::from("The card has no effect.")
    }
}

/*********        HARNESS        *********/

fn engine_on_board(
    board: BoardCatalog,
    players: Vec<Player>,
    decisions: ScriptedDecisions,
    dice: FixedDice,
) -> TurnEngine {
    let mut repository = InMemoryPlayerRepository::new();
    for player in &players {
        repository.save(player);
    }
    TurnEngine::with_parts(
        Box::new(repository),
        board,
        Box::new(decisions),
        Box::new(dice),
        Box::new(SilentCards),
        GameRules::default(),
    )
}

fn engine_with(players: Vec<Player>, decisions: ScriptedDecisions, dice: FixedDice) -> TurnEngine {
    engine_on_board(BoardCatalog::standard(), players, decisions, dice)
}

/// Run one full event chain and collect every link.
fn drive(engine: &mut TurnEngine) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut event = engine.advance_turn();
    loop {
        events.push(event.clone());
        match event.into_action().and_then(|action| engine.resume(action)) {
            Some(next) => event = next,
            None => break,
        }
    }
    events
}

fn player_at(mut player: Player, position: Position) -> Player {
    player.position = position;
    player
}

fn fetch(engine: &TurnEngine, id: PlayerId) -> Player {
    engine
        .registry()
        .find_by_id(id)
        .expect("player should still be registered")
}

fn give_tile(engine: &mut TurnEngine, id: PlayerId, position: Position) {
    engine.ledger.assign_owner(position, id);
    let mut player = fetch(engine, id);
    player.add_owned_tile(position);
    engine.players.save(&player);
}

fn mortgage_tile(engine: &mut TurnEngine, id: PlayerId, position: Position) {
    engine.ledger.state_mut(position).mortgaged = true;
    let mut player = fetch(engine, id);
    player.add_mortgaged_tile(position);
    engine.players.save(&player);
}

fn kinds(events: &[GameEvent]) -> Vec<EventKind> {
    events.iter().map(|e| e.kind).collect()
}

/// Three brown countries in one group, for monopoly checks.
fn three_brown_board() -> BoardCatalog {
    let text = r#"{
        "map": [
            {"position": 1, "name": "Start", "type": "special", "special": "start"},
            {"position": 2, "name": "Aland", "type": "country"},
            {"position": 3, "name": "Bland", "type": "country"},
            {"position": 4, "name": "Cland", "type": "country"},
            {"position": 5, "name": "Fate", "type": "fate"},
            {"position": 6, "name": "Rest", "type": "special", "special": "free_parking"}
        ],
        "countries": [
            {"position": 2, "name": "Aland", "color": "brown", "sellPrice": 600,
             "baseToll": 200, "houseToll": [400, 800, 1600, 2400], "hotelToll": 3000,
             "buildHouseCost": 500, "buildHotelCost": 2500, "mortgagePrice": 300},
            {"position": 3, "name": "Bland", "color": "brown", "sellPrice": 600,
             "baseToll": 200, "houseToll": [400, 800, 1600, 2400], "hotelToll": 3000,
             "buildHouseCost": 500, "buildHotelCost": 2500, "mortgagePrice": 300},
            {"position": 4, "name": "Cland", "color": "brown", "sellPrice": 600,
             "baseToll": 200, "houseToll": [400, 800, 1600, 2400], "hotelToll": 3000,
             "buildHouseCost": 500, "buildHotelCost": 2500, "mortgagePrice": 300}
        ]
    }"#;
    BoardCatalog::from_json(text).expect("test board should parse")
}

/*********        MOVEMENT & START BONUSES        *********/

#[test]
fn wrap_around_credits_pass_bonus_once() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 38)];
    let mut engine = engine_with(players, ScriptedDecisions::new(&[]), FixedDice::rolls(&[(2, 3)]));

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::Summary]);

    let alice = fetch(&engine, 1);
    assert_eq!(alice.position, 3);
    assert_eq!(alice.money, 7000);
}

#[test]
fn stopping_on_start_after_passing_awards_the_full_total() {
    let players = vec![player_at(Player::new(1, "Alice", 1000), 39)];
    let mut engine = engine_with(players, ScriptedDecisions::new(&[]), FixedDice::rolls(&[(1, 1)]));

    let events = drive(&mut engine);
    let alice = fetch(&engine, 1);
    assert_eq!(alice.position, 1);
    // 2000 for passing plus 2000 for stopping.
    assert_eq!(alice.money, 5000);
    assert!(events[0].text.contains("$4,000"));
}

#[test]
fn turn_order_rotates_through_the_roster() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 1),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1), (1, 1)]),
    );

    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).position, 3);
    assert_eq!(fetch(&engine, 2).position, 1);

    drive(&mut engine);
    assert_eq!(fetch(&engine, 2).position, 3);
}

#[test]
fn landing_on_a_gap_degrades_to_a_passive_summary() {
    let board = BoardCatalog::from_json(
        r#"{
            "map": [
                {"position": 1, "name": "Start", "type": "special", "special": "start"},
                {"position": 2, "name": "Fate", "type": "fate"},
                {"position": 4, "name": "Rest", "type": "special", "special": "free_parking"}
            ]
        }"#,
    )
    .expect("test board should parse");
    let players = vec![player_at(Player::new(1, "Alice", 5000), 1)];
    let mut engine = engine_on_board(
        board,
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::Summary]);
    assert!(events[0].text.contains("unknown tile"));
    assert_eq!(fetch(&engine, 1).position, 3);
}

/*********        TOLLS        *********/

#[test]
fn monopoly_doubles_the_base_toll() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 1),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_on_board(
        three_brown_board(),
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 2);
    give_tile(&mut engine, 2, 3);
    give_tile(&mut engine, 2, 4);

    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).money, 5000 - 400);
    assert_eq!(fetch(&engine, 2).money, 5000 + 400);
}

#[test]
fn partial_color_group_charges_the_plain_toll() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 1),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_on_board(
        three_brown_board(),
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 2);
    give_tile(&mut engine, 2, 3);

    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).money, 5000 - 200);
}

#[test]
fn mortgaged_tile_collects_no_toll() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 1),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_on_board(
        three_brown_board(),
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 3);
    mortgage_tile(&mut engine, 2, 3);

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::Summary]);
    assert_eq!(fetch(&engine, 1).money, 5000);
    assert_eq!(fetch(&engine, 2).money, 5000);
}

#[test]
fn station_toll_follows_the_unmortgaged_count() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 4),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 6);
    give_tile(&mut engine, 2, 16);

    drive(&mut engine);
    // Two unmortgaged stations: 500.
    assert_eq!(fetch(&engine, 1).money, 4500);
    assert_eq!(fetch(&engine, 2).money, 5500);
}

#[test]
fn mortgaged_station_drops_out_of_the_toll_count() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 4),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 6);
    give_tile(&mut engine, 2, 16);
    mortgage_tile(&mut engine, 2, 16);

    drive(&mut engine);
    // Only one station still earning: 250.
    assert_eq!(fetch(&engine, 1).money, 4750);
}

#[test]
fn company_toll_multiplies_the_spin() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 11),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]).with_spins(&[7]),
    );
    give_tile(&mut engine, 2, 13);

    drive(&mut engine);
    // One company: 7 x 10.
    assert_eq!(fetch(&engine, 1).money, 5000 - 70);
}

#[test]
fn both_companies_unmortgaged_use_the_high_multiplier() {
    let players = vec![
        player_at(Player::new(1, "Alice", 5000), 11),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]).with_spins(&[7]),
    );
    give_tile(&mut engine, 2, 13);
    give_tile(&mut engine, 2, 29);

    drive(&mut engine);
    // Both companies: 7 x 100.
    assert_eq!(fetch(&engine, 1).money, 5000 - 700);
}

/*********        PURCHASE        *********/

#[test]
fn purchase_debits_and_assigns_ownership() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 5)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[1]),
        FixedDice::rolls(&[(1, 1)]),
    );

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::PurchasePrompt, EventKind::Summary]);

    let alice = fetch(&engine, 1);
    assert_eq!(alice.money, 4000);
    assert!(alice.owned_tiles.contains(&7));
    assert_eq!(engine.ledger.owner_of(7), Some(1));
}

#[test]
fn declining_a_purchase_leaves_the_tile_with_the_bank() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 5)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[0]),
        FixedDice::rolls(&[(1, 1)]),
    );

    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).money, 5000);
    assert_eq!(engine.ledger.owner_of(7), None);
}

#[test]
fn purchase_shortfall_completes_after_a_mortgage() {
    let players = vec![player_at(Player::new(1, "Alice", 800), 5)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[1, 1, 1]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);

    let events = drive(&mut engine);
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::PurchasePrompt,
            EventKind::MortgagePrompt,
            EventKind::PurchasePrompt,
            EventKind::Summary,
        ]
    );

    let alice = fetch(&engine, 1);
    // 800 + 300 from the mortgage, minus the 1000 price.
    assert_eq!(alice.money, 100);
    assert!(alice.owned_tiles.contains(&7));
    assert!(alice.mortgaged_tiles.contains(&2));
    assert!(alice.mortgaged_tiles.is_subset(&alice.owned_tiles));
}

#[test]
fn purchase_is_abandoned_once_mortgages_run_out() {
    let players = vec![player_at(Player::new(1, "Alice", 400), 5)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[1, 1]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);

    let events = drive(&mut engine);
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::PurchasePrompt,
            EventKind::MortgagePrompt,
            EventKind::MortgagePrompt,
            EventKind::Summary,
        ]
    );

    let alice = fetch(&engine, 1);
    // The mortgage went through, the purchase did not; no bankruptcy.
    assert_eq!(alice.money, 700);
    assert_eq!(engine.ledger.owner_of(7), None);
    assert!(alice.mortgaged_tiles.contains(&2));
    assert!(events[3].text.contains("abandoned"));
}

/*********        SETTLE CHAIN & BANKRUPTCY        *********/

#[test]
fn toll_shortfall_is_paid_after_mortgaging() {
    let players = vec![
        player_at(Player::new(1, "Alice", 100), 5),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[1]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);
    give_tile(&mut engine, 2, 7);

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::TollPrompt, EventKind::Summary]);

    let alice = fetch(&engine, 1);
    // 100 + 300 mortgage - 300 toll.
    assert_eq!(alice.money, 100);
    assert_eq!(fetch(&engine, 2).money, 5300);
    assert!(alice.mortgaged_tiles.is_subset(&alice.owned_tiles));
    assert!(!engine.is_game_over());
}

#[test]
fn bankruptcy_with_no_assets_hands_over_all_cash() {
    let players = vec![
        player_at(Player::new(1, "Alice", 50), 5),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 7);

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::TollPrompt, EventKind::Summary]);
    assert!(events[1].text.contains("bankrupt"));

    assert!(engine.registry().find_by_id(1).is_none());
    assert_eq!(fetch(&engine, 2).money, 5050);
    assert!(engine.is_game_over());
    // The answer does not change without an intervening turn.
    assert!(engine.is_game_over());
}

#[test]
fn declining_the_mortgage_offer_is_bankruptcy() {
    let players = vec![
        player_at(Player::new(1, "Alice", 200), 5),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[0]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);
    give_tile(&mut engine, 2, 7);

    drive(&mut engine);
    assert!(engine.registry().find_by_id(1).is_none());
    // Alice's tile went back to the bank, her cash to Bob.
    assert_eq!(engine.ledger.owner_of(2), None);
    assert_eq!(fetch(&engine, 2).money, 5200);
    assert!(engine.is_game_over());
}

#[test]
fn advance_turn_after_game_over_is_terminal() {
    let players = vec![
        player_at(Player::new(1, "Alice", 50), 5),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 2, 7);
    drive(&mut engine);
    assert!(engine.is_game_over());

    let event = engine.advance_turn();
    assert_eq!(event.kind, EventKind::GameOver);
    assert!(event.action.is_none());
}

#[test]
fn empty_registry_ends_the_game() {
    let mut engine = engine_with(vec![], ScriptedDecisions::new(&[]), FixedDice::rolls(&[]));
    let event = engine.advance_turn();
    assert_eq!(event.kind, EventKind::GameOver);
    assert!(engine.is_game_over());
}

/*********        TAX        *********/

#[test]
fn tax_is_debited_when_cash_suffices() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 3)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );

    drive(&mut engine);
    // Income Tax at position 5 takes 2000.
    assert_eq!(fetch(&engine, 1).money, 3000);
}

#[test]
fn tax_shortfall_without_assets_bankrupts_to_the_bank() {
    let players = vec![
        player_at(Player::new(1, "Alice", 500), 3),
        player_at(Player::new(2, "Bob", 5000), 1),
    ];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::TaxPrompt, EventKind::Summary]);
    assert!(engine.registry().find_by_id(1).is_none());
    // The bank keeps the cash; Bob gets nothing.
    assert_eq!(fetch(&engine, 2).money, 5000);
    assert!(engine.is_game_over());
}

/*********        REDEEM        *********/

#[test]
fn redeem_is_offered_before_the_roll_and_declining_rolls_anyway() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 1)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[0]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);
    mortgage_tile(&mut engine, 1, 2);

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::RedeemPrompt, EventKind::Summary]);
    assert!(events[1].text.contains("kept the mortgages"));

    let alice = fetch(&engine, 1);
    assert_eq!(alice.position, 3);
    assert!(alice.mortgaged_tiles.contains(&2));
}

#[test]
fn redeeming_clears_the_mortgage_and_still_rolls() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 1)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[1]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);
    mortgage_tile(&mut engine, 1, 2);

    drive(&mut engine);
    let alice = fetch(&engine, 1);
    // Redeem cost for the unbuilt tile is its mortgage price.
    assert_eq!(alice.money, 4700);
    assert!(alice.mortgaged_tiles.is_empty());
    assert!(!engine.ledger.state(2).mortgaged);
    assert_eq!(alice.position, 3);
}

/*********        BUILDING        *********/

#[test]
fn stopping_on_an_own_tile_offers_a_house() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 40)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[1]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);

    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::BuildPrompt, EventKind::Summary]);

    let alice = fetch(&engine, 1);
    // 5000 + 2000 pass bonus - 500 house.
    assert_eq!(alice.money, 6500);
    assert_eq!(engine.ledger.state(2).house_count, 1);
}

#[test]
fn four_houses_convert_into_a_hotel() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 40)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[2]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);
    engine.ledger.state_mut(2).house_count = 4;

    drive(&mut engine);
    let state = engine.ledger.state(2);
    assert_eq!(state.house_count, 0);
    assert_eq!(state.hotel_count, 1);
    // 5000 + 2000 pass bonus - 2500 hotel.
    assert_eq!(fetch(&engine, 1).money, 4500);
}

#[test]
fn a_mortgaged_tile_cannot_be_built_on() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 40)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[0]),
        FixedDice::rolls(&[(1, 1)]),
    );
    give_tile(&mut engine, 1, 2);
    mortgage_tile(&mut engine, 1, 2);

    // The redeem prompt comes first; declining leads to the landing.
    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::RedeemPrompt, EventKind::Summary]);
    assert!(events[1].text.contains("[Mortgaged]"));
    assert_eq!(engine.ledger.state(2).house_count, 0);
}

/*********        JAIL & PAUSE        *********/

#[test]
fn go_to_jail_moves_without_a_start_bonus_and_counts_down() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 29)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[0]),
        FixedDice::rolls(&[(1, 1), (2, 3)]),
    );

    drive(&mut engine);
    let alice = fetch(&engine, 1);
    assert_eq!(alice.position, 11);
    assert_eq!(alice.jail_turns_remaining, 2);
    assert_eq!(alice.money, 5000);

    // Two turns inside: the dice are never rolled.
    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).jail_turns_remaining, 1);
    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).jail_turns_remaining, 0);
    assert_eq!(fetch(&engine, 1).position, 11);

    // Free again: the next roll moves to the Paris Station offer.
    let events = drive(&mut engine);
    assert_eq!(kinds(&events), vec![EventKind::PurchasePrompt, EventKind::Summary]);
    assert_eq!(fetch(&engine, 1).position, 16);
}

#[test]
fn visiting_the_jail_has_no_effect() {
    let players = vec![player_at(Player::new(1, "Alice", 5000), 9)];
    let mut engine = engine_with(
        players,
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );

    drive(&mut engine);
    let alice = fetch(&engine, 1);
    assert_eq!(alice.position, 11);
    assert_eq!(alice.jail_turns_remaining, 0);
    assert_eq!(alice.money, 5000);
}

#[test]
fn a_paused_player_skips_exactly_one_turn() {
    let mut paused = player_at(Player::new(1, "Alice", 5000), 1);
    paused.paused = true;
    let mut engine = engine_with(
        vec![paused],
        ScriptedDecisions::new(&[]),
        FixedDice::rolls(&[(1, 1)]),
    );

    drive(&mut engine);
    let alice = fetch(&engine, 1);
    assert_eq!(alice.position, 1);
    assert!(!alice.paused);

    drive(&mut engine);
    assert_eq!(fetch(&engine, 1).position, 3);
}
