use super::board::{BoardCatalog, CardTile, CompanyTile, CountryTile, SpecialTile, StationTile, Tile};
use super::board::SpecialCategory;
use super::cards::{CardResolver, DeckCardResolver};
use super::dice::{Dice, RandomDice};
use super::event::{EventKind, GameEvent, Obligation, TurnAction};
use super::player::{Player, PlayerRepository};
use super::property::{PropertyLedger, PropertyState};
use super::{GameRules, Money, PlayerId};
use crate::helpers::{format_money, parse_amount};
use crate::ports::DecisionPort;
use std::time::SystemTime;
use tracing::{info, warn};

/// The turn engine: advances one player's turn per call, resolving
/// movement and landing economics into a chain of events. Interactive
/// events carry a continuation the driver feeds back via [`TurnEngine::resume`]
/// until the chain ends.
pub struct TurnEngine {
    pub(crate) players: Box<dyn PlayerRepository>,
    pub(crate) board: BoardCatalog,
    pub(crate) decisions: Box<dyn DecisionPort>,
    pub(crate) dice: Box<dyn Dice>,
    pub(crate) cards: Box<dyn CardResolver>,
    pub(crate) ledger: PropertyLedger,
    pub(crate) rules: GameRules,
    pub(crate) cursor: usize,
    pub(crate) turn_counter: u32,
    pub(crate) game_over: bool,
    pub(crate) next_event_id: u64,
}

impl TurnEngine {
    /// Build an engine with the default dice, card decks and rules.
    pub fn new(
        players: Box<dyn PlayerRepository>,
        board: BoardCatalog,
        decisions: Box<dyn DecisionPort>,
    ) -> TurnEngine {
        TurnEngine::with_parts(
            players,
            board,
            decisions,
            Box::new(RandomDice),
            Box::new(DeckCardResolver::standard()),
            GameRules::default(),
        )
    }

    /// Build an engine from explicit collaborators.
    pub fn with_parts(
        players: Box<dyn PlayerRepository>,
        board: BoardCatalog,
        decisions: Box<dyn DecisionPort>,
        dice: Box<dyn Dice>,
        cards: Box<dyn CardResolver>,
        rules: GameRules,
    ) -> TurnEngine {
        TurnEngine {
            players,
            board,
            decisions,
            dice,
            cards,
            ledger: PropertyLedger::new(),
            rules,
            cursor: 0,
            turn_counter: 0,
            game_over: false,
            next_event_id: 0,
        }
    }

    /// Whether the game has ended. Once true, stays true.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn registry(&self) -> &dyn PlayerRepository {
        self.players.as_ref()
    }

    /// Advance the next player's turn and return the head of the
    /// resulting event chain.
    pub fn advance_turn(&mut self) -> GameEvent {
        if self.game_over {
            return self.next_event(
                EventKind::GameOver,
                None,
                String::from("The game has already ended."),
                None,
            );
        }

        let players = self.players.find_all();
        if players.is_empty() {
            self.game_over = true;
            return self.next_event(
                EventKind::GameOver,
                None,
                String::from("No players registered; the game is over."),
                None,
            );
        }

        // The cursor may point past the list after an elimination.
        if self.cursor >= players.len() {
            self.cursor = 0;
        }
        let player = players[self.cursor].clone();
        self.cursor = (self.cursor + 1) % players.len();

        self.turn_counter += 1;
        let turn = self.turn_counter;

        // Tiles mortgaged earlier can be redeemed before the dice roll.
        let mortgaged = self.mortgaged_tiles_of(&player);
        if !mortgaged.is_empty() {
            let text = format!(
                "==================== Turn {} ====================\nPlayer: {}\nYou have {} mortgaged tile(s) available to redeem.\n",
                turn,
                player.name,
                mortgaged.len()
            );
            let id = player.id;
            return self.next_event(
                EventKind::RedeemPrompt,
                Some(id),
                text,
                Some(TurnAction::RedeemChoice { player: id, turn }),
            );
        }

        self.execute_turn(player, turn, false, None)
    }

    /// Run an interactive event's continuation, returning the next
    /// link of the chain, or `None` when the chain is finished.
    pub fn resume(&mut self, action: TurnAction) -> Option<GameEvent> {
        match action {
            TurnAction::Acknowledge => {
                self.decisions
                    .request_line("\n(Press Enter for the next player)\n");
                None
            }
            TurnAction::RedeemChoice { player, turn } => Some(self.resume_redeem(player, turn)),
            TurnAction::Purchase { player, position } => {
                Some(self.resume_purchase(player, position))
            }
            TurnAction::Build { player, position } => Some(self.resume_build(player, position)),
            TurnAction::Settle { player, obligation } => {
                Some(self.resume_settle(player, obligation))
            }
        }
    }

    /// Roll, move and resolve the landing for one player. `skip_header`
    /// drops the turn banner (already shown by the redeem prompt) and
    /// `prefix` is narration to show ahead of the turn summary.
    pub(crate) fn execute_turn(
        &mut self,
        player: Player,
        turn: u32,
        skip_header: bool,
        prefix: Option<String>,
    ) -> GameEvent {
        let mut event = self.run_turn(player, turn, skip_header);
        if let Some(prefix) = prefix {
            if !prefix.is_empty() {
                event.text = format!("{}\n\n{}", prefix, event.text);
            }
        }
        event
    }

    fn run_turn(&mut self, mut player: Player, turn: u32, skip_header: bool) -> GameEvent {
        let from_name = self.board.tile_name(player.position);

        // Jail and pause both consume the turn without a roll.
        if player.jail_turns_remaining > 0 {
            let remaining = player.jail_turns_remaining;
            player.jail_turns_remaining -= 1;
            self.players.save(&player);
            let text = self.jail_summary(turn, &player, &from_name, remaining);
            return self.summary(&player, text);
        }
        if player.paused {
            player.paused = false;
            self.players.save(&player);
            let text = self.paused_summary(turn, &player, &from_name);
            return self.summary(&player, text);
        }

        let (d1, d2) = self.dice.roll_pair();
        let dice = d1 + d2;
        let old_position = player.position;
        let length = self.board.len();
        let passed_start = u16::from(old_position) + u16::from(dice) > u16::from(length);

        let mut new_position = old_position + dice;
        if new_position > length {
            new_position -= length;
            player.money += self.rules.pass_start_bonus;
        }
        player.position = new_position;
        self.players.save(&player);

        let tile = self.board.tile(new_position).cloned();
        let to_name = self.board.tile_name(new_position);
        let header = if skip_header {
            format!("Roll: {}\nMove: {} -> {}\n\n", dice, from_name, to_name)
        } else {
            self.turn_header(turn, &player, dice, &from_name, &to_name)
        };

        let tile = match tile {
            Some(tile) => tile,
            None => {
                warn!(position = new_position, "no tile definition at landing position");
                let text = self.turn_summary(
                    &header,
                    "Landed on: unknown tile\n",
                    "No additional event.",
                    &player,
                );
                return self.summary(&player, text);
            }
        };
        let location_line = format!("Landed on: {}\n", to_name);

        let event = match tile {
            Tile::Country(country) => {
                self.resolve_country(&mut player, &country, &header, &location_line)
            }
            Tile::Station(station) => {
                self.resolve_station(&mut player, &station, &header, &location_line)
            }
            Tile::Company(company) => {
                self.resolve_company(&mut player, &company, &header, &location_line)
            }
            Tile::Special(special) => {
                self.resolve_special(&mut player, &special, passed_start, &header, &location_line)
            }
            Tile::Card(card) => self.resolve_card(&mut player, &card, &header, &location_line),
        };
        self.players.save(&player);
        event
    }

    /*********        LANDING RESOLUTION        *********/

    fn resolve_country(
        &mut self,
        player: &mut Player,
        tile: &CountryTile,
        header: &str,
        location_line: &str,
    ) -> GameEvent {
        let owner_id = match self.ledger.owner_of(tile.position) {
            None => {
                let body = format!(
                    "{} is unowned. Price {}, base toll {}.\nCash on hand: {}; a purchase offer follows.",
                    tile.name,
                    format_money(tile.sell_price),
                    format_money(tile.base_toll),
                    format_money(player.money)
                );
                let text = self.turn_summary(header, location_line, &body, player);
                let id = player.id;
                return self.next_event(
                    EventKind::PurchasePrompt,
                    Some(id),
                    text,
                    Some(TurnAction::Purchase {
                        player: id,
                        position: tile.position,
                    }),
                );
            }
            Some(id) => id,
        };

        if owner_id == player.id {
            let state = self.ledger.state(tile.position);
            let body = format!("This is your own country. {}", property_status_line(&state));
            let text = self.turn_summary(header, location_line, &body, player);
            if state.can_build() {
                let id = player.id;
                return self.next_event(
                    EventKind::BuildPrompt,
                    Some(id),
                    text,
                    Some(TurnAction::Build {
                        player: id,
                        position: tile.position,
                    }),
                );
            }
            return self.summary(player, text);
        }

        let owner = match self.players.find_by_id(owner_id) {
            Some(owner) => owner,
            None => {
                warn!(owner_id, position = tile.position, "recorded owner missing");
                let text = self.turn_summary(
                    header,
                    location_line,
                    "The recorded owner is no longer in the game; no toll due.",
                    player,
                );
                return self.summary(player, text);
            }
        };

        let state = self.ledger.state(tile.position);
        if state.mortgaged {
            let text = self.turn_summary(
                header,
                location_line,
                "This tile is mortgaged to the bank; no toll due.",
                player,
            );
            return self.summary(player, text);
        }

        let mut toll = tile.toll(state);
        let mut detail = String::new();
        if self.ledger.has_monopoly(&self.board, owner_id, tile.color) {
            toll *= 2;
            detail = format!(
                "{} holds the whole color group; the toll is doubled.\n",
                owner.name
            );
        }
        self.charge_toll(player, owner, toll, detail, header, location_line)
    }

    fn resolve_station(
        &mut self,
        player: &mut Player,
        tile: &StationTile,
        header: &str,
        location_line: &str,
    ) -> GameEvent {
        let owner_id = match self.ledger.owner_of(tile.position) {
            None => {
                let body = format!(
                    "{} is unowned. Price {}, mortgage price {}.\nCash on hand: {}; a purchase offer follows.",
                    tile.name,
                    format_money(tile.sell_price),
                    format_money(tile.mortgage_price),
                    format_money(player.money)
                );
                let text = self.turn_summary(header, location_line, &body, player);
                let id = player.id;
                return self.next_event(
                    EventKind::PurchasePrompt,
                    Some(id),
                    text,
                    Some(TurnAction::Purchase {
                        player: id,
                        position: tile.position,
                    }),
                );
            }
            Some(id) => id,
        };

        if owner_id == player.id {
            let state = self.ledger.state(tile.position);
            let body = if state.mortgaged {
                "This is your own station. [Mortgaged]"
            } else {
                "This is your own station."
            };
            let text = self.turn_summary(header, location_line, body, player);
            return self.summary(player, text);
        }

        let owner = match self.players.find_by_id(owner_id) {
            Some(owner) => owner,
            None => {
                warn!(owner_id, position = tile.position, "recorded owner missing");
                let text = self.turn_summary(
                    header,
                    location_line,
                    "The recorded owner is no longer in the game; no toll due.",
                    player,
                );
                return self.summary(player, text);
            }
        };

        if self.ledger.state(tile.position).mortgaged {
            let text = self.turn_summary(
                header,
                location_line,
                "This station is mortgaged to the bank; no toll due.",
                player,
            );
            return self.summary(player, text);
        }

        let count = self.ledger.unmortgaged_stations_of(&self.board, owner_id);
        let toll = tile.toll_for_count(count);
        let detail = format!(
            "{} holds {} unmortgaged station(s); the toll is {}.\n",
            owner.name,
            count,
            format_money(toll)
        );
        self.charge_toll(player, owner, toll, detail, header, location_line)
    }

    fn resolve_company(
        &mut self,
        player: &mut Player,
        tile: &CompanyTile,
        header: &str,
        location_line: &str,
    ) -> GameEvent {
        let owner_id = match self.ledger.owner_of(tile.position) {
            None => {
                let body = format!(
                    "{} is unowned. Price {}, mortgage price {}.\nCash on hand: {}; a purchase offer follows.",
                    tile.name,
                    format_money(tile.sell_price),
                    format_money(tile.mortgage_price),
                    format_money(player.money)
                );
                let text = self.turn_summary(header, location_line, &body, player);
                let id = player.id;
                return self.next_event(
                    EventKind::PurchasePrompt,
                    Some(id),
                    text,
                    Some(TurnAction::Purchase {
                        player: id,
                        position: tile.position,
                    }),
                );
            }
            Some(id) => id,
        };

        if owner_id == player.id {
            let state = self.ledger.state(tile.position);
            let body = if state.mortgaged {
                "This is your own company. [Mortgaged]"
            } else {
                "This is your own company."
            };
            let text = self.turn_summary(header, location_line, body, player);
            return self.summary(player, text);
        }

        let owner = match self.players.find_by_id(owner_id) {
            Some(owner) => owner,
            None => {
                warn!(owner_id, position = tile.position, "recorded owner missing");
                let text = self.turn_summary(
                    header,
                    location_line,
                    "The recorded owner is no longer in the game; no toll due.",
                    player,
                );
                return self.summary(player, text);
            }
        };

        if self.ledger.state(tile.position).mortgaged {
            let text = self.turn_summary(
                header,
                location_line,
                "This company is mortgaged to the bank; no toll due.",
                player,
            );
            return self.summary(player, text);
        }

        // The wheel is spun fresh on every landing, never cached.
        let spin = self.dice.spin();
        let count = self.ledger.unmortgaged_companies_of(&self.board, owner_id);
        let multiplier: Money = if count == 2 { 100 } else { 10 };
        let toll = Money::from(spin) * multiplier;
        let detail = format!(
            "Wheel spin: {}. {} holds {} unmortgaged company(ies); the toll is {} x {} = {}.\n",
            spin,
            owner.name,
            count,
            spin,
            multiplier,
            format_money(toll)
        );
        self.charge_toll(player, owner, toll, detail, header, location_line)
    }

    /// Debit the payer and credit the owner, or hand the shortfall to
    /// the settle chain.
    fn charge_toll(
        &mut self,
        player: &mut Player,
        mut owner: Player,
        toll: Money,
        detail: String,
        header: &str,
        location_line: &str,
    ) -> GameEvent {
        if player.money >= toll {
            player.money -= toll;
            owner.money += toll;
            self.players.save(&owner);
            self.players.save(player);
            let body = format!(
                "{}Toll of {} paid to {}.\nYour cash: {}; {}'s cash: {}.",
                detail,
                format_money(toll),
                owner.name,
                format_money(player.money),
                owner.name,
                format_money(owner.money)
            );
            let text = self.turn_summary(header, location_line, &body, player);
            self.summary(player, text)
        } else {
            let body = format!(
                "{}Toll of {} owed to {}, but your cash is only {}.",
                detail,
                format_money(toll),
                owner.name,
                format_money(player.money)
            );
            let text = self.turn_summary(header, location_line, &body, player);
            let id = player.id;
            self.next_event(
                EventKind::TollPrompt,
                Some(id),
                text,
                Some(TurnAction::Settle {
                    player: id,
                    obligation: Obligation::Toll {
                        recipient: owner.id,
                        amount: toll,
                    },
                }),
            )
        }
    }

    fn resolve_special(
        &mut self,
        player: &mut Player,
        tile: &SpecialTile,
        passed_start: bool,
        header: &str,
        location_line: &str,
    ) -> GameEvent {
        match tile.category {
            SpecialCategory::Start => {
                let body = if passed_start {
                    let extra = self.rules.stop_start_award - self.rules.pass_start_bonus;
                    player.money += extra;
                    self.players.save(player);
                    format!(
                        "Passed and stopped on Start: {} awarded in total ({} for passing plus {} for stopping). Cash: {}.",
                        format_money(self.rules.stop_start_award),
                        format_money(self.rules.pass_start_bonus),
                        format_money(extra),
                        format_money(player.money)
                    )
                } else {
                    player.money += self.rules.stop_start_award;
                    self.players.save(player);
                    format!(
                        "Stopped on Start: {} awarded. Cash: {}.",
                        format_money(self.rules.stop_start_award),
                        format_money(player.money)
                    )
                };
                let text = self.turn_summary(header, location_line, &body, player);
                self.summary(player, text)
            }
            SpecialCategory::Tax => {
                let tax = parse_amount(&tile.description)
                    .or_else(|| parse_amount(&tile.name))
                    .unwrap_or(1000);
                if player.money >= tax {
                    player.money -= tax;
                    self.players.save(player);
                    let body = format!(
                        "Paid a tax of {}. Cash: {}.",
                        format_money(tax),
                        format_money(player.money)
                    );
                    let text = self.turn_summary(header, location_line, &body, player);
                    self.summary(player, text)
                } else {
                    let body = format!(
                        "A tax of {} is due, but your cash is only {}.",
                        format_money(tax),
                        format_money(player.money)
                    );
                    let text = self.turn_summary(header, location_line, &body, player);
                    let id = player.id;
                    self.next_event(
                        EventKind::TaxPrompt,
                        Some(id),
                        text,
                        Some(TurnAction::Settle {
                            player: id,
                            obligation: Obligation::Tax { amount: tax },
                        }),
                    )
                }
            }
            SpecialCategory::GoToJail => {
                // Being marched to jail never counts as passing start.
                let body = match self.board.jail_position() {
                    Some(jail) => {
                        player.position = jail;
                        player.jail_turns_remaining = self.rules.jail_turns;
                        self.players.save(player);
                        format!(
                            "Sent directly to jail. The next {} turn(s) are spent inside.",
                            self.rules.jail_turns
                        )
                    }
                    None => {
                        warn!("board has no jail-visit tile; go-to-jail does nothing");
                        String::from("There is no jail on this board; nothing happens.")
                    }
                };
                let text = self.turn_summary(header, location_line, &body, player);
                self.summary(player, text)
            }
            SpecialCategory::JailVisit => {
                let text = self.turn_summary(
                    header,
                    location_line,
                    "Just visiting the jail; no effect.",
                    player,
                );
                self.summary(player, text)
            }
            SpecialCategory::FreeParking => {
                let text =
                    self.turn_summary(header, location_line, "Free parking; no effect.", player);
                self.summary(player, text)
            }
            SpecialCategory::Other => {
                let text =
                    self.turn_summary(header, location_line, "No additional event.", player);
                self.summary(player, text)
            }
        }
    }

    fn resolve_card(
        &mut self,
        player: &mut Player,
        tile: &CardTile,
        header: &str,
        location_line: &str,
    ) -> GameEvent {
        let narration = self.cards.draw(tile.kind, player);
        self.players.save(player);
        let text = self.turn_summary(header, location_line, &narration, player);
        self.summary(player, text)
    }

    /*********        EVENTS & SUMMARIES        *********/

    pub(crate) fn next_event(
        &mut self,
        kind: EventKind,
        player_id: Option<PlayerId>,
        text: String,
        action: Option<TurnAction>,
    ) -> GameEvent {
        self.next_event_id += 1;
        GameEvent {
            id: self.next_event_id,
            occurred_at: SystemTime::now(),
            player_id,
            kind,
            text,
            action,
        }
    }

    /// A terminal narration event; acknowledging it ends the chain.
    pub(crate) fn summary(&mut self, player: &Player, text: String) -> GameEvent {
        self.next_event(
            EventKind::Summary,
            Some(player.id),
            text,
            Some(TurnAction::Acknowledge),
        )
    }

    fn turn_header(
        &self,
        turn: u32,
        player: &Player,
        dice: u8,
        from_name: &str,
        to_name: &str,
    ) -> String {
        format!(
            "==================== Turn {} ====================\nPlayer: {}\nRoll: {}\nMove: {} -> {}\n\n",
            turn, player.name, dice, from_name, to_name
        )
    }

    pub(crate) fn turn_summary(
        &self,
        header: &str,
        location_line: &str,
        body: &str,
        player: &Player,
    ) -> String {
        let mut text = String::new();
        text.push_str(header);
        text.push_str(location_line);
        if !body.is_empty() {
            text.push_str("Event: ");
            text.push_str(body);
            text.push('\n');
        }
        text.push_str("\nAssets:\n");
        text.push_str(&self.describe_assets(player));
        text
    }

    pub(crate) fn result_summary(&self, title: &str, body: &str, player: &Player) -> String {
        format!(
            ">>>> {} <<<<\n{}\n\nAssets:\n{}",
            title,
            body,
            self.describe_assets(player)
        )
    }

    fn jail_summary(&self, turn: u32, player: &Player, tile_name: &str, remaining: u8) -> String {
        let line = if remaining > 1 {
            "In jail; no action possible this turn."
        } else {
            "In jail; this is the last turn inside, the next one is played normally."
        };
        format!(
            "==================== Turn {} ====================\nPlayer: {}\nStatus: in jail ({} turn(s) remaining)\nPosition: {}\n\nEvent: {}\n\nAssets:\n{}",
            turn,
            player.name,
            remaining,
            tile_name,
            line,
            self.describe_assets(player)
        )
    }

    fn paused_summary(&self, turn: u32, player: &Player, tile_name: &str) -> String {
        format!(
            "==================== Turn {} ====================\nPlayer: {}\nStatus: paused for one turn\nPosition: {}\n\nEvent: The turn is skipped.\n\nAssets:\n{}",
            turn,
            player.name,
            tile_name,
            self.describe_assets(player)
        )
    }

    fn describe_assets(&self, player: &Player) -> String {
        let mut text = format!("- Cash: {}\n- Holdings: ", format_money(player.money));
        if player.owned_tiles.is_empty() {
            text.push_str("none");
            return text;
        }
        let mut positions: Vec<_> = player.owned_tiles.iter().copied().collect();
        positions.sort_unstable();
        let entries: Vec<String> = positions
            .iter()
            .map(|&position| {
                let mut name = self.board.tile_name(position);
                let state = self.ledger.state(position);
                if state.hotel_count > 0 {
                    name.push_str(" (hotel)");
                } else if state.house_count > 0 {
                    name.push_str(&format!(" ({} house(s))", state.house_count));
                }
                if state.mortgaged {
                    name.push_str(" [mortgaged]");
                }
                name
            })
            .collect();
        text.push_str(&entries.join(", "));
        text
    }

    /// Mark the game over once at most one player still holds assets.
    pub(crate) fn evaluate_game_over(&mut self) {
        if self.game_over {
            return;
        }
        let solvent = self
            .players
            .find_all()
            .into_iter()
            .filter(|p| p.has_assets())
            .count();
        if solvent <= 1 {
            self.game_over = true;
            info!(remaining = solvent, "game over");
        }
    }
}

fn property_status_line(state: &PropertyState) -> String {
    if !state.has_buildings() && !state.mortgaged {
        return String::from("Undeveloped land.");
    }
    let mut parts: Vec<String> = Vec::new();
    if state.mortgaged {
        parts.push(String::from("[Mortgaged]"));
    }
    if state.house_count > 0 {
        parts.push(format!("Houses: {}", state.house_count));
    }
    if state.hotel_count > 0 {
        parts.push(format!("Hotels: {}", state.hotel_count));
    }
    parts.join(", ")
}
