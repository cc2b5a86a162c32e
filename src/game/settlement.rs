//! Interactive turn continuations: purchase, build, redeem and the
//! shared mortgage-or-bankrupt settle chain.

use super::board::Tile;
use super::engine::TurnEngine;
use super::event::{EventKind, GameEvent, Obligation, TurnAction};
use super::player::Player;
use super::{Money, PlayerId, Position};
use crate::helpers::format_money;
use tracing::warn;

impl TurnEngine {
    /// Ask whether to buy the tile the player just landed on. A "yes"
    /// without enough cash enters the settle chain with a purchase
    /// obligation; declining is terminal.
    pub(crate) fn resume_purchase(&mut self, player_id: PlayerId, position: Position) -> GameEvent {
        let mut player = match self.players.find_by_id(player_id) {
            Some(player) => player,
            None => return self.missing_player_event(player_id),
        };
        let tile = match self.board.tile(position) {
            Some(tile) => tile.clone(),
            None => {
                warn!(position, "purchase prompt for a position without a tile");
                let text = self.result_summary(
                    "Purchase result",
                    "The tile no longer exists; nothing to buy.",
                    &player,
                );
                return self.summary(&player, text);
            }
        };
        let price = match tile.sell_price() {
            Some(price) => price,
            None => {
                warn!(position, "purchase prompt for a non-purchasable tile");
                let text = self.result_summary(
                    "Purchase result",
                    "This tile cannot be bought.",
                    &player,
                );
                return self.summary(&player, text);
            }
        };

        let detail = match &tile {
            Tile::Country(c) => format!("base toll {}", format_money(c.base_toll)),
            Tile::Station(s) => format!("mortgage price {}", format_money(s.mortgage_price)),
            Tile::Company(c) => format!("mortgage price {}", format_money(c.mortgage_price)),
            _ => String::new(),
        };
        let prompt = format!(
            "\n[Purchase] {} has {}. Buy [{}] for {}? ({}, 1 = buy, 0 = pass): ",
            player.name,
            format_money(player.money),
            tile.name(),
            format_money(price),
            detail
        );
        let choice = self.decisions.request_int(&prompt);

        if choice == 1 {
            if player.money >= price {
                player.money -= price;
                self.ledger.assign_owner(position, player.id);
                player.add_owned_tile(position);
                self.players.save(&player);
                let body = format!(
                    "{} bought [{}] for {}.",
                    player.name,
                    tile.name(),
                    format_money(price)
                );
                let text = self.result_summary("Purchase result", &body, &player);
                self.summary(&player, text)
            } else {
                let shortage = price - player.money;
                let body = format!(
                    "Cash is short: the price is {}, you have {}, missing {}.",
                    format_money(price),
                    format_money(player.money),
                    format_money(shortage)
                );
                let text = self.result_summary("Purchase", &body, &player);
                self.next_event(
                    EventKind::MortgagePrompt,
                    Some(player_id),
                    text,
                    Some(TurnAction::Settle {
                        player: player_id,
                        obligation: Obligation::Purchase { position, price },
                    }),
                )
            }
        } else {
            let body = format!("{} passed on [{}].", player.name, tile.name());
            let text = self.result_summary("Purchase result", &body, &player);
            self.summary(&player, text)
        }
    }

    /// Offer house/hotel construction on the player's own country
    /// tile. Invariant violations and cash shortfalls are rejected in
    /// the summary; the turn continues either way.
    pub(crate) fn resume_build(&mut self, player_id: PlayerId, position: Position) -> GameEvent {
        let mut player = match self.players.find_by_id(player_id) {
            Some(player) => player,
            None => return self.missing_player_event(player_id),
        };
        let tile = match self.board.tile(position) {
            Some(Tile::Country(country)) => country.clone(),
            _ => {
                warn!(position, "build prompt for a non-country position");
                let text = self.result_summary(
                    "Build result",
                    "Nothing can be built here.",
                    &player,
                );
                return self.summary(&player, text);
            }
        };
        let state = self.ledger.state(position);

        let mut prompt = format!(
            "\n[Build] {} has {}. Tile: {}",
            player.name,
            format_money(player.money),
            tile.name
        );
        if state.can_build_house() {
            prompt.push_str(&format!(
                "\n  1 = build a house (cost {})",
                format_money(tile.build_house_cost)
            ));
        }
        if state.can_build_hotel() {
            prompt.push_str(&format!(
                "\n  2 = build a hotel (cost {}, replaces the 4 houses)",
                format_money(tile.build_hotel_cost)
            ));
        }
        prompt.push_str("\n  0 = build nothing\nChoose: ");
        let choice = self.decisions.request_int(&prompt);

        let message = if choice == 1 && state.can_build_house() {
            let cost = tile.build_house_cost;
            if player.money >= cost {
                player.money -= cost;
                let state = self.ledger.state_mut(position);
                state.build_house();
                format!(
                    "{} built a house on [{}] for {}. Houses now: {}.",
                    player.name,
                    tile.name,
                    format_money(cost),
                    state.house_count
                )
            } else {
                format!(
                    "Cash is short: a house costs {}, you have {}. Nothing built.",
                    format_money(cost),
                    format_money(player.money)
                )
            }
        } else if choice == 2 && state.can_build_hotel() {
            let cost = tile.build_hotel_cost;
            if player.money >= cost {
                player.money -= cost;
                let state = self.ledger.state_mut(position);
                state.build_hotel();
                format!(
                    "{} built a hotel on [{}] for {}, replacing the 4 houses.",
                    player.name,
                    tile.name,
                    format_money(cost)
                )
            } else {
                format!(
                    "Cash is short: a hotel costs {}, you have {}. Nothing built.",
                    format_money(cost),
                    format_money(player.money)
                )
            }
        } else {
            format!("{} chose not to build.", player.name)
        };

        self.players.save(&player);
        let text = self.result_summary("Build result", &message, &player);
        self.summary(&player, text)
    }

    /// Turn-start redeem menu. Whatever the choice, the turn proceeds
    /// to the normal roll, with the redeem outcome prefixed to the
    /// turn summary.
    pub(crate) fn resume_redeem(&mut self, player_id: PlayerId, turn: u32) -> GameEvent {
        let mut player = match self.players.find_by_id(player_id) {
            Some(player) => player,
            None => return self.missing_player_event(player_id),
        };
        let mortgaged = self.mortgaged_tiles_of(&player);

        let mut prompt = format!(
            "\n[Redeem] {} has {}.\nMortgaged tiles:\n",
            player.name,
            format_money(player.money)
        );
        for (i, (_, name, cost)) in mortgaged.iter().enumerate() {
            prompt.push_str(&format!(
                "  {} = {} (redeem cost: {})\n",
                i + 1,
                name,
                format_money(*cost)
            ));
        }
        prompt.push_str("  0 = keep the mortgages and roll\nChoose: ");
        let choice = self.decisions.request_int(&prompt);

        let message = if choice >= 1 && (choice as usize) <= mortgaged.len() {
            let (position, name, cost) = mortgaged[choice as usize - 1].clone();
            if player.money >= cost {
                player.money -= cost;
                self.ledger.state_mut(position).mortgaged = false;
                player.mortgaged_tiles.remove(&position);
                self.players.save(&player);
                format!("{} redeemed [{}] for {}.", player.name, name, format_money(cost))
            } else {
                format!(
                    "Cash is short: redeeming [{}] costs {}, you have {}.",
                    name,
                    format_money(cost),
                    format_money(player.money)
                )
            }
        } else {
            format!("{} kept the mortgages in place.", player.name)
        };

        let prefix = self.result_summary("Redeem result", &message, &player);
        self.execute_turn(player, turn, true, Some(prefix))
    }

    /// One step of the mortgage-or-bankrupt chain. Each step mortgages
    /// at most one tile and re-checks the pending obligation; the
    /// eligible set strictly shrinks, so the loop terminates.
    pub(crate) fn resume_settle(&mut self, player_id: PlayerId, obligation: Obligation) -> GameEvent {
        let mut player = match self.players.find_by_id(player_id) {
            Some(player) => player,
            None => return self.missing_player_event(player_id),
        };
        let eligible = self.eligible_mortgage_tiles(&player);
        let amount = obligation.amount();

        if eligible.is_empty() {
            return match obligation {
                Obligation::Purchase { .. } => {
                    let text = self.result_summary(
                        "Purchase result",
                        "No tiles left to mortgage; the purchase is abandoned.",
                        &player,
                    );
                    self.summary(&player, text)
                }
                Obligation::Toll { recipient, .. } => self.bankrupt(player, Some(recipient)),
                Obligation::Tax { .. } => self.bankrupt(player, None),
            };
        }

        let needed_for = match &obligation {
            Obligation::Purchase { .. } => String::from("to complete the purchase"),
            Obligation::Toll { .. } => String::from("to pay the toll"),
            Obligation::Tax { .. } => String::from("to pay the tax"),
        };
        let mut prompt = format!(
            "\n[Mortgage] {} needed {}; cash {}, short {}.\nTiles available to mortgage:\n",
            format_money(amount),
            needed_for,
            format_money(player.money),
            format_money(amount - player.money)
        );
        for (i, (_, name, value)) in eligible.iter().enumerate() {
            prompt.push_str(&format!(
                "  {} = {} (mortgage value: {})\n",
                i + 1,
                name,
                format_money(*value)
            ));
        }
        match obligation {
            Obligation::Purchase { .. } => prompt.push_str("  0 = abandon the purchase\nChoose: "),
            _ => prompt.push_str("  0 = declare bankruptcy\nChoose: "),
        }
        let choice = self.decisions.request_int(&prompt);

        if choice >= 1 && (choice as usize) <= eligible.len() {
            let (position, name, value) = eligible[choice as usize - 1].clone();
            self.ledger.state_mut(position).mortgaged = true;
            player.money += value;
            player.add_mortgaged_tile(position);
            self.players.save(&player);
            let mortgage_line = format!(
                "{} mortgaged [{}] to the bank for {}.",
                player.name,
                name,
                format_money(value)
            );

            if player.money >= amount {
                self.settle_pay(player, obligation, mortgage_line)
            } else {
                let body = format!("{}\nStill short; another mortgage is needed.", mortgage_line);
                let text = self.result_summary("Mortgage result", &body, &player);
                self.next_event(
                    EventKind::MortgagePrompt,
                    Some(player_id),
                    text,
                    Some(TurnAction::Settle {
                        player: player_id,
                        obligation,
                    }),
                )
            }
        } else {
            match obligation {
                Obligation::Purchase { .. } => {
                    let body = format!("{} abandoned the purchase.", player.name);
                    let text = self.result_summary("Purchase result", &body, &player);
                    self.summary(&player, text)
                }
                Obligation::Toll { recipient, .. } => self.bankrupt(player, Some(recipient)),
                Obligation::Tax { .. } => self.bankrupt(player, None),
            }
        }
    }

    /// Pay off a now-affordable obligation. Purchases loop back into a
    /// fresh purchase prompt; tolls and taxes settle immediately.
    fn settle_pay(
        &mut self,
        mut player: Player,
        obligation: Obligation,
        mortgage_line: String,
    ) -> GameEvent {
        match obligation {
            Obligation::Purchase { position, .. } => {
                let body = format!("{}\nYou can now afford the purchase.", mortgage_line);
                let text = self.result_summary("Mortgage result", &body, &player);
                let id = player.id;
                self.next_event(
                    EventKind::PurchasePrompt,
                    Some(id),
                    text,
                    Some(TurnAction::Purchase {
                        player: id,
                        position,
                    }),
                )
            }
            Obligation::Toll { recipient, amount } => {
                player.money -= amount;
                let mut body = mortgage_line;
                match self.players.find_by_id(recipient) {
                    Some(mut owner) => {
                        owner.money += amount;
                        self.players.save(&owner);
                        body.push_str(&format!(
                            "\nToll of {} paid to {}.\nYour cash: {}; {}'s cash: {}.",
                            format_money(amount),
                            owner.name,
                            format_money(player.money),
                            owner.name,
                            format_money(owner.money)
                        ));
                    }
                    None => {
                        warn!(recipient, "toll recipient missing; payment forfeited to the bank");
                        body.push_str(&format!(
                            "\nToll of {} paid. Your cash: {}.",
                            format_money(amount),
                            format_money(player.money)
                        ));
                    }
                }
                self.players.save(&player);
                let text = self.result_summary("Toll paid", &body, &player);
                self.summary(&player, text)
            }
            Obligation::Tax { amount } => {
                player.money -= amount;
                self.players.save(&player);
                let body = format!(
                    "{}\nTax of {} paid. Cash: {}.",
                    mortgage_line,
                    format_money(amount),
                    format_money(player.money)
                );
                let text = self.result_summary("Tax paid", &body, &player);
                self.summary(&player, text)
            }
        }
    }

    /// Terminal state of the settle chain: hand over whatever cash is
    /// left, return every tile to the bank and leave the game.
    pub(crate) fn bankrupt(&mut self, mut player: Player, recipient: Option<PlayerId>) -> GameEvent {
        let paid = player.money;
        player.money = 0;
        if let Some(recipient_id) = recipient {
            if let Some(mut owner) = self.players.find_by_id(recipient_id) {
                owner.money += paid;
                self.players.save(&owner);
            }
        }
        self.ledger.release_positions(&player.owned_tiles);
        player.release_all_tiles();
        self.players.delete_by_id(player.id);
        self.evaluate_game_over();

        let mut body = format!(
            "No assets left to mortgage: {} is bankrupt and out of the game.",
            player.name
        );
        if paid > 0 {
            body.push_str(&format!(
                " All remaining cash ({}) was handed over.",
                format_money(paid)
            ));
        }
        if self.is_game_over() {
            body.push_str("\nThe game is over.");
        }
        let text = self.result_summary("Bankruptcy", &body, &player);
        self.summary(&player, text)
    }

    /*********        ASSET QUERIES        *********/

    /// The player's unmortgaged owned tiles, with display name and
    /// mortgage value, ordered by board position.
    pub(crate) fn eligible_mortgage_tiles(
        &self,
        player: &Player,
    ) -> Vec<(Position, String, Money)> {
        let mut positions: Vec<Position> = player.owned_tiles.iter().copied().collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|position| {
                if player.mortgaged_tiles.contains(&position) {
                    return None;
                }
                let state = self.ledger.state(position);
                if state.mortgaged {
                    return None;
                }
                let tile = self.board.tile(position)?;
                let value = tile.mortgage_value(state)?;
                Some((position, tile.name().to_owned(), value))
            })
            .collect()
    }

    /// The player's mortgaged tiles, with display name and redeem
    /// cost, ordered by board position.
    pub(crate) fn mortgaged_tiles_of(&self, player: &Player) -> Vec<(Position, String, Money)> {
        let mut positions: Vec<Position> = player.mortgaged_tiles.iter().copied().collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|position| {
                let state = self.ledger.state(position);
                if !state.mortgaged {
                    return None;
                }
                let tile = self.board.tile(position)?;
                let cost = tile.mortgage_value(state)?;
                Some((position, tile.name().to_owned(), cost))
            })
            .collect()
    }

    fn missing_player_event(&mut self, player_id: PlayerId) -> GameEvent {
        warn!(player_id, "player missing from the registry mid-turn");
        self.next_event(
            EventKind::Summary,
            None,
            String::from("The player is no longer in the game."),
            Some(TurnAction::Acknowledge),
        )
    }
}
