//! The full savable game state.

use serde::{Deserialize, Serialize};

use crate::catalog::items::STARTER_ITEMS;
use crate::character::player::Player;
use crate::character::progression::level_row;
use crate::core::constants::*;
use crate::core::events::EventFlags;
use crate::inventory::{equip_item, Inventory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

/// Everything that persists across battles and saves. Scenes receive a
/// mutable reference to this (or to its parts); there is no global
/// instance anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub inventory: Inventory,
    pub event_flags: EventFlags,
    pub current_map: String,
    pub position: GridPosition,
    pub play_time_seconds: u64,
    pub encounter_steps: u32,
    pub gold: u32,
    pub battles_won: u32,
}

impl GameState {
    /// Fresh new-game state: level-1 stats from the progression table,
    /// starter gear equipped, starter potions in the bag.
    pub fn new_game(player_name: &str) -> Self {
        let first = level_row(1).expect("level table is empty");
        let next_threshold = level_row(2).map_or(0, |r| r.xp_required);
        let mut player = Player::new(player_name.to_string(), first.base_stats(), next_threshold);

        let mut inventory = Inventory::new(INVENTORY_MAX_SLOTS);
        for &(item_id, quantity) in STARTER_ITEMS {
            inventory.add_item(item_id, quantity);
        }
        equip_item(&mut inventory, &mut player, "wooden_sword");
        equip_item(&mut inventory, &mut player, "leather_armor");

        let (x, y) = STARTING_POSITION;
        Self {
            player,
            inventory,
            event_flags: EventFlags::new(),
            current_map: STARTING_MAP.to_string(),
            position: GridPosition { x, y },
            play_time_seconds: 0,
            encounter_steps: 0,
            gold: STARTING_GOLD,
            battles_won: 0,
        }
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Deducts gold if affordable; returns false (no mutation) when short.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn set_gold(&mut self, amount: u32) {
        self.gold = amount;
    }

    pub fn record_victory(&mut self) {
        self.battles_won += 1;
    }

    pub fn increment_encounter_steps(&mut self) {
        self.encounter_steps += 1;
    }

    pub fn reset_encounter_steps(&mut self) {
        self.encounter_steps = 0;
    }
}
