//! The player character: stats, HP/MP pools, and equipped gear.

use serde::{Deserialize, Serialize};

use crate::catalog::items::Item;

/// Base stats as set by the progression table. Equipment bonuses are never
/// written into these; they are added on demand by `total_atk`/`total_def`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub atk: u32,
    pub def: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    Weapon,
    Armor,
    Shield,
}

/// The player's three equipment slots, at most one item each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub shield: Option<Item>,
}

impl Equipment {
    pub fn get(&self, slot: EquipSlot) -> &Option<Item> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Shield => &self.shield,
        }
    }

    pub fn set(&mut self, slot: EquipSlot, item: Option<Item>) {
        match slot {
            EquipSlot::Weapon => self.weapon = item,
            EquipSlot::Armor => self.armor = item,
            EquipSlot::Shield => self.shield = item,
        }
    }

    pub fn take(&mut self, slot: EquipSlot) -> Option<Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.take(),
            EquipSlot::Armor => self.armor.take(),
            EquipSlot::Shield => self.shield.take(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    /// Cumulative XP, never reset on level-up.
    pub xp: u64,
    /// Cached threshold for the next level, kept consistent by progression.
    pub xp_to_next: u64,
    pub base_stats: BaseStats,
    pub current_hp: u32,
    pub current_mp: u32,
    pub equipment: Equipment,
}

impl Player {
    pub fn new(name: String, base_stats: BaseStats, xp_to_next: u64) -> Self {
        Self {
            name,
            level: 1,
            xp: 0,
            xp_to_next,
            base_stats,
            current_hp: base_stats.max_hp,
            current_mp: base_stats.max_mp,
            equipment: Equipment::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heals up to `amount`, clamped to max HP. Returns the HP actually gained.
    pub fn heal_hp(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.base_stats.max_hp - self.current_hp);
        self.current_hp += gained;
        gained
    }

    /// Restores up to `amount` MP, clamped to max MP. Returns the MP gained.
    pub fn heal_mp(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.base_stats.max_mp - self.current_mp);
        self.current_mp += gained;
        gained
    }

    /// Deducts MP if available; returns false (no mutation) when short.
    pub fn spend_mp(&mut self, cost: u32) -> bool {
        if self.current_mp < cost {
            return false;
        }
        self.current_mp -= cost;
        true
    }

    pub fn restore_full(&mut self) {
        self.current_hp = self.base_stats.max_hp;
        self.current_mp = self.base_stats.max_mp;
    }

    /// Total attack: base plus weapon bonus. The only place weapon atk is
    /// counted; combat must use this, never `base_stats.atk`.
    pub fn total_atk(&self) -> u32 {
        let weapon_atk = self
            .equipment
            .weapon
            .as_ref()
            .and_then(|item| item.stats)
            .map_or(0, |stats| stats.atk);
        self.base_stats.atk + weapon_atk
    }

    /// Total defense: base plus armor and shield bonuses.
    pub fn total_def(&self) -> u32 {
        let slot_def = |item: &Option<Item>| {
            item.as_ref()
                .and_then(|item| item.stats)
                .map_or(0, |stats| stats.def)
        };
        self.base_stats.def + slot_def(&self.equipment.armor) + slot_def(&self.equipment.shield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::items::get_item;

    fn test_player() -> Player {
        Player::new(
            "Hero".to_string(),
            BaseStats {
                max_hp: 40,
                max_mp: 15,
                atk: 8,
                def: 4,
            },
            20,
        )
    }

    #[test]
    fn test_new_player_starts_full() {
        let player = test_player();
        assert_eq!(player.current_hp, 40);
        assert_eq!(player.current_mp, 15);
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 0);
    }

    #[test]
    fn test_damage_and_heal_clamp() {
        let mut player = test_player();

        player.take_damage(9999);
        assert_eq!(player.current_hp, 0);
        assert!(!player.is_alive());

        let gained = player.heal_hp(9999);
        assert_eq!(gained, 40);
        assert_eq!(player.current_hp, 40);
    }

    #[test]
    fn test_spend_mp_fails_without_mutation() {
        let mut player = test_player();
        player.current_mp = 3;

        assert!(!player.spend_mp(5));
        assert_eq!(player.current_mp, 3);

        assert!(player.spend_mp(3));
        assert_eq!(player.current_mp, 0);
    }

    #[test]
    fn test_totals_without_equipment() {
        let player = test_player();
        assert_eq!(player.total_atk(), 8);
        assert_eq!(player.total_def(), 4);
    }

    #[test]
    fn test_totals_with_equipment() {
        let mut player = test_player();
        player.equipment.weapon = get_item("wooden_sword");
        player.equipment.armor = get_item("leather_armor");
        player.equipment.shield = get_item("chainmail"); // def 7, any def item works

        assert_eq!(player.total_atk(), 8 + 3);
        assert_eq!(player.total_def(), 4 + 3 + 7);
    }

    #[test]
    fn test_equipment_slot_accessors() {
        let mut equipment = Equipment::default();
        let sword = get_item("iron_sword");

        equipment.set(EquipSlot::Weapon, sword.clone());
        assert_eq!(equipment.get(EquipSlot::Weapon), &sword);

        let taken = equipment.take(EquipSlot::Weapon);
        assert_eq!(taken, sword);
        assert!(equipment.weapon.is_none());
    }
}
