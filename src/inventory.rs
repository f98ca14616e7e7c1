//! Stacking inventory and equipment mutation rules.
//!
//! All player-reachable failures (full inventory, missing item, wrong item
//! kind) report via `false` with no mutation, so callers can show an
//! in-fiction message instead of crashing.

use serde::{Deserialize, Serialize};

use crate::catalog::items::{get_item, EffectKind, Item, ItemKind};
use crate::character::player::{EquipSlot, Player};
use crate::core::constants::INVENTORY_MAX_SLOTS;

/// One stack of a single item id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub quantity: u32,
}

/// The player's carried items: one entry per distinct item id.
/// `max_slots` limits distinct entries, not total quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<InventoryEntry>,
    pub max_slots: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(INVENTORY_MAX_SLOTS)
    }
}

impl Inventory {
    pub fn new(max_slots: usize) -> Self {
        Self {
            items: Vec::new(),
            max_slots,
        }
    }

    fn entry_mut(&mut self, item_id: &str) -> Option<&mut InventoryEntry> {
        self.items.iter_mut().find(|entry| entry.item.id == item_id)
    }

    fn entry(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.items.iter().find(|entry| entry.item.id == item_id)
    }

    /// Adds `quantity` of an item. Stacking onto an existing entry always
    /// succeeds; a new entry fails when the inventory is at capacity or
    /// the id is unknown.
    pub fn add_item(&mut self, item_id: &str, quantity: u32) -> bool {
        if let Some(entry) = self.entry_mut(item_id) {
            entry.quantity += quantity;
            return true;
        }

        if self.items.len() >= self.max_slots {
            return false;
        }

        let Some(item) = get_item(item_id) else {
            return false;
        };

        self.items.push(InventoryEntry { item, quantity });
        true
    }

    /// Removes `quantity` of an item; fails (no mutation) if fewer are
    /// held. An entry dropping to 0 is removed in the same call.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(entry) = self.entry_mut(item_id) else {
            return false;
        };
        if entry.quantity < quantity {
            return false;
        }

        entry.quantity -= quantity;
        if entry.quantity == 0 {
            self.items.retain(|entry| entry.item.id != item_id);
        }
        true
    }

    pub fn has_item(&self, item_id: &str, quantity: u32) -> bool {
        self.entry(item_id)
            .is_some_and(|entry| entry.quantity >= quantity)
    }

    pub fn item_quantity(&self, item_id: &str) -> u32 {
        self.entry(item_id).map_or(0, |entry| entry.quantity)
    }
}

/// Uses one unit of a consumable on the player. Healing is clamped to the
/// relevant max; the unit is removed only on success.
pub fn use_consumable(inventory: &mut Inventory, player: &mut Player, item_id: &str) -> bool {
    let Some(item) = get_item(item_id) else {
        return false;
    };
    if item.kind != ItemKind::Consumable {
        return false;
    }
    let Some(effect) = item.effect else {
        return false;
    };
    if !inventory.has_item(item_id, 1) {
        return false;
    }

    match effect.kind {
        EffectKind::HealHp => {
            player.heal_hp(effect.value);
        }
        EffectKind::HealMp => {
            player.heal_mp(effect.value);
        }
    }

    inventory.remove_item(item_id, 1)
}

fn slot_for(kind: ItemKind) -> Option<EquipSlot> {
    match kind {
        ItemKind::Weapon => Some(EquipSlot::Weapon),
        ItemKind::Armor => Some(EquipSlot::Armor),
        ItemKind::Shield => Some(EquipSlot::Shield),
        ItemKind::Consumable => None,
    }
}

/// Equips an item from the inventory, swapping out whatever occupies its
/// slot. The swap is atomic: if the displaced item cannot be returned to
/// the inventory, the whole operation is rejected and nothing changes.
pub fn equip_item(inventory: &mut Inventory, player: &mut Player, item_id: &str) -> bool {
    let Some(item) = get_item(item_id) else {
        return false;
    };
    let Some(slot) = slot_for(item.kind) else {
        return false;
    };
    if !inventory.has_item(item_id, 1) {
        return false;
    }

    // Remove the incoming item first: if it was the last of its stack this
    // frees the slot the displaced item may need.
    inventory.remove_item(item_id, 1);

    if let Some(displaced) = player.equipment.take(slot) {
        if !inventory.add_item(&displaced.id, 1) {
            // Roll back. Re-adding the incoming item cannot fail: either
            // its stack still exists or its slot was freed just above.
            player.equipment.set(slot, Some(displaced));
            inventory.add_item(item_id, 1);
            return false;
        }
    }

    player.equipment.set(slot, Some(item));
    true
}

/// Unequips a slot back into the inventory. Fails (slot unchanged) when
/// the slot is empty or the inventory cannot take the item.
pub fn unequip_item(inventory: &mut Inventory, player: &mut Player, slot: EquipSlot) -> bool {
    let Some(equipped) = player.equipment.get(slot) else {
        return false;
    };

    if !inventory.add_item(&equipped.id.clone(), 1) {
        return false;
    }

    player.equipment.set(slot, None);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::player::BaseStats;

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
    fn test_add_and_stack() {
        let mut inventory = Inventory::new(20);

        assert!(inventory.add_item("healing_potion", 2));
        assert!(inventory.add_item("healing_potion", 3));

        assert_eq!(inventory.items.len(), 1);
        assert_eq!(inventory.item_quantity("healing_potion"), 5);
    }

    #[test]
    fn test_add_unknown_item_fails() {
        let mut inventory = Inventory::new(20);
        assert!(!inventory.add_item("philosopher_stone", 1));
        assert!(inventory.items.is_empty());
    }

    #[test]
    fn test_capacity_limits_distinct_entries_only() {
        let mut inventory = Inventory::new(1);

        assert!(inventory.add_item("healing_potion", 1));
        assert!(!inventory.add_item("mana_potion", 1));
        // Stacking bypasses the capacity check.
        assert!(inventory.add_item("healing_potion", 99));
        assert_eq!(inventory.item_quantity("healing_potion"), 100);
    }

    #[test]
    fn test_remove_item() {
        let mut inventory = Inventory::new(20);
        inventory.add_item("healing_potion", 3);

        assert!(!inventory.remove_item("healing_potion", 4));
        assert_eq!(inventory.item_quantity("healing_potion"), 3);

        assert!(inventory.remove_item("healing_potion", 3));
        assert_eq!(inventory.item_quantity("healing_potion"), 0);
        assert!(inventory.items.is_empty());

        assert!(!inventory.remove_item("healing_potion", 1));
    }

    #[test]
    fn test_use_consumable_heals_clamped() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        inventory.add_item("healing_potion", 1);
        player.current_hp = 30;

        assert!(use_consumable(&mut inventory, &mut player, "healing_potion"));
        // Only 10 HP missing; the 30-point potion must not overheal.
        assert_eq!(player.current_hp, 40);
        assert_eq!(inventory.item_quantity("healing_potion"), 0);
    }

    #[test]
    fn test_use_consumable_missing_item_no_mutation() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        player.current_hp = 10;

        assert!(!use_consumable(&mut inventory, &mut player, "healing_potion"));
        assert_eq!(player.current_hp, 10);
    }

    #[test]
    fn test_use_consumable_rejects_equipment() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        inventory.add_item("iron_sword", 1);

        assert!(!use_consumable(&mut inventory, &mut player, "iron_sword"));
        assert_eq!(inventory.item_quantity("iron_sword"), 1);
    }

    #[test]
    fn test_equip_and_swap_returns_old_item() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        inventory.add_item("wooden_sword", 1);
        inventory.add_item("iron_sword", 1);

        assert!(equip_item(&mut inventory, &mut player, "wooden_sword"));
        assert_eq!(player.equipment.weapon.as_ref().unwrap().id, "wooden_sword");
        assert_eq!(inventory.item_quantity("wooden_sword"), 0);

        assert!(equip_item(&mut inventory, &mut player, "iron_sword"));
        assert_eq!(player.equipment.weapon.as_ref().unwrap().id, "iron_sword");
        assert_eq!(inventory.item_quantity("wooden_sword"), 1);
    }

    #[test]
    fn test_equip_rejects_consumable_and_missing() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        inventory.add_item("healing_potion", 1);

        assert!(!equip_item(&mut inventory, &mut player, "healing_potion"));
        assert!(!equip_item(&mut inventory, &mut player, "iron_sword"));
        assert!(player.equipment.weapon.is_none());
    }

    #[test]
    fn test_equip_swap_rejected_when_old_item_cannot_return() {
        let mut player = test_player();
        player.equipment.weapon = get_item("wooden_sword");

        // Full inventory: incoming sword stacked 2 deep (removing one does
        // not free a slot) and no stack for the displaced wooden sword.
        let mut inventory = Inventory::new(1);
        inventory.add_item("iron_sword", 2);

        assert!(!equip_item(&mut inventory, &mut player, "iron_sword"));
        // Nothing changed: swap rejected, old item never lost.
        assert_eq!(player.equipment.weapon.as_ref().unwrap().id, "wooden_sword");
        assert_eq!(inventory.item_quantity("iron_sword"), 2);
        assert_eq!(inventory.items.len(), 1);
    }

    #[test]
    fn test_equip_swap_succeeds_when_removal_frees_slot() {
        let mut player = test_player();
        player.equipment.weapon = get_item("wooden_sword");

        // Full inventory, but the incoming sword is the only unit of its
        // stack, so removing it frees the slot for the displaced one.
        let mut inventory = Inventory::new(1);
        inventory.add_item("iron_sword", 1);

        assert!(equip_item(&mut inventory, &mut player, "iron_sword"));
        assert_eq!(player.equipment.weapon.as_ref().unwrap().id, "iron_sword");
        assert_eq!(inventory.item_quantity("wooden_sword"), 1);
    }

    #[test]
    fn test_unequip_returns_item() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        player.equipment.armor = get_item("leather_armor");

        assert!(unequip_item(&mut inventory, &mut player, EquipSlot::Armor));
        assert!(player.equipment.armor.is_none());
        assert_eq!(inventory.item_quantity("leather_armor"), 1);
    }

    #[test]
    fn test_unequip_fails_when_inventory_full() {
        let mut inventory = Inventory::new(1);
        inventory.add_item("healing_potion", 1);
        let mut player = test_player();
        player.equipment.armor = get_item("leather_armor");

        assert!(!unequip_item(&mut inventory, &mut player, EquipSlot::Armor));
        // Slot left unchanged on failure.
        assert_eq!(player.equipment.armor.as_ref().unwrap().id, "leather_armor");
    }

    #[test]
    fn test_unequip_empty_slot_fails() {
        let mut inventory = Inventory::new(20);
        let mut player = test_player();
        assert!(!unequip_item(&mut inventory, &mut player, EquipSlot::Shield));
    }
}
