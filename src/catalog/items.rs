//! Item definitions: weapons, armor, shields, and consumables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Shield,
    Consumable,
}

impl ItemKind {
    pub fn is_equippable(self) -> bool {
        matches!(self, ItemKind::Weapon | ItemKind::Armor | ItemKind::Shield)
    }
}

/// Stat bonuses granted by an equipped item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipStats {
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub def: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    HealHp,
    HealMp,
}

/// Effect applied when a consumable is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub kind: EffectKind,
    pub value: u32,
}

/// An item as defined in the catalog. Immutable once constructed; inventory
/// and equipment hold owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<EquipStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<ItemEffect>,
}

fn weapon(id: &str, name: &str, description: &str, atk: u32) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Weapon,
        description: description.to_string(),
        stats: Some(EquipStats { atk, def: 0 }),
        effect: None,
    }
}

fn armor(id: &str, name: &str, description: &str, def: u32) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Armor,
        description: description.to_string(),
        stats: Some(EquipStats { atk: 0, def }),
        effect: None,
    }
}

fn consumable(id: &str, name: &str, description: &str, kind: EffectKind, value: u32) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Consumable,
        description: description.to_string(),
        stats: None,
        effect: Some(ItemEffect { kind, value }),
    }
}

/// Looks up an item by id. Unknown ids are not-found, never fatal.
pub fn get_item(item_id: &str) -> Option<Item> {
    let item = match item_id {
        "wooden_sword" => weapon(
            "wooden_sword",
            "Wooden Sword",
            "A simple wooden sword. Better than nothing.",
            3,
        ),
        "iron_sword" => weapon(
            "iron_sword",
            "Iron Sword",
            "A solid iron blade carried by seasoned warriors.",
            7,
        ),
        "magic_sword" => weapon(
            "magic_sword",
            "Magic Sword",
            "A blade enchanted with ancient magic.",
            12,
        ),
        "leather_armor" => armor(
            "leather_armor",
            "Leather Armor",
            "Light armor of hardened leather.",
            3,
        ),
        "chainmail" => armor(
            "chainmail",
            "Chainmail",
            "Armor of interlocking iron rings.",
            7,
        ),
        "dragon_scale_armor" => armor(
            "dragon_scale_armor",
            "Dragon Scale Armor",
            "Armor forged from dragon scales. Incredible protection.",
            12,
        ),
        "healing_potion" => consumable(
            "healing_potion",
            "Healing Potion",
            "Restores 30 HP.",
            EffectKind::HealHp,
            30,
        ),
        "large_healing_potion" => consumable(
            "large_healing_potion",
            "Large Healing Potion",
            "Restores 80 HP.",
            EffectKind::HealHp,
            80,
        ),
        "mana_potion" => consumable(
            "mana_potion",
            "Mana Potion",
            "Restores 20 MP.",
            EffectKind::HealMp,
            20,
        ),
        _ => return None,
    };
    Some(item)
}

/// Items granted to a fresh character.
pub const STARTER_ITEMS: &[(&str, u32)] = &[
    ("wooden_sword", 1),
    ("leather_armor", 1),
    ("healing_potion", 3),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_item_known_ids() {
        let sword = get_item("iron_sword").unwrap();
        assert_eq!(sword.kind, ItemKind::Weapon);
        assert_eq!(sword.stats.unwrap().atk, 7);

        let potion = get_item("healing_potion").unwrap();
        assert_eq!(potion.kind, ItemKind::Consumable);
        assert_eq!(potion.effect.unwrap().value, 30);
    }

    #[test]
    fn test_get_item_unknown_id() {
        assert!(get_item("excalibur").is_none());
    }

    #[test]
    fn test_starter_items_exist_in_catalog() {
        for (id, quantity) in STARTER_ITEMS {
            assert!(get_item(id).is_some(), "starter item {id} missing");
            assert!(*quantity >= 1);
        }
    }

    #[test]
    fn test_equippable_kinds() {
        assert!(ItemKind::Weapon.is_equippable());
        assert!(ItemKind::Armor.is_equippable());
        assert!(ItemKind::Shield.is_equippable());
        assert!(!ItemKind::Consumable.is_equippable());
    }
}
