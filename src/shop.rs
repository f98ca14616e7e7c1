//! Buying and selling items for gold.
//!
//! Outcomes carry the new gold total and a specific message per failure
//! cause, so shop scenes can display exactly why a trade fell through.

use crate::catalog::items::get_item;
use crate::catalog::shops::ShopEntry;
use crate::inventory::Inventory;

/// Result of a buy or sell attempt. `gold` is the caller's new total
/// (unchanged on failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopOutcome {
    pub success: bool,
    pub gold: u32,
    pub message: String,
}

impl ShopOutcome {
    fn failure(gold: u32, message: String) -> Self {
        Self {
            success: false,
            gold,
            message,
        }
    }
}

/// Buys one unit of a shop entry. Fails on unknown item, insufficient
/// gold, or a full inventory with no existing stack to add to.
pub fn buy_item(inventory: &mut Inventory, gold: u32, entry: &ShopEntry) -> ShopOutcome {
    let Some(item) = get_item(entry.item_id) else {
        return ShopOutcome::failure(gold, format!("Item not found: {}", entry.item_id));
    };

    if gold < entry.price {
        return ShopOutcome::failure(gold, format!("Not enough gold! Costs {}g.", entry.price));
    }

    if !inventory.add_item(entry.item_id, 1) {
        return ShopOutcome::failure(gold, "Inventory is full!".to_string());
    }

    ShopOutcome {
        success: true,
        gold: gold - entry.price,
        message: format!("Bought {} for {}g.", item.name, entry.price),
    }
}

/// Sells one unit of a carried item at the given price.
pub fn sell_item(inventory: &mut Inventory, gold: u32, item_id: &str, price: u32) -> ShopOutcome {
    let Some(item) = get_item(item_id) else {
        return ShopOutcome::failure(gold, "Item not found!".to_string());
    };

    if !inventory.remove_item(item_id, 1) {
        return ShopOutcome::failure(gold, "You don't have that item!".to_string());
    }

    ShopOutcome {
        success: true,
        gold: gold + price,
        message: format!("Sold {} for {}g.", item.name, price),
    }
}
