//! Shop definitions: what each merchant sells and for how much.

/// One line in a shop's stock list.
#[derive(Debug, Clone)]
pub struct ShopEntry {
    pub item_id: &'static str,
    pub price: u32,
    /// None = unlimited stock.
    pub stock: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Shop {
    pub id: &'static str,
    pub name: &'static str,
    pub entries: &'static [ShopEntry],
}

static VILLAGE_SHOP: Shop = Shop {
    id: "village_shop",
    name: "Village Merchant",
    entries: &[
        ShopEntry {
            item_id: "healing_potion",
            price: 30,
            stock: None,
        },
        ShopEntry {
            item_id: "large_healing_potion",
            price: 80,
            stock: None,
        },
        ShopEntry {
            item_id: "mana_potion",
            price: 40,
            stock: None,
        },
    ],
};

static BLACKSMITH_SHOP: Shop = Shop {
    id: "blacksmith_shop",
    name: "Blacksmith's Workshop",
    entries: &[
        ShopEntry {
            item_id: "wooden_sword",
            price: 50,
            stock: None,
        },
        ShopEntry {
            item_id: "iron_sword",
            price: 200,
            stock: None,
        },
        ShopEntry {
            item_id: "magic_sword",
            price: 800,
            stock: Some(1),
        },
        ShopEntry {
            item_id: "leather_armor",
            price: 50,
            stock: None,
        },
        ShopEntry {
            item_id: "chainmail",
            price: 200,
            stock: None,
        },
        ShopEntry {
            item_id: "dragon_scale_armor",
            price: 1000,
            stock: Some(1),
        },
    ],
};

/// Looks up a shop by id. Shop ids come from static NPC data, so an
/// unknown id is a content bug; callers that hit `None` should treat it
/// as fatal.
pub fn get_shop(shop_id: &str) -> Option<&'static Shop> {
    match shop_id {
        "village_shop" => Some(&VILLAGE_SHOP),
        "blacksmith_shop" => Some(&BLACKSMITH_SHOP),
        _ => None,
    }
}
