//! Property-based invariants over inventory, stats, damage, and loot.

use dragonfell::catalog::monsters::create_monster;
use dragonfell::character::player::{BaseStats, Player};
use dragonfell::character::progression::add_xp;
use dragonfell::combat::math::{fire_breath_damage, physical_damage, spell_fire_damage};
use dragonfell::inventory::Inventory;
use dragonfell::loot::generate_loot;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CATALOG_IDS: &[&str] = &[
    "wooden_sword",
    "iron_sword",
    "magic_sword",
    "leather_armor",
    "chainmail",
    "dragon_scale_armor",
    "healing_potion",
    "large_healing_potion",
    "mana_potion",
];

#[derive(Debug, Clone)]
enum InventoryOp {
    Add { item: usize, quantity: u32 },
    Remove { item: usize, quantity: u32 },
}

fn arb_op() -> impl Strategy<Value = InventoryOp> {
    prop_oneof![
        (0..CATALOG_IDS.len(), 1u32..5).prop_map(|(item, quantity)| InventoryOp::Add {
            item,
            quantity
        }),
        (0..CATALOG_IDS.len(), 1u32..5).prop_map(|(item, quantity)| InventoryOp::Remove {
            item,
            quantity
        }),
    ]
}

proptest! {
    #[test]
    fn prop_inventory_bounds_hold_under_any_op_sequence(
        ops in prop::collection::vec(arb_op(), 0..60),
        max_slots in 1usize..6,
    ) {
        let mut inventory = Inventory::new(max_slots);

        for op in ops {
            match op {
                InventoryOp::Add { item, quantity } => {
                    inventory.add_item(CATALOG_IDS[item], quantity);
                }
                InventoryOp::Remove { item, quantity } => {
                    inventory.remove_item(CATALOG_IDS[item], quantity);
                }
            }

            prop_assert!(inventory.items.len() <= max_slots);
            for entry in &inventory.items {
                prop_assert!(entry.quantity >= 1);
            }
            // One entry per distinct id.
            for (i, a) in inventory.items.iter().enumerate() {
                for b in &inventory.items[i + 1..] {
                    prop_assert_ne!(&a.item.id, &b.item.id);
                }
            }
        }
    }

    #[test]
    fn prop_damage_formulas_floor_at_one(
        atk in 0u32..1000,
        def in 0u32..1000,
        level in 1u32..10,
    ) {
        prop_assert!(physical_damage(atk, def, 1.0) >= 1);
        prop_assert!(physical_damage(atk, def, 1.5) >= 1);
        prop_assert!(spell_fire_damage(level, def) >= 1);
        prop_assert!(fire_breath_damage(atk, def) >= 1);
    }

    #[test]
    fn prop_hp_mp_stay_clamped(
        damage in 0u32..500,
        heal in 0u32..500,
        mp_spend in 0u32..50,
        mp_heal in 0u32..50,
    ) {
        let mut player = Player::new(
            "Hero".to_string(),
            BaseStats { max_hp: 40, max_mp: 15, atk: 8, def: 4 },
            20,
        );

        player.take_damage(damage);
        prop_assert!(player.current_hp <= 40);
        player.heal_hp(heal);
        prop_assert!(player.current_hp <= 40);
        player.spend_mp(mp_spend);
        player.heal_mp(mp_heal);
        prop_assert!(player.current_mp <= 15);
    }

    #[test]
    fn prop_xp_grants_keep_level_and_stats_monotonic(
        grants in prop::collection::vec(0u64..400, 1..20),
    ) {
        let mut player = Player::new(
            "Hero".to_string(),
            BaseStats { max_hp: 40, max_mp: 15, atk: 8, def: 4 },
            20,
        );

        let mut last_level = player.level;
        let mut last_atk = player.base_stats.atk;
        for grant in grants {
            add_xp(&mut player, grant);
            prop_assert!(player.level >= last_level);
            prop_assert!(player.base_stats.atk >= last_atk);
            prop_assert!(player.current_hp <= player.base_stats.max_hp);
            prop_assert!(player.current_mp <= player.base_stats.max_mp);
            last_level = player.level;
            last_atk = player.base_stats.atk;
        }
    }

    #[test]
    fn prop_loot_quantities_are_positive_and_bounded(seed in 0u64..5000) {
        // Three goblins: at most 3 potions and 3 swords can drop.
        let party = vec![
            create_monster("goblin"),
            create_monster("goblin"),
            create_monster("goblin"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let drops = generate_loot(&party, &mut rng);

        prop_assert!(drops.len() <= 2);
        for drop in &drops {
            prop_assert!(drop.quantity >= 1 && drop.quantity <= 3);
        }
        // Aggregation: no duplicate ids.
        for (i, a) in drops.iter().enumerate() {
            for b in &drops[i + 1..] {
                prop_assert_ne!(&a.item_id, &b.item_id);
            }
        }
    }
}
