//! Post-battle rewards: loot rolls and XP/gold totals.

use rand::Rng;

use crate::catalog::monsters::Monster;

/// A rolled drop, aggregated across the defeated party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootDrop {
    pub item_id: String,
    pub quantity: u32,
}

/// Rolls every loot-table entry of every defeated enemy as an independent
/// trial. Drops of the same item id merge into one entry, in order of
/// first appearance.
pub fn generate_loot(defeated_enemies: &[Monster], rng: &mut impl Rng) -> Vec<LootDrop> {
    let mut drops: Vec<LootDrop> = Vec::new();

    for enemy in defeated_enemies {
        for entry in &enemy.loot {
            if rng.gen::<f64>() < entry.chance {
                match drops.iter_mut().find(|drop| drop.item_id == entry.item_id) {
                    Some(existing) => existing.quantity += 1,
                    None => drops.push(LootDrop {
                        item_id: entry.item_id.clone(),
                        quantity: 1,
                    }),
                }
            }
        }
    }

    drops
}

pub fn total_xp(defeated_enemies: &[Monster]) -> u64 {
    defeated_enemies.iter().map(|enemy| enemy.xp_reward).sum()
}

pub fn total_gold(defeated_enemies: &[Monster]) -> u32 {
    defeated_enemies.iter().map(|enemy| enemy.gold_reward).sum()
}
