//! Monster templates, battle instances, and encounter generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiType {
    Basic,
    Aggressive,
    Boss,
}

/// One entry in a monster's loot table: an independent drop roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_id: String,
    pub chance: f64,
}

/// Immutable monster definition from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub xp_reward: u64,
    pub gold_reward: u32,
    pub loot: Vec<LootEntry>,
    pub ai_type: AiType,
}

/// An in-battle monster instance. Multiple instances of the same template
/// id may coexist in one battle; they are told apart by position, not id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub xp_reward: u64,
    pub gold_reward: u32,
    pub loot: Vec<LootEntry>,
    pub ai_type: AiType,
    /// Boss AI: set once the one-per-battle self-heal has been used.
    #[serde(default)]
    pub has_healed: bool,
}

impl Monster {
    /// Instantiates an owned battle copy from a template with full HP.
    pub fn from_template(template: &MonsterTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            max_hp: template.max_hp,
            current_hp: template.max_hp,
            atk: template.atk,
            def: template.def,
            xp_reward: template.xp_reward,
            gold_reward: template.gold_reward,
            loot: template.loot.clone(),
            ai_type: template.ai_type,
            has_healed: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heals up to `amount`, clamped to max HP. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp - self.current_hp);
        self.current_hp += gained;
        gained
    }

    pub fn hp_fraction(&self) -> f64 {
        self.current_hp as f64 / self.max_hp as f64
    }
}

fn template(
    id: &str,
    name: &str,
    max_hp: u32,
    atk: u32,
    def: u32,
    xp_reward: u64,
    gold_reward: u32,
    loot: Vec<LootEntry>,
    ai_type: AiType,
) -> MonsterTemplate {
    MonsterTemplate {
        id: id.to_string(),
        name: name.to_string(),
        max_hp,
        atk,
        def,
        xp_reward,
        gold_reward,
        loot,
        ai_type,
    }
}

fn loot_entry(item_id: &str, chance: f64) -> LootEntry {
    LootEntry {
        item_id: item_id.to_string(),
        chance,
    }
}

/// Looks up a monster template by id.
///
/// # Panics
/// Panics on an unknown id. Templates are only referenced from static
/// content (encounter tables, scripted battles), so a missing one is a
/// content-authoring bug, not a runtime condition.
pub fn get_monster_template(monster_id: &str) -> MonsterTemplate {
    match monster_id {
        "slime" => template(
            "slime",
            "Slime",
            15,
            5,
            2,
            5,
            5,
            vec![loot_entry("healing_potion", 0.3)],
            AiType::Basic,
        ),
        "wolf" => template(
            "wolf",
            "Wolf",
            25,
            9,
            3,
            10,
            10,
            vec![loot_entry("healing_potion", 0.4)],
            AiType::Aggressive,
        ),
        "goblin" => template(
            "goblin",
            "Goblin",
            30,
            11,
            5,
            15,
            15,
            vec![
                loot_entry("healing_potion", 0.5),
                loot_entry("iron_sword", 0.1),
            ],
            AiType::Aggressive,
        ),
        "bat" => template(
            "bat",
            "Bat",
            18,
            8,
            2,
            8,
            8,
            vec![loot_entry("mana_potion", 0.4)],
            AiType::Basic,
        ),
        "stone_golem" => template(
            "stone_golem",
            "Stone Golem",
            50,
            14,
            12,
            25,
            25,
            vec![
                loot_entry("large_healing_potion", 0.6),
                loot_entry("chainmail", 0.15),
            ],
            AiType::Basic,
        ),
        // The dragon's rewards are granted by the final victory sequence,
        // not the standard reward path.
        "red_dragon" => template(
            "red_dragon",
            "Red Dragon",
            200,
            22,
            15,
            0,
            0,
            vec![],
            AiType::Boss,
        ),
        _ => panic!("monster template not found: {monster_id}"),
    }
}

/// Creates a fresh battle instance of a monster by template id.
pub fn create_monster(monster_id: &str) -> Monster {
    Monster::from_template(&get_monster_template(monster_id))
}

/// A weighted spawn entry in an encounter table.
#[derive(Debug, Clone)]
pub struct EncounterEntry {
    pub monster_id: &'static str,
    pub weight: f64,
}

/// Defines which monsters spawn in a region and how many per battle.
#[derive(Debug, Clone)]
pub struct EncounterTable {
    pub entries: &'static [EncounterEntry],
    pub min_count: u32,
    pub max_count: u32,
}

/// Looks up an encounter table by id.
///
/// # Panics
/// Panics on an unknown id; table ids come from static map data.
pub fn get_encounter_table(table_id: &str) -> EncounterTable {
    match table_id {
        "forest_north" => EncounterTable {
            entries: &[
                EncounterEntry {
                    monster_id: "slime",
                    weight: 0.6,
                },
                EncounterEntry {
                    monster_id: "wolf",
                    weight: 0.4,
                },
            ],
            min_count: 1,
            max_count: 2,
        },
        "forest_south" => EncounterTable {
            entries: &[
                EncounterEntry {
                    monster_id: "wolf",
                    weight: 0.5,
                },
                EncounterEntry {
                    monster_id: "goblin",
                    weight: 0.5,
                },
            ],
            min_count: 1,
            max_count: 2,
        },
        "mountain" => EncounterTable {
            entries: &[
                EncounterEntry {
                    monster_id: "bat",
                    weight: 0.4,
                },
                EncounterEntry {
                    monster_id: "stone_golem",
                    weight: 0.6,
                },
            ],
            min_count: 1,
            max_count: 2,
        },
        _ => panic!("encounter table not found: {table_id}"),
    }
}

/// Generates a random encounter: rolls the party size, then picks each
/// monster by weighted selection over the table's entries.
pub fn generate_encounter(table_id: &str, rng: &mut impl Rng) -> Vec<Monster> {
    let table = get_encounter_table(table_id);
    let count = rng.gen_range(table.min_count..=table.max_count);

    let total_weight: f64 = table.entries.iter().map(|e| e.weight).sum();

    let mut monsters = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut roll = rng.gen_range(0.0..total_weight);
        for entry in table.entries {
            roll -= entry.weight;
            if roll <= 0.0 {
                monsters.push(create_monster(entry.monster_id));
                break;
            }
        }
    }

    monsters
}
