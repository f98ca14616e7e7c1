// Combat accuracy
pub const PLAYER_NORMAL_ATTACK_ACCURACY: f64 = 0.95;
pub const PLAYER_HEAVY_ATTACK_ACCURACY: f64 = 0.70;
pub const ENEMY_ATTACK_ACCURACY: f64 = 0.90;

// Attack modifiers
pub const HEAVY_ATTACK_MODIFIER: f64 = 1.5;

// Spell costs and scaling
pub const SPELL_FIRE_MP_COST: u32 = 5;
pub const SPELL_HEAL_MP_COST: u32 = 4;
pub const SPELL_FIRE_BASE_DAMAGE: u32 = 15;
pub const SPELL_FIRE_DAMAGE_PER_LEVEL: u32 = 2;
pub const SPELL_FIRE_DEF_FACTOR: f64 = 0.3;
pub const SPELL_HEAL_BASE_AMOUNT: u32 = 20;
pub const SPELL_HEAL_PER_LEVEL: u32 = 3;

// In-combat potion (fixed effect, not inventory-checked at this layer)
pub const COMBAT_POTION_HEAL: u32 = 30;

// Defend mitigation
pub const DEFEND_DAMAGE_MULTIPLIER: f64 = 0.5;
pub const DEFEND_FIRE_BREATH_MULTIPLIER: f64 = 0.6;

// Boss AI thresholds and rolls
pub const BOSS_HEAL_HP_THRESHOLD: f64 = 0.3;
pub const BOSS_PHASE_TWO_HP_THRESHOLD: f64 = 0.5;
pub const BOSS_PHASE_TWO_FIRE_CHANCE: f64 = 0.7;
pub const BOSS_PHASE_ONE_FIRE_CHANCE: f64 = 0.4;
pub const BOSS_HEAL_FRACTION: f64 = 0.25;
pub const FIRE_BREATH_ATK_MULTIPLIER: f64 = 1.3;
pub const FIRE_BREATH_DEF_FACTOR: f64 = 0.5;

// New game defaults
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_MAP: &str = "village";
pub const STARTING_POSITION: (i32, i32) = (8, 8);
pub const INVENTORY_MAX_SLOTS: usize = 20;

// Save system
pub const SAVE_VERSION: u32 = 1;
pub const SAVE_FILE_NAME: &str = "save.json";
