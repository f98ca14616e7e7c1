//! Level curve and XP handling.

use crate::character::player::{BaseStats, Player};

/// One row of the level curve. `xp_required` is the cumulative threshold
/// to reach this level; level 1 requires 0.
#[derive(Debug, Clone, Copy)]
pub struct LevelRow {
    pub level: u32,
    pub xp_required: u64,
    pub max_hp: u32,
    pub max_mp: u32,
    pub atk: u32,
    pub def: u32,
}

const fn row(level: u32, xp_required: u64, max_hp: u32, max_mp: u32, atk: u32, def: u32) -> LevelRow {
    LevelRow {
        level,
        xp_required,
        max_hp,
        max_mp,
        atk,
        def,
    }
}

/// The full curve. The last row is the level cap.
pub const LEVEL_TABLE: &[LevelRow] = &[
    row(1, 0, 40, 15, 8, 4),
    row(2, 20, 48, 18, 10, 5),
    row(3, 50, 56, 21, 12, 6),
    row(4, 100, 64, 24, 14, 7),
    row(5, 170, 72, 27, 16, 8),
    row(6, 260, 80, 30, 18, 9),
    row(7, 380, 88, 33, 20, 10),
    row(8, 530, 96, 36, 22, 11),
    row(9, 720, 104, 39, 24, 12),
    row(10, 950, 112, 42, 26, 13),
];

/// Row for a given level (1-indexed), None past the cap.
pub fn level_row(level: u32) -> Option<&'static LevelRow> {
    LEVEL_TABLE.get(level.checked_sub(1)? as usize)
}

pub fn level_cap() -> u32 {
    LEVEL_TABLE[LEVEL_TABLE.len() - 1].level
}

impl LevelRow {
    pub fn base_stats(&self) -> BaseStats {
        BaseStats {
            max_hp: self.max_hp,
            max_mp: self.max_mp,
            atk: self.atk,
            def: self.def,
        }
    }
}

/// Per-stat increases gained from one or more level-ups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatGains {
    pub max_hp: u32,
    pub max_mp: u32,
    pub atk: u32,
    pub def: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpResult {
    pub leveled_up: bool,
    pub new_level: u32,
    pub stat_gains: StatGains,
}

/// Adds XP and applies every level-up the new total crosses. A single
/// large grant can advance multiple levels; `stat_gains` is the summed
/// increase and `new_level` the final level. On level-up the base stats
/// are overwritten from the table and HP/MP are fully restored.
pub fn add_xp(player: &mut Player, amount: u64) -> LevelUpResult {
    player.xp += amount;

    let mut gains = StatGains::default();
    let mut leveled_up = false;

    loop {
        let Some(next) = level_row(player.level + 1) else {
            // At cap: xp still accumulates, xp_to_next is left alone.
            break;
        };

        if player.xp < next.xp_required {
            player.xp_to_next = next.xp_required;
            break;
        }

        let old = level_row(player.level).expect("player level outside table");
        player.level += 1;
        gains.max_hp += next.max_hp - old.max_hp;
        gains.max_mp += next.max_mp - old.max_mp;
        gains.atk += next.atk - old.atk;
        gains.def += next.def - old.def;

        player.base_stats = next.base_stats();
        player.restore_full();
        leveled_up = true;

        player.xp_to_next = match level_row(player.level + 1) {
            Some(following) => following.xp_required,
            None => player.xp,
        };
    }

    LevelUpResult {
        leveled_up,
        new_level: player.level,
        stat_gains: gains,
    }
}

/// XP still needed to reach the next level, 0 at the cap.
pub fn xp_to_next_level(player: &Player) -> u64 {
    match level_row(player.level + 1) {
        Some(next) => next.xp_required.saturating_sub(player.xp),
        None => 0,
    }
}
