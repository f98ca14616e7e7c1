//! Combat actions, events, and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Actor/target id used for the player in combat events. Enemies use
/// their template id (instances are disambiguated by turn order).
pub const PLAYER_ID: &str = "player";

/// Everything the player can do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    AttackNormal,
    AttackHeavy,
    Defend,
    ItemHeal,
    SpellFire,
    SpellHeal,
}

/// Action id reported in a combat event: player actions plus the
/// enemy-only ones. Enemy plain attacks report as `AttackNormal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatAction {
    AttackNormal,
    AttackHeavy,
    Defend,
    ItemHeal,
    SpellFire,
    SpellHeal,
    FireBreath,
    BossHeal,
}

impl From<PlayerAction> for CombatAction {
    fn from(action: PlayerAction) -> Self {
        match action {
            PlayerAction::AttackNormal => CombatAction::AttackNormal,
            PlayerAction::AttackHeavy => CombatAction::AttackHeavy,
            PlayerAction::Defend => CombatAction::Defend,
            PlayerAction::ItemHeal => CombatAction::ItemHeal,
            PlayerAction::SpellFire => CombatAction::SpellFire,
            PlayerAction::SpellHeal => CombatAction::SpellHeal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatResult {
    Victory,
    Defeat,
}

/// The sole output of every combat operation: one resolved action,
/// described fully enough for a scene to render the turn without reading
/// any engine internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    pub actor: String,
    pub action: CombatAction,
    pub target: String,
    pub hit: bool,
    pub damage: u32,
    pub healing: u32,
    pub mp_cost: u32,
    /// The target's HP after the action resolved.
    pub resulting_hp: u32,
    pub message: String,
    pub combat_ended: bool,
    pub combat_result: Option<CombatResult>,
}

/// Caller contract violations. Player-reachable conditions (misses,
/// insufficient MP) are normal events, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("combat has already ended")]
    CombatOver,
    #[error("no living enemy at index {0}")]
    InvalidTarget(usize),
}
