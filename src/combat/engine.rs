//! The turn-based battle engine.
//!
//! One `CombatEngine` drives a single battle. It owns the enemy party and
//! the per-battle flags; the player is borrowed per call. The caller
//! sequences turns (player action, then one call per living enemy) and
//! renders purely from the returned [`CombatEvent`]s.

use rand::Rng;

use crate::catalog::monsters::{AiType, Monster};
use crate::character::player::Player;
use crate::combat::math;
use crate::combat::types::{
    CombatAction, CombatError, CombatEvent, CombatResult, PlayerAction, PLAYER_ID,
};
use crate::core::constants::*;

enum EnemyAction {
    Attack,
    FireBreath,
    BossHeal,
}

pub struct CombatEngine {
    enemies: Vec<Monster>,
    /// Set by defend, consumed by the next incoming attack.
    is_defending: bool,
    ended: bool,
    result: Option<CombatResult>,
}

impl CombatEngine {
    pub fn new(enemies: Vec<Monster>) -> Self {
        Self {
            enemies,
            is_defending: false,
            ended: false,
            result: None,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn result(&self) -> Option<CombatResult> {
        self.result
    }

    pub fn enemies(&self) -> &[Monster] {
        &self.enemies
    }

    /// Living enemies in original order.
    pub fn alive_enemies(&self) -> Vec<&Monster> {
        self.enemies.iter().filter(|e| e.is_alive()).collect()
    }

    /// Indices of living enemies, for driving enemy-turn iteration.
    pub fn alive_enemy_indices(&self) -> Vec<usize> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Hands the party back at battle end, for loot and rewards.
    pub fn into_enemies(self) -> Vec<Monster> {
        self.enemies
    }

    /// Executes one player action against `target_index` (ignored by
    /// untargeted actions). A miss or an insufficient-MP spell is a normal
    /// event with `hit = false`; errors are caller contract violations.
    pub fn execute_player_action(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        target_index: usize,
        rng: &mut impl Rng,
    ) -> Result<CombatEvent, CombatError> {
        if self.ended {
            return Err(CombatError::CombatOver);
        }

        match action {
            PlayerAction::AttackNormal => {
                self.check_target(target_index)?;
                Ok(self.player_attack(
                    player,
                    target_index,
                    CombatAction::AttackNormal,
                    PLAYER_NORMAL_ATTACK_ACCURACY,
                    1.0,
                    rng,
                ))
            }
            PlayerAction::AttackHeavy => {
                self.check_target(target_index)?;
                Ok(self.player_attack(
                    player,
                    target_index,
                    CombatAction::AttackHeavy,
                    PLAYER_HEAVY_ATTACK_ACCURACY,
                    HEAVY_ATTACK_MODIFIER,
                    rng,
                ))
            }
            PlayerAction::Defend => Ok(self.defend(player)),
            PlayerAction::ItemHeal => Ok(self.use_healing_item(player)),
            PlayerAction::SpellFire => {
                self.check_target(target_index)?;
                Ok(self.cast_fire(player, target_index))
            }
            PlayerAction::SpellHeal => Ok(self.cast_heal(player)),
        }
    }

    /// Selects and resolves one enemy's turn by AI type.
    pub fn execute_enemy_turn(
        &mut self,
        player: &mut Player,
        enemy_index: usize,
        rng: &mut impl Rng,
    ) -> Result<CombatEvent, CombatError> {
        if self.ended {
            return Err(CombatError::CombatOver);
        }
        self.check_target(enemy_index)?;

        match self.select_enemy_action(enemy_index, rng) {
            EnemyAction::Attack => Ok(self.enemy_attack(player, enemy_index, rng)),
            EnemyAction::FireBreath => Ok(self.enemy_fire_breath(player, enemy_index)),
            EnemyAction::BossHeal => Ok(self.boss_heal(enemy_index)),
        }
    }

    fn check_target(&self, index: usize) -> Result<(), CombatError> {
        match self.enemies.get(index) {
            Some(enemy) if enemy.is_alive() => Ok(()),
            _ => Err(CombatError::InvalidTarget(index)),
        }
    }

    // ------------------------------------------------------------------
    // Player actions
    // ------------------------------------------------------------------

    fn player_attack(
        &mut self,
        player: &Player,
        target_index: usize,
        action: CombatAction,
        accuracy: f64,
        modifier: f64,
        rng: &mut impl Rng,
    ) -> CombatEvent {
        let target_id = self.enemies[target_index].id.clone();

        if !math::roll_hit(accuracy, rng) {
            let message = match action {
                CombatAction::AttackHeavy => {
                    format!("{} swings wildly... but misses!", player.name)
                }
                _ => format!("{} attacks... but misses!", player.name),
            };
            let resulting_hp = self.enemies[target_index].current_hp;
            return self.finish(
                CombatEvent {
                    actor: PLAYER_ID.to_string(),
                    action,
                    target: target_id,
                    hit: false,
                    damage: 0,
                    healing: 0,
                    mp_cost: 0,
                    resulting_hp,
                    message,
                    combat_ended: false,
                    combat_result: None,
                },
                false,
            );
        }

        let damage = math::physical_damage(player.total_atk(), self.enemies[target_index].def, modifier);
        let target = &mut self.enemies[target_index];
        target.take_damage(damage);
        let resulting_hp = target.current_hp;
        let defeated = !target.is_alive();
        let message = match action {
            CombatAction::AttackHeavy => {
                format!("{} lands a heavy blow! {damage} damage!", player.name)
            }
            _ => format!(
                "{} attacks {}! {damage} damage.",
                player.name, target.name
            ),
        };

        self.finish(
            CombatEvent {
                actor: PLAYER_ID.to_string(),
                action,
                target: target_id,
                hit: true,
                damage,
                healing: 0,
                mp_cost: 0,
                resulting_hp,
                message,
                combat_ended: false,
                combat_result: None,
            },
            defeated,
        )
    }

    /// Halves the next plain attack against the player (fire breath is
    /// only dampened, see `enemy_fire_breath`).
    fn defend(&mut self, player: &Player) -> CombatEvent {
        self.is_defending = true;

        self.finish(
            CombatEvent {
                actor: PLAYER_ID.to_string(),
                action: CombatAction::Defend,
                target: PLAYER_ID.to_string(),
                hit: true,
                damage: 0,
                healing: 0,
                mp_cost: 0,
                resulting_hp: player.current_hp,
                message: format!("{} braces for impact!", player.name),
                combat_ended: false,
                combat_result: None,
            },
            false,
        )
    }

    fn use_healing_item(&mut self, player: &mut Player) -> CombatEvent {
        let healed = player.heal_hp(COMBAT_POTION_HEAL);

        self.finish(
            CombatEvent {
                actor: PLAYER_ID.to_string(),
                action: CombatAction::ItemHeal,
                target: PLAYER_ID.to_string(),
                hit: true,
                damage: 0,
                healing: healed,
                mp_cost: 0,
                resulting_hp: player.current_hp,
                message: format!("{} drinks a healing potion! +{healed} HP.", player.name),
                combat_ended: false,
                combat_result: None,
            },
            false,
        )
    }

    fn cast_fire(&mut self, player: &mut Player, target_index: usize) -> CombatEvent {
        let target_id = self.enemies[target_index].id.clone();

        if !player.spend_mp(SPELL_FIRE_MP_COST) {
            let resulting_hp = self.enemies[target_index].current_hp;
            return self.finish(
                CombatEvent {
                    actor: PLAYER_ID.to_string(),
                    action: CombatAction::SpellFire,
                    target: target_id,
                    hit: false,
                    damage: 0,
                    healing: 0,
                    mp_cost: 0,
                    resulting_hp,
                    message: "Not enough MP!".to_string(),
                    combat_ended: false,
                    combat_result: None,
                },
                false,
            );
        }

        let damage = math::spell_fire_damage(player.level, self.enemies[target_index].def);
        let target = &mut self.enemies[target_index];
        target.take_damage(damage);
        let resulting_hp = target.current_hp;
        let defeated = !target.is_alive();

        self.finish(
            CombatEvent {
                actor: PLAYER_ID.to_string(),
                action: CombatAction::SpellFire,
                target: target_id,
                hit: true,
                damage,
                healing: 0,
                mp_cost: SPELL_FIRE_MP_COST,
                resulting_hp,
                message: format!("{} casts Fire! {damage} magic damage.", player.name),
                combat_ended: false,
                combat_result: None,
            },
            defeated,
        )
    }

    fn cast_heal(&mut self, player: &mut Player) -> CombatEvent {
        if !player.spend_mp(SPELL_HEAL_MP_COST) {
            return self.finish(
                CombatEvent {
                    actor: PLAYER_ID.to_string(),
                    action: CombatAction::SpellHeal,
                    target: PLAYER_ID.to_string(),
                    hit: false,
                    damage: 0,
                    healing: 0,
                    mp_cost: 0,
                    resulting_hp: player.current_hp,
                    message: "Not enough MP!".to_string(),
                    combat_ended: false,
                    combat_result: None,
                },
                false,
            );
        }

        let healed = player.heal_hp(math::spell_heal_amount(player.level));

        self.finish(
            CombatEvent {
                actor: PLAYER_ID.to_string(),
                action: CombatAction::SpellHeal,
                target: PLAYER_ID.to_string(),
                hit: true,
                damage: 0,
                healing: healed,
                mp_cost: SPELL_HEAL_MP_COST,
                resulting_hp: player.current_hp,
                message: format!("{} casts Heal! +{healed} HP.", player.name),
                combat_ended: false,
                combat_result: None,
            },
            false,
        )
    }

    // ------------------------------------------------------------------
    // Enemy actions
    // ------------------------------------------------------------------

    fn select_enemy_action(&self, enemy_index: usize, rng: &mut impl Rng) -> EnemyAction {
        let enemy = &self.enemies[enemy_index];

        match enemy.ai_type {
            AiType::Boss => {
                // One guaranteed self-heal per battle at low HP.
                if enemy.hp_fraction() < BOSS_HEAL_HP_THRESHOLD && !enemy.has_healed {
                    return EnemyAction::BossHeal;
                }

                let fire_chance = if enemy.hp_fraction() < BOSS_PHASE_TWO_HP_THRESHOLD {
                    BOSS_PHASE_TWO_FIRE_CHANCE
                } else {
                    BOSS_PHASE_ONE_FIRE_CHANCE
                };
                if rng.gen::<f64>() < fire_chance {
                    EnemyAction::FireBreath
                } else {
                    EnemyAction::Attack
                }
            }
            AiType::Basic | AiType::Aggressive => EnemyAction::Attack,
        }
    }

    fn enemy_attack(
        &mut self,
        player: &mut Player,
        enemy_index: usize,
        rng: &mut impl Rng,
    ) -> CombatEvent {
        let (enemy_id, enemy_name, enemy_atk) = {
            let enemy = &self.enemies[enemy_index];
            (enemy.id.clone(), enemy.name.clone(), enemy.atk)
        };

        if !math::roll_hit(ENEMY_ATTACK_ACCURACY, rng) {
            return self.finish(
                CombatEvent {
                    actor: enemy_id,
                    action: CombatAction::AttackNormal,
                    target: PLAYER_ID.to_string(),
                    hit: false,
                    damage: 0,
                    healing: 0,
                    mp_cost: 0,
                    resulting_hp: player.current_hp,
                    message: format!("{enemy_name} attacks... but misses!"),
                    combat_ended: false,
                    combat_result: None,
                },
                false,
            );
        }

        let mut damage = math::physical_damage(enemy_atk, player.total_def(), 1.0);
        if self.is_defending {
            damage = (damage as f64 * DEFEND_DAMAGE_MULTIPLIER).floor() as u32;
            self.is_defending = false;
        }

        player.take_damage(damage);
        let defeated = !player.is_alive();

        self.finish(
            CombatEvent {
                actor: enemy_id,
                action: CombatAction::AttackNormal,
                target: PLAYER_ID.to_string(),
                hit: true,
                damage,
                healing: 0,
                mp_cost: 0,
                resulting_hp: player.current_hp,
                message: format!("{enemy_name} attacks! {damage} damage."),
                combat_ended: false,
                combat_result: None,
            },
            defeated,
        )
    }

    fn enemy_fire_breath(&mut self, player: &mut Player, enemy_index: usize) -> CombatEvent {
        let (enemy_id, enemy_name, enemy_atk) = {
            let enemy = &self.enemies[enemy_index];
            (enemy.id.clone(), enemy.name.clone(), enemy.atk)
        };

        // Always hits; defend mitigates less than against plain attacks.
        let mut damage = math::fire_breath_damage(enemy_atk, player.total_def());
        if self.is_defending {
            damage = (damage as f64 * DEFEND_FIRE_BREATH_MULTIPLIER).floor() as u32;
            self.is_defending = false;
        }

        player.take_damage(damage);
        let defeated = !player.is_alive();

        self.finish(
            CombatEvent {
                actor: enemy_id,
                action: CombatAction::FireBreath,
                target: PLAYER_ID.to_string(),
                hit: true,
                damage,
                healing: 0,
                mp_cost: 0,
                resulting_hp: player.current_hp,
                message: format!("{enemy_name} breathes fire! {damage} burning damage!"),
                combat_ended: false,
                combat_result: None,
            },
            defeated,
        )
    }

    fn boss_heal(&mut self, enemy_index: usize) -> CombatEvent {
        let enemy = &mut self.enemies[enemy_index];
        let healed = enemy.heal((enemy.max_hp as f64 * BOSS_HEAL_FRACTION).floor() as u32);
        enemy.has_healed = true;

        let event = CombatEvent {
            actor: enemy.id.clone(),
            action: CombatAction::BossHeal,
            target: enemy.id.clone(),
            hit: true,
            damage: 0,
            healing: healed,
            mp_cost: 0,
            resulting_hp: enemy.current_hp,
            message: format!("{} mends its wounds! +{healed} HP.", enemy.name),
            combat_ended: false,
            combat_result: None,
        };
        self.finish(event, false)
    }

    // ------------------------------------------------------------------

    /// Applies the termination rule and stamps the outcome onto the event
    /// that caused it: player at 0 HP ends in defeat immediately; an enemy
    /// death ends in victory only once no enemy is left standing.
    fn finish(&mut self, mut event: CombatEvent, target_defeated: bool) -> CombatEvent {
        if target_defeated {
            if event.target == PLAYER_ID {
                self.ended = true;
                self.result = Some(CombatResult::Defeat);
            } else if self.alive_enemies().is_empty() {
                self.ended = true;
                self.result = Some(CombatResult::Victory);
            }
        }

        event.combat_ended = self.ended;
        event.combat_result = self.result;
        event
    }
}
