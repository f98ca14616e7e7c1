//! Damage and accuracy formulas.
//!
//! Pure functions over plain stat values; anything that rolls takes the
//! RNG as a parameter so tests can drive it deterministically.

use rand::Rng;

use crate::core::constants::*;

/// Physical damage: max(1, floor(atk * modifier) - def).
pub fn physical_damage(atk: u32, def: u32, modifier: f64) -> u32 {
    let raw = (atk as f64 * modifier).floor() as i64 - def as i64;
    raw.max(1) as u32
}

/// Fire spell damage scales with level and ignores most defense.
pub fn spell_fire_damage(level: u32, target_def: u32) -> u32 {
    let base = (SPELL_FIRE_BASE_DAMAGE + level * SPELL_FIRE_DAMAGE_PER_LEVEL) as i64;
    let mitigated = (target_def as f64 * SPELL_FIRE_DEF_FACTOR).floor() as i64;
    (base - mitigated).max(1) as u32
}

/// Heal spell amount before clamping to max HP.
pub fn spell_heal_amount(level: u32) -> u32 {
    SPELL_HEAL_BASE_AMOUNT + level * SPELL_HEAL_PER_LEVEL
}

/// Fire breath: max(1, floor(atk * 1.3 - def * 0.5)). Always hits.
pub fn fire_breath_damage(atk: u32, target_def: u32) -> u32 {
    let raw = (atk as f64 * FIRE_BREATH_ATK_MULTIPLIER
        - target_def as f64 * FIRE_BREATH_DEF_FACTOR)
        .floor() as i64;
    raw.max(1) as u32
}

/// Rolls an accuracy check.
pub fn roll_hit(accuracy: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < accuracy
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_physical_damage() {
        assert_eq!(physical_damage(11, 2, 1.0), 9);
        assert_eq!(physical_damage(10, 3, 1.5), 12);
    }

    #[test]
    fn test_physical_damage_floors_at_one() {
        assert_eq!(physical_damage(1, 100, 1.0), 1);
        assert_eq!(physical_damage(0, 0, 1.5), 1);
    }

    #[test]
    fn test_spell_fire_damage() {
        // 15 + 3*2 - floor(10*0.3) = 21 - 3
        assert_eq!(spell_fire_damage(3, 10), 18);
        assert_eq!(spell_fire_damage(1, 1000), 1);
    }

    #[test]
    fn test_spell_heal_amount() {
        assert_eq!(spell_heal_amount(1), 23);
        assert_eq!(spell_heal_amount(5), 35);
    }

    #[test]
    fn test_fire_breath_damage() {
        // floor(22*1.3 - 10*0.5) = floor(28.6 - 5) = 23
        assert_eq!(fire_breath_damage(22, 10), 23);
        assert_eq!(fire_breath_damage(1, 100), 1);
    }

    #[test]
    fn test_roll_hit_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(roll_hit(1.0, &mut rng));
            assert!(!roll_hit(0.0, &mut rng));
        }
    }
}
