use schema::BaseStats;
use serde::{Deserialize, Serialize};

use crate::errors::{GameMasterError, GameMasterResult};

/// Individual values, 0 to 15 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ivs {
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
}

impl Ivs {
    pub const MAX_VALUE: u8 = 15;
    pub const MAX: Ivs = Ivs { attack: 15, defense: 15, stamina: 15 };
    pub const MIN: Ivs = Ivs { attack: 0, defense: 0, stamina: 0 };

    pub fn new(attack: u8, defense: u8, stamina: u8) -> GameMasterResult<Self> {
        for (stat, value) in [("attack", attack), ("defense", defense), ("stamina", stamina)] {
            if value > Self::MAX_VALUE {
                return Err(GameMasterError::InvalidArgument(format!(
                    "{} IV {} is above {}",
                    stat,
                    value,
                    Self::MAX_VALUE
                )));
            }
        }
        Ok(Ivs { attack, defense, stamina })
    }

    /// Every IV triple, attack-major, each component ascending.
    pub fn all() -> impl Iterator<Item = Ivs> {
        (0..=Self::MAX_VALUE).flat_map(|attack| {
            (0..=Self::MAX_VALUE).flat_map(move |defense| {
                (0..=Self::MAX_VALUE).map(move |stamina| Ivs { attack, defense, stamina })
            })
        })
    }
}

impl Default for Ivs {
    fn default() -> Self {
        Ivs::MAX
    }
}

/// Combat power, never below 10.
pub fn combat_power(base: &BaseStats, cpm: f64, ivs: Ivs) -> u32 {
    let attack = (base.attack + ivs.attack as u32) as f64 * cpm;
    let defense = (base.defense + ivs.defense as u32) as f64 * cpm;
    let stamina = (base.stamina + ivs.stamina as u32) as f64 * cpm;
    let cp = (attack * (defense * stamina).sqrt() / 10.0).floor();
    (cp as u32).max(10)
}

/// Stats as the battle engine consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: f64,
    pub defense: f64,
    pub max_hp: u32,
}

pub fn derive_stats(base: &BaseStats, cpm: f64, ivs: Ivs) -> CombatStats {
    CombatStats {
        attack: (base.attack + ivs.attack as u32) as f64 * cpm,
        defense: (base.defense + ivs.defense as u32) as f64 * cpm,
        max_hp: ((base.stamina + ivs.stamina as u32) as f64 * cpm).floor() as u32,
    }
}

/// Index into the half-level multiplier table for `level` (1, 1.5, 2, ...).
///
/// Levels between table entries round to the nearest index, ties to even.
pub fn index_for_level(level: f64) -> Option<usize> {
    let index = (2.0 * level - 2.0).round_ties_even();
    (index.is_finite() && index >= 0.0).then_some(index as usize)
}

pub fn level_for_index(index: usize) -> f64 {
    1.0 + index as f64 / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatInference {
    pub cpm_index: usize,
    pub cpm: f64,
    pub ivs: Ivs,
    pub cp: u32,
}

impl StatInference {
    pub fn level(&self) -> f64 {
        level_for_index(self.cpm_index)
    }

    pub fn is_exact(&self, target_cp: u32) -> bool {
        self.cp == target_cp
    }
}

/// Find a level and IV triple producing `target_cp`.
///
/// Returns the first exact combination in ascending (level, attack, defense,
/// stamina) order, otherwise the combination with the largest CP strictly
/// below the target. `None` when even the weakest combination exceeds it.
pub fn infer_level_and_ivs(
    base: &BaseStats,
    target_cp: u32,
    cp_multipliers: &[f64],
) -> Option<StatInference> {
    // Below `lo` even perfect IVs fall short; above `hi` even zero IVs overshoot.
    let first_reaching = cp_multipliers
        .iter()
        .position(|&cpm| combat_power(base, cpm, Ivs::MAX) >= target_cp)
        .unwrap_or(cp_multipliers.len());
    let lo = first_reaching.saturating_sub(1);
    let hi = cp_multipliers
        .iter()
        .rposition(|&cpm| combat_power(base, cpm, Ivs::MIN) <= target_cp)?;

    let mut best_below: Option<StatInference> = None;
    for (cpm_index, &cpm) in cp_multipliers.iter().enumerate().take(hi + 1).skip(lo) {
        for ivs in Ivs::all() {
            let cp = combat_power(base, cpm, ivs);
            let candidate = StatInference { cpm_index, cpm, ivs, cp };
            if cp == target_cp {
                return Some(candidate);
            }
            if cp < target_cp && best_below.map_or(true, |best| cp > best.cp) {
                best_below = Some(candidate);
            }
        }
    }

    tracing::debug!(
        "No exact combination for CP {} (searched indices {}..={}), best below: {:?}",
        target_cp,
        lo,
        hi,
        best_below.map(|b| b.cp)
    );
    best_below
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_master::expand_half_levels;
    use crate::test_support::CP_MULTIPLIERS;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dragonite() -> BaseStats {
        BaseStats::new(263, 198, 198)
    }

    fn cpm_table() -> Vec<f64> {
        expand_half_levels(&CP_MULTIPLIERS)
    }

    #[rstest]
    #[case(BaseStats::new(198, 189, 190), 0.7903, Ivs::MAX, 2720)]
    #[case(dragonite(), 0.79030001, Ivs::MAX, 3698)]
    #[case(dragonite(), 0.79030001, Ivs::MIN, 3252)]
    fn test_combat_power_reference_values(
        #[case] base: BaseStats,
        #[case] cpm: f64,
        #[case] ivs: Ivs,
        #[case] expected: u32,
    ) {
        assert_eq!(combat_power(&base, cpm, ivs), expected);
    }

    #[test]
    fn test_combat_power_floor_is_ten() {
        assert_eq!(combat_power(&BaseStats::new(1, 1, 1), 0.094, Ivs::MIN), 10);
    }

    #[test]
    fn test_combat_power_is_monotonic() {
        let base = BaseStats::new(119, 91, 121);
        for pair in cpm_table().windows(2) {
            assert!(combat_power(&base, pair[0], Ivs::MAX) <= combat_power(&base, pair[1], Ivs::MAX));
        }
        for iv in 0..Ivs::MAX_VALUE {
            let lower = Ivs::new(iv, 7, 7).unwrap();
            let higher = Ivs::new(iv + 1, 7, 7).unwrap();
            assert!(combat_power(&base, 0.5, lower) <= combat_power(&base, 0.5, higher));
            let lower = Ivs::new(7, 7, iv).unwrap();
            let higher = Ivs::new(7, 7, iv + 1).unwrap();
            assert!(combat_power(&base, 0.5, lower) <= combat_power(&base, 0.5, higher));
        }
        for cpm in cpm_table() {
            assert!(combat_power(&base, cpm, Ivs::MAX) >= combat_power(&base, cpm, Ivs::MIN));
        }
    }

    #[test]
    fn test_derive_stats_floors_hp_only() {
        let stats = derive_stats(&dragonite(), 0.5, Ivs::new(1, 2, 3).unwrap());
        assert_eq!(stats.attack, 132.0);
        assert_eq!(stats.defense, 100.0);
        assert_eq!(stats.max_hp, 100);
    }

    #[test]
    fn test_iv_validation() {
        assert!(Ivs::new(15, 15, 15).is_ok());
        assert!(matches!(Ivs::new(0, 16, 0), Err(GameMasterError::InvalidArgument(_))));
        assert_eq!(Ivs::all().count(), 16 * 16 * 16);
        assert_eq!(Ivs::all().next(), Some(Ivs::MIN));
        assert_eq!(Ivs::all().last(), Some(Ivs::MAX));
    }

    #[rstest]
    #[case(1.0, Some(0))]
    #[case(1.5, Some(1))]
    #[case(40.0, Some(78))]
    #[case(0.5, None)]
    #[case(f64::NAN, None)]
    fn test_index_for_level(#[case] level: f64, #[case] expected: Option<usize>) {
        assert_eq!(index_for_level(level), expected);
        if let Some(index) = expected {
            assert_eq!(level_for_index(index), level);
        }
    }

    #[rstest]
    #[case(1.25, 0)]
    #[case(1.75, 2)]
    #[case(2.25, 2)]
    #[case(20.4, 39)]
    fn test_index_for_level_between_entries(#[case] level: f64, #[case] expected: usize) {
        assert_eq!(index_for_level(level), Some(expected));
    }

    #[test]
    fn test_inference_finds_exact_max_level() {
        let found = infer_level_and_ivs(&dragonite(), 3698, &cpm_table()).unwrap();
        assert_eq!(found.cpm_index, 78);
        assert_eq!(found.level(), 40.0);
        assert_eq!(found.ivs, Ivs::MAX);
        assert!(found.is_exact(3698));
    }

    #[test]
    fn test_inference_returns_first_exact_in_ascending_order() {
        let found = infer_level_and_ivs(&dragonite(), 1500, &cpm_table()).unwrap();
        assert_eq!(found.cpm_index, 28);
        assert_eq!(found.ivs, Ivs::new(2, 12, 15).unwrap());
        assert_eq!(combat_power(&dragonite(), found.cpm, found.ivs), 1500);
    }

    #[test]
    fn test_inference_above_the_maximum_returns_best_below() {
        let found = infer_level_and_ivs(&dragonite(), 4000, &cpm_table()).unwrap();
        assert_eq!(found.cp, 3698);
        assert_eq!(found.cpm_index, 78);
        assert!(!found.is_exact(4000));
    }

    #[test]
    fn test_inference_never_exceeds_target() {
        let table = cpm_table();
        let base = BaseStats::new(119, 91, 121);
        for target in [11, 57, 250, 999, 1337, 1500] {
            let found = infer_level_and_ivs(&base, target, &table).unwrap();
            assert!(found.cp <= target, "target {}", target);
            assert_eq!(combat_power(&base, found.cpm, found.ivs), found.cp);
        }
    }

    #[test]
    fn test_inference_on_the_cp_floor_plateau() {
        let tiny = BaseStats::new(1, 1, 1);
        let table = cpm_table();
        for &cpm in &table[..10] {
            assert_eq!(combat_power(&tiny, cpm, Ivs::MIN), 10);
            assert_eq!(combat_power(&tiny, cpm, Ivs::MAX), 10);
        }

        let found = infer_level_and_ivs(&tiny, 10, &table).unwrap();
        assert_eq!(found.cpm_index, 0);
        assert_eq!(found.ivs, Ivs::MIN);
        assert!(found.is_exact(10));
    }

    #[test]
    fn test_inference_below_minimum_is_absent() {
        // Dratini's weakest combination is CP 11.
        let base = BaseStats::new(119, 91, 121);
        assert_eq!(infer_level_and_ivs(&base, 10, &cpm_table()), None);
        assert_eq!(infer_level_and_ivs(&base, 0, &cpm_table()), None);
        assert_eq!(infer_level_and_ivs(&base, 1500, &[]), None);
    }
}
