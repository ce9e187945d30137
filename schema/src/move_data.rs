use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Fast,
    Charged,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            MoveCategory::Fast => "fast",
            MoveCategory::Charged => "charged",
        };
        write!(f, "{}", display_name)
    }
}

/// Stat-stage buff carried by some PvP moves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveEffect {
    pub activation_chance: f64,
    pub self_attack_stage_delta: i32,
    pub self_defense_stage_delta: i32,
    pub target_attack_stage_delta: i32,
    pub target_defense_stage_delta: i32,
}

/// A move from either the PvE (`V<n>_MOVE_*`) or PvP (`COMBAT_V<n>_MOVE_*`) table.
///
/// PvE moves measure `duration` in milliseconds and always carry a damage
/// window start; PvP moves measure it in turns and may carry an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub category: MoveCategory,
    pub name: String,
    pub poketype: PokemonType,
    pub power: i32,
    pub duration: i32,
    pub energy: i32,
    pub dws: Option<i32>,
    pub effect: Option<MoveEffect>,
}
