//! Raw payload shapes of the game master templates this interface consumes.
//!
//! Only the keys that are read are modelled. Optional keys carry serde
//! defaults; a missing required key fails deserialization, which ingestion
//! reports as malformed input.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The document is either a bare template list or wrapped in `itemTemplates`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GameMasterDocument {
    Templates(Vec<Value>),
    Wrapped {
        #[serde(rename = "itemTemplates")]
        item_templates: Vec<Value>,
    },
}

impl GameMasterDocument {
    pub(crate) fn into_templates(self) -> Vec<Value> {
        match self {
            GameMasterDocument::Templates(templates) => templates,
            GameMasterDocument::Wrapped { item_templates } => item_templates,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTemplate {
    pub template_id: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PokemonSettings {
    #[serde(rename = "type")]
    pub poketype: String,
    #[serde(default)]
    pub type2: Option<String>,
    pub stats: StatsPayload,
    #[serde(default)]
    pub quick_moves: Vec<String>,
    #[serde(default)]
    pub cinematic_moves: Vec<String>,
    #[serde(default)]
    pub evolution_ids: Vec<String>,
    #[serde(default)]
    pub rarity: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsPayload {
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_stamina: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveSettings {
    pub movement_id: String,
    pub pokemon_type: String,
    #[serde(default)]
    pub power: f64,
    pub duration_ms: f64,
    pub damage_window_start_ms: f64,
    #[serde(default)]
    pub energy_delta: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CombatMove {
    pub unique_id: String,
    #[serde(rename = "type")]
    pub poketype: String,
    #[serde(default)]
    pub power: f64,
    #[serde(default)]
    pub duration_turns: f64,
    #[serde(default)]
    pub energy_delta: f64,
    #[serde(default)]
    pub buffs: Option<CombatBuffs>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CombatBuffs {
    pub buff_activation_chance: f64,
    #[serde(default)]
    pub attacker_attack_stat_stage_change: i32,
    #[serde(default)]
    pub attacker_defense_stat_stage_change: i32,
    #[serde(default)]
    pub target_attack_stat_stage_change: i32,
    #[serde(default)]
    pub target_defense_stat_stage_change: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerLevel {
    pub cp_multiplier: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TypeEffective {
    pub attack_scalar: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeatherAffinities {
    pub weather_condition: String,
    pub pokemon_type: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WeatherBonusSettings {
    pub attack_bonus_multiplier: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FriendshipMilestoneSettings {
    pub attack_bonus_percentage: f64,
}
