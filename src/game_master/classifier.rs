//! Syntactic classification of template identifiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{GameMasterError, GameMasterResult};

/// What a template identifier says its payload is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateKind {
    /// `V<dex>_POKEMON_*`
    Species { dex: u32 },
    /// `V<n>_MOVE_*`
    PveMove { fast: bool },
    /// `COMBAT_V<n>_MOVE_*`
    PvpMove { fast: bool },
    /// `PLAYER_LEVEL_SETTINGS`
    PlayerLevel,
    /// `POKEMON_TYPE_*`
    TypeChart,
    /// `BATTLE_SETTINGS`
    PveBattleSettings,
    /// `COMBAT_SETTINGS`
    PvpBattleSettings,
    /// `COMBAT_STAT_STAGE_SETTINGS`
    StatStageSettings,
    /// `WEATHER_AFFINITY_*`
    WeatherAffinity,
    /// `WEATHER_BONUS_SETTINGS`
    WeatherBonus,
    /// `FRIENDSHIP_LEVEL_<n>`
    Friendship,
}

impl TemplateKind {
    /// Payload key holding this template's data.
    pub fn payload_key(&self) -> &'static str {
        match self {
            TemplateKind::Species { .. } => "pokemonSettings",
            TemplateKind::PveMove { .. } => "moveSettings",
            TemplateKind::PvpMove { .. } => "combatMove",
            TemplateKind::PlayerLevel => "playerLevel",
            TemplateKind::TypeChart => "typeEffective",
            TemplateKind::PveBattleSettings => "battleSettings",
            TemplateKind::PvpBattleSettings => "combatSettings",
            TemplateKind::StatStageSettings => "combatStatStageSettings",
            TemplateKind::WeatherAffinity => "weatherAffinities",
            TemplateKind::WeatherBonus => "weatherBonusSettings",
            TemplateKind::Friendship => "friendshipMilestoneSettings",
        }
    }
}

static SPECIES: LazyLock<Regex> = LazyLock::new(|| pattern(r"^V(\d+)_POKEMON_.+$"));
static PVE_MOVE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^V\d+_MOVE_.+$"));
static PVP_MOVE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^COMBAT_V\d+_MOVE_.+$"));
static TYPE_CHART: LazyLock<Regex> = LazyLock::new(|| pattern(r"^POKEMON_TYPE_.+$"));
static WEATHER_AFFINITY: LazyLock<Regex> = LazyLock::new(|| pattern(r"^WEATHER_AFFINITY_.+$"));
static FRIENDSHIP: LazyLock<Regex> = LazyLock::new(|| pattern(r"^FRIENDSHIP_LEVEL_\d+$"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("template id patterns are valid")
}

/// Classify a template id. Returns `Ok(None)` for ids this interface does not consume.
///
/// A species id whose dex number does not fit a `u32` is malformed.
pub fn classify(template_id: &str) -> GameMasterResult<Option<TemplateKind>> {
    let kind = match template_id {
        "PLAYER_LEVEL_SETTINGS" => TemplateKind::PlayerLevel,
        "BATTLE_SETTINGS" => TemplateKind::PveBattleSettings,
        "COMBAT_SETTINGS" => TemplateKind::PvpBattleSettings,
        "COMBAT_STAT_STAGE_SETTINGS" => TemplateKind::StatStageSettings,
        "WEATHER_BONUS_SETTINGS" => TemplateKind::WeatherBonus,
        _ => {
            let fast = template_id.ends_with("_FAST");
            if let Some(captures) = SPECIES.captures(template_id) {
                let digits = &captures[1];
                let dex = digits.parse().map_err(|_| {
                    GameMasterError::malformed(template_id, format!("dex number {} is out of range", digits))
                })?;
                TemplateKind::Species { dex }
            } else if PVE_MOVE.is_match(template_id) {
                TemplateKind::PveMove { fast }
            } else if PVP_MOVE.is_match(template_id) {
                TemplateKind::PvpMove { fast }
            } else if TYPE_CHART.is_match(template_id) {
                TemplateKind::TypeChart
            } else if WEATHER_AFFINITY.is_match(template_id) {
                TemplateKind::WeatherAffinity
            } else if FRIENDSHIP.is_match(template_id) {
                TemplateKind::Friendship
            } else {
                return Ok(None);
            }
        }
    };
    Ok(Some(kind))
}
