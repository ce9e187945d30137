//! The game master store.
//!
//! A [`GameMaster`] is built by feeding it one or more game master JSON dumps.
//! Every template is classified by its id and folded into normalized tables;
//! after ingestion the store is read-only and is handed by reference to the
//! request builders and the parameter exporter.

pub mod classifier;
pub mod lookup;
pub mod names;
mod payload;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ordered_float::OrderedFloat;
use schema::{
    BaseStats, BattleSettings, FriendshipTier, MoveCategory, MoveEffect, MoveRecord,
    PokemonType, SettingValue, SpeciesRecord, WeatherSetting,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{GameMasterError, GameMasterResult};
use classifier::{classify, TemplateKind};
use names::{normalize, NameCategory};
use payload::{
    CombatMove, FriendshipMilestoneSettings, GameMasterDocument, MoveSettings, PlayerLevel,
    PokemonSettings, RawTemplate, TypeEffective, WeatherAffinities, WeatherBonusSettings,
};

/// Setting name under which the weather bonus is merged into the PvE settings.
pub const WEATHER_ATTACK_BONUS_SETTING: &str = "weatherAttackBonusMultiplier";

/// Normalized game data tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMaster {
    pokemon: Vec<SpeciesRecord>,
    pve_moves: Vec<MoveRecord>,
    pvp_moves: Vec<MoveRecord>,
    cp_multipliers: Vec<f64>,
    weather_settings: Vec<WeatherSetting>,
    friendship_tiers: Vec<FriendshipTier>,
    type_effectiveness: BTreeMap<PokemonType, Vec<f64>>,
    pve_battle_settings: BattleSettings,
    pvp_battle_settings: BattleSettings,
}

/// Counts of what a single `feed` call contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub templates: usize,
    pub consumed: usize,
    pub skipped: usize,
}

impl GameMaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a game master from a JSON file.
    pub fn from_file(path: &Path) -> GameMasterResult<Self> {
        let mut game_master = Self::new();
        game_master.feed_file(path)?;
        Ok(game_master)
    }

    pub fn from_json_str(json: &str) -> GameMasterResult<Self> {
        let mut game_master = Self::new();
        game_master.feed_str(json)?;
        Ok(game_master)
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn feed_file(&mut self, path: &Path) -> GameMasterResult<FeedSummary> {
        let content = fs::read_to_string(path)?;
        tracing::debug!("Read game master file {}", path.display());
        self.feed_str(&content)
    }

    pub fn feed_str(&mut self, json: &str) -> GameMasterResult<FeedSummary> {
        let document: GameMasterDocument = serde_json::from_str(json)?;
        self.feed(document.into_templates())
    }

    /// Ingest a list of raw templates in source order.
    ///
    /// Feeding is additive, so several dumps can be layered. A malformed
    /// recognized template aborts the whole call.
    pub fn feed(&mut self, templates: Vec<Value>) -> GameMasterResult<FeedSummary> {
        let mut summary = FeedSummary {
            templates: templates.len(),
            ..FeedSummary::default()
        };

        for (position, template) in templates.into_iter().enumerate() {
            let template: RawTemplate = serde_json::from_value(template).map_err(|e| {
                GameMasterError::malformed(format!("#{}", position), e.to_string())
            })?;
            if self.ingest(&template)? {
                summary.consumed += 1;
            } else {
                summary.skipped += 1;
            }
        }

        self.friendship_tiers
            .sort_by_key(|tier| OrderedFloat(tier.multiplier));

        tracing::info!(
            "Fed {} templates ({} consumed, {} skipped): {} pokemon, {} PvE moves, {} PvP moves, {} CPMs",
            summary.templates,
            summary.consumed,
            summary.skipped,
            self.pokemon.len(),
            self.pve_moves.len(),
            self.pvp_moves.len(),
            self.cp_multipliers.len()
        );
        Ok(summary)
    }

    /// Fold one template into the tables. Returns false when the id is not consumed.
    fn ingest(&mut self, template: &RawTemplate) -> GameMasterResult<bool> {
        let tid = template.template_id.as_str();
        let Some(kind) = classify(tid)? else {
            tracing::trace!("Skipping template {}", tid);
            return Ok(false);
        };

        match kind {
            TemplateKind::Species { dex } => {
                let settings: PokemonSettings = payload(template, &kind)?;
                let species = species_record(tid, dex, settings)?;
                self.pokemon.push(species);
            }
            TemplateKind::PveMove { fast } => {
                let settings: MoveSettings = payload(template, &kind)?;
                let move_record = pve_move_record(tid, fast, settings)?;
                self.pve_moves.push(move_record);
            }
            TemplateKind::PvpMove { fast } => {
                let combat_move: CombatMove = payload(template, &kind)?;
                let move_record = pvp_move_record(tid, fast, combat_move)?;
                self.pvp_moves.push(move_record);
            }
            TemplateKind::PlayerLevel => {
                let level: PlayerLevel = payload(template, &kind)?;
                self.cp_multipliers = expand_half_levels(&level.cp_multiplier);
            }
            TemplateKind::TypeChart => {
                let chart: TypeEffective = payload(template, &kind)?;
                let attacker_name = normalize(tid, NameCategory::Type);
                let Some(attacker) = PokemonType::from_name(&attacker_name) else {
                    tracing::warn!("Ignoring type chart row for unknown type '{}'", attacker_name);
                    return Ok(false);
                };
                if chart.attack_scalar.len() != PokemonType::TYPE_COUNT {
                    return Err(GameMasterError::malformed(
                        tid,
                        format!(
                            "expected {} attack scalars, found {}",
                            PokemonType::TYPE_COUNT,
                            chart.attack_scalar.len()
                        ),
                    ));
                }
                self.type_effectiveness.insert(attacker, chart.attack_scalar);
            }
            TemplateKind::PveBattleSettings => {
                let settings: Map<String, Value> = payload(template, &kind)?;
                merge_settings(&mut self.pve_battle_settings, settings);
            }
            TemplateKind::PvpBattleSettings | TemplateKind::StatStageSettings => {
                let settings: Map<String, Value> = payload(template, &kind)?;
                merge_settings(&mut self.pvp_battle_settings, settings);
            }
            TemplateKind::WeatherAffinity => {
                let affinities: WeatherAffinities = payload(template, &kind)?;
                let weather = weather_setting(tid, affinities)?;
                self.weather_settings.push(weather);
            }
            TemplateKind::WeatherBonus => {
                let bonus: WeatherBonusSettings = payload(template, &kind)?;
                self.pve_battle_settings.insert(
                    WEATHER_ATTACK_BONUS_SETTING.to_string(),
                    SettingValue::Number(bonus.attack_bonus_multiplier),
                );
            }
            TemplateKind::Friendship => {
                let milestone: FriendshipMilestoneSettings = payload(template, &kind)?;
                self.friendship_tiers.push(FriendshipTier {
                    name: tid.to_string(),
                    multiplier: milestone.attack_bonus_percentage,
                });
            }
        }
        Ok(true)
    }

    pub fn pokemon(&self) -> &[SpeciesRecord] {
        &self.pokemon
    }

    pub fn pve_moves(&self) -> &[MoveRecord] {
        &self.pve_moves
    }

    pub fn pvp_moves(&self) -> &[MoveRecord] {
        &self.pvp_moves
    }

    /// Combat power multipliers; index `i` is level `1 + i / 2`.
    pub fn cp_multipliers(&self) -> &[f64] {
        &self.cp_multipliers
    }

    pub fn weather_settings(&self) -> &[WeatherSetting] {
        &self.weather_settings
    }

    /// Friendship tiers, ascending by multiplier.
    pub fn friendship_tiers(&self) -> &[FriendshipTier] {
        &self.friendship_tiers
    }

    pub fn pve_battle_settings(&self) -> &BattleSettings {
        &self.pve_battle_settings
    }

    pub fn pvp_battle_settings(&self) -> &BattleSettings {
        &self.pvp_battle_settings
    }

    /// Damage multiplier of an `attacker`-typed move against a `defender` type.
    pub fn effectiveness(&self, attacker: PokemonType, defender: PokemonType) -> Option<f64> {
        self.type_effectiveness
            .get(&attacker)
            .and_then(|row| row.get(defender.index()))
            .copied()
    }

    /// Serialize the loaded tables into a compact snapshot.
    pub fn to_snapshot(&self) -> GameMasterResult<Vec<u8>> {
        Ok(postcard::to_allocvec(self)?)
    }

    pub fn from_snapshot(bytes: &[u8]) -> GameMasterResult<Self> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

fn payload<T: DeserializeOwned>(template: &RawTemplate, kind: &TemplateKind) -> GameMasterResult<T> {
    let key = kind.payload_key();
    let value = template.payload.get(key).ok_or_else(|| {
        GameMasterError::malformed(&template.template_id, format!("missing key `{}`", key))
    })?;
    T::deserialize(value)
        .map_err(|e| GameMasterError::malformed(&template.template_id, format!("`{}`: {}", key, e)))
}

fn parse_type(template_id: &str, raw: &str) -> GameMasterResult<PokemonType> {
    let name = normalize(raw, NameCategory::Type);
    PokemonType::from_name(&name)
        .ok_or_else(|| GameMasterError::malformed(template_id, format!("unknown type `{}`", raw)))
}

fn species_record(tid: &str, dex: u32, settings: PokemonSettings) -> GameMasterResult<SpeciesRecord> {
    let poketype1 = parse_type(tid, &settings.poketype)?;
    let poketype2 = settings
        .type2
        .as_deref()
        .and_then(|raw| PokemonType::from_name(&normalize(raw, NameCategory::Type)));
    let evolution: Vec<String> = settings
        .evolution_ids
        .iter()
        .map(|id| normalize(id, NameCategory::ChargedMove))
        .collect();

    Ok(SpeciesRecord {
        dex,
        name: normalize(tid, NameCategory::Species),
        poketype1,
        poketype2,
        base_stats: BaseStats::new(
            settings.stats.base_attack,
            settings.stats.base_defense,
            settings.stats.base_stamina,
        ),
        fast_moves: settings
            .quick_moves
            .iter()
            .map(|m| normalize(m, NameCategory::FastMove))
            .collect(),
        charged_moves: settings
            .cinematic_moves
            .iter()
            .map(|m| normalize(m, NameCategory::ChargedMove))
            .collect(),
        evolution: (!evolution.is_empty()).then_some(evolution),
        rarity: settings.rarity,
    })
}

fn move_category(fast: bool) -> (MoveCategory, NameCategory) {
    if fast {
        (MoveCategory::Fast, NameCategory::FastMove)
    } else {
        (MoveCategory::Charged, NameCategory::ChargedMove)
    }
}

fn pve_move_record(tid: &str, fast: bool, settings: MoveSettings) -> GameMasterResult<MoveRecord> {
    let (category, name_category) = move_category(fast);
    Ok(MoveRecord {
        category,
        name: normalize(&settings.movement_id, name_category),
        poketype: parse_type(tid, &settings.pokemon_type)?,
        power: settings.power as i32,
        duration: settings.duration_ms as i32,
        energy: settings.energy_delta as i32,
        dws: Some(settings.damage_window_start_ms as i32),
        effect: None,
    })
}

fn pvp_move_record(tid: &str, fast: bool, combat_move: CombatMove) -> GameMasterResult<MoveRecord> {
    let (category, name_category) = move_category(fast);
    let effect = combat_move.buffs.map(|buffs| MoveEffect {
        activation_chance: buffs.buff_activation_chance,
        self_attack_stage_delta: buffs.attacker_attack_stat_stage_change,
        self_defense_stage_delta: buffs.attacker_defense_stat_stage_change,
        target_attack_stage_delta: buffs.target_attack_stat_stage_change,
        target_defense_stage_delta: buffs.target_defense_stat_stage_change,
    });
    Ok(MoveRecord {
        category,
        name: normalize(&combat_move.unique_id, name_category),
        poketype: parse_type(tid, &combat_move.poketype)?,
        power: combat_move.power as i32,
        duration: combat_move.duration_turns as i32,
        energy: combat_move.energy_delta as i32,
        dws: None,
        effect,
    })
}

/// Interleave interpolated half levels between the per-level multipliers.
///
/// The half level between `a` and `b` is `sqrt((a^2 + b^2) / 2)`.
pub fn expand_half_levels(full_levels: &[f64]) -> Vec<f64> {
    let mut table: Vec<f64> = Vec::with_capacity(full_levels.len() * 2);
    for &cpm in full_levels {
        if let Some(&previous) = table.last() {
            table.push(((cpm * cpm + previous * previous) / 2.0).sqrt());
        }
        table.push(cpm);
    }
    table
}

fn weather_setting(tid: &str, affinities: WeatherAffinities) -> GameMasterResult<WeatherSetting> {
    let name = match affinities.weather_condition.as_str() {
        "OVERCAST" => "CLOUDY".to_string(),
        other => other.to_string(),
    };
    let boosted_types = affinities
        .pokemon_type
        .iter()
        .map(|raw| parse_type(tid, raw))
        .collect::<GameMasterResult<Vec<_>>>()?;
    Ok(WeatherSetting {
        name,
        boosted_types,
    })
}

fn merge_settings(target: &mut BattleSettings, settings: Map<String, Value>) {
    for (name, value) in settings {
        match setting_value(&value) {
            Some(setting) => {
                target.insert(name, setting);
            }
            None => tracing::debug!("Ignoring non-scalar battle setting {}", name),
        }
    }
}

fn setting_value(value: &Value) -> Option<SettingValue> {
    match value {
        Value::Number(n) => n.as_f64().map(SettingValue::Number),
        Value::Bool(flag) => Some(SettingValue::Bool(*flag)),
        Value::String(text) => Some(SettingValue::Text(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .map(SettingValue::List),
        Value::Null | Value::Object(_) => None,
    }
}
