//! The battle engine boundary.
//!
//! The engine itself is an external collaborator. This module defines what
//! the interface hands to it: named parameters through a [`ParameterSink`],
//! and plain creature/move records.

use std::collections::BTreeMap;

use schema::{MoveEffect, MoveRecord};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Scalar engine parameters fed from the battle settings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EngineParameter {
    SameTypeAttackBonusMultiplier,
    MaxEnergy,
    EnergyDeltaPerHealthLost,
    DodgeDuration,
    SwapDuration,
    DodgeDamageReductionPercent,
    WeatherAttackBonusMultiplier,
    PvpFastAttackBonusMultiplier,
    PvpChargedAttackBonusMultiplier,
}

/// Receiver of the engine configuration calls.
pub trait ParameterSink {
    fn set_parameter(&mut self, parameter: EngineParameter, value: f64);

    fn set_num_types(&mut self, count: usize);

    /// Multiplier of an `attacker`-typed move against a `defender` type, by type index.
    fn set_effectiveness(&mut self, attacker: usize, defender: usize, multiplier: f64);

    /// Mark `poketype` as boosted in the weather at index `weather`.
    fn set_type_boosted_weather(&mut self, poketype: usize, weather: usize);

    fn set_stage_multipliers(&mut self, multipliers: &[f64], minimum_stage: Option<i32>);
}

/// A [`ParameterSink`] that records every call, used for inspection and JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngineParameters {
    pub parameters: BTreeMap<EngineParameter, f64>,
    pub num_types: usize,
    pub effectiveness: BTreeMap<usize, BTreeMap<usize, f64>>,
    pub effectiveness_writes: usize,
    /// Weather index to boosted type indices.
    pub weather_boosts: BTreeMap<usize, Vec<usize>>,
    pub stage_multipliers: Vec<f64>,
    pub minimum_stage: Option<i32>,
}

impl EngineParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(&self, parameter: EngineParameter) -> Option<f64> {
        self.parameters.get(&parameter).copied()
    }

    pub fn effectiveness(&self, attacker: usize, defender: usize) -> Option<f64> {
        self.effectiveness
            .get(&attacker)
            .and_then(|row| row.get(&defender))
            .copied()
    }
}

impl ParameterSink for EngineParameters {
    fn set_parameter(&mut self, parameter: EngineParameter, value: f64) {
        self.parameters.insert(parameter, value);
    }

    fn set_num_types(&mut self, count: usize) {
        self.num_types = count;
    }

    fn set_effectiveness(&mut self, attacker: usize, defender: usize, multiplier: f64) {
        self.effectiveness
            .entry(attacker)
            .or_default()
            .insert(defender, multiplier);
        self.effectiveness_writes += 1;
    }

    fn set_type_boosted_weather(&mut self, poketype: usize, weather: usize) {
        self.weather_boosts.entry(weather).or_default().push(poketype);
    }

    fn set_stage_multipliers(&mut self, multipliers: &[f64], minimum_stage: Option<i32>) {
        self.stage_multipliers = multipliers.to_vec();
        self.minimum_stage = minimum_stage;
    }
}

/// Opaque reference to an entity already living inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineHandle(pub u64);

/// Engine move record: numbers only, plus the optional PvP effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineMove {
    pub poketype: i32,
    pub power: i32,
    pub duration: i32,
    pub energy: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dws: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<MoveEffect>,
}

impl From<&MoveRecord> for EngineMove {
    fn from(record: &MoveRecord) -> Self {
        EngineMove {
            poketype: record.poketype.index() as i32,
            power: record.power,
            duration: record.duration,
            energy: record.energy,
            dws: record.dws,
            effect: record.effect,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveEntity {
    Handle(EngineHandle),
    Spec(EngineMove),
}

/// Engine creature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnginePokemon {
    pub poketype1: i32,
    /// -1 when single-typed.
    pub poketype2: i32,
    pub attack: f64,
    pub defense: f64,
    pub max_hp: u32,
    #[serde(default)]
    pub fmove: Option<MoveEntity>,
    #[serde(default)]
    pub cmoves: Vec<MoveEntity>,
    #[serde(default)]
    pub immortal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvp_strategy: Option<i32>,
    /// Raid tier, carried for boss records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonEntity {
    Handle(EngineHandle),
    Spec(EnginePokemon),
}
