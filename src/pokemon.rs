//! Creature requests and their resolution into engine records.

use schema::{type_index_or_none, BaseStats, SpeciesRecord};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::engine::{EngineHandle, EnginePokemon, PokemonEntity};
use crate::errors::{GameMasterError, GameMasterResult};
use crate::interface::Interface;
use crate::moves::MoveInput;
use crate::stats::{derive_stats, infer_level_and_ivs, CombatStats, Ivs};

pub const DEFAULT_LEVEL: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    #[serde(alias = "ae")]
    PveAttacker,
    #[serde(alias = "ap")]
    PvpAttacker,
    #[serde(alias = "gd")]
    GymDefender,
    #[serde(alias = "rb")]
    RaidBoss,
}

/// A partially specified creature.
///
/// Stats come from either `cp` (inferred) or `level` plus IVs, defaulting to
/// level 40 with perfect IVs. A `tier` makes the request a raid boss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonRequest {
    pub name: String,
    pub fmove: Option<MoveInput>,
    /// Takes precedence over `cmoves`.
    pub cmove: Option<MoveInput>,
    pub cmoves: Vec<MoveInput>,
    pub level: Option<f64>,
    pub atkiv: Option<u8>,
    pub defiv: Option<u8>,
    pub stmiv: Option<u8>,
    pub cp: Option<u32>,
    pub role: Role,
    #[serde(deserialize_with = "deserialize_tier")]
    pub tier: Option<String>,
    pub pvp: bool,
    pub immortal: bool,
    pub pvp_strategy: Option<i32>,
}

impl PokemonRequest {
    pub fn new(name: &str) -> Self {
        PokemonRequest {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn is_raid_boss(&self) -> bool {
        self.role == Role::RaidBoss || self.tier.is_some()
    }

    pub fn uses_pvp_moves(&self) -> bool {
        self.pvp || self.role == Role::PvpAttacker
    }

    fn ivs(&self) -> GameMasterResult<Ivs> {
        Ivs::new(
            self.atkiv.unwrap_or(Ivs::MAX_VALUE),
            self.defiv.unwrap_or(Ivs::MAX_VALUE),
            self.stmiv.unwrap_or(Ivs::MAX_VALUE),
        )
    }

    /// Moves named in the request that `species` does not learn.
    /// Handles and specs are not checked.
    pub fn unlearnable_moves(&self, species: &SpeciesRecord) -> Vec<&str> {
        let fast = self.fmove.iter().filter_map(|input| match input {
            MoveInput::Name(name) if !species.knows_fast_move(name) => Some(name.as_str()),
            _ => None,
        });
        let charged = self.charged_moves().into_iter().filter_map(|input| match input {
            MoveInput::Name(name) if !species.knows_charged_move(name) => Some(name.as_str()),
            _ => None,
        });
        fast.chain(charged).collect()
    }

    fn charged_moves(&self) -> Vec<&MoveInput> {
        match &self.cmove {
            Some(cmove) => vec![cmove],
            None => self.cmoves.iter().collect(),
        }
    }
}

/// Tiers may be written as numbers (`5`) or strings (`"5"`).
fn deserialize_tier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tier {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Tier>::deserialize(deserializer)?.map(|tier| match tier {
        Tier::Number(number) => number.to_string(),
        Tier::Text(text) => text,
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonInput {
    Handle(EngineHandle),
    Built(EnginePokemon),
    Request(PokemonRequest),
}

impl PokemonInput {
    /// Dispatch an untyped value: a number is a handle, an object with a `name`
    /// is a request, any other object an already built record.
    pub fn from_value(value: &Value) -> GameMasterResult<Self> {
        let invalid = |e: serde_json::Error| GameMasterError::InvalidArgument(e.to_string());
        match value {
            Value::Number(number) => number
                .as_u64()
                .map(|handle| PokemonInput::Handle(EngineHandle(handle)))
                .ok_or_else(|| {
                    GameMasterError::InvalidArgument(format!("pokemon handle {} is not a u64", number))
                }),
            Value::Object(fields) if fields.contains_key("name") => {
                PokemonRequest::deserialize(value).map(PokemonInput::Request).map_err(invalid)
            }
            Value::Object(_) => EnginePokemon::deserialize(value)
                .map(PokemonInput::Built)
                .map_err(invalid),
            other => Err(GameMasterError::InvalidArgument(format!(
                "expected a pokemon request, record or handle, got {}",
                other
            ))),
        }
    }
}

impl From<PokemonRequest> for PokemonInput {
    fn from(request: PokemonRequest) -> Self {
        PokemonInput::Request(request)
    }
}

impl Interface<'_> {
    pub fn build_pokemon(&self, input: &PokemonInput) -> GameMasterResult<PokemonEntity> {
        match input {
            PokemonInput::Handle(handle) => Ok(PokemonEntity::Handle(*handle)),
            PokemonInput::Built(record) => Ok(PokemonEntity::Spec(record.clone())),
            PokemonInput::Request(request) => self.resolve_request(request).map(PokemonEntity::Spec),
        }
    }

    pub fn build_pokemon_from_value(&self, value: &Value) -> GameMasterResult<PokemonEntity> {
        self.build_pokemon(&PokemonInput::from_value(value)?)
    }

    /// Resolve a request into a complete engine record.
    pub fn resolve_request(&self, request: &PokemonRequest) -> GameMasterResult<EnginePokemon> {
        let species = self.game_master().search_pokemon(request.name.as_str())?;
        let base = &species.base_stats;

        let (stats, tier) = if request.is_raid_boss() {
            let tier_name = request.tier.as_deref().ok_or_else(|| {
                GameMasterError::InvalidArgument(format!("raid boss {} has no tier", species.name))
            })?;
            let raid_tier = self.game_master().search_raid_tier(tier_name)?;
            let stats = CombatStats {
                max_hp: raid_tier.max_hp,
                ..derive_stats(base, raid_tier.cpm, Ivs::MAX)
            };
            (stats, Some(raid_tier.name.to_string()))
        } else {
            let mut stats = self.regular_stats(request, base)?;
            if request.role == Role::GymDefender {
                stats.max_hp *= 2;
            }
            (stats, None)
        };

        for name in request.unlearnable_moves(species) {
            tracing::warn!("{} does not learn '{}'", species.name, name);
        }

        let pvp = request.uses_pvp_moves();
        let fmove = request
            .fmove
            .as_ref()
            .map(|input| self.build_move(input, pvp))
            .transpose()?;
        let cmoves = request
            .charged_moves()
            .into_iter()
            .map(|input| self.build_move(input, pvp))
            .collect::<GameMasterResult<Vec<_>>>()?;

        tracing::debug!(
            "Built {} ({:?}): attack {:.2}, defense {:.2}, max HP {}",
            species.name,
            request.role,
            stats.attack,
            stats.defense,
            stats.max_hp
        );

        Ok(EnginePokemon {
            poketype1: species.poketype1.index() as i32,
            poketype2: type_index_or_none(species.poketype2),
            attack: stats.attack,
            defense: stats.defense,
            max_hp: stats.max_hp,
            fmove,
            cmoves,
            immortal: request.immortal,
            pvp_strategy: request.pvp_strategy,
            tier,
        })
    }

    fn regular_stats(&self, request: &PokemonRequest, base: &BaseStats) -> GameMasterResult<CombatStats> {
        if let Some(cp) = request.cp {
            let inferred = infer_level_and_ivs(base, cp, self.game_master().cp_multipliers())
                .ok_or_else(|| {
                    GameMasterError::InvalidArgument(format!(
                        "no level and IVs give {} a CP at or below {}",
                        request.name, cp
                    ))
                })?;
            return Ok(derive_stats(base, inferred.cpm, inferred.ivs));
        }

        let cpm = self
            .game_master()
            .search_cpm(request.level.unwrap_or(DEFAULT_LEVEL))?;
        Ok(derive_stats(base, cpm, request.ivs()?))
    }
}
