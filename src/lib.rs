//! Game master interface
//!
//! Ingests a game master dump into normalized tables, computes and inverts
//! combat power, and resolves partially specified creature and move requests
//! into records a battle engine can consume.

// --- MODULE DECLARATIONS ---
pub mod engine;
pub mod errors;
pub mod exporter;
pub mod game_master;
pub mod interface;
pub mod moves;
pub mod pokemon;
pub mod resolver;
pub mod species;
pub mod stats;

#[cfg(test)]
mod test_support;

// --- PUBLIC API RE-EXPORTS ---

// Plain data records from the `schema` crate.
pub use schema::{
    BaseStats, BattleSettings, FriendshipTier, MoveCategory, MoveEffect, MoveRecord, PokemonType,
    RaidTier, SettingValue, SpeciesRecord, WeatherSetting,
};

// Store, lookups and export.
pub use exporter::export;
pub use game_master::lookup::{FRIENDSHIP_ALTERNATE_NAMES, RAID_TIERS};
pub use game_master::{FeedSummary, GameMaster};
pub use resolver::{Criteria, SearchMode, SearchResult};

// Stats and request building.
pub use engine::{
    EngineHandle, EngineMove, EngineParameter, EngineParameters, EnginePokemon, MoveEntity,
    ParameterSink, PokemonEntity,
};
pub use interface::Interface;
pub use moves::MoveInput;
pub use pokemon::{PokemonInput, PokemonRequest, Role};
pub use stats::{combat_power, derive_stats, infer_level_and_ivs, CombatStats, Ivs, StatInference};

// Crate-specific error and result types.
pub use errors::{EntityKind, GameMasterError, GameMasterResult};
