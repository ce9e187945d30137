//! Lookups over a loaded [`GameMaster`].

use schema::{MoveRecord, RaidTier, SpeciesRecord};

use super::GameMaster;
use crate::errors::{EntityKind, GameMasterError, GameMasterResult};
use crate::resolver::{find_all, find_first, Criteria};
use crate::stats::index_for_level;

/// Rank names of the friendship tiers, weakest first.
pub const FRIENDSHIP_ALTERNATE_NAMES: [&str; 5] = ["none", "good", "great", "ultra", "best"];

/// Boss parameters per raid tier. These are not part of the game master file.
pub const RAID_TIERS: [RaidTier; 6] = [
    RaidTier { name: "1", cpm: 0.6, max_hp: 600, time_limit: 180_000 },
    RaidTier { name: "2", cpm: 0.67, max_hp: 1800, time_limit: 180_000 },
    RaidTier { name: "3", cpm: 0.7300000190734863, max_hp: 3600, time_limit: 180_000 },
    RaidTier { name: "4", cpm: 0.7900000214576721, max_hp: 9000, time_limit: 180_000 },
    RaidTier { name: "5", cpm: 0.7900000214576721, max_hp: 15000, time_limit: 300_000 },
    RaidTier { name: "6", cpm: 0.7900000214576721, max_hp: 18750, time_limit: 3_000_000 },
];

impl GameMaster {
    /// First species satisfying `criteria` (a name or a predicate).
    pub fn search_pokemon<'a, 'c>(
        &'a self,
        criteria: impl Into<Criteria<'c, SpeciesRecord>>,
    ) -> GameMasterResult<&'a SpeciesRecord> {
        find_first(self.pokemon(), criteria.into())
    }

    pub fn search_pokemon_all<'a, 'c>(
        &'a self,
        criteria: impl Into<Criteria<'c, SpeciesRecord>>,
    ) -> Vec<&'a SpeciesRecord> {
        find_all(self.pokemon(), criteria.into())
    }

    pub fn search_move_pve<'a, 'c>(
        &'a self,
        criteria: impl Into<Criteria<'c, MoveRecord>>,
    ) -> GameMasterResult<&'a MoveRecord> {
        find_first(self.pve_moves(), criteria.into())
    }

    pub fn search_move_pve_all<'a, 'c>(
        &'a self,
        criteria: impl Into<Criteria<'c, MoveRecord>>,
    ) -> Vec<&'a MoveRecord> {
        find_all(self.pve_moves(), criteria.into())
    }

    pub fn search_move_pvp<'a, 'c>(
        &'a self,
        criteria: impl Into<Criteria<'c, MoveRecord>>,
    ) -> GameMasterResult<&'a MoveRecord> {
        find_first(self.pvp_moves(), criteria.into())
    }

    pub fn search_move_pvp_all<'a, 'c>(
        &'a self,
        criteria: impl Into<Criteria<'c, MoveRecord>>,
    ) -> Vec<&'a MoveRecord> {
        find_all(self.pvp_moves(), criteria.into())
    }

    /// Multiplier of a (half-)level, e.g. `40.0` or `22.5`.
    pub fn search_cpm(&self, level: f64) -> GameMasterResult<f64> {
        index_for_level(level)
            .and_then(|index| self.cp_multipliers().get(index).copied())
            .ok_or_else(|| GameMasterError::not_found(EntityKind::Level, level.to_string()))
    }

    /// Index of the weather named `weather_name`, case-insensitive.
    pub fn search_weather(&self, weather_name: &str) -> GameMasterResult<usize> {
        let wanted = weather_name.trim();
        self.weather_settings()
            .iter()
            .position(|weather| weather.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameMasterError::not_found(EntityKind::Weather, weather_name))
    }

    /// Attack bonus multiplier of a friendship tier.
    ///
    /// `friendship` may be the rank ("2"), the alternate name ("Great") or the
    /// template id ("FRIENDSHIP_LEVEL_2").
    pub fn search_friend(&self, friendship: &str) -> GameMasterResult<f64> {
        let wanted = friendship.trim().to_lowercase();
        self.friendship_tiers()
            .iter()
            .enumerate()
            .find(|(rank, tier)| {
                wanted == rank.to_string()
                    || FRIENDSHIP_ALTERNATE_NAMES.get(*rank) == Some(&wanted.as_str())
                    || tier.name.to_lowercase() == wanted
            })
            .map(|(_, tier)| tier.multiplier)
            .ok_or_else(|| GameMasterError::not_found(EntityKind::Friendship, wanted))
    }

    /// Boss parameters of raid tier `tier` ("1" to "6").
    pub fn search_raid_tier(&self, tier: &str) -> GameMasterResult<&'static RaidTier> {
        let wanted = tier.trim();
        RAID_TIERS
            .iter()
            .find(|raid_tier| raid_tier.name == wanted)
            .ok_or_else(|| GameMasterError::not_found(EntityKind::RaidTier, wanted))
    }
}
