use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub stamina: u32,
}

impl BaseStats {
    pub fn new(attack: u32, defense: u32, stamina: u32) -> Self {
        BaseStats {
            attack,
            defense,
            stamina,
        }
    }
}

/// One species parsed from a `V<dex>_POKEMON_<NAME>` template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub dex: u32,
    pub name: String,
    pub poketype1: PokemonType,
    pub poketype2: Option<PokemonType>,
    pub base_stats: BaseStats,
    pub fast_moves: Vec<String>, // normalized move names
    pub charged_moves: Vec<String>,
    pub evolution: Option<Vec<String>>,
    pub rarity: Option<String>,
}

impl SpeciesRecord {
    pub fn types(&self) -> impl Iterator<Item = PokemonType> + '_ {
        std::iter::once(self.poketype1).chain(self.poketype2)
    }

    pub fn knows_fast_move(&self, name: &str) -> bool {
        self.fast_moves.iter().any(|m| m.eq_ignore_ascii_case(name.trim()))
    }

    pub fn knows_charged_move(&self, name: &str) -> bool {
        self.charged_moves
            .iter()
            .any(|m| m.eq_ignore_ascii_case(name.trim()))
    }
}
