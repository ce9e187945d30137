use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// The eighteen elemental types, in the canonical order used by the type chart.
///
/// The discriminant of each variant is its engine type index, and the order of
/// `attackScalar` lists in the game master follows this declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl PokemonType {
    /// Number of types known to the engine.
    pub const TYPE_COUNT: usize = <Self as EnumCount>::COUNT;

    /// Engine index of this type.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<PokemonType> {
        Self::iter().nth(index)
    }

    /// Look up a type by its lowercase name ("dragon", "Fairy", ...).
    pub fn from_name(name: &str) -> Option<PokemonType> {
        name.trim().parse().ok()
    }

    /// All types in canonical order.
    pub fn all() -> impl Iterator<Item = PokemonType> {
        Self::iter()
    }
}

/// Engine encoding of an optional secondary type: its index, or -1 when absent.
pub fn type_index_or_none(poketype: Option<PokemonType>) -> i32 {
    poketype.map(|t| t.index() as i32).unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_order() {
        let names: Vec<String> = PokemonType::all().map(|t| t.to_string()).collect();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "normal");
        assert_eq!(names[8], "steel");
        assert_eq!(names[17], "fairy");
    }

    #[test]
    fn test_name_and_index_lookup() {
        assert_eq!(PokemonType::from_name("dragon"), Some(PokemonType::Dragon));
        assert_eq!(PokemonType::from_name("Fairy"), Some(PokemonType::Fairy));
        assert_eq!(PokemonType::from_name("shadow"), None);
        assert_eq!(PokemonType::from_index(15), Some(PokemonType::Dragon));
        assert_eq!(PokemonType::from_index(18), None);
        assert_eq!(PokemonType::Water.index(), 10);
    }

    #[test]
    fn test_secondary_type_encoding() {
        assert_eq!(type_index_or_none(None), -1);
        assert_eq!(type_index_or_none(Some(PokemonType::Flying)), 2);
    }
}
