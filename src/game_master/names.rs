//! Normalization of raw game master identifiers into human-facing names.
//!
//! Every name stored in a table goes through [`normalize`], so later
//! case-insensitive lookups compare like with like.

/// Which rule of the normalization family to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCategory {
    /// `V0149_POKEMON_DRAGONITE` -> `dragonite` (first two tokens dropped)
    Species,
    /// `DRAGON_BREATH_FAST` -> `dragon breath` (trailing token dropped)
    FastMove,
    /// `DRAGON_CLAW` -> `dragon claw`
    ChargedMove,
    /// `POKEMON_TYPE_DRAGON` -> `dragon` (trailing token only)
    Type,
}

pub fn normalize(raw: &str, category: NameCategory) -> String {
    let tokens: Vec<String> = raw.split('_').map(|s| s.to_lowercase()).collect();
    match category {
        NameCategory::Species => tokens.iter().skip(2).cloned().collect::<Vec<_>>().join(" "),
        NameCategory::FastMove => {
            let keep = tokens.len().saturating_sub(1);
            tokens[..keep].join(" ")
        }
        NameCategory::ChargedMove => tokens.join(" "),
        NameCategory::Type => tokens.last().cloned().unwrap_or_default(),
    }
}
