use std::fmt;

use schema::SpeciesRecord;

use crate::stats::{combat_power, Ivs};

/// Detailed, human-readable view of a species with its max CP.
pub struct SpeciesSummary<'a> {
    pub species: &'a SpeciesRecord,
    /// Highest multiplier in the level table, if one is loaded.
    pub max_cpm: Option<f64>,
}

impl<'a> SpeciesSummary<'a> {
    pub fn new(species: &'a SpeciesRecord, cp_multipliers: &[f64]) -> Self {
        SpeciesSummary {
            species,
            max_cpm: cp_multipliers.last().copied(),
        }
    }
}

impl fmt::Display for SpeciesSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.species;
        writeln!(f, "{} (#{:03})", data.name, data.dex)?;
        writeln!(f, "--------------------")?;

        let type_names: Vec<String> = data.types().map(|t| t.to_string()).collect();
        writeln!(f, "Type(s): {}", type_names.join(" / "))?;
        if let Some(rarity) = &data.rarity {
            writeln!(f, "Rarity: {}", rarity)?;
        }
        writeln!(f, "--------------------")?;

        writeln!(f, "Base Stats:")?;
        const LABEL_WIDTH: usize = 12;
        let base_stats = &data.base_stats;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Attack", base_stats.attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Defense", base_stats.defense)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Stamina", base_stats.stamina)?;
        if let Some(cpm) = self.max_cpm {
            writeln!(f, "{:<LABEL_WIDTH$} : {}", "Max CP", combat_power(base_stats, cpm, Ivs::MAX))?;
        }
        writeln!(f, "--------------------")?;

        writeln!(f, "Fast moves: {}", data.fast_moves.join(", "))?;
        write!(f, "Charged moves: {}", data.charged_moves.join(", "))?;
        if let Some(evolution) = &data.evolution {
            write!(f, "\nEvolves into: {}", evolution.join(", "))?;
        }
        Ok(())
    }
}
