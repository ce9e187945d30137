use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeatherSetting {
    pub name: String,
    pub boosted_types: Vec<PokemonType>,
}

impl WeatherSetting {
    pub fn boosts(&self, poketype: PokemonType) -> bool {
        self.boosted_types.contains(&poketype)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FriendshipTier {
    pub name: String, // template id, e.g. FRIENDSHIP_LEVEL_3
    pub multiplier: f64,
}

/// Boss parameters for one raid tier. These are not part of the game master.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RaidTier {
    pub name: &'static str,
    pub cpm: f64,
    pub max_hp: u32,
    pub time_limit: u32, // milliseconds
}

/// A single battle setting value as found in the game master.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SettingValue {
    Number(f64),
    Bool(bool),
    List(Vec<f64>),
    Text(String),
}

impl SettingValue {
    /// Scalar form accepted by the engine; booleans map to 0/1.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            SettingValue::Number(value) => Some(*value),
            SettingValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            SettingValue::List(_) | SettingValue::Text(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[f64]> {
        match self {
            SettingValue::List(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Number(value) => write!(f, "{}", value),
            SettingValue::Bool(flag) => write!(f, "{}", flag),
            SettingValue::List(values) => {
                let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            SettingValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Setting name (as spelled in the game master) to value.
pub type BattleSettings = BTreeMap<String, SettingValue>;
