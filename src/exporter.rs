//! One-shot export of the loaded settings into the battle engine.

use schema::PokemonType;

use crate::engine::{EngineParameter, ParameterSink};
use crate::errors::{GameMasterError, GameMasterResult};
use crate::game_master::{GameMaster, WEATHER_ATTACK_BONUS_SETTING};

pub const ATTACK_BUFF_MULTIPLIER_SETTING: &str = "attackBuffMultiplier";
pub const MINIMUM_STAT_STAGE_SETTING: &str = "minimumStatStage";

/// Engine parameter for a PvE (`BATTLE_SETTINGS`) setting name.
pub fn pve_parameter(setting: &str) -> Option<EngineParameter> {
    let parameter = match setting {
        "sameTypeAttackBonusMultiplier" => EngineParameter::SameTypeAttackBonusMultiplier,
        "maximumEnergy" => EngineParameter::MaxEnergy,
        "energyDeltaPerHealthLost" => EngineParameter::EnergyDeltaPerHealthLost,
        "dodgeDurationMs" => EngineParameter::DodgeDuration,
        "swapDurationMs" => EngineParameter::SwapDuration,
        "dodgeDamageReductionPercent" => EngineParameter::DodgeDamageReductionPercent,
        WEATHER_ATTACK_BONUS_SETTING => EngineParameter::WeatherAttackBonusMultiplier,
        _ => return None,
    };
    Some(parameter)
}

/// Engine parameter for a PvP (`COMBAT_SETTINGS`) setting name.
pub fn pvp_parameter(setting: &str) -> Option<EngineParameter> {
    match setting {
        "fastAttackBonusMultiplier" => Some(EngineParameter::PvpFastAttackBonusMultiplier),
        "chargeAttackBonusMultiplier" => Some(EngineParameter::PvpChargedAttackBonusMultiplier),
        _ => None,
    }
}

/// Push every loaded setting, the type chart and the weather boosts into `sink`.
///
/// Setting names without an engine counterpart are ignored. The type chart
/// must be complete: a missing attacker row is malformed input.
pub fn export<S: ParameterSink>(game_master: &GameMaster, sink: &mut S) -> GameMasterResult<()> {
    let mut exported = 0;
    for (name, value) in game_master.pve_battle_settings() {
        if let (Some(parameter), Some(scalar)) = (pve_parameter(name), value.as_scalar()) {
            tracing::debug!("Setting {} = {}", parameter, scalar);
            sink.set_parameter(parameter, scalar);
            exported += 1;
        }
    }

    let pvp_settings = game_master.pvp_battle_settings();
    for (name, value) in pvp_settings {
        if let (Some(parameter), Some(scalar)) = (pvp_parameter(name), value.as_scalar()) {
            tracing::debug!("Setting {} = {}", parameter, scalar);
            sink.set_parameter(parameter, scalar);
            exported += 1;
        }
    }

    match pvp_settings
        .get(ATTACK_BUFF_MULTIPLIER_SETTING)
        .and_then(|value| value.as_list())
    {
        Some(multipliers) => {
            let minimum_stage = pvp_settings
                .get(MINIMUM_STAT_STAGE_SETTING)
                .and_then(|value| value.as_scalar())
                .map(|stage| stage as i32);
            sink.set_stage_multipliers(multipliers, minimum_stage);
        }
        None => tracing::warn!(
            "No {} in the PvP settings, stage multipliers not exported",
            ATTACK_BUFF_MULTIPLIER_SETTING
        ),
    }

    sink.set_num_types(PokemonType::TYPE_COUNT);
    for attacker in PokemonType::all() {
        for defender in PokemonType::all() {
            let multiplier = game_master.effectiveness(attacker, defender).ok_or_else(|| {
                GameMasterError::malformed(
                    format!("POKEMON_TYPE_{}", attacker.to_string().to_uppercase()),
                    "type chart row missing at export",
                )
            })?;
            sink.set_effectiveness(attacker.index(), defender.index(), multiplier);
        }
    }

    for (weather_index, weather) in game_master.weather_settings().iter().enumerate() {
        for poketype in &weather.boosted_types {
            sink.set_type_boosted_weather(poketype.index(), weather_index);
        }
    }

    tracing::info!(
        "Exported {} parameters, {} types, {} weathers",
        exported,
        PokemonType::TYPE_COUNT,
        game_master.weather_settings().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineParameters;
    use crate::test_support::sample_game_master;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_export_sample() {
        // Arrange
        let gm = sample_game_master();
        let mut sink = EngineParameters::new();

        // Act
        export(&gm, &mut sink).unwrap();

        // Assert
        assert_eq!(sink.effectiveness_writes, 18 * 18);
        assert_eq!(sink.num_types, 18);
        assert_eq!(
            sink.effectiveness(PokemonType::Dragon.index(), PokemonType::Fairy.index()),
            Some(0.390625)
        );
        assert_eq!(sink.parameter(EngineParameter::SameTypeAttackBonusMultiplier), Some(1.2));
        assert_eq!(sink.parameter(EngineParameter::MaxEnergy), Some(100.0));
        assert_eq!(sink.parameter(EngineParameter::DodgeDamageReductionPercent), Some(0.75));
        assert_eq!(sink.parameter(EngineParameter::WeatherAttackBonusMultiplier), Some(1.2));
        assert_eq!(sink.parameter(EngineParameter::PvpFastAttackBonusMultiplier), Some(1.3));
        assert_eq!(sink.parameter(EngineParameter::PvpChargedAttackBonusMultiplier), Some(1.3));
        assert_eq!(sink.parameters.len(), 9);
        assert_eq!(sink.stage_multipliers.len(), 9);
        assert_eq!(sink.minimum_stage, Some(-4));
    }

    #[test]
    fn test_weather_boosts_are_keyed_by_weather_index() {
        let gm = sample_game_master();
        let mut sink = EngineParameters::new();
        export(&gm, &mut sink).unwrap();

        let windy = gm.search_weather("windy").unwrap();
        assert_eq!(
            sink.weather_boosts.get(&windy),
            Some(&vec![
                PokemonType::Dragon.index(),
                PokemonType::Flying.index(),
                PokemonType::Psychic.index()
            ])
        );
        assert_eq!(sink.weather_boosts.len(), 3);
    }

    #[rstest]
    #[case("maximumEnergy", Some(EngineParameter::MaxEnergy))]
    #[case("swapDurationMs", Some(EngineParameter::SwapDuration))]
    #[case("retargetSeconds", None)]
    #[case("fastAttackBonusMultiplier", None)]
    fn test_pve_parameter_mapping(#[case] setting: &str, #[case] expected: Option<EngineParameter>) {
        assert_eq!(pve_parameter(setting), expected);
    }

    #[test]
    fn test_missing_type_row_is_malformed() {
        let mut gm = GameMaster::new();
        gm.feed(vec![json!({
            "templateId": "POKEMON_TYPE_FIRE",
            "typeEffective": { "attackScalar": vec![1.0; 18] }
        })])
        .unwrap();
        let mut sink = EngineParameters::new();
        let err = export(&gm, &mut sink).unwrap_err();
        assert!(matches!(err, GameMasterError::MalformedInput { ref template, .. } if template == "POKEMON_TYPE_NORMAL"));
        assert!(sink.stage_multipliers.is_empty());
    }
}
