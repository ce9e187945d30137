//! Shared fixtures for unit tests: a small but structurally complete game master.

use crate::game_master::GameMaster;
use schema::PokemonType;
use serde_json::{json, Value};

/// Level 1..=40 multipliers as published in the game master.
pub const CP_MULTIPLIERS: [f64; 40] = [
    0.094, 0.16639787, 0.21573247, 0.25572005, 0.29024988, 0.3210876, 0.34921268, 0.37523559,
    0.39956728, 0.42250001, 0.44310755, 0.46279839, 0.48168495, 0.49985844, 0.51739395,
    0.53435433, 0.55079269, 0.56675452, 0.58227891, 0.59740001, 0.61215729, 0.62656713,
    0.64065295, 0.65443563, 0.667934, 0.68116492, 0.69414365, 0.70688421, 0.71939909, 0.7317,
    0.73776948, 0.74378943, 0.74976104, 0.75568551, 0.76156384, 0.76739717, 0.7731865,
    0.77893275, 0.78463697, 0.79030001,
];

const SUPER_EFFECTIVE: f64 = 1.6;
const NOT_VERY_EFFECTIVE: f64 = 0.625;
const IMMUNE: f64 = 0.390625;

fn type_chart_row(attacker: PokemonType) -> Vec<f64> {
    use PokemonType::*;
    PokemonType::all()
        .map(|defender| match (attacker, defender) {
            (Dragon, Dragon) | (Ice, Dragon) | (Fairy, Dragon) => SUPER_EFFECTIVE,
            (Dragon, Steel) | (Steel, Steel) => NOT_VERY_EFFECTIVE,
            (Dragon, Fairy) | (Normal, Ghost) => IMMUNE,
            _ => 1.0,
        })
        .collect()
}

fn template_id(poketype: PokemonType) -> String {
    format!("POKEMON_TYPE_{}", poketype.to_string().to_uppercase())
}

pub fn sample_document() -> Value {
    let mut templates = vec![
        json!({ "templateId": "AVATAR_CUSTOMIZATION_FEMALE_HAT", "avatarCustomization": {} }),
        json!({
            "templateId": "V0147_POKEMON_DRATINI",
            "pokemonSettings": {
                "pokemonId": "DRATINI",
                "type": "POKEMON_TYPE_DRAGON",
                "stats": { "baseStamina": 121, "baseAttack": 119, "baseDefense": 91 },
                "quickMoves": ["DRAGON_BREATH_FAST"],
                "cinematicMoves": ["HYPER_BEAM"],
                "evolutionIds": ["DRAGONAIR"]
            }
        }),
        json!({
            "templateId": "V0149_POKEMON_DRAGONITE",
            "pokemonSettings": {
                "pokemonId": "DRAGONITE",
                "type": "POKEMON_TYPE_DRAGON",
                "type2": "POKEMON_TYPE_FLYING",
                "stats": { "baseStamina": 198, "baseAttack": 263, "baseDefense": 198 },
                "quickMoves": ["DRAGON_BREATH_FAST", "STEEL_WING_FAST"],
                "cinematicMoves": ["DRAGON_CLAW", "HYPER_BEAM"]
            }
        }),
        json!({
            "templateId": "V0204_MOVE_DRAGON_BREATH_FAST",
            "moveSettings": {
                "movementId": "DRAGON_BREATH_FAST",
                "pokemonType": "POKEMON_TYPE_DRAGON",
                "power": 6,
                "durationMs": 500,
                "damageWindowStartMs": 300,
                "energyDelta": 4
            }
        }),
        json!({
            "templateId": "V0211_MOVE_STEEL_WING_FAST",
            "moveSettings": {
                "movementId": "STEEL_WING_FAST",
                "pokemonType": "POKEMON_TYPE_STEEL",
                "power": 11,
                "durationMs": 800,
                "damageWindowStartMs": 500,
                "energyDelta": 6
            }
        }),
        json!({
            "templateId": "V0083_MOVE_DRAGON_CLAW",
            "moveSettings": {
                "movementId": "DRAGON_CLAW",
                "pokemonType": "POKEMON_TYPE_DRAGON",
                "power": 50,
                "durationMs": 1700,
                "damageWindowStartMs": 1500,
                "energyDelta": -33
            }
        }),
        json!({
            "templateId": "V0014_MOVE_HYPER_BEAM",
            "moveSettings": {
                "movementId": "HYPER_BEAM",
                "pokemonType": "POKEMON_TYPE_NORMAL",
                "power": 150,
                "durationMs": 3800,
                "damageWindowStartMs": 3300,
                "energyDelta": -100
            }
        }),
        json!({
            "templateId": "COMBAT_V0204_MOVE_DRAGON_BREATH_FAST",
            "combatMove": {
                "uniqueId": "DRAGON_BREATH_FAST",
                "type": "POKEMON_TYPE_DRAGON",
                "power": 4,
                "energyDelta": 3
            }
        }),
        json!({
            "templateId": "COMBAT_V0211_MOVE_STEEL_WING_FAST",
            "combatMove": {
                "uniqueId": "STEEL_WING_FAST",
                "type": "POKEMON_TYPE_STEEL",
                "power": 7,
                "durationTurns": 1,
                "energyDelta": 5
            }
        }),
        json!({
            "templateId": "COMBAT_V0083_MOVE_DRAGON_CLAW",
            "combatMove": {
                "uniqueId": "DRAGON_CLAW",
                "type": "POKEMON_TYPE_DRAGON",
                "power": 50,
                "energyDelta": -35,
                "buffs": {
                    "attackerDefenseStatStageChange": 1,
                    "buffActivationChance": 0.125
                }
            }
        }),
        json!({
            "templateId": "COMBAT_V0014_MOVE_HYPER_BEAM",
            "combatMove": {
                "uniqueId": "HYPER_BEAM",
                "type": "POKEMON_TYPE_NORMAL",
                "power": 150,
                "energyDelta": -80
            }
        }),
        json!({
            "templateId": "PLAYER_LEVEL_SETTINGS",
            "playerLevel": {
                "rankNum": [2, 3, 4],
                "cpMultiplier": CP_MULTIPLIERS.to_vec()
            }
        }),
        json!({
            "templateId": "BATTLE_SETTINGS",
            "battleSettings": {
                "retargetSeconds": 0.5,
                "sameTypeAttackBonusMultiplier": 1.2,
                "maximumEnergy": 100,
                "energyDeltaPerHealthLost": 0.5,
                "dodgeDurationMs": 500,
                "swapDurationMs": 1000,
                "dodgeDamageReductionPercent": 0.75,
                "enableRaidLobbyTimer": true
            }
        }),
        json!({
            "templateId": "COMBAT_SETTINGS",
            "combatSettings": {
                "roundDurationSeconds": 240,
                "sameTypeAttackBonusMultiplier": 1.2,
                "fastAttackBonusMultiplier": 1.3,
                "chargeAttackBonusMultiplier": 1.3,
                "maxEnergy": 100,
                "offensiveInputChallengeSettings": { "scorePerTap": 1 }
            }
        }),
        json!({
            "templateId": "COMBAT_STAT_STAGE_SETTINGS",
            "combatStatStageSettings": {
                "minimumStatStage": -4,
                "maximumStatStage": 4,
                "attackBuffMultiplier": [0.5, 0.5714286, 0.66666669, 0.8, 1, 1.25, 1.5, 1.75, 2],
                "defenseBuffMultiplier": [0.5, 0.5714286, 0.66666669, 0.8, 1, 1.25, 1.5, 1.75, 2]
            }
        }),
        json!({
            "templateId": "WEATHER_AFFINITY_CLEAR",
            "weatherAffinities": {
                "weatherCondition": "CLEAR",
                "pokemonType": ["POKEMON_TYPE_GRASS", "POKEMON_TYPE_GROUND", "POKEMON_TYPE_FIRE"]
            }
        }),
        json!({
            "templateId": "WEATHER_AFFINITY_OVERCAST",
            "weatherAffinities": {
                "weatherCondition": "OVERCAST",
                "pokemonType": ["POKEMON_TYPE_FAIRY", "POKEMON_TYPE_FIGHTING", "POKEMON_TYPE_POISON"]
            }
        }),
        json!({
            "templateId": "WEATHER_AFFINITY_WINDY",
            "weatherAffinities": {
                "weatherCondition": "WINDY",
                "pokemonType": ["POKEMON_TYPE_DRAGON", "POKEMON_TYPE_FLYING", "POKEMON_TYPE_PSYCHIC"]
            }
        }),
        json!({
            "templateId": "WEATHER_BONUS_SETTINGS",
            "weatherBonusSettings": { "cpBaseLevelBonus": 5, "attackBonusMultiplier": 1.2 }
        }),
    ];

    // Friendship milestones are deliberately out of multiplier order.
    for (level, multiplier) in [(3, 1.07), (0, 1.0), (4, 1.1), (1, 1.03), (2, 1.05)] {
        templates.push(json!({
            "templateId": format!("FRIENDSHIP_LEVEL_{}", level),
            "friendshipMilestoneSettings": { "attackBonusPercentage": multiplier }
        }));
    }

    for attacker in PokemonType::all() {
        templates.push(json!({
            "templateId": template_id(attacker),
            "typeEffective": {
                "attackScalar": type_chart_row(attacker),
                "attackType": template_id(attacker)
            }
        }));
    }

    json!({ "itemTemplates": templates, "timestampMs": "1560000000000" })
}

pub fn sample_json() -> String {
    sample_document().to_string()
}

pub fn sample_game_master() -> GameMaster {
    match GameMaster::from_json_str(&sample_json()) {
        Ok(gm) => gm,
        Err(err) => panic!("sample game master failed to load: {}", err),
    }
}
