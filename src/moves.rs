//! Move requests: a name to resolve, or something the engine already understands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{EngineHandle, EngineMove, MoveEntity};
use crate::errors::{GameMasterError, GameMasterResult};
use crate::interface::Interface;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveInput {
    Handle(EngineHandle),
    Spec(EngineMove),
    /// Looked up in the PvE or PvP move table.
    Name(String),
}

impl MoveInput {
    /// Dispatch an untyped value: a number is a handle, a string a name, an object a spec.
    pub fn from_value(value: &Value) -> GameMasterResult<Self> {
        match value {
            Value::Number(number) => number
                .as_u64()
                .map(|handle| MoveInput::Handle(EngineHandle(handle)))
                .ok_or_else(|| {
                    GameMasterError::InvalidArgument(format!("move handle {} is not a u64", number))
                }),
            Value::String(name) => Ok(MoveInput::Name(name.clone())),
            Value::Object(_) => EngineMove::deserialize(value)
                .map(MoveInput::Spec)
                .map_err(|e| GameMasterError::InvalidArgument(format!("move spec: {}", e))),
            other => Err(GameMasterError::InvalidArgument(format!(
                "expected a move name, handle or spec, got {}",
                other
            ))),
        }
    }
}

impl From<&str> for MoveInput {
    fn from(name: &str) -> Self {
        MoveInput::Name(name.to_string())
    }
}

impl Interface<'_> {
    /// Resolve a move input into an engine move entity.
    ///
    /// Names resolve against the PvP table when `pvp` is set, otherwise the PvE table.
    pub fn build_move(&self, input: &MoveInput, pvp: bool) -> GameMasterResult<MoveEntity> {
        match input {
            MoveInput::Handle(handle) => Ok(MoveEntity::Handle(*handle)),
            MoveInput::Spec(spec) => Ok(MoveEntity::Spec(spec.clone())),
            MoveInput::Name(name) => {
                let game_master = self.game_master();
                let record = if pvp {
                    game_master.search_move_pvp(name.as_str())?
                } else {
                    game_master.search_move_pve(name.as_str())?
                };
                tracing::trace!("Resolved {} move '{}'", record.category, record.name);
                Ok(MoveEntity::Spec(EngineMove::from(record)))
            }
        }
    }

    pub fn build_move_from_value(&self, value: &Value, pvp: bool) -> GameMasterResult<MoveEntity> {
        self.build_move(&MoveInput::from_value(value)?, pvp)
    }
}
