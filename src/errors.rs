use std::fmt;
use thiserror::Error;

/// The table a failed lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Species,
    Move,
    Level,
    Weather,
    Friendship,
    RaidTier,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            EntityKind::Species => "Pokemon",
            EntityKind::Move => "Move",
            EntityKind::Level => "Level",
            EntityKind::Weather => "Weather",
            EntityKind::Friendship => "Friend",
            EntityKind::RaidTier => "Tier",
        };
        write!(f, "{}", display_name)
    }
}

/// Main error type for game master ingestion, lookups and request building
#[derive(Debug, Error)]
pub enum GameMasterError {
    /// A name or criteria did not resolve in its table
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },

    /// A recognized template is missing a required payload key or has the wrong shape
    #[error("malformed template {template}: {detail}")]
    MalformedInput { template: String, detail: String },

    /// A builder received an input shape it does not support
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request file error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] postcard::Error),
}

impl GameMasterError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        GameMasterError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn malformed(template: impl Into<String>, detail: impl Into<String>) -> Self {
        GameMasterError::MalformedInput {
            template: template.into(),
            detail: detail.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GameMasterError::NotFound { .. })
    }
}

/// Type alias for Results using GameMasterError
pub type GameMasterResult<T> = Result<T, GameMasterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        let err = GameMasterError::not_found(EntityKind::Species, "missingno");
        assert_eq!(err.to_string(), "Pokemon 'missingno' not found");
        assert!(err.is_not_found());

        let err = GameMasterError::malformed("V0001_MOVE_X", "missing key `durationMs`");
        assert_eq!(
            err.to_string(),
            "malformed template V0001_MOVE_X: missing key `durationMs`"
        );
        assert!(!err.is_not_found());
    }
}
