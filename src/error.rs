use std::path::PathBuf;
use thiserror::Error;

/// Main error type for propline
#[derive(Error, Debug)]
pub enum PropError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Dataset errors
    #[error("Failed to read dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Assessment errors
    #[error(transparent)]
    Assess(#[from] AssessError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PropError
pub type Result<T> = std::result::Result<T, PropError>;

/// Reasons a single assessment can fail. Every failure is terminal for the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessError {
    #[error("Incomplete query: {field} is missing or invalid")]
    IncompleteQuery { field: &'static str },

    #[error("Player not found: {player} ({team})")]
    PlayerNotFound { team: String, player: String },

    #[error("Opponent not found: {opponent}")]
    OpponentNotFound { opponent: String },
}

impl AssessError {
    /// Stable identifier used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IncompleteQuery { .. } => "incomplete_query",
            Self::PlayerNotFound { .. } => "player_not_found",
            Self::OpponentNotFound { .. } => "opponent_not_found",
        }
    }
}
