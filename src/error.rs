use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for the pitch prediction service
#[derive(Error, Debug)]
pub enum PitchError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Player not found: {first} {last}")]
    PlayerNotFound { first: String, last: String },

    #[error("No pitch data for player {player_id} between {start} and {end}")]
    NoPitchData {
        player_id: u32,
        start: NaiveDate,
        end: NaiveDate,
    },

    // Upstream errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Prediction errors
    #[error("Accuracy is undefined for an empty pitch sequence")]
    EmptySequence,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PitchError {
    /// Short machine-readable kind, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidRequest(_) => "invalid_request",
            Self::PlayerNotFound { .. } => "player_not_found",
            Self::NoPitchData { .. } => "no_pitch_data",
            Self::Http(_) | Self::Upstream(_) | Self::Csv(_) => "upstream",
            Self::Cache(_) => "cache_unavailable",
            Self::Json(_) => "serialization",
            Self::EmptySequence => "empty_sequence",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }

    /// True for errors caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::PlayerNotFound { .. } | Self::NoPitchData { .. }
        )
    }
}

/// Result type alias for PitchError
pub type Result<T> = std::result::Result<T, PitchError>;
