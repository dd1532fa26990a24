use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::{PitchError, Result};

// ============================================================================
// Form Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStatsForm {
    pub player: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameStatsForm {
    pub selected_player: Option<String>,
    pub game_date: Option<String>,
}

/// Take a required form field, rejecting missing or blank values
pub fn required_field(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PitchError::InvalidRequest(format!(
            "missing form field '{name}'"
        ))),
    }
}

// ============================================================================
// System Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownResponse {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// `PitchError` rendered as a JSON error response
#[derive(Debug)]
pub struct ApiError(pub PitchError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PitchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PitchError::PlayerNotFound { .. } | PitchError::NoPitchData { .. } => {
                StatusCode::NOT_FOUND
            }
            PitchError::Http(_) | PitchError::Upstream(_) | PitchError::Csv(_) => {
                StatusCode::BAD_GATEWAY
            }
            PitchError::Cache(_) => StatusCode::SERVICE_UNAVAILABLE,
            PitchError::Config(_)
            | PitchError::Json(_)
            | PitchError::EmptySequence
            | PitchError::Io(_)
            | PitchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PitchError> for ApiError {
    fn from(err: PitchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            warn!(kind = self.0.kind(), "request rejected: {}", self.0);
        } else {
            error!(kind = self.0.kind(), "request failed: {}", self.0);
        }

        let body = ErrorBody {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
