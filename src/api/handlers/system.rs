use axum::{extract::State, Json};
use tracing::warn;

use crate::api::{state::AppState, types::*};
use crate::services::HealthResponse;

/// GET /health -- lightweight liveness probe
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.health.get_health())
}

/// GET /stopServer
pub async fn stop_server(State(state): State<AppState>) -> Json<ShutdownResponse> {
    warn!(
        uptime_secs = state.uptime_seconds(),
        "shutdown requested over HTTP"
    );
    state.shutdown.trigger();

    Json(ShutdownResponse {
        success: true,
        message: "Server is shutting down...".to_string(),
    })
}
