use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Prediction endpoints
        .route("/get_player_stats", post(handlers::get_player_stats))
        .route("/get_game_stats", post(handlers::get_game_stats))
        // System endpoints
        .route("/health", get(handlers::health_handler))
        .route("/stopServer", get(handlers::stop_server))
        // Add state, CORS and request tracing
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
