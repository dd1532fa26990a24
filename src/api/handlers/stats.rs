use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use tracing::info;

use crate::api::{state::AppState, types::*};
use crate::error::PitchError;
use crate::services::{GameAnalysis, PlayerGames};

fn form_fields<T>(form: std::result::Result<Form<T>, FormRejection>) -> Result<T, ApiError> {
    match form {
        Ok(Form(fields)) => Ok(fields),
        Err(rejection) => Err(PitchError::InvalidRequest(rejection.body_text()).into()),
    }
}

/// POST /get_player_stats
pub async fn get_player_stats(
    State(state): State<AppState>,
    form: std::result::Result<Form<PlayerStatsForm>, FormRejection>,
) -> std::result::Result<Json<PlayerGames>, ApiError> {
    let form = form_fields(form)?;
    let player = required_field(form.player, "player")?;
    info!(player = %player, "player stats requested");

    let games = state.analysis.season_game_dates(&player).await?;
    Ok(Json(games))
}

/// POST /get_game_stats
pub async fn get_game_stats(
    State(state): State<AppState>,
    form: std::result::Result<Form<GameStatsForm>, FormRejection>,
) -> std::result::Result<Json<GameAnalysis>, ApiError> {
    let form = form_fields(form)?;
    let player = required_field(form.selected_player, "selected_player")?;
    let game_date = required_field(form.game_date, "game_date")?;
    info!(player = %player, game_date = %game_date, "game stats requested");

    let analysis = state.analysis.game_analysis(&player, &game_date).await?;
    Ok(Json(analysis))
}
