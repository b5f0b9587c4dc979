//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    ChartQuery, HealthResponse, PlayerListResponse, PlayerTrajectoryQuery,
    PlayerTrajectoryResponse, StorePlayerResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::PlayerRecord;
use crate::routes;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Players
// =============================================================================

/// GET /v1/players
///
/// List all stored players.
pub async fn list_players(State(state): State<AppState>) -> HandlerResult<PlayerListResponse> {
    let players = db_services::list_players(state.repository.as_ref()).await?;
    let total = players.len();

    Ok(Json(PlayerListResponse { players, total }))
}

/// POST /v1/players
///
/// Store one player's validated rating record, replacing any previous record
/// for the same player.
pub async fn store_player(
    State(state): State<AppState>,
    Json(record): Json<PlayerRecord>,
) -> Result<(axum::http::StatusCode, Json<StorePlayerResponse>), AppError> {
    db_services::store_player(state.repository.as_ref(), &record).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(StorePlayerResponse {
            name: record.name.clone(),
            stored_matches: record.records.len(),
            message: format!("Stored rating history for '{}'", record.name),
        }),
    ))
}

/// GET /v1/players/{name}/trajectory
///
/// Get one player's raw single-system trajectory (no alignment).
pub async fn get_player_trajectory(
    State(_state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PlayerTrajectoryQuery>,
) -> HandlerResult<PlayerTrajectoryResponse> {
    let history = routes::players::get_player_trajectory(&name, query.system, query.limit).await?;

    Ok(Json(PlayerTrajectoryResponse {
        player: history.name.clone(),
        total_matches: history.len(),
        data_points: history.observations,
    }))
}

// =============================================================================
// Trajectory Charts
// =============================================================================

/// GET /v1/trajectories/career
///
/// Multi-player comparison aligned by career match ordinal.
pub async fn get_career_chart(
    State(_state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<crate::api::TrajectoryChartData> {
    let players = query.player_list();

    let data =
        routes::trajectory::get_career_trajectories(players, query.system, query.limit).await?;

    Ok(Json(data))
}

/// GET /v1/trajectories/history
///
/// Multi-player comparison aligned by exact match date, optionally
/// window-restricted.
pub async fn get_history_chart(
    State(_state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<crate::api::TrajectoryChartData> {
    let players = query.player_list();
    let window = query.window().map_err(AppError::BadRequest)?;

    let data =
        routes::trajectory::get_history_trajectories(players, query.system, window).await?;

    Ok(Json(data))
}

/// GET /v1/trajectories/season
///
/// Multi-player comparison on an interpolated daily axis over a required
/// window.
pub async fn get_season_chart(
    State(_state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<crate::api::TrajectoryChartData> {
    let players = query.player_list();
    let window = query
        .window()
        .map_err(AppError::BadRequest)?
        .ok_or_else(|| {
            AppError::BadRequest("'from' and 'to' are required for the season chart".to_string())
        })?;

    let data =
        routes::trajectory::get_season_trajectories(players, query.system, window).await?;

    Ok(Json(data))
}
