//! Handlers for the lookup endpoints: seasons, leagues, fees, and teams.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use callup_core::types::DbId;
use callup_db::models::league::LeagueFee;
use callup_db::repositories::{LeagueRepo, SeasonRepo, TeamRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /teams`.
#[derive(Debug, Deserialize)]
pub struct TeamsParams {
    pub coach_id: DbId,
}

/// GET /api/v1/seasons/active
///
/// The currently active season. 404 when none is flagged.
pub async fn active_season(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let season = SeasonRepo::active(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No active season configured".into()))?;

    Ok(Json(DataResponse { data: season }))
}

/// GET /api/v1/leagues
///
/// Active leagues, ordered by name.
pub async fn list_leagues(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let leagues = LeagueRepo::list_active(&state.pool).await?;

    Ok(Json(DataResponse { data: leagues }))
}

/// GET /api/v1/leagues/{id}/fee
///
/// The league's configured per-player fee. Leagues without a configured
/// fee report amount 0 rather than 404, matching what the roster UI
/// expects when pre-filling the price column.
pub async fn league_fee(
    State(state): State<AppState>,
    Path(league_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let amount = LeagueRepo::fee(&state.pool, league_id).await?.unwrap_or(0);

    Ok(Json(DataResponse {
        data: LeagueFee { league_id, amount },
    }))
}

/// GET /api/v1/teams?coach_id=
///
/// Teams coached by the given user, ordered by name.
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamsParams>,
) -> AppResult<impl IntoResponse> {
    let teams = TeamRepo::list_by_coach(&state.pool, params.coach_id).await?;

    Ok(Json(DataResponse { data: teams }))
}
