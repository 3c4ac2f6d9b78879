//! Handlers for the `/call-ups` resource.
//!
//! A call-up is addressed by its composite key (season, league, category).
//! Roster mutations go through [`require_open`]: a closed call-up rejects
//! further changes with 409.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use callup_core::error::CoreError;
use callup_core::types::DbId;
use callup_db::models::call_up::{
    CallUp, CallUpKey, CreateCallUp, PriceUpdate, RosterAction, RosterEntry, SeedFromTeam,
};
use callup_db::repositories::{CallUpRepo, LeagueRepo, SeasonRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppJson, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /call-ups/available-players`.
#[derive(Debug, Deserialize)]
pub struct AvailablePlayersParams {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    /// When set, list active players of every category (feeds the
    /// cross-category invite picker). Defaults to the call-up's category.
    #[serde(default)]
    pub include_all_categories: bool,
}

/// Row-count result for the bulk seeding operations.
#[derive(Debug, Serialize)]
pub struct SeedResult {
    pub seeded_players: u64,
}

/// Response for `GET /call-ups/players`: the roster plus aggregates over
/// its convened rows.
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub players: Vec<RosterEntry>,
    pub convened_count: i64,
    pub convened_total: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/call-ups
///
/// Create a call-up header and seed its roster with every active player of
/// the category, skipping players already present. Re-creating an existing
/// window is idempotent at the roster level. 409 if the window is closed.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCallUp>,
) -> AppResult<impl IntoResponse> {
    validate_category(&input.category)?;
    if input.starts_on > input.ends_on {
        return Err(AppError::Core(CoreError::Validation(
            "starts_on must not be after ends_on".into(),
        )));
    }

    let key = CallUpKey {
        season_id: input.season_id,
        league_id: input.league_id,
        category: input.category.clone(),
    };
    if let Some(existing) = CallUpRepo::find(&state.pool, &key).await? {
        if existing.is_closed {
            return Err(closed(&key));
        }
    }

    let seeded = CallUpRepo::create_with_roster(&state.pool, &input).await?;

    tracing::info!(
        season_id = input.season_id,
        league_id = input.league_id,
        category = %input.category,
        seeded,
        "Call-up created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SeedResult {
                seeded_players: seeded,
            },
        }),
    ))
}

/// GET /api/v1/call-ups/summary
///
/// Season overview for the active season: one row per call-up with
/// convened-player count and convened price total.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let season = SeasonRepo::active(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No active season configured".into()))?;

    let rows = CallUpRepo::summary(&state.pool, season.id).await?;

    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/call-ups/players
///
/// The call-up's roster with player names, derived invited flags, and
/// aggregates over its convened rows.
pub async fn roster(
    State(state): State<AppState>,
    Query(key): Query<CallUpKey>,
) -> AppResult<impl IntoResponse> {
    let players = CallUpRepo::roster(&state.pool, &key).await?;
    let stats = CallUpRepo::convened_stats(&state.pool, &key).await?;

    Ok(Json(DataResponse {
        data: RosterResponse {
            players,
            convened_count: stats.convened_count,
            convened_total: stats.convened_total,
        },
    }))
}

/// GET /api/v1/call-ups/available-players
///
/// Active players not yet on the call-up's roster, ordered by name.
pub async fn available_players(
    State(state): State<AppState>,
    Query(params): Query<AvailablePlayersParams>,
) -> AppResult<impl IntoResponse> {
    let key = CallUpKey {
        season_id: params.season_id,
        league_id: params.league_id,
        category: params.category,
    };
    let players =
        CallUpRepo::available_players(&state.pool, &key, params.include_all_categories).await?;

    Ok(Json(DataResponse { data: players }))
}

/// POST /api/v1/call-ups/convoke
///
/// Mark a roster row convened at the league's configured fee. 404 if the
/// league has no fee configured.
pub async fn convoke(
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterAction>,
) -> AppResult<StatusCode> {
    let key = input.key();
    require_open(&state, &key).await?;

    let fee = LeagueRepo::fee(&state.pool, input.league_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "League fee",
            id: input.league_id,
        }))?;

    CallUpRepo::convoke(&state.pool, &key, input.player_id, fee).await?;

    tracing::info!(
        season_id = input.season_id,
        league_id = input.league_id,
        category = %input.category,
        player_id = input.player_id,
        fee,
        "Player convoked",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/call-ups/remove
///
/// Mark a roster row removed, regardless of prior state.
pub async fn remove(
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterAction>,
) -> AppResult<StatusCode> {
    let key = input.key();
    require_open(&state, &key).await?;

    CallUpRepo::remove_player(&state.pool, &key, input.player_id).await?;

    tracing::info!(
        season_id = input.season_id,
        league_id = input.league_id,
        category = %input.category,
        player_id = input.player_id,
        "Player removed from call-up",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/call-ups/invite
///
/// Add a player to the roster; their home category may differ from the
/// call-up's. 404 for an unknown player; 409 if already on the roster.
pub async fn invite(
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterAction>,
) -> AppResult<impl IntoResponse> {
    let key = input.key();
    require_open(&state, &key).await?;

    let inserted = CallUpRepo::invite(&state.pool, &key, input.player_id).await?;
    if inserted == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id: input.player_id,
        }));
    }

    tracing::info!(
        season_id = input.season_id,
        league_id = input.league_id,
        category = %input.category,
        player_id = input.player_id,
        "Player invited to call-up",
    );

    Ok(StatusCode::CREATED)
}

/// POST /api/v1/call-ups/update-price
///
/// Override one roster row's price. Negative prices are rejected
/// server-side.
pub async fn update_price(
    State(state): State<AppState>,
    AppJson(input): AppJson<PriceUpdate>,
) -> AppResult<StatusCode> {
    if input.price < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price must not be negative".into(),
        )));
    }

    let key = input.key();
    require_open(&state, &key).await?;

    CallUpRepo::update_price(&state.pool, &key, input.player_id, input.price).await?;

    tracing::info!(
        season_id = input.season_id,
        league_id = input.league_id,
        category = %input.category,
        player_id = input.player_id,
        price = input.price,
        "Roster price updated",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/call-ups/close
///
/// Close a call-up. One-way; closing an already-closed call-up is a no-op
/// success. Further roster mutations are rejected with 409.
pub async fn close(
    State(state): State<AppState>,
    AppJson(key): AppJson<CallUpKey>,
) -> AppResult<StatusCode> {
    let closed_rows = CallUpRepo::close(&state.pool, &key).await?;
    if closed_rows == 0 {
        return Err(missing(&key));
    }

    tracing::info!(
        season_id = key.season_id,
        league_id = key.league_id,
        category = %key.category,
        "Call-up closed",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/call-ups/seed-from-team
///
/// Seed the roster from a team's membership, skipping players already
/// present.
pub async fn seed_from_team(
    State(state): State<AppState>,
    AppJson(input): AppJson<SeedFromTeam>,
) -> AppResult<impl IntoResponse> {
    let key = input.key();
    require_open(&state, &key).await?;

    let seeded = CallUpRepo::seed_from_team(&state.pool, &key, input.team_id).await?;

    tracing::info!(
        season_id = input.season_id,
        league_id = input.league_id,
        category = %input.category,
        team_id = input.team_id,
        seeded,
        "Call-up seeded from team roster",
    );

    Ok(Json(DataResponse {
        data: SeedResult {
            seeded_players: seeded,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the call-up and reject the request if it does not exist (404) or is
/// closed (409).
async fn require_open(state: &AppState, key: &CallUpKey) -> AppResult<CallUp> {
    match CallUpRepo::find(&state.pool, key).await? {
        None => Err(missing(key)),
        Some(call_up) if call_up.is_closed => Err(closed(key)),
        Some(call_up) => Ok(call_up),
    }
}

fn validate_category(category: &str) -> AppResult<()> {
    if category.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "category must not be blank".into(),
        )));
    }
    Ok(())
}

fn missing(key: &CallUpKey) -> AppError {
    AppError::NotFound(format!(
        "No call-up for season {}, league {}, category '{}'",
        key.season_id, key.league_id, key.category
    ))
}

fn closed(key: &CallUpKey) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Call-up for season {}, league {}, category '{}' is closed",
        key.season_id, key.league_id, key.category
    )))
}
