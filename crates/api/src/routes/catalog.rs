//! Route definitions for the lookup endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Lookup routes merged at the API root.
///
/// ```text
/// GET /seasons/active    -> active_season
/// GET /leagues           -> list_leagues
/// GET /leagues/{id}/fee  -> league_fee
/// GET /teams             -> list_teams
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seasons/active", get(catalog::active_season))
        .route("/leagues", get(catalog::list_leagues))
        .route("/leagues/{id}/fee", get(catalog::league_fee))
        .route("/teams", get(catalog::list_teams))
}
