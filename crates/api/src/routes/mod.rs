pub mod auth;
pub mod call_ups;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
///
/// /call-ups                        create header + seed roster (POST)
/// /call-ups/summary                active-season overview (GET)
/// /call-ups/players                roster + convened aggregates (GET)
/// /call-ups/available-players      players not yet on the roster (GET)
/// /call-ups/convoke                convoke at the league fee (POST)
/// /call-ups/remove                 mark removed (POST)
/// /call-ups/invite                 cross-category invite (POST)
/// /call-ups/update-price           override one price (POST)
/// /call-ups/close                  one-way close (POST)
/// /call-ups/seed-from-team         seed roster from a team (POST)
///
/// /seasons/active                  active season (GET)
/// /leagues                         active leagues (GET)
/// /leagues/{id}/fee                per-league fee (GET)
/// /teams?coach_id=                 teams by coach (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login only; no sessions are issued).
        .nest("/auth", auth::router())
        // Call-up headers and rosters.
        .nest("/call-ups", call_ups::router())
        // Lookup endpoints backing the UI selectors.
        .merge(catalog::router())
}
