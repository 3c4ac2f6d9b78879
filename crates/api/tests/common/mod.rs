//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` so the tests exercise the
//! same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use callup_api::config::ServerConfig;
use callup_api::routes;
use callup_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Database fixtures
// ---------------------------------------------------------------------------

pub async fn seed_season(pool: &PgPool, name: &str, active: bool) -> i64 {
    sqlx::query_scalar("INSERT INTO seasons (name, is_active) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(active)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_league(pool: &PgPool, name: &str, fee: Option<i64>) -> i64 {
    let id: i64 = sqlx::query_scalar("INSERT INTO leagues (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    if let Some(amount) = fee {
        sqlx::query("INSERT INTO league_fees (league_id, amount) VALUES ($1, $2)")
            .bind(id)
            .bind(amount)
            .execute(pool)
            .await
            .unwrap();
    }
    id
}

pub async fn seed_player(pool: &PgPool, name: &str, category: &str, active: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO players (name, category, is_active) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(category)
    .bind(active)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Create a user with a real Argon2id hash for the given password, in the
/// named position (one of the seeded `positions` rows).
pub async fn seed_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    position: &str,
    active: bool,
) -> i64 {
    let hash = callup_api::auth::password::hash_password(password).unwrap();
    let position_id: i64 = sqlx::query_scalar("SELECT id FROM positions WHERE name = $1")
        .bind(position)
        .fetch_one(pool)
        .await
        .unwrap();
    sqlx::query_scalar(
        "INSERT INTO users (username, password_hash, display_name, position_id, is_active) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(username)
    .bind(hash)
    .bind(username)
    .bind(position_id)
    .bind(active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_team(pool: &PgPool, name: &str, coach_id: i64, players: &[i64]) -> i64 {
    let team: i64 =
        sqlx::query_scalar("INSERT INTO teams (name, coach_id) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(coach_id)
            .fetch_one(pool)
            .await
            .unwrap();
    for player in players {
        sqlx::query("INSERT INTO team_players (team_id, player_id) VALUES ($1, $2)")
            .bind(team)
            .bind(player)
            .execute(pool)
            .await
            .unwrap();
    }
    team
}
