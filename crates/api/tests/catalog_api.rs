//! HTTP-level integration tests for the lookup endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_league, seed_player, seed_season, seed_team, seed_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn active_season_is_returned(pool: PgPool) {
    seed_season(&pool, "2023", false).await;
    let current = seed_season(&pool, "2024", true).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/seasons/active").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], current);
    assert_eq!(json["data"]["name"], "2024");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_active_season_returns_404(pool: PgPool) {
    seed_season(&pool, "2023", false).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/seasons/active").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn leagues_are_listed_by_name(pool: PgPool) {
    seed_league(&pool, "Premier", None).await;
    seed_league(&pool, "Apertura", Some(300)).await;
    sqlx::query("INSERT INTO leagues (name, is_active) VALUES ('Defunct', FALSE)")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/leagues").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Apertura", "Premier"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn league_fee_falls_back_to_zero(pool: PgPool) {
    let with_fee = seed_league(&pool, "Premier", Some(500)).await;
    let without_fee = seed_league(&pool, "Friendly Cup", None).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/leagues/{with_fee}/fee")).await).await;
    assert_eq!(json["data"]["amount"], 500);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/leagues/{without_fee}/fee")).await).await;
    assert_eq!(json["data"]["amount"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn teams_are_scoped_to_their_coach(pool: PgPool) {
    let pedro = seed_user(&pool, "pedro", "pw-pedro-1", "coach", true).await;
    let sofia = seed_user(&pool, "sofia", "pw-sofia-1", "coach", true).await;
    let ana = seed_player(&pool, "Ana", "Sub-17", true).await;
    seed_team(&pool, "Tigres", pedro, &[ana]).await;
    seed_team(&pool, "Aguilas", pedro, &[]).await;
    seed_team(&pool, "Pumas", sofia, &[]).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/teams?coach_id={pedro}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Aguilas", "Tigres"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn teams_without_coach_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/teams").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
