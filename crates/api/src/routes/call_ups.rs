//! Route definitions for the `/call-ups` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::call_ups;
use crate::state::AppState;

/// Routes mounted at `/call-ups`.
///
/// ```text
/// POST   /                   -> create
/// GET    /summary            -> summary
/// GET    /players            -> roster
/// GET    /available-players  -> available_players
/// POST   /convoke            -> convoke
/// POST   /remove             -> remove
/// POST   /invite             -> invite
/// POST   /update-price       -> update_price
/// POST   /close              -> close
/// POST   /seed-from-team     -> seed_from_team
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(call_ups::create))
        .route("/summary", get(call_ups::summary))
        .route("/players", get(call_ups::roster))
        .route("/available-players", get(call_ups::available_players))
        .route("/convoke", post(call_ups::convoke))
        .route("/remove", post(call_ups::remove))
        .route("/invite", post(call_ups::invite))
        .route("/update-price", post(call_ups::update_price))
        .route("/close", post(call_ups::close))
        .route("/seed-from-team", post(call_ups::seed_from_team))
}
