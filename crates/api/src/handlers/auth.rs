//! Handler for the `/auth` resource (login).

use axum::extract::State;
use axum::Json;
use callup_core::error::CoreError;
use callup_core::types::DbId;
use callup_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::error::{AppError, AppJson, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public user info returned on successful login. The client gates roster
/// administration on `manages_call_ups`.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub display_name: String,
    pub position: String,
    pub manages_call_ups: bool,
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and return the user's public
/// profile. No token or session is issued. Invalid credentials and
/// deactivated accounts get the same 401 so usernames cannot be probed.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    if input.username.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username and password are required".into(),
        )));
    }

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(invalid_credentials());
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid_credentials());
    }

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(DataResponse {
        data: UserProfile {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            position: user.position,
            manages_call_ups: user.manages_call_ups,
        },
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}
