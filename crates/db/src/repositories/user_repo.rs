//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::UserWithPosition;

/// Read operations for staff logins.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by username, joined with their position so callers can
    /// gate roster administration on `manages_call_ups`.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserWithPosition>, sqlx::Error> {
        sqlx::query_as::<_, UserWithPosition>(
            "SELECT u.id, u.username, u.password_hash, u.display_name, u.is_active, \
                    p.name AS position, p.manages_call_ups \
             FROM users u \
             JOIN positions p ON p.id = u.position_id \
             WHERE u.username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }
}
