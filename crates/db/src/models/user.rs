use callup_core::types::DbId;
use sqlx::FromRow;

/// A `users` row joined with its position.
///
/// Carries the password hash, so this type is deliberately NOT
/// serializable; handlers project it into a public profile instead.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithPosition {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub is_active: bool,
    pub position: String,
    pub manages_call_ups: bool,
}
