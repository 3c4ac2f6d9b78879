use callup_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A player eligible for a call-up but not yet on its roster. `category`
/// is the player's home age/skill bracket.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailablePlayer {
    pub id: DbId,
    pub name: String,
    pub category: String,
}
