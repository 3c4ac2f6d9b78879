use callup_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `leagues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct League {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// A row from the `league_fees` table: the fixed per-player fee a league
/// charges when a player is convoked.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeagueFee {
    pub league_id: DbId,
    pub amount: i64,
}
