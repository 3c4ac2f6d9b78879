//! Call-up header and roster models and DTOs.

use callup_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `call_ups` table: one roster window per
/// (season, league, category).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CallUp {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub is_closed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A roster row joined with the player's name and home category.
///
/// `is_invited` is derived, never stored: the roster category differs from
/// the player's home category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RosterEntry {
    pub player_id: DbId,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub is_convened: bool,
    pub is_removed: bool,
    pub is_invited: bool,
}

/// One line of the season overview: a call-up header with season/league
/// names and aggregates over its convened roster rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CallUpSummaryRow {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    pub season: String,
    pub league: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub is_closed: bool,
    pub convened_count: i64,
    pub convened_total: i64,
}

/// Convened-player count and price total for one call-up.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct ConvenedStats {
    pub convened_count: i64,
    pub convened_total: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads and shared identifiers)
// ---------------------------------------------------------------------------

/// Identifies one call-up. Doubles as the query/body shape for operations
/// that address a whole roster window.
#[derive(Debug, Clone, Deserialize)]
pub struct CallUpKey {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
}

/// DTO for creating a call-up header and seeding its roster.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCallUp {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

/// DTO for operations that address one player within a call-up
/// (convoke, remove, invite).
#[derive(Debug, Clone, Deserialize)]
pub struct RosterAction {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    pub player_id: DbId,
}

/// DTO for overriding one roster row's price.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceUpdate {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    pub player_id: DbId,
    pub price: i64,
}

/// DTO for seeding a call-up's roster from a team's membership.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFromTeam {
    pub season_id: DbId,
    pub league_id: DbId,
    pub category: String,
    pub team_id: DbId,
}

impl RosterAction {
    /// The call-up this action addresses.
    pub fn key(&self) -> CallUpKey {
        CallUpKey {
            season_id: self.season_id,
            league_id: self.league_id,
            category: self.category.clone(),
        }
    }
}

impl PriceUpdate {
    /// The call-up this update addresses.
    pub fn key(&self) -> CallUpKey {
        CallUpKey {
            season_id: self.season_id,
            league_id: self.league_id,
            category: self.category.clone(),
        }
    }
}

impl SeedFromTeam {
    /// The call-up this seeding addresses.
    pub fn key(&self) -> CallUpKey {
        CallUpKey {
            season_id: self.season_id,
            league_id: self.league_id,
            category: self.category.clone(),
        }
    }
}
