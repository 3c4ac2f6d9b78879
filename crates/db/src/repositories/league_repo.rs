//! Repository for the `leagues` and `league_fees` tables.

use callup_core::types::DbId;
use sqlx::PgPool;

use crate::models::league::League;

/// Column list for `leagues` queries.
const COLUMNS: &str = "id, name, is_active, created_at";

/// Read operations for leagues and their configured fees.
pub struct LeagueRepo;

impl LeagueRepo {
    /// List active leagues, ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<League>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leagues \
             WHERE is_active \
             ORDER BY name"
        );
        sqlx::query_as::<_, League>(&query).fetch_all(pool).await
    }

    /// The league's fixed convocation fee. `None` when the league has no
    /// fee configured.
    pub async fn fee(pool: &PgPool, league_id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT amount FROM league_fees WHERE league_id = $1")
            .bind(league_id)
            .fetch_optional(pool)
            .await
    }
}
