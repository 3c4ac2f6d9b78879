//! Repository for the `seasons` table.

use sqlx::PgPool;

use crate::models::season::Season;

/// Column list for `seasons` queries.
const COLUMNS: &str = "id, name, is_active, created_at";

/// Read operations for seasons. Seasons are administered out of band;
/// this service only resolves the active one.
pub struct SeasonRepo;

impl SeasonRepo {
    /// The currently active season. Exactly one row is active by
    /// convention; if several are flagged, the most recent wins.
    pub async fn active(pool: &PgPool) -> Result<Option<Season>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM seasons \
             WHERE is_active \
             ORDER BY id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Season>(&query).fetch_optional(pool).await
    }
}
