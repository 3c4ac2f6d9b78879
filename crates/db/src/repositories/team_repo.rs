//! Repository for the `teams` table.

use callup_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::Team;

/// Column list for `teams` queries.
const COLUMNS: &str = "id, name, coach_id, created_at";

/// Read operations for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// List the teams coached by the given user, ordered by name.
    pub async fn list_by_coach(pool: &PgPool, coach_id: DbId) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teams \
             WHERE coach_id = $1 \
             ORDER BY name"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(coach_id)
            .fetch_all(pool)
            .await
    }
}
