//! Repository for the `call_ups` and `call_up_players` tables.

use callup_core::types::DbId;
use sqlx::PgPool;

use crate::models::call_up::{
    CallUp, CallUpKey, CallUpSummaryRow, ConvenedStats, CreateCallUp, RosterEntry,
};
use crate::models::player::AvailablePlayer;

/// Column list for `call_ups` queries.
const COLUMNS: &str =
    "season_id, league_id, category, starts_on, ends_on, is_closed, created_at, updated_at";

/// Operations on call-up headers and their roster rows.
pub struct CallUpRepo;

impl CallUpRepo {
    /// Find a call-up header by its composite key.
    pub async fn find(pool: &PgPool, key: &CallUpKey) -> Result<Option<CallUp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM call_ups \
             WHERE season_id = $1 AND league_id = $2 AND category = $3"
        );
        sqlx::query_as::<_, CallUp>(&query)
            .bind(key.season_id)
            .bind(key.league_id)
            .bind(&key.category)
            .fetch_optional(pool)
            .await
    }

    /// Create a call-up header and seed its roster with every active player
    /// of the category not already present, in one transaction.
    ///
    /// The header insert is `ON CONFLICT DO NOTHING` on the composite key,
    /// so re-running for an existing window never duplicates the header and
    /// seeds only the missing players. Returns the number of roster rows
    /// inserted.
    pub async fn create_with_roster(
        pool: &PgPool,
        input: &CreateCallUp,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO call_ups (season_id, league_id, category, starts_on, ends_on) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (season_id, league_id, category) DO NOTHING",
        )
        .bind(input.season_id)
        .bind(input.league_id)
        .bind(&input.category)
        .bind(input.starts_on)
        .bind(input.ends_on)
        .execute(&mut *tx)
        .await?;

        let seeded = sqlx::query(
            "INSERT INTO call_up_players (season_id, league_id, category, player_id) \
             SELECT $1, $2, $3, p.id \
             FROM players p \
             WHERE p.is_active AND p.category = $3 \
               AND NOT EXISTS ( \
                   SELECT 1 FROM call_up_players d \
                   WHERE d.season_id = $1 AND d.league_id = $2 \
                     AND d.category = $3 AND d.player_id = p.id \
               )",
        )
        .bind(input.season_id)
        .bind(input.league_id)
        .bind(&input.category)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;
        Ok(seeded)
    }

    /// Active players not yet on the call-up's roster, ordered by name.
    ///
    /// By default only players whose home category matches the call-up's;
    /// with `include_all_categories` every active player qualifies (feeds
    /// the cross-category invite picker).
    pub async fn available_players(
        pool: &PgPool,
        key: &CallUpKey,
        include_all_categories: bool,
    ) -> Result<Vec<AvailablePlayer>, sqlx::Error> {
        let category_filter = if include_all_categories {
            ""
        } else {
            "AND p.category = $3 "
        };
        let query = format!(
            "SELECT p.id, p.name, p.category \
             FROM players p \
             WHERE p.is_active \
               {category_filter}\
               AND NOT EXISTS ( \
                   SELECT 1 FROM call_up_players d \
                   WHERE d.season_id = $1 AND d.league_id = $2 \
                     AND d.category = $3 AND d.player_id = p.id \
               ) \
             ORDER BY p.name"
        );
        sqlx::query_as::<_, AvailablePlayer>(&query)
            .bind(key.season_id)
            .bind(key.league_id)
            .bind(&key.category)
            .fetch_all(pool)
            .await
    }

    /// Mark a roster row convened at the given price.
    ///
    /// Clears `is_removed`; convoke and remove always set the two flags in
    /// opposition. Returns the number of rows touched.
    pub async fn convoke(
        pool: &PgPool,
        key: &CallUpKey,
        player_id: DbId,
        price: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE call_up_players \
             SET price = $5, is_convened = TRUE, is_removed = FALSE, updated_at = NOW() \
             WHERE season_id = $1 AND league_id = $2 AND category = $3 AND player_id = $4",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .bind(player_id)
        .bind(price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Mark a roster row removed, regardless of prior state.
    pub async fn remove_player(
        pool: &PgPool,
        key: &CallUpKey,
        player_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE call_up_players \
             SET is_convened = FALSE, is_removed = TRUE, updated_at = NOW() \
             WHERE season_id = $1 AND league_id = $2 AND category = $3 AND player_id = $4",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .bind(player_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Add a player to the roster outside the bulk seeding path. The
    /// player's home category may differ from the call-up's.
    ///
    /// Returns 0 when no such player exists. Inviting a player already on
    /// the roster violates the composite primary key and surfaces as a
    /// unique-constraint error.
    pub async fn invite(
        pool: &PgPool,
        key: &CallUpKey,
        player_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO call_up_players (season_id, league_id, category, player_id) \
             SELECT $1, $2, $3, p.id \
             FROM players p \
             WHERE p.id = $4",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .bind(player_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Override one roster row's price.
    pub async fn update_price(
        pool: &PgPool,
        key: &CallUpKey,
        player_id: DbId,
        price: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE call_up_players \
             SET price = $5, updated_at = NOW() \
             WHERE season_id = $1 AND league_id = $2 AND category = $3 AND player_id = $4",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .bind(player_id)
        .bind(price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Close a call-up. One-way; closing an already-closed call-up is a
    /// no-op that still reports the row as touched.
    pub async fn close(pool: &PgPool, key: &CallUpKey) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE call_ups \
             SET is_closed = TRUE, updated_at = NOW() \
             WHERE season_id = $1 AND league_id = $2 AND category = $3",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Seed the roster from a team's membership: one row per active team
    /// member not already present. Returns the number of rows inserted.
    pub async fn seed_from_team(
        pool: &PgPool,
        key: &CallUpKey,
        team_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO call_up_players (season_id, league_id, category, player_id) \
             SELECT $1, $2, $3, tp.player_id \
             FROM team_players tp \
             JOIN players p ON p.id = tp.player_id \
             WHERE tp.team_id = $4 AND p.is_active \
               AND NOT EXISTS ( \
                   SELECT 1 FROM call_up_players d \
                   WHERE d.season_id = $1 AND d.league_id = $2 \
                     AND d.category = $3 AND d.player_id = tp.player_id \
               )",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .bind(team_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Season overview: every header of the season with season/league names
    /// and aggregates over convened roster rows. Headers with no roster
    /// rows still appear, with zero aggregates.
    pub async fn summary(
        pool: &PgPool,
        season_id: DbId,
    ) -> Result<Vec<CallUpSummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, CallUpSummaryRow>(
            "SELECT c.season_id, c.league_id, c.category, \
                    s.name AS season, l.name AS league, \
                    c.starts_on, c.ends_on, c.is_closed, \
                    COUNT(*) FILTER (WHERE d.is_convened) AS convened_count, \
                    COALESCE(SUM(d.price) FILTER (WHERE d.is_convened), 0)::BIGINT \
                        AS convened_total \
             FROM call_ups c \
             JOIN seasons s ON s.id = c.season_id \
             JOIN leagues l ON l.id = c.league_id \
             LEFT JOIN call_up_players d \
                 ON d.season_id = c.season_id \
                AND d.league_id = c.league_id \
                AND d.category = c.category \
             WHERE c.season_id = $1 \
             GROUP BY c.season_id, c.league_id, c.category, s.name, l.name, \
                      c.starts_on, c.ends_on, c.is_closed \
             ORDER BY l.name, c.category",
        )
        .bind(season_id)
        .fetch_all(pool)
        .await
    }

    /// The call-up's roster joined with player names and home categories,
    /// deriving the invited flag, ordered by player name.
    pub async fn roster(pool: &PgPool, key: &CallUpKey) -> Result<Vec<RosterEntry>, sqlx::Error> {
        sqlx::query_as::<_, RosterEntry>(
            "SELECT d.player_id, p.name, p.category, d.price, \
                    d.is_convened, d.is_removed, \
                    (d.category <> p.category) AS is_invited \
             FROM call_up_players d \
             JOIN players p ON p.id = d.player_id \
             WHERE d.season_id = $1 AND d.league_id = $2 AND d.category = $3 \
             ORDER BY p.name",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .fetch_all(pool)
        .await
    }

    /// Convened-player count and price total for one call-up.
    pub async fn convened_stats(
        pool: &PgPool,
        key: &CallUpKey,
    ) -> Result<ConvenedStats, sqlx::Error> {
        sqlx::query_as::<_, ConvenedStats>(
            "SELECT COUNT(*) FILTER (WHERE is_convened) AS convened_count, \
                    COALESCE(SUM(price) FILTER (WHERE is_convened), 0)::BIGINT \
                        AS convened_total \
             FROM call_up_players \
             WHERE season_id = $1 AND league_id = $2 AND category = $3",
        )
        .bind(key.season_id)
        .bind(key.league_id)
        .bind(&key.category)
        .fetch_one(pool)
        .await
    }
}
