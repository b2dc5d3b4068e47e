//! Repository for the `skill_progress` table (the profile store).
//!
//! Read and write paths are deliberately asymmetric:
//!
//! - [`ProgressRepo::materialize`] lazily creates the full `NotStarted` row
//!   set for a user and is idempotent, so the read path can call it freely.
//! - [`ProgressRepo::set_status`] only ever UPDATEs an existing row and
//!   reports whether one was hit; it never creates rows, so a write cannot
//!   silently resurrect a profile that was never (or no longer) materialized.
//!
//! Every call is a single statement, so same-profile writes serialize on the
//! row and reads observe a consistent snapshot.

use skilltrack_core::status::SkillStatus;
use skilltrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::SkillProgressRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, category, skill_name, status, updated_at";

/// Provides profile-store operations for skill progress.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Read the full status mapping for a user in one consistent snapshot.
    pub async fn statuses_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SkillProgressRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skill_progress
             WHERE user_id = $1
             ORDER BY category, skill_name"
        );
        sqlx::query_as::<_, SkillProgressRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert `NotStarted` rows for every given `(category, skill)` pair that
    /// the user does not already have. Idempotent; existing rows keep their
    /// status. Returns the number of rows created.
    pub async fn materialize(
        pool: &PgPool,
        user_id: DbId,
        skills: &[(String, String)],
    ) -> Result<u64, sqlx::Error> {
        let categories: Vec<&str> = skills.iter().map(|(c, _)| c.as_str()).collect();
        let names: Vec<&str> = skills.iter().map(|(_, n)| n.as_str()).collect();

        let result = sqlx::query(
            "INSERT INTO skill_progress (user_id, category, skill_name, status)
             SELECT $1, t.category, t.skill_name, 'not_started'
             FROM UNNEST($2::text[], $3::text[]) AS t(category, skill_name)
             ON CONFLICT (user_id, category, skill_name) DO NOTHING",
        )
        .bind(user_id)
        .bind(&categories)
        .bind(&names)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Read a single skill's progress row.
    pub async fn get_status(
        pool: &PgPool,
        user_id: DbId,
        category: &str,
        skill_name: &str,
    ) -> Result<Option<SkillProgressRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skill_progress
             WHERE user_id = $1 AND category = $2 AND skill_name = $3"
        );
        sqlx::query_as::<_, SkillProgressRow>(&query)
            .bind(user_id)
            .bind(category)
            .bind(skill_name)
            .fetch_optional(pool)
            .await
    }

    /// Compare-and-swap the status of one existing progress row.
    ///
    /// The update only applies while the stored status still equals `from`,
    /// so a caller that validated a transition against a value it read
    /// earlier cannot clobber a concurrent write. Returns `false` if no row
    /// exists for the triple or the stored status no longer matches `from`.
    /// Never creates rows.
    pub async fn set_status(
        pool: &PgPool,
        user_id: DbId,
        category: &str,
        skill_name: &str,
        from: SkillStatus,
        to: SkillStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE skill_progress
             SET status = $4, updated_at = NOW()
             WHERE user_id = $1 AND category = $2 AND skill_name = $3 AND status = $5",
        )
        .bind(user_id)
        .bind(category)
        .bind(skill_name)
        .bind(to.as_str())
        .bind(from.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Per-user completed counts over all materialized profiles, for the
    /// leaderboard. Users who have never materialized a profile do not
    /// appear; users with zero completions do.
    pub async fn completed_counts(pool: &PgPool) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT u.username,
                    COUNT(*) FILTER (WHERE sp.status = 'completed') AS completed
             FROM users u
             JOIN skill_progress sp ON sp.user_id = u.id
             GROUP BY u.username",
        )
        .fetch_all(pool)
        .await
    }
}
