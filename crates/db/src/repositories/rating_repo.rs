//! Repository for the `skill_ratings` table.

use sqlx::PgPool;

use crate::models::rating::{SkillRating, UpsertRating};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, category, skill_name, rating, created_at, updated_at";

/// Provides operations for skill ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert or overwrite one user's rating of a skill.
    pub async fn upsert(pool: &PgPool, input: &UpsertRating) -> Result<SkillRating, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_ratings (user_id, category, skill_name, rating)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, category, skill_name)
             DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillRating>(&query)
            .bind(input.user_id)
            .bind(&input.category)
            .bind(&input.skill_name)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Mean rating for a skill, or `None` if nobody has rated it yet.
    pub async fn mean_for_skill(
        pool: &PgPool,
        category: &str,
        skill_name: &str,
    ) -> Result<Option<f64>, sqlx::Error> {
        let row: (Option<f64>,) = sqlx::query_as(
            "SELECT AVG(rating)::float8 FROM skill_ratings
             WHERE category = $1 AND skill_name = $2",
        )
        .bind(category)
        .bind(skill_name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
