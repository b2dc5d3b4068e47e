//! Repository for the `skill_comments` table.

use sqlx::PgPool;

use crate::models::comment::{CreateComment, SkillComment};

/// Provides operations for skill comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List all comments for one skill, newest first, with author usernames.
    pub async fn list_for_skill(
        pool: &PgPool,
        category: &str,
        skill_name: &str,
    ) -> Result<Vec<SkillComment>, sqlx::Error> {
        sqlx::query_as::<_, SkillComment>(
            "SELECT c.id, u.username, c.category, c.skill_name, c.body, c.created_at
             FROM skill_comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.category = $1 AND c.skill_name = $2
             ORDER BY c.created_at DESC",
        )
        .bind(category)
        .bind(skill_name)
        .fetch_all(pool)
        .await
    }

    /// Insert a new comment, returning the created row with the author's
    /// username resolved.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<SkillComment, sqlx::Error> {
        sqlx::query_as::<_, SkillComment>(
            "WITH inserted AS (
                 INSERT INTO skill_comments (user_id, category, skill_name, body)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, user_id, category, skill_name, body, created_at
             )
             SELECT i.id, u.username, i.category, i.skill_name, i.body, i.created_at
             FROM inserted i
             JOIN users u ON u.id = i.user_id",
        )
        .bind(input.user_id)
        .bind(&input.category)
        .bind(&input.skill_name)
        .bind(&input.body)
        .fetch_one(pool)
        .await
    }
}
