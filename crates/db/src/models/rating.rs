//! Skill rating model and DTOs.

use serde::Serialize;
use skilltrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One user's rating of a skill, from the `skill_ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillRating {
    pub user_id: DbId,
    pub category: String,
    pub skill_name: String,
    /// 1..=5 inclusive, enforced by a CHECK constraint.
    pub rating: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a rating.
pub struct UpsertRating {
    pub user_id: DbId,
    pub category: String,
    pub skill_name: String,
    pub rating: i16,
}
