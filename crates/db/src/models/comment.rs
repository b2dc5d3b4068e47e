//! Skill comment model and DTOs.

use serde::Serialize;
use skilltrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A comment row joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillComment {
    pub id: DbId,
    pub username: String,
    pub category: String,
    pub skill_name: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment.
pub struct CreateComment {
    pub user_id: DbId,
    pub category: String,
    pub skill_name: String,
    pub body: String,
}
