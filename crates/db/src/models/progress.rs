//! Skill progress row model (the profile store).

use skilltrack_core::error::CoreError;
use skilltrack_core::status::SkillStatus;
use skilltrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One `(user, category, skill)` status row from the `skill_progress` table.
///
/// The status is stored as TEXT with a CHECK constraint; [`Self::status`]
/// parses it into the domain enum at the boundary.
#[derive(Debug, Clone, FromRow)]
pub struct SkillProgressRow {
    pub user_id: DbId,
    pub category: String,
    pub skill_name: String,
    pub status: String,
    pub updated_at: Timestamp,
}

impl SkillProgressRow {
    /// Parse the stored status text into the domain enum.
    ///
    /// A row that fails to parse indicates storage corruption (the CHECK
    /// constraint should make this unreachable) and is surfaced as
    /// [`CoreError::Internal`].
    pub fn status(&self) -> Result<SkillStatus, CoreError> {
        self.status.parse().map_err(|_| {
            CoreError::Internal(format!(
                "Corrupt skill status '{}' for {}/{}",
                self.status, self.category, self.skill_name
            ))
        })
    }
}
