//! The fixed achievement catalog and its evaluation.
//!
//! Achievements are code-defined and additive-only: new ones may be appended,
//! but ids, targets, and the declaration order of existing entries are part
//! of the API contract. Progress and unlock state are derived live from a
//! profile snapshot and never persisted.

use serde::Serialize;

use crate::progress::ProfileSnapshot;

/// Target for `first_skill`: complete one skill.
pub const FIRST_SKILL_TARGET: usize = 1;
/// Target for `skill_explorer`: complete five skills.
pub const SKILL_EXPLORER_TARGET: usize = 5;
/// Target for `multi_category`: complete skills in three distinct categories.
pub const MULTI_CATEGORY_TARGET: usize = 3;

/// An achievement with live-computed progress and unlock state.
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
    pub progress: usize,
    pub target: usize,
}

impl Achievement {
    fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        progress: usize,
        target: usize,
    ) -> Self {
        Self {
            id,
            name,
            description,
            unlocked: progress >= target,
            progress,
            target,
        }
    }
}

/// Evaluate the full achievement catalog against a profile snapshot.
///
/// Returned in declaration order; progress is clamped to the target so a
/// client can render `progress/target` bars directly.
pub fn evaluate_achievements(snapshot: &ProfileSnapshot) -> Vec<Achievement> {
    let completed = snapshot.total_completed();
    let categories = snapshot.categories_with_completion();

    vec![
        Achievement::new(
            "first_skill",
            "First Steps",
            "Complete your first skill",
            completed.min(FIRST_SKILL_TARGET),
            FIRST_SKILL_TARGET,
        ),
        Achievement::new(
            "skill_explorer",
            "Skill Explorer",
            "Complete 5 skills",
            completed.min(SKILL_EXPLORER_TARGET),
            SKILL_EXPLORER_TARGET,
        ),
        Achievement::new(
            "multi_category",
            "Renaissance Person",
            "Complete skills in 3 different categories",
            categories,
            MULTI_CATEGORY_TARGET,
        ),
    ]
}
