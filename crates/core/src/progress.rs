//! Profile snapshot materialization and aggregate computation.
//!
//! A profile is stored as a flat `(category, skill) -> status` mapping. The
//! snapshot types here are derived views reconstructed from that mapping plus
//! the catalog on every read; they are never persisted. Materialization
//! guarantees the profile invariant: the snapshot's skill set always equals
//! the catalog's skill set exactly, regardless of what the store holds.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::status::SkillStatus;

/// The flat status mapping read from the profile store, keyed by
/// `(category, skill name)`.
pub type StatusMap = HashMap<(String, String), SkillStatus>;

/// One skill's progress within a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SkillProgress {
    pub skill_name: String,
    pub description: String,
    pub status: SkillStatus,
}

/// All of one category's skill progress within a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
    pub category_name: String,
    pub skills: Vec<SkillProgress>,
}

/// A user's full progress profile, materialized against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSnapshot {
    pub username: String,
    pub categories: Vec<CategoryProgress>,
}

impl ProfileSnapshot {
    /// Build a snapshot from the stored status mapping.
    ///
    /// Every catalog skill appears exactly once, in catalog order. Skills
    /// missing from the mapping default to `NotStarted`; mapping entries for
    /// skills no longer in the catalog are dropped.
    pub fn materialize(catalog: &Catalog, username: &str, statuses: &StatusMap) -> Self {
        let categories = catalog
            .category_entries()
            .iter()
            .map(|category| CategoryProgress {
                category_name: category.name.clone(),
                skills: category
                    .skills
                    .iter()
                    .map(|skill| SkillProgress {
                        skill_name: skill.name.clone(),
                        description: skill.description.clone(),
                        status: statuses
                            .get(&(category.name.clone(), skill.name.clone()))
                            .copied()
                            .unwrap_or(SkillStatus::NotStarted),
                    })
                    .collect(),
            })
            .collect();

        Self {
            username: username.to_string(),
            categories,
        }
    }

    /// Count of `Completed` skills across all categories.
    pub fn total_completed(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .filter(|s| s.status == SkillStatus::Completed)
            .count()
    }

    /// Total number of skills in the profile (equals the catalog size).
    pub fn total_skills(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    /// `(completed, total)` restricted to one category. Unknown categories
    /// yield `(0, 0)`.
    pub fn category_progress(&self, category_name: &str) -> (usize, usize) {
        self.categories
            .iter()
            .find(|c| c.category_name == category_name)
            .map(|c| {
                let completed = c
                    .skills
                    .iter()
                    .filter(|s| s.status == SkillStatus::Completed)
                    .count();
                (completed, c.skills.len())
            })
            .unwrap_or((0, 0))
    }

    /// Count of distinct categories with at least one `Completed` skill.
    pub fn categories_with_completion(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| c.skills.iter().any(|s| s.status == SkillStatus::Completed))
            .count()
    }
}
