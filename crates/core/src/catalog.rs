//! The skill catalog: an immutable registry of categories and skill
//! definitions.
//!
//! The catalog is loaded once at startup (from JSON) and treated as read-only
//! for the lifetime of the process. Skill identity is the
//! `(category, skill name)` pair, validated to be globally unique at load
//! time. A default catalog ships embedded in the crate for local development
//! and tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Embedded default catalog used when no `CATALOG_PATH` is configured.
const DEFAULT_CATALOG_JSON: &str = include_str!("assets/default_catalog.json");

/// A single skill definition. Immutable; owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,
    pub description: String,
    /// Ordered instructional steps.
    pub steps: Vec<String>,
    /// Reference links (tutorial videos etc.).
    pub video_links: Vec<String>,
}

/// A named category holding an ordered list of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    pub skills: Vec<SkillDefinition>,
}

/// The full catalog, as parsed from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<CatalogCategory>,
}

impl Catalog {
    /// Parse and validate a catalog from a JSON string.
    ///
    /// Fails with [`CoreError::Validation`] on malformed JSON, duplicate
    /// category names, duplicate skill names within a category, or an empty
    /// catalog.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Malformed catalog JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The embedded default catalog. Panics only if the embedded asset is
    /// itself invalid, which is a build defect caught by tests.
    pub fn default_catalog() -> Self {
        Self::from_json_str(DEFAULT_CATALOG_JSON)
            .expect("embedded default catalog must be valid")
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.categories.is_empty() {
            return Err(CoreError::Validation("Catalog has no categories".into()));
        }
        let mut seen_categories = HashSet::new();
        for category in &self.categories {
            if !seen_categories.insert(category.name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate category '{}'",
                    category.name
                )));
            }
            let mut seen_skills = HashSet::new();
            for skill in &category.skills {
                if !seen_skills.insert(skill.name.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "Duplicate skill '{}' in category '{}'",
                        skill.name, category.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Category names in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// The categories with their skills, in catalog order.
    pub fn category_entries(&self) -> &[CatalogCategory] {
        &self.categories
    }

    /// Skills in the given category, or `NotFound` if the category is
    /// unknown.
    pub fn skills_in(&self, category: &str) -> Result<&[SkillDefinition], CoreError> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.skills.as_slice())
            .ok_or_else(|| CoreError::NotFound {
                entity: "category",
                id: category.to_string(),
            })
    }

    /// Look up a single skill definition by `(category, name)`.
    pub fn get(&self, category: &str, skill_name: &str) -> Result<&SkillDefinition, CoreError> {
        self.skills_in(category)?
            .iter()
            .find(|s| s.name == skill_name)
            .ok_or_else(|| CoreError::skill_not_found(category, skill_name))
    }

    /// Total number of skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    /// Iterate over every `(category, skill)` pair in catalog order.
    pub fn iter_skills(&self) -> impl Iterator<Item = (&str, &SkillDefinition)> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(move |s| (c.name.as_str(), s)))
    }
}
