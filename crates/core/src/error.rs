use crate::status::SkillStatus;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: SkillStatus, to: SkillStatus },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the common "skill not found in catalog" case.
    pub fn skill_not_found(category: &str, skill_name: &str) -> Self {
        CoreError::NotFound {
            entity: "skill",
            id: format!("{category}/{skill_name}"),
        }
    }
}
