//! Skill status lifecycle and transition validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a single skill within a user's profile.
///
/// The derived `Ord` follows the progression order
/// `NotStarted < InProgress < Completed`, which is what
/// [`validate_transition`] is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl SkillStatus {
    /// Storage/wire form of the status (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown skill status '{other}'"
            ))),
        }
    }
}

/// Validate a status transition, enforcing forward-only progression.
///
/// Accepted:
/// - idempotent re-writes (`from == to`)
/// - any forward move, including the skip `NotStarted -> Completed`
///
/// Rejected with [`CoreError::InvalidTransition`]:
/// - any regression (e.g. `Completed -> InProgress`)
pub fn validate_transition(from: SkillStatus, to: SkillStatus) -> Result<(), CoreError> {
    if to < from {
        return Err(CoreError::InvalidTransition { from, to });
    }
    Ok(())
}
