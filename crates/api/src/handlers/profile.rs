//! Handlers for the authenticated user's progress profile and achievements.
//!
//! The read path materializes the profile lazily (every catalog skill gets a
//! `NotStarted` row on first access), then rebuilds a snapshot from the flat
//! status mapping. The write path never creates rows: updating a skill on a
//! profile that was never materialized is a 404, so reads and writes stay two
//! distinct operations.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use skilltrack_core::achievements::{evaluate_achievements, Achievement};
use skilltrack_core::error::CoreError;
use skilltrack_core::progress::{ProfileSnapshot, StatusMap};
use skilltrack_core::rank::RankInfo;
use skilltrack_core::status::{validate_transition, SkillStatus};
use skilltrack_db::models::progress::SkillProgressRow;
use skilltrack_db::repositories::ProgressRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /profile/skills/{category}/{skill}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: SkillStatus,
}

/// Aggregate numbers attached to every profile response.
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub total_completed: usize,
    pub total_skills: usize,
    pub rank: RankInfo,
}

/// Full profile response: the snapshot plus derived summary numbers.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: ProfileSnapshot,
    pub summary: ProfileSummary,
}

impl From<ProfileSnapshot> for ProfileResponse {
    fn from(profile: ProfileSnapshot) -> Self {
        let total_completed = profile.total_completed();
        let summary = ProfileSummary {
            total_completed,
            total_skills: profile.total_skills(),
            rank: RankInfo::from_completed(total_completed),
        };
        Self { profile, summary }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/profile
///
/// Get-or-create the authenticated user's profile. Materializes missing
/// `NotStarted` rows first, so a brand-new user gets a full profile without
/// any registration step. Idempotent.
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let snapshot = materialize_profile(&state, &user).await?;
    Ok(Json(DataResponse {
        data: snapshot.into(),
    }))
}

/// PUT /api/v1/profile/skills/{category}/{skill}/status
///
/// Overwrite one skill's status. 404 if the skill is not in the catalog or
/// the profile has not been materialized; 409 if the transition would
/// regress the skill or the status changed concurrently. Returns the
/// updated full profile.
pub async fn set_skill_status(
    user: AuthUser,
    State(state): State<AppState>,
    Path((category, skill_name)): Path<(String, String)>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    // The skill must exist in the catalog.
    state.catalog.get(&category, &skill_name)?;

    // The profile row must already exist; writes never create it.
    let row = ProgressRepo::get_status(&state.pool, user.user_id, &category, &skill_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "profile",
                id: user.username.clone(),
            })
        })?;

    let current = row.status()?;
    validate_transition(current, input.status)?;

    // Compare-and-swap: the write only applies while the status still equals
    // the value validated above, so concurrent writers cannot interleave a
    // regression past the transition check.
    let updated = ProgressRepo::set_status(
        &state.pool,
        user.user_id,
        &category,
        &skill_name,
        current,
        input.status,
    )
    .await?;
    if !updated {
        return match ProgressRepo::get_status(&state.pool, user.user_id, &category, &skill_name)
            .await?
        {
            // Row vanished between read and write (user deleted); treat as
            // the same missing-profile case.
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "profile",
                id: user.username.clone(),
            })),
            // A concurrent write changed the status since we read it.
            // Re-validate against the fresh value so a now-invalid
            // transition surfaces as such; otherwise ask the client to
            // retry against the new state.
            Some(fresh_row) => {
                let fresh = fresh_row.status()?;
                validate_transition(fresh, input.status)?;
                Err(AppError::Core(CoreError::Conflict(
                    "Skill status changed concurrently, retry the update".into(),
                )))
            }
        };
    }

    tracing::info!(
        user_id = user.user_id,
        category = %category,
        skill = %skill_name,
        status = %input.status,
        "Skill status updated"
    );

    let snapshot = read_snapshot(&state, &user).await?;
    Ok(Json(DataResponse {
        data: snapshot.into(),
    }))
}

/// GET /api/v1/profile/achievements
///
/// Evaluate the fixed achievement catalog against a live profile snapshot.
pub async fn get_achievements(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Achievement>>>> {
    let snapshot = materialize_profile(&state, &user).await?;
    Ok(Json(DataResponse {
        data: evaluate_achievements(&snapshot),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Materialize missing rows for the user, then read a fresh snapshot.
async fn materialize_profile(state: &AppState, user: &AuthUser) -> AppResult<ProfileSnapshot> {
    let skills: Vec<(String, String)> = state
        .catalog
        .iter_skills()
        .map(|(category, skill)| (category.to_string(), skill.name.clone()))
        .collect();
    let created = ProgressRepo::materialize(&state.pool, user.user_id, &skills).await?;
    if created > 0 {
        tracing::debug!(user_id = user.user_id, rows = created, "Profile materialized");
    }
    read_snapshot(state, user).await
}

/// Read the stored mapping and rebuild the snapshot against the catalog.
async fn read_snapshot(state: &AppState, user: &AuthUser) -> AppResult<ProfileSnapshot> {
    let rows = ProgressRepo::statuses_for_user(&state.pool, user.user_id).await?;
    let statuses = rows_to_status_map(rows)?;
    Ok(ProfileSnapshot::materialize(
        &state.catalog,
        &user.username,
        &statuses,
    ))
}

/// Convert store rows into the core status mapping, surfacing corrupt rows.
fn rows_to_status_map(rows: Vec<SkillProgressRow>) -> Result<StatusMap, CoreError> {
    rows.into_iter()
        .map(|row| {
            let status = row.status()?;
            Ok(((row.category, row.skill_name), status))
        })
        .collect()
}
