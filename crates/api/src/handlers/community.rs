//! Handlers for skill comments and ratings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use skilltrack_core::error::CoreError;
use skilltrack_db::models::comment::{CreateComment, SkillComment};
use skilltrack_db::models::rating::UpsertRating;
use skilltrack_db::repositories::{CommentRepo, RatingRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST .../comments`.
#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub body: String,
}

/// Request body for `PUT .../rating`.
#[derive(Debug, Deserialize)]
pub struct RateSkillRequest {
    pub rating: i16,
}

/// Response for `GET .../rating`.
#[derive(Debug, Serialize)]
pub struct MeanRatingResponse {
    /// Mean of all ratings, or `null` when the skill is unrated.
    pub mean_rating: Option<f64>,
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog/categories/{category}/skills/{skill}/comments
///
/// List all comments on a skill, newest first.
pub async fn list_comments(
    State(state): State<AppState>,
    Path((category, skill_name)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Vec<SkillComment>>>> {
    state.catalog.get(&category, &skill_name)?;

    let comments = CommentRepo::list_for_skill(&state.pool, &category, &skill_name).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/catalog/categories/{category}/skills/{skill}/comments
///
/// Add a comment to a skill as the authenticated user.
pub async fn add_comment(
    user: AuthUser,
    State(state): State<AppState>,
    Path((category, skill_name)): Path<(String, String)>,
    Json(input): Json<AddCommentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SkillComment>>)> {
    state.catalog.get(&category, &skill_name)?;

    let body = input.body.trim();
    if body.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment must not be empty".into(),
        )));
    }

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            user_id: user.user_id,
            category,
            skill_name,
            body: body.to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog/categories/{category}/skills/{skill}/rating
///
/// Mean rating for a skill, `null` when unrated.
pub async fn get_mean_rating(
    State(state): State<AppState>,
    Path((category, skill_name)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<MeanRatingResponse>>> {
    state.catalog.get(&category, &skill_name)?;

    let mean_rating = RatingRepo::mean_for_skill(&state.pool, &category, &skill_name).await?;
    Ok(Json(DataResponse {
        data: MeanRatingResponse { mean_rating },
    }))
}

/// PUT /api/v1/catalog/categories/{category}/skills/{skill}/rating
///
/// Set (upsert) the authenticated user's rating of a skill. One rating per
/// user per skill; repeated calls overwrite.
pub async fn rate_skill(
    user: AuthUser,
    State(state): State<AppState>,
    Path((category, skill_name)): Path<(String, String)>,
    Json(input): Json<RateSkillRequest>,
) -> AppResult<Json<DataResponse<MeanRatingResponse>>> {
    state.catalog.get(&category, &skill_name)?;

    if !(1..=5).contains(&input.rating) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Rating must be between 1 and 5, got {}",
            input.rating
        ))));
    }

    RatingRepo::upsert(
        &state.pool,
        &UpsertRating {
            user_id: user.user_id,
            category: category.clone(),
            skill_name: skill_name.clone(),
            rating: input.rating,
        },
    )
    .await?;

    let mean_rating = RatingRepo::mean_for_skill(&state.pool, &category, &skill_name).await?;
    Ok(Json(DataResponse {
        data: MeanRatingResponse { mean_rating },
    }))
}
