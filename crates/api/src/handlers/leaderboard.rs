//! Handler for the leaderboard projection.

use axum::extract::State;
use axum::Json;
use skilltrack_core::leaderboard::{compute_leaderboard, LeaderboardEntry};
use skilltrack_db::repositories::ProgressRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/leaderboard
///
/// Rank all users with materialized profiles by completed-skill count,
/// descending, ties broken by username ascending. Fully recomputed on every
/// request; nothing is cached.
pub async fn get_leaderboard(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LeaderboardEntry>>>> {
    let counts = ProgressRepo::completed_counts(&state.pool).await?;
    let rows = counts
        .into_iter()
        .map(|(username, completed)| (username, completed.max(0) as usize))
        .collect();
    Ok(Json(DataResponse {
        data: compute_leaderboard(rows),
    }))
}
