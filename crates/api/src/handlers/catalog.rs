//! Handlers for the read-only skill catalog.

use axum::extract::{Path, State};
use axum::Json;
use skilltrack_core::catalog::SkillDefinition;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/categories
///
/// List all category names in catalog order.
pub async fn list_categories(State(state): State<AppState>) -> Json<DataResponse<Vec<String>>> {
    let categories: Vec<String> = state.catalog.categories().map(String::from).collect();
    Json(DataResponse { data: categories })
}

/// GET /api/v1/catalog/categories/{category}/skills
///
/// List the skill definitions in one category. 404 on unknown category.
pub async fn list_skills(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<DataResponse<Vec<SkillDefinition>>>> {
    let skills = state.catalog.skills_in(&category)?.to_vec();
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/catalog/categories/{category}/skills/{skill}
///
/// Fetch a single skill definition. 404 on unknown category or skill.
pub async fn get_skill(
    State(state): State<AppState>,
    Path((category, skill_name)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<SkillDefinition>>> {
    let skill = state.catalog.get(&category, &skill_name)?.clone();
    Ok(Json(DataResponse { data: skill }))
}
