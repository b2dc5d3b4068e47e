//! HTTP-level integration tests for profile, status updates, achievements,
//! and the leaderboard.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, put_json_auth, signup};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Set one skill's status via the API and return the response.
async fn set_status(
    app: axum::Router,
    token: &str,
    category: &str,
    skill: &str,
    status: &str,
) -> axum::response::Response {
    // Percent-encode spaces so names like "Git Basics" form a valid URI.
    let category = category.replace(' ', "%20");
    let skill = skill.replace(' ', "%20");
    let uri = format!("/api/v1/profile/skills/{category}/{skill}/status");
    let body = serde_json::json!({ "status": status });
    put_json_auth(app, &uri, token, body).await
}

/// Fetch the profile and return the JSON `data` payload.
async fn fetch_profile(app: axum::Router, token: &str) -> serde_json::Value {
    let response = get_auth(app, "/api/v1/profile", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

/// Find one skill's status string inside a profile payload.
fn status_of(profile: &serde_json::Value, category: &str, skill: &str) -> String {
    let skills = profile["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["category_name"] == category)
        .unwrap_or_else(|| panic!("category {category} missing"))["skills"]
        .as_array()
        .unwrap()
        .clone();
    skills
        .iter()
        .find(|s| s["skill_name"] == skill)
        .unwrap_or_else(|| panic!("skill {skill} missing"))["status"]
        .as_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Profile materialization
// ---------------------------------------------------------------------------

/// The first profile read materializes every catalog skill as not_started.
#[sqlx::test(migrations = "../../migrations")]
async fn test_profile_materializes_full_catalog(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "fresh", "test_password_123!").await;

    let profile = fetch_profile(app, &token).await;

    assert_eq!(profile["username"], "fresh");
    let categories = profile["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 3);

    let total_skills: usize = categories
        .iter()
        .map(|c| c["skills"].as_array().unwrap().len())
        .sum();
    assert_eq!(total_skills, 7);
    for category in categories {
        for skill in category["skills"].as_array().unwrap() {
            assert_eq!(skill["status"], "not_started");
        }
    }

    assert_eq!(profile["summary"]["total_completed"], 0);
    assert_eq!(profile["summary"]["total_skills"], 7);
    assert_eq!(profile["summary"]["rank"]["rank"], "Bronze");
}

/// Repeated profile reads do not reset recorded progress.
#[sqlx::test(migrations = "../../migrations")]
async fn test_profile_read_preserves_progress(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "steady", "test_password_123!").await;

    fetch_profile(app.clone(), &token).await;
    let response = set_status(app.clone(), &token, "Cooking", "Pasta", "completed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = fetch_profile(app, &token).await;
    assert_eq!(status_of(&profile, "Cooking", "Pasta"), "completed");
    assert_eq!(profile["summary"]["total_completed"], 1);
    assert_eq!(profile["summary"]["rank"]["rank"], "Silver");
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// A forward transition succeeds and the response carries the new profile.
#[sqlx::test(migrations = "../../migrations")]
async fn test_status_forward_transition(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "mover", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    let response = set_status(app, &token, "Exercise", "Running", "in_progress").await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = body_json(response).await["data"].clone();
    assert_eq!(status_of(&profile, "Exercise", "Running"), "in_progress");
}

/// Skipping in_progress entirely is a valid forward transition.
#[sqlx::test(migrations = "../../migrations")]
async fn test_status_skip_to_completed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "skipper", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    let response = set_status(app, &token, "Cooking", "Soup", "completed").await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Re-submitting the current status is an idempotent no-op, not an error.
#[sqlx::test(migrations = "../../migrations")]
async fn test_status_same_status_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "repeat", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    set_status(app.clone(), &token, "Cooking", "Pasta", "in_progress").await;
    let response = set_status(app, &token, "Cooking", "Pasta", "in_progress").await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Moving a completed skill backwards is rejected with 409.
#[sqlx::test(migrations = "../../migrations")]
async fn test_status_regression_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "regressor", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    set_status(app.clone(), &token, "Cooking", "Pasta", "completed").await;
    let response = set_status(app.clone(), &token, "Cooking", "Pasta", "in_progress").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TRANSITION");

    // The stored status survived the rejected write.
    let profile = fetch_profile(app, &token).await;
    assert_eq!(status_of(&profile, "Cooking", "Pasta"), "completed");
}

/// Writing to a skill that is not in the catalog returns 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_status_unknown_skill(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "loster", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    let response = set_status(app, &token, "Cooking", "Quiche", "completed").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A status string outside the enum is rejected by deserialization.
#[sqlx::test(migrations = "../../migrations")]
async fn test_status_invalid_value(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "badvalue", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    let response = set_status(app, &token, "Cooking", "Pasta", "mastered").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// A fresh profile has all three achievements locked with zero progress.
#[sqlx::test(migrations = "../../migrations")]
async fn test_achievements_start_locked(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "novice", "test_password_123!").await;

    let response = get_auth(app, "/api/v1/profile/achievements", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let achievements = body_json(response).await["data"].clone();
    let list = achievements.as_array().unwrap();
    assert_eq!(list.len(), 3);
    for achievement in list {
        assert_eq!(achievement["unlocked"], false);
        assert_eq!(achievement["progress"], 0);
    }
}

/// Completing one skill unlocks first_skill but not the others.
#[sqlx::test(migrations = "../../migrations")]
async fn test_achievements_first_skill(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "starter", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;
    set_status(app.clone(), &token, "Cooking", "Pasta", "completed").await;

    let response = get_auth(app, "/api/v1/profile/achievements", &token).await;
    let achievements = body_json(response).await["data"].clone();
    let by_id = |id: &str| {
        achievements
            .as_array()
            .unwrap()
            .iter()
            .find(|a| a["id"] == id)
            .unwrap()
            .clone()
    };

    assert_eq!(by_id("first_skill")["unlocked"], true);
    assert_eq!(by_id("skill_explorer")["unlocked"], false);
    assert_eq!(by_id("skill_explorer")["progress"], 1);
    assert_eq!(by_id("multi_category")["unlocked"], false);
    assert_eq!(by_id("multi_category")["progress"], 1);
}

/// Completing skills across all three categories unlocks multi_category.
#[sqlx::test(migrations = "../../migrations")]
async fn test_achievements_multi_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup(app.clone(), "explorer", "test_password_123!").await;
    fetch_profile(app.clone(), &token).await;

    set_status(app.clone(), &token, "Cooking", "Pasta", "completed").await;
    set_status(app.clone(), &token, "Exercise", "Running", "completed").await;
    set_status(app.clone(), &token, "Technology", "Git Basics", "completed").await;

    let response = get_auth(app, "/api/v1/profile/achievements", &token).await;
    let achievements = body_json(response).await["data"].clone();
    let multi = achievements
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["id"] == "multi_category")
        .unwrap()
        .clone();

    assert_eq!(multi["unlocked"], true);
    assert_eq!(multi["progress"], 3);
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// The leaderboard orders by completed count desc, ties broken by username.
#[sqlx::test(migrations = "../../migrations")]
async fn test_leaderboard_ordering(pool: PgPool) {
    let app = common::build_test_app(pool);

    let alice = signup(app.clone(), "alice", "test_password_123!").await;
    let bob = signup(app.clone(), "bob", "test_password_123!").await;
    let carol = signup(app.clone(), "carol", "test_password_123!").await;

    for token in [&alice, &bob, &carol] {
        fetch_profile(app.clone(), token).await;
    }

    set_status(app.clone(), &bob, "Cooking", "Pasta", "completed").await;
    set_status(app.clone(), &bob, "Cooking", "Salad", "completed").await;
    set_status(app.clone(), &carol, "Exercise", "Running", "completed").await;

    let response = get_auth(app, "/api/v1/leaderboard", &alice).await;
    assert_eq!(response.status(), StatusCode::OK);

    let entries = body_json(response).await["data"].clone();
    let list = entries.as_array().unwrap();
    assert_eq!(list.len(), 3);

    assert_eq!(list[0]["username"], "bob");
    assert_eq!(list[0]["completed_skills"], 2);
    assert_eq!(list[0]["rank"], "Gold");
    assert_eq!(list[1]["username"], "carol");
    assert_eq!(list[1]["completed_skills"], 1);
    assert_eq!(list[2]["username"], "alice");
    assert_eq!(list[2]["completed_skills"], 0);
    assert_eq!(list[2]["rank"], "Bronze");
}

/// The leaderboard requires authentication.
#[sqlx::test(migrations = "../../migrations")]
async fn test_leaderboard_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/leaderboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
