//! Route tree construction.

pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{auth, catalog, community, leaderboard, profile};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                        create account (public)
/// /auth/login                                         login (public)
/// /auth/refresh                                       refresh (public)
/// /auth/logout                                        logout (requires auth)
///
/// /catalog/categories                                 category names
/// /catalog/categories/{category}/skills               skill definitions
/// /catalog/categories/{category}/skills/{skill}       one definition
/// /catalog/categories/{category}/skills/{skill}/comments   list, add (POST requires auth)
/// /catalog/categories/{category}/skills/{skill}/rating     mean (GET), rate (PUT, auth)
///
/// /profile                                            get-or-create profile (auth)
/// /profile/skills/{category}/{skill}/status           set skill status (PUT, auth)
/// /profile/achievements                               achievement evaluation (auth)
///
/// /leaderboard                                        full leaderboard (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // -- Auth --
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        // -- Catalog --
        .route("/catalog/categories", get(catalog::list_categories))
        .route(
            "/catalog/categories/{category}/skills",
            get(catalog::list_skills),
        )
        .route(
            "/catalog/categories/{category}/skills/{skill}",
            get(catalog::get_skill),
        )
        // -- Community --
        .route(
            "/catalog/categories/{category}/skills/{skill}/comments",
            get(community::list_comments).post(community::add_comment),
        )
        .route(
            "/catalog/categories/{category}/skills/{skill}/rating",
            get(community::get_mean_rating).put(community::rate_skill),
        )
        // -- Profile --
        .route("/profile", get(profile::get_profile))
        .route(
            "/profile/skills/{category}/{skill}/status",
            put(profile::set_skill_status),
        )
        .route("/profile/achievements", get(profile::get_achievements))
        // -- Leaderboard --
        .route("/leaderboard", get(leaderboard::get_leaderboard))
}
