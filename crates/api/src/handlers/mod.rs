//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod catalog;
pub mod community;
pub mod leaderboard;
pub mod profile;
