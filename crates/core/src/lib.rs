//! Pure domain logic for the skilltrack service.
//!
//! Everything in this crate is side-effect free: the catalog is an immutable
//! registry, profile snapshots are materialized from a flat status mapping,
//! and ranks, achievements, and leaderboards are recomputed from scratch on
//! every call. All persistent state lives behind the repositories in
//! `skilltrack-db`.

pub mod achievements;
pub mod catalog;
pub mod error;
pub mod leaderboard;
pub mod progress;
pub mod rank;
pub mod status;
pub mod types;
