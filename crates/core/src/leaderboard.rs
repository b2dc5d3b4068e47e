//! Leaderboard projection over all known profiles.
//!
//! The leaderboard is fully recomputed on every query from the per-user
//! completed counts; it is never maintained incrementally. Ordering is
//! descending by completed count with username ascending as the tie-break,
//! so one computation is deterministic and stable.

use serde::Serialize;

use crate::rank::Rank;

/// One user's row in the leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub completed_skills: usize,
    pub rank: Rank,
}

/// Compute the leaderboard from `(username, completed count)` rows.
pub fn compute_leaderboard(rows: Vec<(String, usize)>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = rows
        .into_iter()
        .map(|(username, completed_skills)| LeaderboardEntry {
            rank: Rank::from_completed(completed_skills),
            username,
            completed_skills,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.completed_skills
            .cmp(&a.completed_skills)
            .then_with(|| a.username.cmp(&b.username))
    });
    entries
}
