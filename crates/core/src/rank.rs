//! Rank derivation from completed-skill counts.
//!
//! Rank is never stored; it is a pure function of the current completed
//! count, recomputed on every read so it can never drift from the profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank tier. Monotone in completed count, saturating at `Champion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Master,
    Champion,
}

impl Rank {
    /// Derive the rank tier from a completed-skill count.
    ///
    /// | Completed | Rank     |
    /// |-----------|----------|
    /// | 0         | Bronze   |
    /// | 1         | Silver   |
    /// | 2         | Gold     |
    /// | 3         | Master   |
    /// | >= 4      | Champion |
    pub fn from_completed(count: usize) -> Self {
        match count {
            0 => Self::Bronze,
            1 => Self::Silver,
            2 => Self::Gold,
            3 => Self::Master,
            _ => Self::Champion,
        }
    }

    /// Display emoji for the rank badge.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Bronze => "\u{1F949}",
            Self::Silver => "\u{1F948}",
            Self::Gold => "\u{1F947}",
            Self::Master => "\u{1F3C6}",
            Self::Champion => "\u{1F451}",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Master => "Master",
            Self::Champion => "Champion",
        };
        f.write_str(name)
    }
}

/// Rank plus its display emoji, as returned to clients.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankInfo {
    pub rank: Rank,
    pub emoji: &'static str,
}

impl RankInfo {
    /// Compute the rank info for a completed-skill count.
    pub fn from_completed(count: usize) -> Self {
        let rank = Rank::from_completed(count);
        Self {
            rank,
            emoji: rank.emoji(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_table() {
        assert_eq!(Rank::from_completed(0), Rank::Bronze);
        assert_eq!(Rank::from_completed(1), Rank::Silver);
        assert_eq!(Rank::from_completed(2), Rank::Gold);
        assert_eq!(Rank::from_completed(3), Rank::Master);
        assert_eq!(Rank::from_completed(4), Rank::Champion);
    }

    #[test]
    fn rank_saturates_at_champion() {
        assert_eq!(Rank::from_completed(5), Rank::Champion);
        assert_eq!(Rank::from_completed(100), Rank::Champion);
    }

    #[test]
    fn rank_is_monotone() {
        let ranks: Vec<Rank> = (0..10).map(Rank::from_completed).collect();
        for pair in ranks.windows(2) {
            assert!(pair[0] <= pair[1], "rank must never decrease with count");
        }
    }

    #[test]
    fn rank_info_pairs_rank_with_its_emoji() {
        let info = RankInfo::from_completed(3);
        assert_eq!(info.rank, Rank::Master);
        assert_eq!(info.emoji, Rank::Master.emoji());
    }
}
