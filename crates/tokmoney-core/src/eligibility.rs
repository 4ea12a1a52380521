//! Monetization eligibility thresholds.

use serde::{Deserialize, Serialize};

use crate::count::format_count;

pub const MIN_FOLLOWERS: f64 = 10_000.0;
pub const MIN_RECENT_VIEWS: f64 = 100_000.0;

/// Assumed posting rate of an active account, used to turn an average
/// per-video view count into a monthly figure.
pub const POSTS_PER_MONTH: f64 = 15.0;

/// Number of most recent videos sampled for the monthly estimate.
pub const MAX_SAMPLED_VIDEOS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub follower_count: f64,
    pub recent_views: f64,
    pub has_enough_followers: bool,
    pub has_enough_views: bool,
    pub is_eligible: bool,
}

impl EligibilityResult {
    #[must_use]
    pub fn evaluate(follower_count: f64, recent_views: f64) -> Self {
        let has_enough_followers = follower_count >= MIN_FOLLOWERS;
        let has_enough_views = recent_views >= MIN_RECENT_VIEWS;
        Self {
            follower_count,
            recent_views,
            has_enough_followers,
            has_enough_views,
            is_eligible: has_enough_followers && has_enough_views,
        }
    }

    /// Criteria the profile does not meet, followers first.
    #[must_use]
    pub fn shortfalls(&self) -> Vec<Shortfall> {
        let mut missing = Vec::new();
        if !self.has_enough_followers {
            missing.push(Shortfall::Followers {
                current: self.follower_count,
            });
        }
        if !self.has_enough_views {
            missing.push(Shortfall::RecentViews {
                current: self.recent_views,
            });
        }
        missing
    }
}

impl Default for EligibilityResult {
    fn default() -> Self {
        Self::evaluate(0.0, 0.0)
    }
}

/// Monthly view estimate from per-video samples: `average × 15`, or `0.0`
/// when there are no samples.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_recent_views(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let average = samples.iter().sum::<f64>() / samples.len() as f64;
    average * POSTS_PER_MONTH
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortfall {
    Followers { current: f64 },
    RecentViews { current: f64 },
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shortfall::Followers { current } => write!(
                f,
                "fewer than {} followers ({} currently)",
                format_count(MIN_FOLLOWERS),
                format_count(*current)
            ),
            Shortfall::RecentViews { current } => write!(
                f,
                "fewer than {} views over the last 30 days ({} currently)",
                format_count(MIN_RECENT_VIEWS),
                format_count(*current)
            ),
        }
    }
}
