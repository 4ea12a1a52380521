//! Profile eligibility from the follower count and recent video views.

use tokmoney_core::eligibility::{estimate_recent_views, MAX_SAMPLED_VIDEOS};
use tokmoney_core::{parse_count, EligibilityResult};

use crate::discovery::Discovery;
use crate::page::{text_of, Page};

/// Reads follower and view counts from a profile page and applies the
/// monetization thresholds.
///
/// A missing follower element counts as zero followers. Up to
/// [`MAX_SAMPLED_VIDEOS`] tiles are sampled; tiles without a positive view
/// count are left out of the average.
#[must_use]
pub fn check_eligibility(page: &Page, discovery: &Discovery) -> EligibilityResult {
    let root = page.root();

    let follower_count = discovery
        .followers
        .find_first(root)
        .map_or(0.0, |el| parse_count(&text_of(el)));
    tracing::debug!(follower_count, "follower count");

    let samples: Vec<f64> = discovery
        .find_containers(root, false)
        .into_iter()
        .take(MAX_SAMPLED_VIDEOS)
        .filter_map(|container| discovery.views.find_first(container))
        .map(|el| parse_count(&text_of(el)))
        .filter(|views| *views > 0.0)
        .collect();

    let recent_views = estimate_recent_views(&samples);
    let result = EligibilityResult::evaluate(follower_count, recent_views);
    tracing::info!(
        follower_count,
        recent_views,
        sampled = samples.len(),
        eligible = result.is_eligible,
        "profile eligibility checked"
    );
    result
}
