//! Linear earnings estimate for a single post.

use crate::rpm::Rpm;

/// Share of total views assumed to be monetizable.
pub const ELIGIBLE_FRACTION: f64 = 0.40;

/// Views counted towards revenue.
#[must_use]
pub fn eligible_views(views: f64) -> f64 {
    views * ELIGIBLE_FRACTION
}

/// Estimated earnings for `views` at `rpm`.
///
/// Only video content is monetizable; anything else earns `0.0` regardless
/// of its view count. Negative views are passed through unchanged.
#[must_use]
pub fn estimate(views: f64, is_video: bool, rpm: Rpm) -> f64 {
    if !is_video {
        return 0.0;
    }
    eligible_views(views) * rpm.value() / 1000.0
}

/// `"0.18€"`: two decimals followed by the euro sign.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("{amount:.2}€")
}
