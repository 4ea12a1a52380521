//! Per-tile earnings estimates for a whole page or a batch of new nodes.

use scraper::ElementRef;
use serde::Serialize;
use tokmoney_core::earnings::eligible_views;
use tokmoney_core::{estimate, format_count, format_currency, parse_count, AnalysisSettings, Rpm};

use crate::classify::{classify, ContentKind};
use crate::discovery::{Discovery, Strategy};
use crate::page::{descendants, text_of, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeTone {
    Earning,
    NotEligible,
}

/// What a presentation layer shows on a tile: a short label and a tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tooltip: String,
    pub tone: BadgeTone,
}

impl Badge {
    #[must_use]
    pub fn new(views: f64, kind: ContentKind, rpm: Rpm, earnings: f64) -> Self {
        match kind {
            ContentKind::Video => Self {
                label: format_currency(earnings),
                tooltip: format!(
                    "Estimated earnings for {} views\n{} eligible views (about 40%)\nBased on an average RPM of {:.2}€ per 1000 views",
                    format_count(views),
                    format_count(eligible_views(views)),
                    rpm.value()
                ),
                tone: BadgeTone::Earning,
            },
            ContentKind::Image => Self {
                label: "0€".to_string(),
                tooltip: "Content not eligible for revenue".to_string(),
                tone: BadgeTone::NotEligible,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEstimate {
    /// Position of the container among those discovered in the scan.
    pub index: usize,
    pub view_text: String,
    pub views: f64,
    pub kind: ContentKind,
    pub earnings: f64,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub rpm: Rpm,
    pub containers_found: usize,
    pub estimates: Vec<VideoEstimate>,
}

impl ScanReport {
    /// Containers that produced an estimate.
    #[must_use]
    pub fn analyzed(&self) -> usize {
        self.estimates.len()
    }

    #[must_use]
    pub fn total_earnings(&self) -> f64 {
        self.estimates.iter().map(|e| e.earnings).sum()
    }
}

/// Estimates a single container.
///
/// Returns `None` when no view count can be found or it parses to zero or less.
#[must_use]
pub fn analyze_container(
    container: ElementRef<'_>,
    index: usize,
    discovery: &Discovery,
    rpm: Rpm,
) -> Option<VideoEstimate> {
    let Some(view_element) = discovery.views.find_first(container) else {
        tracing::debug!(index, "no view element found");
        return None;
    };

    let view_text = text_of(view_element);
    let views = parse_count(&view_text);
    if views <= 0.0 {
        tracing::debug!(index, view_text = %view_text, "invalid view count");
        return None;
    }

    let kind = classify(container, discovery.video_marker.as_ref());
    let earnings = estimate(views, kind.is_video(), rpm);
    tracing::debug!(index, views, %kind, earnings, "container analyzed");

    Some(VideoEstimate {
        index,
        view_text,
        views,
        kind,
        earnings,
        badge: Badge::new(views, kind, rpm, earnings),
    })
}

fn analyze_containers(containers: &[ElementRef<'_>], discovery: &Discovery, rpm: Rpm) -> ScanReport {
    let estimates = containers
        .iter()
        .enumerate()
        .filter_map(|(index, container)| analyze_container(*container, index, discovery, rpm))
        .collect();

    ScanReport {
        rpm,
        containers_found: containers.len(),
        estimates,
    }
}

/// Discovers every video tile on `page` and estimates each one.
#[must_use]
pub fn analyze_page(page: &Page, discovery: &Discovery, settings: &AnalysisSettings) -> ScanReport {
    let containers = discovery.find_containers(page.root(), true);
    if containers.is_empty() {
        tracing::info!("no video containers found");
    }

    let report = analyze_containers(&containers, discovery, settings.rpm);
    tracing::info!(
        analyzed = report.analyzed(),
        containers = report.containers_found,
        rpm = settings.rpm.value(),
        "page analysis complete"
    );
    report
}

/// Estimates containers inside newly inserted markup.
///
/// A top-level node that is itself a container is analyzed, as is every
/// container nested inside it. Only the primary container selectors are
/// considered; the structural fallback is too broad for partial markup.
#[must_use]
pub fn analyze_fragment(fragment: &Page, discovery: &Discovery, settings: &AnalysisSettings) -> ScanReport {
    let mut containers = Vec::new();
    for node in fragment.top_level() {
        if discovery.containers.matches(node) {
            containers.push(node);
        }
        for strategy in discovery.containers.strategies() {
            if let Strategy::Selector { selector, .. } = strategy {
                for nested in descendants(node, selector) {
                    if !containers.iter().any(|c| c.id() == nested.id()) {
                        containers.push(nested);
                    }
                }
            }
        }
    }

    let report = analyze_containers(&containers, discovery, settings.rpm);
    if report.analyzed() > 0 {
        tracing::info!(analyzed = report.analyzed(), "new video containers analyzed");
    }
    report
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
