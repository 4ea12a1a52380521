//! One-shot command handlers: parse, estimate, analyze, eligibility.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use tokmoney_core::eligibility::{MIN_FOLLOWERS, MIN_RECENT_VIEWS};
use tokmoney_core::{
    estimate, format_count, format_currency, parse_count, AnalysisSettings, EligibilityResult, Rpm,
};
use tokmoney_scraper::{analyze_page, check_eligibility, is_profile_url, Discovery, Page, ScanReport};

pub(crate) fn run_parse(texts: &[String]) {
    for text in texts {
        println!("{text}\t{}", parse_count(text));
    }
}

pub(crate) fn run_estimate(views: &str, is_video: bool, rpm: Rpm) {
    let count = parse_count(views);
    let earnings = estimate(count, is_video, rpm);
    println!(
        "{} views at {rpm} RPM: {}",
        format_count(count),
        format_currency(earnings)
    );
}

/// Analyze every video tile on a saved page.
///
/// # Errors
///
/// Returns an error if the page cannot be read or the report cannot be encoded.
pub(crate) fn run_analyze(
    path: &Path,
    discovery: &Discovery,
    settings: &AnalysisSettings,
    url: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(url) = url {
        if !is_profile_url(url) {
            tracing::warn!(url, "not a creator profile page; estimates may be meaningless");
        }
    }

    let page = Page::from_file(path)?;
    let report = analyze_page(&page, discovery, settings);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode scan report")?
        );
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Check monetization eligibility of a saved profile page.
///
/// # Errors
///
/// Returns an error if the page cannot be read or the result cannot be encoded.
pub(crate) fn run_eligibility(path: &Path, discovery: &Discovery, json: bool) -> anyhow::Result<()> {
    let page = Page::from_file(path)?;
    let result = check_eligibility(&page, discovery);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("failed to encode eligibility result")?
        );
    } else {
        print!("{}", render_eligibility(&result));
    }
    Ok(())
}

pub(crate) fn render_report(report: &ScanReport) -> String {
    let mut out = String::new();

    if report.containers_found == 0 {
        out.push_str("no video containers found\n");
        return out;
    }

    let _ = writeln!(out, "{:<6}{:<16}{:>14}  {:<7}{:>12}", "TILE", "TEXT", "VIEWS", "KIND", "EARNINGS");
    for e in &report.estimates {
        let _ = writeln!(
            out,
            "{:<6}{:<16}{:>14}  {:<7}{:>12}",
            e.index + 1,
            truncate(&e.view_text, 15),
            format_count(e.views),
            e.kind.to_string(),
            e.badge.label
        );
    }
    let _ = writeln!(
        out,
        "\nanalyzed {} of {} containers at {} RPM, total {}",
        report.analyzed(),
        report.containers_found,
        report.rpm,
        format_currency(report.total_earnings())
    );
    out
}

pub(crate) fn render_eligibility(result: &EligibilityResult) -> String {
    let mark = |ok: bool| if ok { "met" } else { "not met" };
    let mut out = String::new();

    let _ = writeln!(
        out,
        "followers:     {:>12}  (minimum {}, {})",
        format_count(result.follower_count),
        format_count(MIN_FOLLOWERS),
        mark(result.has_enough_followers)
    );
    let _ = writeln!(
        out,
        "recent views:  {:>12}  (minimum {}, {})",
        format_count(result.recent_views),
        format_count(MIN_RECENT_VIEWS),
        mark(result.has_enough_views)
    );

    if result.is_eligible {
        out.push_str("eligible for monetization\n");
    } else {
        let reasons: Vec<String> = result.shortfalls().iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "not eligible: {}", reasons.join("; "));
        out.push_str("estimates show what the account could earn if it were eligible\n");
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
