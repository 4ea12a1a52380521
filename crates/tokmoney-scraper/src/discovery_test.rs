use super::*;
use crate::page::Page;

const GRID: &str = r#"
<html><body>
  <div class="grid">
    <div class="tile"><strong class="b">10K</strong></div>
    <div class="tile"><strong class="b">20K</strong><span class="a">7</span></div>
  </div>
</body></html>
"#;

fn chain(selectors: &[&str]) -> DiscoveryChain {
    DiscoveryChain::from_selectors("test", selectors)
}

// -----------------------------------------------------------------------
// DiscoveryChain::find_first
// -----------------------------------------------------------------------

#[test]
fn later_selector_used_when_earlier_misses() {
    let page = Page::parse(GRID);
    let found = chain(&[".missing", "strong.b"]).find_first(page.root());
    assert_eq!(found.map(text_of).as_deref(), Some("10K"));
}

#[test]
fn earlier_selector_wins_when_both_match() {
    let page = Page::parse(GRID);
    let found = chain(&["span.a", "strong.b"]).find_first(page.root());
    assert_eq!(found.map(text_of).as_deref(), Some("7"));
}

#[test]
fn nothing_found_is_none() {
    let page = Page::parse(GRID);
    assert!(chain(&[".missing", "#also-missing"]).find_first(page.root()).is_none());
}

#[test]
fn empty_chain_finds_nothing() {
    let page = Page::parse(GRID);
    assert!(DiscoveryChain::new("empty", vec![]).find_first(page.root()).is_none());
}

#[test]
fn unparseable_selector_is_skipped() {
    let page = Page::parse(GRID);
    let c = chain(&["div[[[", "strong.b"]);
    assert_eq!(c.strategies().len(), 1);
    assert_eq!(c.find_first(page.root()).map(text_of).as_deref(), Some("10K"));
}

#[test]
fn text_pattern_fallback_after_selectors_fail() {
    let page = Page::parse(r#"<div><span>Follow</span><span> 3.4M </span></div>"#);
    let c = chain(&[".missing"]).with(
        Strategy::text_pattern("test", "span", r"^[0-9]+([.,][0-9]+)?[KMB]?$").unwrap(),
    );
    assert_eq!(c.find_first(page.root()).map(text_of).as_deref(), Some("3.4M"));
}

#[test]
fn invalid_text_pattern_is_error() {
    let err = Strategy::text_pattern("views", "span", "([0-9]").unwrap_err();
    assert!(matches!(err, ScraperError::InvalidPattern { ref chain, .. } if chain == "views"));
}

#[test]
fn unparseable_text_scan_is_skipped() {
    let strategy = Strategy::text_pattern("views", ":::", "^x$").unwrap();
    assert!(strategy.is_none());
}

#[test]
fn search_is_scoped_to_subtree() {
    let page = Page::parse(GRID);
    let tiles = chain(&["div.tile"]).find_all(page.root());
    let second = tiles[1];
    let found = chain(&["strong.b"]).find_first(second);
    assert_eq!(found.map(text_of).as_deref(), Some("20K"));
}

// -----------------------------------------------------------------------
// DiscoveryChain::find_all
// -----------------------------------------------------------------------

#[test]
fn find_all_returns_first_non_empty_set_without_merging() {
    let page = Page::parse(GRID);
    let found = chain(&[".missing", "span.a", "strong.b"]).find_all(page.root());
    assert_eq!(found.len(), 1);
    assert_eq!(text_of(found[0]), "7");
}

#[test]
fn find_all_keeps_document_order() {
    let page = Page::parse(GRID);
    let found = chain(&["strong.b"]).find_all(page.root());
    let texts: Vec<String> = found.into_iter().map(text_of).collect();
    assert_eq!(texts, vec!["10K", "20K"]);
}

#[test]
fn chain_matches_element_itself() {
    let page = Page::fragment(r#"<div class="video-item"></div>"#);
    let el = page.top_level().next().unwrap();
    assert!(chain(&[".other", ".video-item"]).matches(el));
    assert!(!chain(&[".other"]).matches(el));
}

// -----------------------------------------------------------------------
// Discovery
// -----------------------------------------------------------------------

#[test]
fn default_discovery_finds_follower_attribute() {
    let page = Page::parse(
        r#"<h3><strong data-e2e="followers-count">12.5K</strong><span>Followers</span></h3>"#,
    );
    let found = Discovery::default().followers.find_first(page.root());
    assert_eq!(found.map(text_of).as_deref(), Some("12.5K"));
}

#[test]
fn structural_fallback_only_when_requested() {
    let page = Page::parse(r#"<div class="my-video-card"><strong>5K</strong></div>"#);
    let discovery = Discovery::default();
    assert!(discovery.find_containers(page.root(), false).is_empty());
    assert_eq!(discovery.find_containers(page.root(), true).len(), 1);
}

#[test]
fn primary_containers_shadow_fallback() {
    let page = Page::parse(
        r#"<div class="video-item"></div><div class="my-video-card"></div><div class="video-item"></div>"#,
    );
    let found = Discovery::default().find_containers(page.root(), true);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|el| el.value().classes().any(|c| c == "video-item")));
}

#[test]
fn invalid_video_marker_disables_classification() {
    let profile = DiscoveryProfile {
        video_marker: "source[".to_string(),
        ..DiscoveryProfile::default()
    };
    let discovery = Discovery::from_profile(&profile).unwrap();
    assert!(discovery.video_marker.is_none());
}
