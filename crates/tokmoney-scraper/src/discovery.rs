//! Ordered lookup strategies over an unstable page structure.
//!
//! A [`DiscoveryChain`] tries each [`Strategy`] in turn and stops at the
//! first one that finds something. Results from different strategies are
//! never merged.

use regex::Regex;
use scraper::{ElementRef, Selector};
use tokmoney_core::DiscoveryProfile;

use crate::page::{descendants, text_of};
use crate::ScraperError;

#[derive(Debug, Clone)]
pub enum Strategy {
    /// Descendants matching a CSS selector.
    Selector { css: String, selector: Selector },
    /// Descendants among `scan` whose trimmed text fully matches `pattern`.
    TextPattern {
        scan_css: String,
        scan: Selector,
        pattern: Regex,
    },
}

impl Strategy {
    /// Compiles a CSS selector strategy.
    ///
    /// Returns `None` and logs a warning when `css` does not parse, so one
    /// bad entry never disables the rest of a chain.
    #[must_use]
    pub fn selector(css: &str) -> Option<Self> {
        match Selector::parse(css) {
            Ok(selector) => Some(Strategy::Selector {
                css: css.to_string(),
                selector,
            }),
            Err(e) => {
                tracing::warn!(selector = %css, error = %e, "skipping unparseable selector");
                None
            }
        }
    }

    /// Compiles a text-shape strategy.
    ///
    /// Returns `Ok(None)` when `scan_css` does not parse (logged like
    /// [`Strategy::selector`]).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPattern`] when `pattern` is not a valid regex.
    pub fn text_pattern(chain: &str, scan_css: &str, pattern: &str) -> Result<Option<Self>, ScraperError> {
        let pattern = Regex::new(pattern).map_err(|source| ScraperError::InvalidPattern {
            chain: chain.to_string(),
            source,
        })?;
        let scan = match Selector::parse(scan_css) {
            Ok(scan) => scan,
            Err(e) => {
                tracing::warn!(selector = %scan_css, error = %e, "skipping unparseable text scan selector");
                return Ok(None);
            }
        };
        Ok(Some(Strategy::TextPattern {
            scan_css: scan_css.to_string(),
            scan,
            pattern,
        }))
    }

    /// All matches under `scope`, in document order.
    pub fn find_all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        match self {
            Strategy::Selector { selector, .. } => descendants(scope, selector).collect(),
            Strategy::TextPattern { scan, pattern, .. } => descendants(scope, scan)
                .filter(|el| pattern.is_match(&text_of(*el)))
                .collect(),
        }
    }

    /// First match under `scope`.
    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        match self {
            Strategy::Selector { selector, .. } => descendants(scope, selector).next(),
            Strategy::TextPattern { scan, pattern, .. } => {
                descendants(scope, scan).find(|el| pattern.is_match(&text_of(*el)))
            }
        }
    }

    /// Whether `element` itself satisfies this strategy.
    #[must_use]
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        match self {
            Strategy::Selector { selector, .. } => selector.matches(&element),
            Strategy::TextPattern { scan, pattern, .. } => {
                scan.matches(&element) && pattern.is_match(&text_of(element))
            }
        }
    }

    fn describe(&self) -> &str {
        match self {
            Strategy::Selector { css, .. } => css,
            Strategy::TextPattern { scan_css, .. } => scan_css,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveryChain {
    name: String,
    strategies: Vec<Strategy>,
}

impl DiscoveryChain {
    #[must_use]
    pub fn new(name: &str, strategies: Vec<Strategy>) -> Self {
        Self {
            name: name.to_string(),
            strategies,
        }
    }

    /// Builds a chain of selector strategies, dropping any that do not parse.
    #[must_use]
    pub fn from_selectors<S: AsRef<str>>(name: &str, selectors: &[S]) -> Self {
        let strategies = selectors
            .iter()
            .filter_map(|css| Strategy::selector(css.as_ref()))
            .collect();
        Self::new(name, strategies)
    }

    #[must_use]
    pub fn with(mut self, strategy: Option<Strategy>) -> Self {
        self.strategies.extend(strategy);
        self
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// First element found by the first strategy that finds anything.
    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        for strategy in &self.strategies {
            if let Some(found) = strategy.find_first(scope) {
                tracing::debug!(chain = %self.name, strategy = %strategy.describe(), "element found");
                return Some(found);
            }
        }
        tracing::debug!(chain = %self.name, "no element found");
        None
    }

    /// Match set of the first strategy with a non-empty result.
    pub fn find_all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for strategy in &self.strategies {
            let found = strategy.find_all(scope);
            if !found.is_empty() {
                tracing::debug!(
                    chain = %self.name,
                    strategy = %strategy.describe(),
                    count = found.len(),
                    "elements found"
                );
                return found;
            }
        }
        tracing::debug!(chain = %self.name, "no elements found");
        Vec::new()
    }

    /// Whether any strategy accepts `element` itself.
    #[must_use]
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        self.strategies.iter().any(|s| s.matches(element))
    }
}

/// Every chain the analysis needs, compiled once from a profile.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub containers: DiscoveryChain,
    pub container_fallback: DiscoveryChain,
    pub views: DiscoveryChain,
    pub followers: DiscoveryChain,
    pub video_marker: Option<Selector>,
}

impl Discovery {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPattern`] if a text pattern does not compile.
    pub fn from_profile(profile: &DiscoveryProfile) -> Result<Self, ScraperError> {
        let views = DiscoveryChain::from_selectors("views", &profile.view_selectors).with(
            Strategy::text_pattern("views", &profile.view_text_scan, &profile.view_text_pattern)?,
        );
        let followers = DiscoveryChain::from_selectors("followers", &profile.follower_selectors)
            .with(Strategy::text_pattern(
                "followers",
                &profile.follower_text_scan,
                &profile.follower_text_pattern,
            )?);

        let video_marker = match Selector::parse(&profile.video_marker) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::warn!(
                    selector = %profile.video_marker,
                    error = %e,
                    "video marker does not parse; every container will be treated as an image"
                );
                None
            }
        };

        Ok(Self {
            containers: DiscoveryChain::from_selectors("containers", &profile.container_selectors),
            container_fallback: DiscoveryChain::from_selectors(
                "container fallback",
                &profile.container_fallback_selectors,
            ),
            views,
            followers,
            video_marker,
        })
    }

    /// Video tile containers under `scope`.
    ///
    /// With `structural_fallback`, the broader structural guesses are tried
    /// when no container selector matches.
    pub fn find_containers<'a>(
        &self,
        scope: ElementRef<'a>,
        structural_fallback: bool,
    ) -> Vec<ElementRef<'a>> {
        let found = self.containers.find_all(scope);
        if found.is_empty() && structural_fallback {
            return self.container_fallback.find_all(scope);
        }
        found
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::from_profile(&DiscoveryProfile::default())
            .expect("built-in discovery profile compiles")
    }
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
