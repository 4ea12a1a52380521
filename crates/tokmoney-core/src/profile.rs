//! Selector lists and text patterns used to discover count-bearing elements.
//!
//! The host page uses generated class names that rotate between releases,
//! so every lookup is an ordered list of best-known selectors followed by a
//! text-shape fallback. The built-in lists live in [`DiscoveryProfile::default`];
//! [`load_profile`] replaces them from YAML when the markup drifts.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryProfile {
    /// Video tile containers, most specific first.
    pub container_selectors: Vec<String>,
    /// Structural guesses tried only when no container selector matches.
    pub container_fallback_selectors: Vec<String>,
    pub view_selectors: Vec<String>,
    /// Elements whose text is tested against `view_text_pattern`.
    pub view_text_scan: String,
    pub view_text_pattern: String,
    pub follower_selectors: Vec<String>,
    pub follower_text_scan: String,
    pub follower_text_pattern: String,
    /// Present inside a container only when it holds a video.
    pub video_marker: String,
}

impl Default for DiscoveryProfile {
    fn default() -> Self {
        Self {
            container_selectors: strings(&[
                r#"div[data-e2e="user-post-item"]"#,
                ".video-feed-item",
                ".tiktok-x6y88p-DivItemContainerV2",
                ".tiktok-yz6ijl-DivWrapper",
                ".video-item",
                r#"div[class*="DivItemContainer"]"#,
            ]),
            container_fallback_selectors: strings(&[
                r#"div[class*="DivVideoFeed"] > div"#,
                r#"div[class*="user-post-item"]"#,
                r#"div[class*="video"], div[class*="feed-item"]"#,
            ]),
            view_selectors: strings(&[
                r#"[data-e2e="video-views"]"#,
                ".video-count",
                ".view-count",
                r#"strong[class*="StrongVideoCount"]"#,
                r#"span[class*="SpanViewCount"]"#,
                r#"div[class*="DivPlayCount"]"#,
            ]),
            view_text_scan: "span, div, strong".to_string(),
            view_text_pattern: r"^[0-9]+([.,][0-9]+)?[KMBkmb]?\s*(views|vues|visualizaciones)?$"
                .to_string(),
            follower_selectors: strings(&[
                r#"[data-e2e="followers-count"]"#,
                r#"strong[data-e2e="followers"]"#,
                r#"span[class*="SpanFollowerCount"]"#,
                r#"div[class*="DivFollowerCount"]"#,
                r#"h2[data-e2e="followers"]"#,
            ]),
            follower_text_scan: "span, div, strong, h2".to_string(),
            follower_text_pattern:
                r"(?i)^[0-9]+([.,][0-9]+)?[KMB]?\s*(followers|abonnés|seguidores)?$".to_string(),
            video_marker: r#"source[type="image/avif"]"#.to_string(),
        }
    }
}

impl DiscoveryProfile {
    /// Checks that every list is non-empty and every text pattern compiles.
    ///
    /// CSS selectors are not compiled here; an unparseable selector is
    /// skipped with a warning when the chain runs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lists = [
            ("container_selectors", &self.container_selectors),
            ("view_selectors", &self.view_selectors),
            ("follower_selectors", &self.follower_selectors),
        ];
        for (field, list) in lists {
            if list.iter().all(|s| s.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "{field} must contain at least one selector"
                )));
            }
        }

        let scans = [
            ("view_text_scan", &self.view_text_scan),
            ("follower_text_scan", &self.follower_text_scan),
            ("video_marker", &self.video_marker),
        ];
        for (field, value) in scans {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must be non-empty")));
            }
        }

        let patterns = [
            ("view_text_pattern", &self.view_text_pattern),
            ("follower_text_pattern", &self.follower_text_pattern),
        ];
        for (field, pattern) in patterns {
            Regex::new(pattern).map_err(|e| {
                ConfigError::Validation(format!("{field} is not a valid pattern: {e}"))
            })?;
        }

        Ok(())
    }
}

/// Load and validate a discovery profile from a YAML file.
///
/// Fields missing from the file keep their built-in values.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile(path: &Path) -> Result<DiscoveryProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profile: DiscoveryProfile = serde_yaml::from_str(&content)?;
    profile.validate()?;

    Ok(profile)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
