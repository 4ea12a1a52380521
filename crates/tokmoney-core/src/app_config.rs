use std::path::PathBuf;
use std::time::Duration;

use crate::rpm::Rpm;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub default_rpm: Rpm,
    pub auto_analysis: bool,
    pub scroll_debounce_ms: u64,
    pub watch_poll_ms: u64,
    pub profile_path: Option<PathBuf>,
}

impl AppConfig {
    /// Initial settings for a fresh session.
    #[must_use]
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            rpm: self.default_rpm,
            auto_analysis: self.auto_analysis,
        }
    }

    #[must_use]
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    #[must_use]
    pub fn watch_poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch_poll_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_rpm: Rpm::default(),
            auto_analysis: false,
            scroll_debounce_ms: 500,
            watch_poll_ms: 250,
            profile_path: None,
        }
    }
}

/// Everything an evaluation needs besides the page itself.
///
/// Passed explicitly into every scan; there is no process-wide RPM.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisSettings {
    pub rpm: Rpm,
    /// Whether scroll and mutation events trigger re-scans.
    pub auto_analysis: bool,
}
