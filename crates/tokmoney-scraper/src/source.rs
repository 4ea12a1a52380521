//! Page snapshots and file-backed change events.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::monitor::{ChangeSource, PageEvent};
use crate::page::Page;
use crate::ScraperError;

/// Supplies the current state of the page on demand.
pub trait PageSource {
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the snapshot cannot be produced.
    fn load(&self) -> Result<Page, ScraperError>;
}

/// A page saved to disk, re-read on every load.
#[derive(Debug, Clone)]
pub struct FilePage {
    path: PathBuf,
}

impl FilePage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FilePage {
    fn load(&self) -> Result<Page, ScraperError> {
        Page::from_file(&self.path)
    }
}

/// Fixed markup.
#[derive(Debug, Clone)]
pub struct StaticPage(pub String);

impl PageSource for StaticPage {
    fn load(&self) -> Result<Page, ScraperError> {
        Ok(Page::parse(&self.0))
    }
}

/// Polls a file's modification time and emits [`PageEvent::Reloaded`]
/// whenever it changes. The first successful poll always emits.
pub struct FilePoller {
    path: PathBuf,
    ticker: Interval,
    last_modified: Option<SystemTime>,
}

impl FilePoller {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, every: Duration) -> Self {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            path: path.into(),
            ticker,
            last_modified: None,
        }
    }

    async fn changed(&mut self) -> bool {
        let modified = match tokio::fs::metadata(&self.path).await.and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "page file not readable");
                return false;
            }
        };
        if self.last_modified == Some(modified) {
            return false;
        }
        self.last_modified = Some(modified);
        tracing::debug!(path = %self.path.display(), "page file changed");
        true
    }
}

impl ChangeSource for FilePoller {
    async fn next_event(&mut self) -> Option<PageEvent> {
        loop {
            self.ticker.tick().await;
            if self.changed().await {
                return Some(PageEvent::Reloaded);
            }
        }
    }
}
