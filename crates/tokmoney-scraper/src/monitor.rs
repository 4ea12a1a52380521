//! Event-driven re-scanning.
//!
//! A [`Monitor`] consumes [`PageEvent`]s from an injected [`ChangeSource`]
//! and pushes every result to a sink. Scroll events are debounced; a later
//! scan never cancels an earlier one, its output simply replaces it.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::analyze::ScanReport;
use crate::message::{Request, Response};
use crate::page::Page;
use crate::session::Session;
use crate::source::PageSource;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The viewport moved; rescan once scrolling settles.
    Scrolled,
    /// Markup was inserted into the page.
    NodesAdded(Vec<String>),
    /// The whole page was replaced; rescan it from the page source.
    Reloaded,
    Request(Request),
}

/// Anything that yields page events until it is exhausted.
pub trait ChangeSource {
    fn next_event(&mut self) -> impl Future<Output = Option<PageEvent>>;
}

impl ChangeSource for mpsc::Receiver<PageEvent> {
    async fn next_event(&mut self) -> Option<PageEvent> {
        self.recv().await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonitorOutput {
    Report(ScanReport),
    Response(Response),
}

pub struct Monitor<P> {
    session: Session,
    page: P,
    debounce: Duration,
}

impl<P: PageSource> Monitor<P> {
    #[must_use]
    pub fn new(session: Session, page: P, debounce: Duration) -> Self {
        Self {
            session,
            page,
            debounce,
        }
    }

    /// Processes events until `source` is exhausted, then returns the
    /// session. A scroll scan still pending at that point is dropped.
    pub async fn run<S, F>(mut self, mut source: S, mut sink: F) -> Session
    where
        S: ChangeSource,
        F: FnMut(MonitorOutput),
    {
        let mut settle_at: Option<Instant> = None;

        loop {
            let event = match settle_at {
                Some(deadline) => {
                    tokio::select! {
                        event = source.next_event() => event,
                        () = tokio::time::sleep_until(deadline) => {
                            settle_at = None;
                            self.rescan(&mut sink);
                            continue;
                        }
                    }
                }
                None => source.next_event().await,
            };

            let Some(event) = event else {
                break;
            };

            match event {
                PageEvent::Scrolled => {
                    if self.session.settings().auto_analysis {
                        settle_at = Some(Instant::now() + self.debounce);
                    }
                }
                PageEvent::NodesAdded(fragments) => self.nodes_added(&fragments, &mut sink),
                PageEvent::Reloaded => {
                    if self.session.settings().auto_analysis {
                        self.rescan(&mut sink);
                    }
                }
                PageEvent::Request(request) => self.request(request, &mut sink),
            }
        }

        self.session
    }

    fn rescan<F: FnMut(MonitorOutput)>(&mut self, sink: &mut F) {
        match self.page.load() {
            Ok(page) => sink(MonitorOutput::Report(self.session.scan(&page))),
            Err(e) => tracing::warn!(error = %e, "page unavailable for rescan"),
        }
    }

    fn nodes_added<F: FnMut(MonitorOutput)>(&mut self, fragments: &[String], sink: &mut F) {
        if !self.session.settings().auto_analysis {
            return;
        }
        for markup in fragments {
            let fragment = Page::fragment(markup);
            let report = self.session.scan_fragment(&fragment);
            if report.containers_found > 0 {
                sink(MonitorOutput::Report(report));
            }
        }
    }

    fn request<F: FnMut(MonitorOutput)>(&mut self, request: Request, sink: &mut F) {
        let page = match self.page.load() {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, "page unavailable for request");
                sink(MonitorOutput::Response(Response::failure_for(&request)));
                return;
            }
        };
        let handled = self.session.handle(request, &page);
        if let Some(report) = handled.report {
            sink(MonitorOutput::Report(report));
        }
        sink(MonitorOutput::Response(handled.response));
    }
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
