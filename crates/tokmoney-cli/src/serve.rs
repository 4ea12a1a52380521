//! `serve`: answer popup-style JSON requests read line by line from stdin.
//!
//! Each input line is one request (`{"action":"analyzeVideos","rpm":0.45}`);
//! each response is written to stdout as one JSON line. Scan reports are
//! logged, not printed, so stdout carries responses only.

use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokmoney_core::AppConfig;
use tokmoney_scraper::{
    ChangeSource, Discovery, FilePage, Monitor, MonitorOutput, PageEvent, Request, Response,
    Session,
};

/// Request lines from any buffered reader. Malformed lines are answered with
/// a failure ack immediately and never reach the monitor.
pub(crate) struct LineRequests<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> LineRequests<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: AsyncBufRead + Unpin> ChangeSource for LineRequests<R> {
    async fn next_event(&mut self) -> Option<PageEvent> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read request line");
                    return None;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Request::from_json(line) {
                Ok(request) => return Some(PageEvent::Request(request)),
                Err(e) => {
                    tracing::warn!(error = %e, line, "ignoring malformed request");
                    println!("{}", Response::ack(false).to_json());
                }
            }
        }
    }
}

/// Run the request loop against `page` until stdin closes.
///
/// # Errors
///
/// Returns an error if the page file does not exist when the loop starts.
pub(crate) async fn run_serve(
    page: &Path,
    discovery: Discovery,
    config: &AppConfig,
) -> anyhow::Result<()> {
    if !page.is_file() {
        anyhow::bail!("page file {} not found", page.display());
    }

    tracing::info!(page = %page.display(), "serving requests from stdin");

    let session = Session::new(discovery, config.analysis_settings());
    let monitor = Monitor::new(session, FilePage::new(page), config.scroll_debounce());
    let requests = LineRequests::new(BufReader::new(tokio::io::stdin()));

    monitor
        .run(requests, |output| match output {
            MonitorOutput::Response(response) => println!("{}", response.to_json()),
            MonitorOutput::Report(report) => tracing::info!(
                rpm = %report.rpm,
                containers = report.containers_found,
                analyzed = report.analyzed(),
                "page scanned"
            ),
        })
        .await;

    tracing::info!("stdin closed; stopping");
    Ok(())
}
