//! `watch`: re-analyze a page file whenever it changes on disk.

use std::path::Path;

use tokmoney_core::{format_currency, AnalysisSettings, AppConfig};
use tokmoney_scraper::{Discovery, FilePage, FilePoller, Monitor, MonitorOutput, Session};

/// Poll `page` forever, printing one summary line per scan.
pub(crate) async fn run_watch(
    page: &Path,
    discovery: Discovery,
    mut settings: AnalysisSettings,
    config: &AppConfig,
) {
    // Watching a page only makes sense with scanning enabled.
    settings.auto_analysis = true;

    tracing::info!(
        page = %page.display(),
        every_ms = config.watch_poll_ms,
        rpm = %settings.rpm,
        "watching page"
    );

    let session = Session::new(discovery, settings);
    let monitor = Monitor::new(session, FilePage::new(page), config.scroll_debounce());
    let poller = FilePoller::new(page, config.watch_poll_interval());

    monitor
        .run(poller, |output| {
            if let MonitorOutput::Report(report) = output {
                println!(
                    "{} of {} containers analyzed, total {}",
                    report.analyzed(),
                    report.containers_found,
                    format_currency(report.total_earnings())
                );
            }
        })
        .await;
}
