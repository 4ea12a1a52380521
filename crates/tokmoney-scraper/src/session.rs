//! Request handling with explicit, session-owned settings.

use tokmoney_core::{AnalysisSettings, Rpm};

use crate::analyze::{analyze_fragment, analyze_page, ScanReport};
use crate::discovery::Discovery;
use crate::eligibility::check_eligibility;
use crate::message::{Request, Response};
use crate::page::Page;

/// Outcome of one request: the reply, plus the scan it triggered, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Handled {
    pub response: Response,
    pub report: Option<ScanReport>,
}

/// Analyzer state for one open page.
///
/// Holds the current RPM and auto-analysis flag. Every scan receives them
/// explicitly; nothing from a previous scan is reused.
#[derive(Debug, Clone)]
pub struct Session {
    discovery: Discovery,
    settings: AnalysisSettings,
    /// Set once a scan has been rendered, so a rate change can refresh it.
    rendered: bool,
}

impl Session {
    #[must_use]
    pub fn new(discovery: Discovery, settings: AnalysisSettings) -> Self {
        Self {
            discovery,
            settings,
            rendered: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> AnalysisSettings {
        self.settings
    }

    pub fn set_rpm(&mut self, rpm: Rpm) {
        tracing::info!(rpm = rpm.value(), "RPM updated");
        self.settings.rpm = rpm;
    }

    pub fn set_auto_analysis(&mut self, enabled: bool) {
        tracing::info!(enabled, "auto analysis toggled");
        self.settings.auto_analysis = enabled;
    }

    /// Full-page scan with the current settings.
    pub fn scan(&mut self, page: &Page) -> ScanReport {
        let report = analyze_page(page, &self.discovery, &self.settings);
        self.rendered = true;
        report
    }

    /// Scan of newly inserted markup with the current settings.
    pub fn scan_fragment(&mut self, fragment: &Page) -> ScanReport {
        let report = analyze_fragment(fragment, &self.discovery, &self.settings);
        if report.analyzed() > 0 {
            self.rendered = true;
        }
        report
    }

    pub fn handle(&mut self, request: Request, page: &Page) -> Handled {
        match request {
            Request::AnalyzeVideos { rpm } => {
                if let Some(raw) = rpm {
                    match Rpm::new(raw) {
                        Ok(rpm) => self.set_rpm(rpm),
                        Err(e) => tracing::warn!(error = %e, "ignoring rate in analyze request"),
                    }
                }
                self.set_auto_analysis(true);
                Handled {
                    response: Response::ack(true),
                    report: Some(self.scan(page)),
                }
            }
            Request::UpdateRpm { rpm } => match Rpm::new(rpm) {
                Ok(rpm) => {
                    self.set_rpm(rpm);
                    let report = self.rendered.then(|| self.scan(page));
                    Handled {
                        response: Response::ack(true),
                        report,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rejecting RPM update");
                    Handled {
                        response: Response::ack(false),
                        report: None,
                    }
                }
            },
            Request::CheckEligibility => Handled {
                response: Response::Eligibility(check_eligibility(page, &self.discovery)),
                report: None,
            },
        }
    }
}
