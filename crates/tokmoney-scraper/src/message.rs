//! Request/response contract between a control surface (popup, CLI) and
//! the page analyzer.

use serde::{Deserialize, Serialize};
use tokmoney_core::EligibilityResult;

use crate::ScraperError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    /// Scan the page, optionally switching rate first, and enable
    /// re-scans on scroll and mutation.
    #[serde(rename = "analyzeVideos")]
    AnalyzeVideos {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rpm: Option<f64>,
    },
    #[serde(rename = "updateRPM")]
    UpdateRpm { rpm: f64 },
    #[serde(rename = "checkEligibility")]
    CheckEligibility,
}

impl Request {
    /// # Errors
    ///
    /// Returns [`ScraperError::Message`] for malformed JSON or an unknown action.
    pub fn from_json(raw: &str) -> Result<Self, ScraperError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Ack { success: bool },
    Eligibility(EligibilityResult),
}

impl Response {
    #[must_use]
    pub fn ack(success: bool) -> Self {
        Response::Ack { success }
    }

    /// Zero-valued answer for a request whose page could not be read.
    #[must_use]
    pub fn failure_for(request: &Request) -> Self {
        match request {
            Request::CheckEligibility => Response::Eligibility(EligibilityResult::default()),
            Request::AnalyzeVideos { .. } | Request::UpdateRpm { .. } => Response::ack(false),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
    }
}
