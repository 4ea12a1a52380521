pub mod app_config;
pub mod config;
pub mod count;
pub mod earnings;
pub mod eligibility;
pub mod profile;
pub mod rpm;

pub use app_config::{AnalysisSettings, AppConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use count::{format_count, parse_count};
pub use earnings::{estimate, format_currency, ELIGIBLE_FRACTION};
pub use eligibility::{EligibilityResult, Shortfall};
pub use profile::{load_profile, DiscoveryProfile};
pub use rpm::{Rpm, RpmPreset};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid RPM {value}: must be a positive, finite number")]
    InvalidRpm { value: f64 },

    #[error("invalid RPM preset \"{0}\": expected low, medium, or high")]
    InvalidPresetName(String),

    #[error("invalid RPM slider position {0}: expected 0, 1, or 2")]
    InvalidPresetIndex(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read discovery profile at {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse discovery profile: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("discovery profile validation failed: {0}")]
    Validation(String),
}
