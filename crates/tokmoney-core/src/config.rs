use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::rpm::Rpm;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables take the [`AppConfig::default`] value.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let log_level = lookup("TOKMONEY_LOG_LEVEL").unwrap_or(defaults.log_level);

    let default_rpm = match lookup("TOKMONEY_RPM") {
        Ok(raw) => raw
            .parse::<Rpm>()
            .map_err(|e| invalid("TOKMONEY_RPM", e.to_string()))?,
        Err(_) => defaults.default_rpm,
    };

    let auto_analysis = match lookup("TOKMONEY_AUTO_ANALYSIS") {
        Ok(raw) => parse_bool(&raw)
            .ok_or_else(|| invalid("TOKMONEY_AUTO_ANALYSIS", format!("expected a boolean, got \"{raw}\"")))?,
        Err(_) => defaults.auto_analysis,
    };

    let scroll_debounce_ms = parse_u64("TOKMONEY_SCROLL_DEBOUNCE_MS", defaults.scroll_debounce_ms)?;
    let watch_poll_ms = parse_u64("TOKMONEY_WATCH_POLL_MS", defaults.watch_poll_ms)?;
    if watch_poll_ms == 0 {
        return Err(invalid("TOKMONEY_WATCH_POLL_MS", "must be greater than zero".to_string()));
    }

    let profile_path = lookup("TOKMONEY_PROFILE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        default_rpm,
        auto_analysis,
        scroll_debounce_ms,
        watch_poll_ms,
        profile_path,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
