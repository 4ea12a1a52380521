use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_env_yields_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.default_rpm.value(), 0.45);
    assert!(!cfg.auto_analysis);
    assert_eq!(cfg.scroll_debounce_ms, 500);
    assert_eq!(cfg.watch_poll_ms, 250);
    assert!(cfg.profile_path.is_none());
}

#[test]
fn rpm_accepts_preset_name() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_RPM", "high");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_rpm.value(), 0.70);
}

#[test]
fn rpm_accepts_custom_value() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_RPM", "0.9");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_rpm.value(), 0.9);
}

#[test]
fn rpm_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_RPM", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOKMONEY_RPM"),
        "expected InvalidEnvVar(TOKMONEY_RPM), got: {result:?}"
    );
}

#[test]
fn auto_analysis_parses_booleans() {
    for (raw, expected) in [("true", true), ("1", true), ("ON", true), ("no", false), ("0", false)] {
        let mut map = HashMap::new();
        map.insert("TOKMONEY_AUTO_ANALYSIS", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.auto_analysis, expected, "input {raw:?}");
    }
}

#[test]
fn auto_analysis_garbage_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_AUTO_ANALYSIS", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOKMONEY_AUTO_ANALYSIS"),
        "got: {result:?}"
    );
}

#[test]
fn scroll_debounce_override() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_SCROLL_DEBOUNCE_MS", "1200");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scroll_debounce().as_millis(), 1200);
}

#[test]
fn scroll_debounce_invalid() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_SCROLL_DEBOUNCE_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOKMONEY_SCROLL_DEBOUNCE_MS"),
        "got: {result:?}"
    );
}

#[test]
fn watch_poll_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_WATCH_POLL_MS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TOKMONEY_WATCH_POLL_MS"),
        "got: {result:?}"
    );
}

#[test]
fn profile_path_set() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_PROFILE_PATH", "./config/profile.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.profile_path.as_deref(),
        Some(std::path::Path::new("./config/profile.yaml"))
    );
}

#[test]
fn blank_profile_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_PROFILE_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.profile_path.is_none());
}

#[test]
fn settings_follow_config() {
    let mut map = HashMap::new();
    map.insert("TOKMONEY_RPM", "low");
    map.insert("TOKMONEY_AUTO_ANALYSIS", "true");
    let settings = build_app_config(lookup_from_map(&map))
        .unwrap()
        .analysis_settings();
    assert_eq!(settings.rpm.value(), 0.20);
    assert!(settings.auto_analysis);
}
