//! Unit tests for environment configuration

use momentum_screener::config::{ConfigError, ProfileSource, ScreenerConfig};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> Result<ScreenerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ScreenerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(
        config.profile,
        ProfileSource::Preset("momentum-breakout".to_string())
    );
    assert_eq!(config.concurrency, 1);
    assert_eq!(config.max_outstanding_fetches, 1);
    assert_eq!(config.fetch_spacing, Duration::from_millis(500));
    assert!(config.universe_file.is_none());
    assert!(config.detail_ticker.is_none());
}

#[test]
fn test_detail_ticker() {
    let config = config_from(&[("SCREENER_DETAIL_TICKER", " 2330.TW ")]).unwrap();
    assert_eq!(config.detail_ticker.as_deref(), Some("2330.TW"));
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("SCREENER_RULE", "convergence"),
        ("SCREENER_CONCURRENCY", "8"),
        ("SCREENER_FETCH_SPACING_MS", "0"),
        ("UNIVERSE_FILE", "data/universe.json"),
        ("LISTING_SUFFIX", ".TW"),
        ("BARS_DIR", " data/bars "),
    ])
    .unwrap();
    assert_eq!(config.profile, ProfileSource::Preset("convergence".to_string()));
    assert_eq!(config.concurrency, 8);
    assert_eq!(config.max_outstanding_fetches, 8);
    assert_eq!(config.fetch_spacing, Duration::ZERO);
    assert_eq!(config.universe_file, Some(PathBuf::from("data/universe.json")));
    assert_eq!(config.listing_suffix.as_deref(), Some(".TW"));
    assert_eq!(config.bars_dir, Some(PathBuf::from("data/bars")));

    let runtime = config.runtime();
    assert_eq!(runtime.concurrency, 8);
    assert_eq!(runtime.fetch_spacing, Duration::ZERO);
}

#[test]
fn test_profile_file_takes_precedence() {
    let config = config_from(&[
        ("SCREENER_RULE", "convergence"),
        ("SCREENER_PROFILE_FILE", "rules/custom.json"),
    ])
    .unwrap();
    assert_eq!(
        config.profile,
        ProfileSource::File(PathBuf::from("rules/custom.json"))
    );
}

#[test]
fn test_fetch_cap_can_differ_from_concurrency() {
    let config = config_from(&[
        ("SCREENER_CONCURRENCY", "8"),
        ("SCREENER_MAX_OUTSTANDING_FETCHES", "2"),
    ])
    .unwrap();
    assert_eq!(config.max_outstanding_fetches, 2);
}

#[test]
fn test_invalid_values_rejected() {
    assert!(matches!(
        config_from(&[("SCREENER_CONCURRENCY", "0")]),
        Err(ConfigError::InvalidValue { key: "SCREENER_CONCURRENCY", .. })
    ));
    assert!(matches!(
        config_from(&[("SCREENER_FETCH_SPACING_MS", "-5")]),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_load_profile_resolves_presets() {
    let config = config_from(&[("SCREENER_RULE", "Stability-Reversal")]).unwrap();
    assert_eq!(config.load_profile().unwrap().name(), "stability-reversal");

    let unknown = config_from(&[("SCREENER_RULE", "golden-cross")]).unwrap();
    match unknown.load_profile() {
        Err(ConfigError::UnknownRule { name, available }) => {
            assert_eq!(name, "golden-cross");
            assert!(available.contains("convergence"));
        }
        other => panic!("unexpected: {:?}", other.map(|p| p.rule.name)),
    }
}
