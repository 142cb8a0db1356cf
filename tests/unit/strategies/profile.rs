//! Unit tests for screening profiles

use momentum_screener::models::IndicatorKey;
use momentum_screener::strategies::{ProfileError, ScreeningProfile};
use std::io::Write;

const CUSTOM: &str = r#"{
    "rule": {
        "name": "rsi-6-12",
        "conditions": [
            {
                "type": "compare",
                "left": { "kind": "value", "key": "rsi_6" },
                "comparison": "GreaterThan",
                "right": { "kind": "value", "key": "rsi_12" }
            },
            {
                "type": "converge",
                "keys": ["ma_5", "ma_10"],
                "tolerance": 2
            }
        ]
    },
    "indicators": { "rsi_periods": [6, 12] }
}"#;

#[test]
fn test_custom_profile_from_json() {
    let profile = ScreeningProfile::from_json(CUSTOM, "inline").unwrap();
    assert_eq!(profile.name(), "rsi-6-12");
    assert_eq!(profile.rule.conditions.len(), 2);
    assert_eq!(
        profile.rule.referenced_keys(),
        vec![
            IndicatorKey::Sma(5),
            IndicatorKey::Sma(10),
            IndicatorKey::Rsi(6),
            IndicatorKey::Rsi(12),
        ]
    );
    assert_eq!(profile.indicators.sma_periods, vec![5, 10, 20]);
}

#[test]
fn test_unproduced_key_rejected() {
    let json = CUSTOM.replace("rsi_12", "psy_12");
    let err = ScreeningProfile::from_json(&json, "inline").unwrap_err();
    match err {
        ProfileError::UnproducedKey { rule, key } => {
            assert_eq!(rule, "rsi-6-12");
            assert_eq!(key, IndicatorKey::Psy(12));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_empty_rule_rejected() {
    let json = r#"{ "rule": { "name": "empty", "conditions": [] } }"#;
    assert!(matches!(
        ScreeningProfile::from_json(json, "inline"),
        Err(ProfileError::EmptyRule(name)) if name == "empty"
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let err = ScreeningProfile::from_json("{ not json", "broken.json").unwrap_err();
    assert!(matches!(err, ProfileError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CUSTOM.as_bytes()).unwrap();
    let profile = ScreeningProfile::load(file.path()).unwrap();
    assert_eq!(profile.name(), "rsi-6-12");

    let missing = ScreeningProfile::load("/nonexistent/profile.json").unwrap_err();
    assert!(matches!(missing, ProfileError::Io { .. }));
}

#[test]
fn test_profile_serializes_back() {
    let profile = ScreeningProfile::from_json(CUSTOM, "inline").unwrap();
    let json = serde_json::to_string(&profile).unwrap();
    let again = ScreeningProfile::from_json(&json, "roundtrip").unwrap();
    assert_eq!(again, profile);
}
