//! Unit tests for indicator keys and series

use chrono::NaiveDate;
use momentum_screener::models::{IndicatorKey, IndicatorSeries};

#[test]
fn test_key_parse_and_display() {
    assert_eq!("ma_5".parse::<IndicatorKey>().unwrap(), IndicatorKey::Sma(5));
    assert_eq!("PSY_10".parse::<IndicatorKey>().unwrap(), IndicatorKey::Psy(10));
    assert_eq!("rsi_14".parse::<IndicatorKey>().unwrap(), IndicatorKey::Rsi(14));
    assert_eq!("macd_hist".parse::<IndicatorKey>().unwrap(), IndicatorKey::MacdHistogram);
    assert_eq!(IndicatorKey::StochK.to_string(), "kd_k");
    assert_eq!(IndicatorKey::PrevClose.to_string(), "prev_close");
    assert_eq!(IndicatorKey::Sma(20).to_string(), "ma_20");
}

#[test]
fn test_key_parse_rejects_unknown() {
    assert!("foo".parse::<IndicatorKey>().is_err());
    assert!("ma_0".parse::<IndicatorKey>().is_err());
    assert!("ema_5".parse::<IndicatorKey>().is_err());
    assert!("rsi_x".parse::<IndicatorKey>().is_err());
}

#[test]
fn test_key_serde_uses_short_names() {
    let keys = vec![IndicatorKey::Psy(20), IndicatorKey::MacdSignal];
    let json = serde_json::to_string(&keys).unwrap();
    assert_eq!(json, r#"["psy_20","macd_signal"]"#);
    let back: Vec<IndicatorKey> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, keys);
    assert!(serde_json::from_str::<IndicatorKey>(r#""volume""#).is_err());
}

#[test]
fn test_series_latest_reads_last_entry() {
    let dates = vec![
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
    ];
    let mut series = IndicatorSeries::new(dates.clone());
    series.insert(IndicatorKey::Sma(5), vec![Some(1.0), Some(2.0)]);
    series.insert(IndicatorKey::Rsi(5), vec![Some(40.0), None]);

    assert_eq!(series.latest(IndicatorKey::Sma(5)), Some(2.0));
    assert_eq!(series.latest(IndicatorKey::Rsi(5)), None);
    assert_eq!(series.latest(IndicatorKey::Psy(10)), None);
    assert!(!series.contains(IndicatorKey::Psy(10)));
    assert_eq!(series.latest_date(), Some(dates[1]));

    let latest = series.latest_values();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[&IndicatorKey::Rsi(5)], None);
}
