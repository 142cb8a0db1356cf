//! Unit tests for built-in screening presets

use chrono::NaiveDate;
use momentum_screener::models::{IndicatorKey, IndicatorSeries};
use momentum_screener::strategies::{presets, ScreeningEvaluator, ScreeningProfile};

fn series_with(values: &[(IndicatorKey, f64)]) -> IndicatorSeries {
    let mut series = IndicatorSeries::new(vec![NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()]);
    for (key, value) in values {
        series.insert(*key, vec![Some(*value)]);
    }
    series
}

fn passes(profile: &ScreeningProfile, series: &IndicatorSeries) -> bool {
    ScreeningEvaluator::passes(&profile.rule, series)
}

fn wide_spread_row() -> IndicatorSeries {
    series_with(&[
        (IndicatorKey::Close, 110.0),
        (IndicatorKey::PrevClose, 100.0),
        (IndicatorKey::MacdHistogram, 2.0),
        (IndicatorKey::Macd, 5.0),
        (IndicatorKey::MacdSignal, 3.0),
        (IndicatorKey::Rsi(5), 60.0),
        (IndicatorKey::Rsi(10), 50.0),
        (IndicatorKey::Psy(10), 60.0),
        (IndicatorKey::Psy(20), 50.0),
        (IndicatorKey::StochK, 70.0),
        (IndicatorKey::StochD, 60.0),
        (IndicatorKey::Sma(5), 130.0),
        (IndicatorKey::Sma(10), 115.0),
        (IndicatorKey::Sma(20), 110.0),
    ])
}

fn tight_row() -> IndicatorSeries {
    series_with(&[
        (IndicatorKey::Close, 101.0),
        (IndicatorKey::PrevClose, 100.0),
        (IndicatorKey::MacdHistogram, 0.6),
        (IndicatorKey::Macd, 3.0),
        (IndicatorKey::MacdSignal, 2.4),
        (IndicatorKey::Rsi(5), 58.0),
        (IndicatorKey::Rsi(10), 52.0),
        (IndicatorKey::Psy(10), 45.0),
        (IndicatorKey::Psy(20), 50.0),
        (IndicatorKey::StochK, 65.0),
        (IndicatorKey::StochD, 65.0),
        (IndicatorKey::Sma(5), 100.5),
        (IndicatorKey::Sma(10), 100.2),
        (IndicatorKey::Sma(20), 99.8),
    ])
}

#[test]
fn test_presets_validate() {
    for profile in presets::all() {
        profile.validate().unwrap();
    }
    assert_eq!(
        presets::names(),
        vec!["momentum-breakout", "stability-reversal", "convergence"]
    );
}

#[test]
fn test_by_name_is_case_insensitive() {
    assert_eq!(
        presets::by_name(" Momentum-Breakout ").unwrap().name(),
        presets::MOMENTUM_BREAKOUT
    );
    assert!(presets::by_name("ma-cross").is_none());
}

#[test]
fn test_wide_spread_passes_stability_not_convergence() {
    let row = wide_spread_row();
    assert!(passes(&presets::stability_reversal(), &row));
    assert!(!passes(&presets::convergence(), &row));
    assert!(passes(&presets::momentum_breakout(), &row));
}

#[test]
fn test_tight_averages_pass_convergence_not_stability() {
    let row = tight_row();
    assert!(passes(&presets::convergence(), &row));
    assert!(!passes(&presets::stability_reversal(), &row));
    // PSY(10) below PSY(20) and K == D
    assert!(!passes(&presets::momentum_breakout(), &row));
}

#[test]
fn test_momentum_breakout_histogram_threshold() {
    let mut values = vec![
        (IndicatorKey::Rsi(5), 60.0),
        (IndicatorKey::Rsi(10), 50.0),
        (IndicatorKey::Psy(10), 60.0),
        (IndicatorKey::Psy(20), 50.0),
        (IndicatorKey::StochK, 70.0),
        (IndicatorKey::StochD, 60.0),
        (IndicatorKey::MacdHistogram, -0.79),
    ];
    assert!(passes(&presets::momentum_breakout(), &series_with(&values)));

    values.pop();
    values.push((IndicatorKey::MacdHistogram, -0.8));
    assert!(!passes(&presets::momentum_breakout(), &series_with(&values)));
}

#[test]
fn test_convergence_rejects_large_macd() {
    let mut row = tight_row();
    row.insert(IndicatorKey::Macd, vec![Some(-12.5)]);
    assert!(!passes(&presets::convergence(), &row));
}

#[test]
fn test_psy_may_sit_ten_below() {
    let mut row = wide_spread_row();
    row.insert(IndicatorKey::Psy(10), vec![Some(40.0)]);
    assert!(passes(&presets::stability_reversal(), &row));
    row.insert(IndicatorKey::Psy(10), vec![Some(39.99)]);
    assert!(!passes(&presets::stability_reversal(), &row));
}
