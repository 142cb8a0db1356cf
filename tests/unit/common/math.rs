//! Unit tests for series math helpers

use momentum_screener::common::math::*;

fn approx(a: Option<f64>, b: f64) -> bool {
    a.map(|a| (a - b).abs() < 1e-9).unwrap_or(false)
}

#[test]
fn test_sma_series_warmup_and_values() {
    let values = lift(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let sma = sma_series(&values, 3);
    assert_eq!(sma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_sma_series_window_with_gap_is_undefined() {
    let values = vec![Some(1.0), None, Some(3.0), Some(4.0), Some(5.0)];
    let sma = sma_series(&values, 2);
    assert_eq!(sma, vec![None, None, None, Some(3.5), Some(4.5)]);
}

#[test]
fn test_ema_series_seeded_with_sma() {
    let values = lift(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let ema = ema_series(&values, 3);
    assert!(ema[..2].iter().all(|v| v.is_none()));
    assert!(approx(ema[2], 2.0));
    assert!(approx(ema[3], 3.0));
    assert!(approx(ema[4], 4.0));
}

#[test]
fn test_ema_series_skips_leading_undefined() {
    let values = vec![None, Some(2.0), Some(4.0), Some(6.0)];
    let ema = ema_series(&values, 2);
    assert!(ema[..2].iter().all(|v| v.is_none()));
    assert!(approx(ema[2], 3.0));
    assert!(approx(ema[3], 5.0));
}

#[test]
fn test_ema_constant_input_stays_exact() {
    let values = lift(&[100.0; 40]);
    let ema = ema_series(&values, 12);
    assert!(ema[11..].iter().all(|v| *v == Some(100.0)));
}

#[test]
fn test_ema_too_short() {
    let values = lift(&[1.0, 2.0]);
    assert!(ema_series(&values, 5).iter().all(|v| v.is_none()));
}

#[test]
fn test_rolling_extremes() {
    let values = [3.0, 1.0, 4.0, 1.5, 5.0];
    assert_eq!(
        rolling_min(&values, 2),
        vec![None, Some(1.0), Some(1.0), Some(1.5), Some(1.5)]
    );
    assert_eq!(
        rolling_max(&values, 3),
        vec![None, None, Some(4.0), Some(4.0), Some(5.0)]
    );
}

#[test]
fn test_round_to_two_decimals() {
    assert_eq!(round_to(200.0 / 3.0, 2), 66.67);
    assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
    assert_eq!(round_to(50.0, 2), 50.0);
}

#[test]
fn test_round_to_ties_to_even() {
    assert_eq!(round_to(12.125, 2), 12.12);
    assert_eq!(round_to(12.375, 2), 12.38);
    assert_eq!(round_to(-12.125, 2), -12.12);
    assert_eq!(round_to(0.5, 0), 0.0);
    assert_eq!(round_to(1.5, 0), 2.0);
}

#[test]
fn test_defined_rejects_non_finite() {
    assert_eq!(defined(1.5), Some(1.5));
    assert_eq!(defined(f64::NAN), None);
    assert_eq!(defined(f64::INFINITY), None);
}
