//! Series math over optional values.
//!
//! Every helper returns a series the same length as its input. Positions
//! without enough trailing history are `None`.

/// `Some(x)` when `x` is finite.
pub fn defined(x: f64) -> Option<f64> {
    if x.is_finite() {
        Some(x)
    } else {
        None
    }
}

/// Round to `decimals` places, ties to even (12.125 -> 12.12, 12.375 -> 12.38).
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round_ties_even() / factor
}

/// Simple moving average. A window containing `None` is undefined.
pub fn sma_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for end in (period - 1)..values.len() {
        let window = &values[end + 1 - period..=end];
        let sum: Option<f64> = window.iter().copied().sum();
        out[end] = sum.and_then(|s| defined(s / period as f64));
    }
    out
}

/// Exponential moving average with `k = 2 / (period + 1)`.
///
/// Seeded with the SMA of the first `period` defined values. Leading `None`s
/// are skipped; a `None` after the seed breaks the series.
pub fn ema_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    let start = match values.iter().position(|v| v.is_some()) {
        Some(s) => s,
        None => return out,
    };
    let seed_end = start + period - 1;
    if seed_end >= values.len() {
        return out;
    }
    let seed: Option<f64> = values[start..=seed_end].iter().copied().sum();
    let mut prev = match seed {
        Some(s) => s / period as f64,
        None => return out,
    };
    out[seed_end] = defined(prev);

    let k = 2.0 / (period as f64 + 1.0);
    for i in (seed_end + 1)..values.len() {
        match values[i] {
            Some(x) => {
                prev += (x - prev) * k;
                out[i] = defined(prev);
            }
            None => break,
        }
    }
    out
}

/// Rolling minimum over `period` values.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, f64::min)
}

/// Rolling maximum over `period` values.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, f64::max)
}

fn rolling(values: &[f64], period: usize, pick: fn(f64, f64) -> f64) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for end in (period - 1)..values.len() {
        let window = &values[end + 1 - period..=end];
        out[end] = window.iter().copied().reduce(pick);
    }
    out
}

pub fn lift(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|v| defined(*v)).collect()
}
