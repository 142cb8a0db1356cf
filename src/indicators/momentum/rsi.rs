//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::Bar;

/// Calculate RSI with Wilder smoothing
///
/// RSI = 100 * AvgGain / (AvgGain + AvgLoss)
///
/// The first average is the plain mean of the first `period` changes, so the
/// first defined value sits at index `period`. A window with neither gains
/// nor losses has no RSI. Values are rounded to 2 decimals.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let len = bars.len();
    let mut out = vec![None; len];
    if period == 0 || len <= period {
        return out;
    }

    let change = |i: usize| bars[i].close - bars[i - 1].close;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let c = change(i);
        if c > 0.0 {
            avg_gain += c;
        } else {
            avg_loss -= c;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    out[period] = rsi_value(avg_gain, avg_loss);

    let p = period as f64;
    for (i, slot) in out.iter_mut().enumerate().skip(period + 1) {
        let c = change(i);
        let (gain, loss) = if c > 0.0 { (c, 0.0) } else { (0.0, -c) };
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        *slot = rsi_value(avg_gain, avg_loss);
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    let total = avg_gain + avg_loss;
    if total == 0.0 {
        return None;
    }
    math::defined(math::round_to(100.0 * avg_gain / total, 2))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[Bar]) -> Vec<Option<f64>> {
    calculate_rsi(bars, 14)
}
