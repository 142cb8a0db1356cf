//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::Bar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 10,
            slow_period: 20,
            signal_period: 9,
        }
    }
}

impl MacdParams {
    /// The textbook 12/26/9 configuration.
    pub fn classic() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }

    /// Index of the first defined output.
    pub fn lookback(&self) -> usize {
        let slow = self.fast_period.max(self.slow_period);
        (slow + self.signal_period).saturating_sub(2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate MACD over closes
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Both EMAs are seeded on the window ending at `slow - 1`, so the fast EMA
/// ignores bars before `slow - fast`. All three lines start together at
/// `slow + signal - 2`.
pub fn calculate_macd(bars: &[Bar], params: &MacdParams) -> MacdSeries {
    let len = bars.len();
    let empty = MacdSeries {
        macd: vec![None; len],
        signal: vec![None; len],
        histogram: vec![None; len],
    };
    let (fast, slow) = if params.slow_period < params.fast_period {
        (params.slow_period, params.fast_period)
    } else {
        (params.fast_period, params.slow_period)
    };
    if fast == 0 || params.signal_period == 0 {
        return empty;
    }

    let closes: Vec<Option<f64>> = bars.iter().map(|b| math::defined(b.close)).collect();
    let fast_input: Vec<Option<f64>> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| if i < slow - fast { None } else { *c })
        .collect();

    let fast_ema = math::ema_series(&fast_input, fast);
    let slow_ema = math::ema_series(&closes, slow);
    let raw_macd: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => math::defined(f - s),
            _ => None,
        })
        .collect();
    let signal = math::ema_series(&raw_macd, params.signal_period);

    let start = slow + params.signal_period - 2;
    let macd: Vec<Option<f64>> = raw_macd
        .iter()
        .enumerate()
        .map(|(i, m)| if i < start { None } else { *m })
        .collect();
    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => math::defined(m - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD with the classic periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[Bar]) -> MacdSeries {
    calculate_macd(bars, &MacdParams::classic())
}
