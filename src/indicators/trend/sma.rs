//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::Bar;

/// Mean close over the trailing `period` bars; first defined at `period - 1`.
pub fn calculate_sma(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma_series(&math::lift(&closes), period)
}

/// SMA for several periods at once, in the order given.
pub fn calculate_smas(bars: &[Bar], periods: &[usize]) -> Vec<(usize, Vec<Option<f64>>)> {
    periods
        .iter()
        .map(|&period| (period, calculate_sma(bars, period)))
        .collect()
}
