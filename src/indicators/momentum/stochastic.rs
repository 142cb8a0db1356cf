//! Stochastic oscillator (KD)

use crate::common::math;
use crate::models::Bar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StochasticParams {
    /// High/low lookback for raw %K.
    pub k_period: usize,
    /// SMA smoothing applied to raw %K.
    pub slow_k_period: usize,
    /// SMA smoothing applied to slow %K to get %D.
    pub slow_d_period: usize,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            k_period: 9,
            slow_k_period: 3,
            slow_d_period: 3,
        }
    }
}

impl StochasticParams {
    pub fn lookback(&self) -> usize {
        (self.k_period + self.slow_k_period + self.slow_d_period).saturating_sub(3)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StochasticSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
}

/// Slow stochastic %K / %D on a 0-100 scale.
///
/// Raw %K = 100 * (close - lowest low) / (highest high - lowest low); a flat
/// range gives 0. %K and %D are both reported from the first bar where %D is
/// defined.
pub fn calculate_stochastic(bars: &[Bar], params: &StochasticParams) -> StochasticSeries {
    let len = bars.len();
    if params.k_period == 0 || params.slow_k_period == 0 || params.slow_d_period == 0 {
        return StochasticSeries {
            k: vec![None; len],
            d: vec![None; len],
        };
    }

    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let highest = math::rolling_max(&highs, params.k_period);
    let lowest = math::rolling_min(&lows, params.k_period);

    let raw_k: Vec<Option<f64>> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| match (highest[i], lowest[i]) {
            (Some(hh), Some(ll)) => {
                let range = hh - ll;
                if range > 0.0 {
                    math::defined(100.0 * (bar.close - ll) / range)
                } else {
                    Some(0.0)
                }
            }
            _ => None,
        })
        .collect();

    let slow_k = math::sma_series(&raw_k, params.slow_k_period);
    let d = math::sma_series(&slow_k, params.slow_d_period);
    let start = params.lookback();
    let k = slow_k
        .iter()
        .enumerate()
        .map(|(i, v)| if i < start { None } else { *v })
        .collect();

    StochasticSeries { k, d }
}
