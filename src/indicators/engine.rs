//! Computes the full indicator battery for one ticker.

use crate::indicators::momentum::{
    calculate_macd, calculate_psy, calculate_rsi, calculate_stochastic, MacdParams,
    StochasticParams,
};
use crate::indicators::trend::calculate_sma;
use crate::models::{BarSeries, IndicatorKey, IndicatorSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Window sizes and periods for every indicator the engine produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    #[serde(default = "default_sma_periods")]
    pub sma_periods: Vec<usize>,
    #[serde(default)]
    pub macd: MacdParams,
    #[serde(default)]
    pub stochastic: StochasticParams,
    #[serde(default = "default_psy_windows")]
    pub psy_windows: Vec<usize>,
    #[serde(default = "default_rsi_periods")]
    pub rsi_periods: Vec<usize>,
}

fn default_sma_periods() -> Vec<usize> {
    vec![5, 10, 20]
}

fn default_psy_windows() -> Vec<usize> {
    vec![10, 20]
}

fn default_rsi_periods() -> Vec<usize> {
    vec![5, 10]
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_periods: default_sma_periods(),
            macd: MacdParams::default(),
            stochastic: StochasticParams::default(),
            psy_windows: default_psy_windows(),
            rsi_periods: default_rsi_periods(),
        }
    }
}

impl IndicatorParams {
    /// Whether the engine emits `key` under these params.
    pub fn produces(&self, key: IndicatorKey) -> bool {
        match key {
            IndicatorKey::Close
            | IndicatorKey::PrevClose
            | IndicatorKey::Macd
            | IndicatorKey::MacdSignal
            | IndicatorKey::MacdHistogram
            | IndicatorKey::StochK
            | IndicatorKey::StochD => true,
            IndicatorKey::Sma(n) => self.sma_periods.contains(&n),
            IndicatorKey::Psy(n) => self.psy_windows.contains(&n),
            IndicatorKey::Rsi(n) => self.rsi_periods.contains(&n),
        }
    }

    /// Bars needed before every configured series has a latest value.
    pub fn min_history(&self) -> usize {
        let sma = self.sma_periods.iter().copied().max().unwrap_or(0);
        let psy = self.psy_windows.iter().map(|w| w + 1).max().unwrap_or(0);
        let rsi = self.rsi_periods.iter().map(|p| p + 1).max().unwrap_or(0);
        [
            sma,
            psy,
            rsi,
            self.macd.lookback() + 1,
            self.stochastic.lookback() + 1,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Indicator engine
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute every configured series, aligned to the bar dates.
    pub fn compute(&self, series: &BarSeries) -> IndicatorSeries {
        let bars = series.bars();
        let mut out = IndicatorSeries::new(series.dates());

        out.insert(
            IndicatorKey::Close,
            bars.iter().map(|b| Some(b.close)).collect(),
        );
        out.insert(
            IndicatorKey::PrevClose,
            std::iter::once(None)
                .chain(bars.iter().map(|b| Some(b.close)))
                .take(bars.len())
                .collect(),
        );

        for &period in &self.params.sma_periods {
            out.insert(IndicatorKey::Sma(period), calculate_sma(bars, period));
        }

        let macd = calculate_macd(bars, &self.params.macd);
        out.insert(IndicatorKey::Macd, macd.macd);
        out.insert(IndicatorKey::MacdSignal, macd.signal);
        out.insert(IndicatorKey::MacdHistogram, macd.histogram);

        let kd = calculate_stochastic(bars, &self.params.stochastic);
        out.insert(IndicatorKey::StochK, kd.k);
        out.insert(IndicatorKey::StochD, kd.d);

        for &window in &self.params.psy_windows {
            out.insert(IndicatorKey::Psy(window), calculate_psy(bars, window));
        }
        for &period in &self.params.rsi_periods {
            out.insert(IndicatorKey::Rsi(period), calculate_rsi(bars, period));
        }

        if series.len() < self.params.min_history() {
            debug!(
                bars = series.len(),
                needed = self.params.min_history(),
                "IndicatorEngine: short history, some latest values undefined"
            );
        }

        out
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(IndicatorParams::default())
    }
}
