use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of one computed series.
///
/// Keys render as the short names used in rule files and reports, e.g.
/// `ma_5`, `psy_10`, `rsi_5`, `kd_k`, `macd_hist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndicatorKey {
    Close,
    PrevClose,
    Sma(usize),
    Macd,
    MacdSignal,
    MacdHistogram,
    StochK,
    StochD,
    Psy(usize),
    Rsi(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown indicator key '{0}'")]
pub struct ParseKeyError(pub String);

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKey::Close => write!(f, "close"),
            IndicatorKey::PrevClose => write!(f, "prev_close"),
            IndicatorKey::Sma(n) => write!(f, "ma_{}", n),
            IndicatorKey::Macd => write!(f, "macd"),
            IndicatorKey::MacdSignal => write!(f, "macd_signal"),
            IndicatorKey::MacdHistogram => write!(f, "macd_hist"),
            IndicatorKey::StochK => write!(f, "kd_k"),
            IndicatorKey::StochD => write!(f, "kd_d"),
            IndicatorKey::Psy(n) => write!(f, "psy_{}", n),
            IndicatorKey::Rsi(n) => write!(f, "rsi_{}", n),
        }
    }
}

impl FromStr for IndicatorKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let fixed = match key.as_str() {
            "close" => Some(IndicatorKey::Close),
            "prev_close" => Some(IndicatorKey::PrevClose),
            "macd" => Some(IndicatorKey::Macd),
            "macd_signal" => Some(IndicatorKey::MacdSignal),
            "macd_hist" => Some(IndicatorKey::MacdHistogram),
            "kd_k" => Some(IndicatorKey::StochK),
            "kd_d" => Some(IndicatorKey::StochD),
            _ => None,
        };
        if let Some(k) = fixed {
            return Ok(k);
        }

        let (prefix, period) = key
            .rsplit_once('_')
            .ok_or_else(|| ParseKeyError(s.to_string()))?;
        let period: usize = period
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| ParseKeyError(s.to_string()))?;
        match prefix {
            "ma" => Ok(IndicatorKey::Sma(period)),
            "psy" => Ok(IndicatorKey::Psy(period)),
            "rsi" => Ok(IndicatorKey::Rsi(period)),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

impl TryFrom<String> for IndicatorKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IndicatorKey> for String {
    fn from(key: IndicatorKey) -> Self {
        key.to_string()
    }
}

/// Latest value of every series, `None` where history was insufficient.
pub type LatestValues = BTreeMap<IndicatorKey, Option<f64>>;

/// Indicator series index-aligned with the bars they were computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSeries {
    dates: Vec<NaiveDate>,
    values: BTreeMap<IndicatorKey, Vec<Option<f64>>>,
}

impl IndicatorSeries {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            values: BTreeMap::new(),
        }
    }

    /// Store a series. It must have one entry per date.
    pub fn insert(&mut self, key: IndicatorKey, values: Vec<Option<f64>>) {
        debug_assert_eq!(values.len(), self.dates.len(), "series {} misaligned", key);
        self.values.insert(key, values);
    }

    pub fn get(&self, key: IndicatorKey) -> Option<&[Option<f64>]> {
        self.values.get(&key).map(|v| v.as_slice())
    }

    /// Most recent value of `key`; `None` when undefined or never computed.
    pub fn latest(&self, key: IndicatorKey) -> Option<f64> {
        self.values.get(&key).and_then(|v| v.last().copied().flatten())
    }

    pub fn latest_values(&self) -> LatestValues {
        self.values
            .iter()
            .map(|(key, series)| (*key, series.last().copied().flatten()))
            .collect()
    }

    pub fn contains(&self, key: IndicatorKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = IndicatorKey> + '_ {
        self.values.keys().copied()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
