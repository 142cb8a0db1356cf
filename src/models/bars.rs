//! Daily OHLC bars and the validated series the engine consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }
}

/// Rejected bar input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("bar {date}: {field} must be a positive finite price, got {value}")]
    InvalidPrice {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },
    #[error("bar {date} does not come after previous bar {previous}")]
    NonIncreasingDate { previous: NaiveDate, date: NaiveDate },
}

/// Bars ordered by strictly increasing date with positive finite prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Validate raw bars. Gaps between dates are allowed.
    pub fn new(bars: Vec<Bar>) -> Result<Self, ValidationError> {
        let mut previous: Option<NaiveDate> = None;
        for bar in &bars {
            for (field, value) in [
                ("open", bar.open),
                ("high", bar.high),
                ("low", bar.low),
                ("close", bar.close),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ValidationError::InvalidPrice {
                        date: bar.date,
                        field,
                        value,
                    });
                }
            }
            if let Some(prev) = previous {
                if bar.date <= prev {
                    return Err(ValidationError::NonIncreasingDate {
                        previous: prev,
                        date: bar.date,
                    });
                }
            }
            previous = Some(bar.date);
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
