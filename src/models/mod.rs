//! Shared data models spanning the engine layers.

pub mod bars;
pub mod candidate;
pub mod indicators;
pub mod strategy;

pub use bars::{Bar, BarSeries, ValidationError};
pub use candidate::{Candidate, LogEntry, RunLog, Ticker};
pub use indicators::{IndicatorKey, IndicatorSeries, LatestValues, ParseKeyError};
pub use strategy::{Comparison, Condition, Operand, ScreeningRule};
