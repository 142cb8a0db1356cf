//! Indicator engine: OHLC bars in, index-aligned indicator series out.

pub mod engine;
pub mod momentum;
pub mod trend;

pub use engine::{IndicatorEngine, IndicatorParams};
pub use momentum::{MacdParams, StochasticParams};
