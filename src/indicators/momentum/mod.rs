//! Momentum indicators: MACD, stochastic KD, PSY, RSI

pub mod macd;
pub mod psy;
pub mod rsi;
pub mod stochastic;

pub use macd::*;
pub use psy::*;
pub use rsi::*;
pub use stochastic::*;
