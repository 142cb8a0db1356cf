//! Market data provider interface.

use crate::models::{Bar, Ticker};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read bars for {ticker}: {source}")]
    Io {
        ticker: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed bar data for {ticker}: {source}")]
    Decode {
        ticker: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("provider error for {ticker}: {message}")]
    Provider { ticker: String, message: String },
}

/// Supplies daily bars per ticker, ascending by date.
///
/// An empty vector means the provider has no data for the ticker.
#[async_trait]
pub trait BarSource: Send + Sync {
    async fn fetch_bars(&self, ticker: &Ticker) -> Result<Vec<Bar>, SourceError>;
}

/// Bars held in memory, keyed by ticker code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBarSource {
    bars: HashMap<String, Vec<Bar>>,
}

impl InMemoryBarSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bars(mut self, code: impl Into<String>, bars: Vec<Bar>) -> Self {
        self.insert(code, bars);
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, bars: Vec<Bar>) {
        self.bars.insert(code.into(), bars);
    }
}

#[async_trait]
impl BarSource for InMemoryBarSource {
    async fn fetch_bars(&self, ticker: &Ticker) -> Result<Vec<Bar>, SourceError> {
        Ok(self.bars.get(&ticker.code).cloned().unwrap_or_default())
    }
}
