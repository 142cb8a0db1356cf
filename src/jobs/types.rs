//! Job types for the screening workflow

use crate::models::{Candidate, Ticker, ValidationError};
use crate::services::market_data::SourceError;
use crate::strategies::Evaluation;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::AcquireError;

/// Screen one ticker: fetch, validate, compute, evaluate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenTickerJob {
    pub ticker: Ticker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TickerStatus {
    Passed,
    Failed,
    NoData,
    InvalidBars { reason: String },
    FetchFailed { reason: String },
}

impl TickerStatus {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            TickerStatus::NoData | TickerStatus::InvalidBars { .. } | TickerStatus::FetchFailed { .. }
        )
    }
}

/// Everything one ticker contributes to a run: a single log line and at most
/// one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct TickerOutcome {
    pub ticker: Ticker,
    pub status: TickerStatus,
    pub log_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
}

impl TickerOutcome {
    pub fn skipped(ticker: Ticker, status: TickerStatus, log_line: impl Into<String>) -> Self {
        Self {
            ticker,
            status,
            log_line: log_line.into(),
            candidate: None,
            evaluation: None,
        }
    }
}

/// Why a ticker's indicator series could not be produced.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("fetch throttle closed: {0}")]
    Throttle(#[from] AcquireError),
    #[error(transparent)]
    Fetch(#[from] SourceError),
    #[error(transparent)]
    InvalidBars(#[from] ValidationError),
}
