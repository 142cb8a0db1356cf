//! Screening inputs and outputs: tickers, candidates and the run log.

use crate::models::indicators::LatestValues;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One security in the scanned universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Ticker {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A ticker that passed a rule on its latest bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub ticker: Ticker,
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    pub latest: LatestValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    pub message: String,
}

/// Append-only diagnostic log for one screening run.
///
/// Entries are keyed by ticker; relative order across tickers is not
/// meaningful when the run is parallel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunLog {
    entries: Vec<LogEntry>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run-level entry not tied to a ticker.
    pub fn note(&mut self, message: impl Into<String>) {
        self.entries.push(LogEntry {
            ticker: None,
            message: message.into(),
        });
    }

    pub fn record(&mut self, ticker: &str, message: impl Into<String>) {
        self.entries.push(LogEntry {
            ticker: Some(ticker.to_string()),
            message: message.into(),
        });
    }

    pub fn for_ticker<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.ticker.as_deref() == Some(code))
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries rendered as plain lines for a report.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| match &e.ticker {
                Some(code) => format!("{}: {}", code, e.message),
                None => e.message.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
