//! Result of one screening run.

use crate::models::{Candidate, RunLog};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    /// Run ID (timestamp-based)
    pub id: String,
    pub rule: String,
    /// Passing tickers, sorted by code
    pub candidates: Vec<Candidate>,
    pub log: RunLog,
    pub total_tickers: usize,
    pub processed: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// The run was cut short; unfinished tickers contributed nothing.
    pub aborted: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: f64,
}

impl ScreeningReport {
    pub fn candidate_codes(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|c| c.ticker.code.as_str())
            .collect()
    }

    pub fn is_candidate(&self, code: &str) -> bool {
        self.candidates.iter().any(|c| c.ticker.code == code)
    }

    /// Summary string for logging.
    pub fn summary(&self) -> String {
        format!(
            "Screened {}/{} tickers with {} in {:.1}s: {} passed, {} failed, {} skipped{}",
            self.processed,
            self.total_tickers,
            self.rule,
            self.duration_secs,
            self.passed,
            self.failed,
            self.skipped,
            if self.aborted { " (aborted)" } else { "" }
        )
    }
}
