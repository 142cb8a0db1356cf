//! Screening runtime: fans ticker jobs out over a bounded pool and merges
//! their outcomes.

use crate::core::report::ScreeningReport;
use crate::core::throttle::FetchThrottle;
use crate::jobs::context::JobContext;
use crate::jobs::handlers;
use crate::jobs::types::{ScreenTickerJob, SeriesError, TickerOutcome, TickerStatus};
use crate::models::{Candidate, IndicatorSeries, RunLog, Ticker};
use crate::services::market_data::BarSource;
use crate::strategies::ScreeningProfile;
use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Configuration for the screening runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Ticker pipelines in flight at once.
    pub concurrency: usize,
    /// Fetches outstanding at once across the run.
    pub max_outstanding_fetches: usize,
    /// Minimum gap between fetch starts.
    pub fetch_spacing: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            concurrency: 1,
            max_outstanding_fetches: 1,
            fetch_spacing: Duration::ZERO,
        }
    }
}

pub struct ScreeningRuntime {
    config: RuntimeConfig,
    context: Arc<JobContext>,
}

impl ScreeningRuntime {
    pub fn new(
        config: RuntimeConfig,
        bar_source: Arc<dyn BarSource>,
        profile: ScreeningProfile,
    ) -> Self {
        let throttle = FetchThrottle::new(config.max_outstanding_fetches, config.fetch_spacing);
        let context = Arc::new(JobContext::new(bar_source, profile, throttle));
        Self { config, context }
    }

    pub fn rule_name(&self) -> &str {
        self.context.profile.name()
    }

    /// Full indicator series for one ticker under the active profile's params.
    pub async fn indicator_series(&self, ticker: &Ticker) -> Result<IndicatorSeries, SeriesError> {
        handlers::load_indicator_series(ticker, &self.context).await
    }

    /// Screen every ticker in the universe.
    pub async fn run(&self, universe: Vec<Ticker>) -> ScreeningReport {
        self.run_until(universe, std::future::pending()).await
    }

    /// Screen the universe until done or until `shutdown` resolves. Tickers
    /// still in flight at shutdown leave no candidate and no log entry.
    pub async fn run_until<F>(&self, universe: Vec<Ticker>, shutdown: F) -> ScreeningReport
    where
        F: Future<Output = ()>,
    {
        let started_at = Utc::now();
        let total_tickers = universe.len();
        let rule = self.rule_name().to_string();
        let concurrency = self.config.concurrency.max(1);

        let mut merge = OutcomeMerge::default();
        if universe.is_empty() {
            merge.log.note("universe is empty, nothing to screen");
        } else {
            merge.log.note(format!(
                "screening {} tickers with rule {}",
                total_tickers, rule
            ));
        }
        info!(
            tickers = total_tickers,
            rule = %rule,
            concurrency = concurrency,
            "ScreeningRuntime: starting run"
        );

        let outcomes = stream::iter(universe.into_iter().map(|ticker| {
            handlers::handle_screen_ticker(ScreenTickerJob { ticker }, self.context.clone())
        }))
        .buffer_unordered(concurrency);
        tokio::pin!(outcomes);
        tokio::pin!(shutdown);

        let mut aborted = false;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    aborted = true;
                    break;
                }
                next = outcomes.next() => match next {
                    Some(outcome) => merge.record(outcome),
                    None => break,
                },
            }
        }

        if aborted {
            warn!(
                processed = merge.processed,
                total = total_tickers,
                "ScreeningRuntime: run aborted"
            );
            merge.log.note(format!(
                "run aborted after {} of {} tickers",
                merge.processed, total_tickers
            ));
        }

        let completed_at = Utc::now();
        let duration_secs = (completed_at - started_at).num_milliseconds() as f64 / 1000.0;
        merge.candidates.sort_by(|a, b| a.ticker.code.cmp(&b.ticker.code));

        let report = ScreeningReport {
            id: format!("screen_{}", started_at.format("%Y%m%d_%H%M%S")),
            rule,
            candidates: merge.candidates,
            log: merge.log,
            total_tickers,
            processed: merge.processed,
            passed: merge.passed,
            failed: merge.failed,
            skipped: merge.skipped,
            aborted,
            started_at,
            completed_at,
            duration_secs,
        };
        info!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "ScreeningRuntime: {}",
            report.summary()
        );
        report
    }
}

/// Single point where ticker outcomes join the run's shared outputs.
#[derive(Default)]
struct OutcomeMerge {
    candidates: Vec<Candidate>,
    log: RunLog,
    processed: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl OutcomeMerge {
    fn record(&mut self, outcome: TickerOutcome) {
        self.processed += 1;
        match outcome.status {
            TickerStatus::Passed => self.passed += 1,
            TickerStatus::Failed => self.failed += 1,
            _ => self.skipped += 1,
        }
        self.log.record(&outcome.ticker.code, outcome.log_line);
        if let Some(candidate) = outcome.candidate {
            self.candidates.push(candidate);
        }
    }
}
