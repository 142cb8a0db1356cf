//! Job handler for the per-ticker screening pipeline

use crate::jobs::context::JobContext;
use crate::jobs::types::{ScreenTickerJob, SeriesError, TickerOutcome, TickerStatus};
use crate::models::{BarSeries, Candidate, IndicatorSeries, Ticker};
use crate::strategies::ScreeningEvaluator;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Run fetch -> validate -> indicators -> rule for one ticker.
///
/// Never fails: every problem becomes a skip status with its own log line.
pub async fn handle_screen_ticker(job: ScreenTickerJob, ctx: Arc<JobContext>) -> TickerOutcome {
    let ticker = job.ticker;
    debug!(ticker = %ticker.code, "ScreenTickerJob: fetching bars for {}", ticker.code);

    let fetched = match ctx.throttle.acquire().await {
        Ok(_permit) => ctx.bar_source.fetch_bars(&ticker).await,
        Err(e) => {
            warn!(ticker = %ticker.code, error = %e, "ScreenTickerJob: fetch throttle closed");
            let reason = format!("fetch throttle closed: {}", e);
            return TickerOutcome::skipped(
                ticker,
                TickerStatus::FetchFailed {
                    reason: reason.clone(),
                },
                format!("skipped: fetch failed ({})", reason),
            );
        }
    };

    let raw = match fetched {
        Ok(bars) => bars,
        Err(e) => {
            warn!(ticker = %ticker.code, error = %e, "ScreenTickerJob: fetch failed for {}", ticker.code);
            return TickerOutcome::skipped(
                ticker,
                TickerStatus::FetchFailed {
                    reason: e.to_string(),
                },
                format!("skipped: fetch failed ({})", e),
            );
        }
    };

    if raw.is_empty() {
        debug!(ticker = %ticker.code, "ScreenTickerJob: no data for {}", ticker.code);
        return TickerOutcome::skipped(ticker, TickerStatus::NoData, "skipped: no data");
    }

    let series = match BarSeries::new(raw) {
        Ok(series) => series,
        Err(e) => {
            warn!(ticker = %ticker.code, error = %e, "ScreenTickerJob: invalid bars for {}", ticker.code);
            return TickerOutcome::skipped(
                ticker,
                TickerStatus::InvalidBars {
                    reason: e.to_string(),
                },
                format!("skipped: invalid bars ({})", e),
            );
        }
    };

    let indicators = ctx.engine.compute(&series);
    let evaluation = ScreeningEvaluator::evaluate(&ctx.profile.rule, &indicators);
    let log_line = evaluation.to_string();

    if evaluation.passed() {
        info!(
            ticker = %ticker.code,
            rule = %evaluation.rule,
            bars = series.len(),
            "ScreenTickerJob: {} passed {}",
            ticker.code,
            evaluation.rule
        );
        let candidate = Candidate {
            ticker: ticker.clone(),
            rule: evaluation.rule.clone(),
            as_of: indicators.latest_date(),
            latest: indicators.latest_values(),
        };
        TickerOutcome {
            ticker,
            status: TickerStatus::Passed,
            log_line,
            candidate: Some(candidate),
            evaluation: Some(evaluation),
        }
    } else {
        debug!(
            ticker = %ticker.code,
            rule = %evaluation.rule,
            failed_conditions = evaluation.failures().count(),
            "ScreenTickerJob: {} did not pass {}",
            ticker.code,
            evaluation.rule
        );
        TickerOutcome {
            ticker,
            status: TickerStatus::Failed,
            log_line,
            candidate: None,
            evaluation: Some(evaluation),
        }
    }
}

/// Fetch and compute the full indicator series for one ticker, outside a run.
///
/// No data yields an empty series rather than an error.
pub async fn load_indicator_series(
    ticker: &Ticker,
    ctx: &JobContext,
) -> Result<IndicatorSeries, SeriesError> {
    let raw = {
        let _permit = ctx.throttle.acquire().await?;
        ctx.bar_source.fetch_bars(ticker).await?
    };
    let series = BarSeries::new(raw)?;
    debug!(ticker = %ticker.code, bars = series.len(), "Computing indicator detail for {}", ticker.code);
    Ok(ctx.engine.compute(&series))
}
