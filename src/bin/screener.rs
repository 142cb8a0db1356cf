//! Momentum Screener
//!
//! Screens a ticker universe against one rule and prints the report as JSON.
//! With `SCREENER_DETAIL_TICKER` set, the output wraps the report together with
//! that ticker's full indicator series.

use dotenvy::dotenv;
use momentum_screener::config::{self, ConfigError, ScreenerConfig};
use momentum_screener::core::runtime::ScreeningRuntime;
use momentum_screener::logging;
use momentum_screener::models::Ticker;
use momentum_screener::services::universe;
use momentum_screener::services::{BarSource, JsonDirBarSource};
use serde_json::json;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!(environment = %env, "Starting momentum screener");

    let config = ScreenerConfig::from_env()?;
    let profile = config.load_profile()?;
    info!(rule = %profile.name(), "Screening rule: {}", profile.name());

    let universe_file = config
        .universe_file
        .clone()
        .ok_or(ConfigError::Missing("UNIVERSE_FILE"))?;
    let tickers = match &config.listing_suffix {
        Some(suffix) => universe::load_listing(&universe_file, suffix)?,
        None => universe::load_universe(&universe_file)?,
    };
    if tickers.is_empty() {
        warn!(path = %universe_file.display(), "Universe is empty - nothing to screen");
    } else {
        info!(tickers = tickers.len(), "Loaded {} tickers", tickers.len());
    }

    let bars_dir = config
        .bars_dir
        .clone()
        .ok_or(ConfigError::Missing("BARS_DIR"))?;
    let source: Arc<dyn BarSource> = Arc::new(JsonDirBarSource::new(bars_dir));

    let runtime = ScreeningRuntime::new(config.runtime(), source, profile);
    let report = runtime
        .run_until(tickers, async {
            if signal::ctrl_c().await.is_err() {
                // no signal handler; run to completion
                std::future::pending::<()>().await;
            }
            info!("Shutdown requested, stopping screen...");
        })
        .await;

    info!("{}", report.summary());

    let output = match &config.detail_ticker {
        Some(code) => {
            let series = runtime.indicator_series(&Ticker::new(code.as_str())).await?;
            info!(ticker = %code, bars = series.len(), "Attached indicator detail for {}", code);
            json!({
                "report": report,
                "detail": { "ticker": code, "series": series },
            })
        }
        None => serde_json::to_value(&report)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
