//! Per-ticker screening jobs

pub mod context;
pub mod handlers;
pub mod types;

pub use context::JobContext;
pub use handlers::{handle_screen_ticker, load_indicator_series};
pub use types::{ScreenTickerJob, SeriesError, TickerOutcome, TickerStatus};
