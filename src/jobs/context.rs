//! Job context for dependency injection

use crate::core::throttle::FetchThrottle;
use crate::indicators::IndicatorEngine;
use crate::services::market_data::BarSource;
use crate::strategies::ScreeningProfile;
use std::sync::Arc;

/// Shared, read-only dependencies of every ticker job in a run.
///
/// Jobs never mutate the context; results flow back through `TickerOutcome`.
pub struct JobContext {
    pub bar_source: Arc<dyn BarSource>,
    pub profile: Arc<ScreeningProfile>,
    pub engine: IndicatorEngine,
    pub throttle: FetchThrottle,
}

impl JobContext {
    pub fn new(
        bar_source: Arc<dyn BarSource>,
        profile: ScreeningProfile,
        throttle: FetchThrottle,
    ) -> Self {
        let engine = IndicatorEngine::new(profile.indicators.clone());
        Self {
            bar_source,
            profile: Arc::new(profile),
            engine,
            throttle,
        }
    }
}
