//! Global throttle on outstanding bar fetches.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{AcquireError, Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;
use tracing::debug;

/// Caps concurrent fetches across all ticker jobs and spaces out fetch starts.
///
/// The spacing is a rate limit on the run as a whole, not a per-ticker delay.
#[derive(Debug)]
pub struct FetchThrottle {
    permits: Arc<Semaphore>,
    spacing: Duration,
    next_start: Mutex<Instant>,
}

impl FetchThrottle {
    pub fn new(max_outstanding: usize, spacing: Duration) -> Self {
        let max_outstanding = max_outstanding.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            permits: Arc::new(Semaphore::new(max_outstanding)),
            spacing,
            next_start: Mutex::new(Instant::now()),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(Semaphore::MAX_PERMITS, Duration::ZERO)
    }

    pub fn spacing(&self) -> Duration {
        self.spacing
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Wait for a fetch slot. Hold the permit for the duration of the fetch.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, AcquireError> {
        let permit = self.permits.clone().acquire_owned().await?;

        if !self.spacing.is_zero() {
            let start_at = {
                let mut next = self.next_start.lock().await;
                let slot = (*next).max(Instant::now());
                *next = slot + self.spacing;
                slot
            };
            let now = Instant::now();
            if start_at > now {
                debug!(
                    wait_ms = (start_at - now).as_millis() as u64,
                    "FetchThrottle: waiting for fetch slot"
                );
                tokio::time::sleep_until(start_at).await;
            }
        }

        Ok(permit)
    }
}

impl Default for FetchThrottle {
    fn default() -> Self {
        Self::unlimited()
    }
}
