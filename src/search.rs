//! Search debouncing with generation tagging.
//!
//! Every keystroke calls [`SearchDebouncer::settle`], which bumps the issued
//! generation and sleeps for the quiet period. Only the call whose generation
//! is still the latest when it wakes goes on to hit the server. The same
//! generation is checked again when the response arrives, so a slow response
//! to an older search can never overwrite a newer one.
//!
//! Timers come from `futures-timer`, so this works on tokio and in the browser.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Debounces search input. Clones share the same generation counter.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    quiet_period: Duration,
    issued: Arc<AtomicU64>,
}

impl SearchDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Register a new search and return its generation.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently issued generation (0 if none).
    pub fn latest(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Whether `generation` is still the latest issued search.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest() == generation
    }

    /// Issue a generation and wait out the quiet period.
    ///
    /// Returns `None` if another search was issued in the meantime.
    pub async fn settle(&self) -> Option<u64> {
        let generation = self.issue();
        futures_timer::Delay::new(self.quiet_period).await;
        if self.is_current(generation) {
            Some(generation)
        } else {
            tracing::debug!(
                generation,
                latest = self.latest(),
                "Search superseded during quiet period"
            );
            None
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_increase() {
        let d = SearchDebouncer::default();
        assert_eq!(d.latest(), 0);
        assert_eq!(d.issue(), 1);
        assert_eq!(d.issue(), 2);
        assert!(d.is_current(2));
        assert!(!d.is_current(1));
    }

    #[test]
    fn test_clones_share_counter() {
        let a = SearchDebouncer::default();
        let b = a.clone();
        a.issue();
        assert_eq!(b.latest(), 1);
    }

    #[test]
    fn test_single_keystroke_settles() {
        let d = SearchDebouncer::new(Duration::from_millis(5));
        assert_eq!(tokio_test::block_on(d.settle()), Some(1));
    }

    #[tokio::test]
    async fn test_only_last_keystroke_survives() {
        let d = SearchDebouncer::new(Duration::from_millis(50));
        let first = d.settle();
        let second = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            d.settle().await
        };
        let (first, second) = tokio::join!(first, second);
        assert_eq!(first, None);
        assert_eq!(second, Some(2));
    }
}
