// Cancellable one-second ticker driving the elapsed counter.
// Exists only while a segment clock runs; dropping the interval cancels it.

use std::future;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Default period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source owned by the tracker.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Start (or restart) ticking. The first tick fires one period from now.
    pub fn start(&mut self) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        self.interval = Some(interval);
    }

    /// Cancel any pending ticks.
    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn wait(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut ticker = Ticker::default();
        let started = Instant::now();
        ticker.start();

        ticker.wait().await;
        assert_eq!(Instant::now() - started, TICK_PERIOD);

        ticker.wait().await;
        assert_eq!(Instant::now() - started, TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_ticker_never_fires() {
        let mut ticker = Ticker::default();
        ticker.start();
        ticker.stop();

        assert!(!ticker.is_active());
        let waited = time::timeout(Duration::from_secs(10), ticker.wait()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_phase() {
        let mut ticker = Ticker::default();
        ticker.start();
        time::advance(Duration::from_millis(700)).await;

        ticker.start();
        let restarted = Instant::now();
        ticker.wait().await;
        assert_eq!(Instant::now() - restarted, TICK_PERIOD);
    }
}
