//! Fixed-interval pacing for the close-request poll loop

use std::time::{Duration, Instant};

/// Regulates poll ticks to a fixed interval.
///
/// `wait` sleeps out whatever remains of the interval since the previous
/// tick, so ticks that do real work still land on the target cadence. A zero
/// interval never sleeps.
pub(crate) struct PollRate {
    interval: Duration,
    last_tick: Instant,
}

impl PollRate {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// Sleep until the next tick is due, then mark it taken.
    pub(crate) fn wait(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.interval {
            std::thread::sleep(self.interval - elapsed);
        }
        self.last_tick = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_never_sleeps() {
        let mut rate = PollRate::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..100 {
            rate.wait();
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_wait_enforces_interval() {
        let mut rate = PollRate::new(Duration::from_millis(5));
        let start = Instant::now();
        rate.wait();
        rate.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
