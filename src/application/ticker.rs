use std::time::Duration;

/// Shortest interval the ticker accepts; a zero interval would fire forever.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-cadence scheduled task driven by elapsed frame time.
///
/// The owner feeds time in with [`Ticker::advance`] and drains fires one at a
/// time with [`Ticker::poll`]. [`Ticker::stop`] disarms immediately: every
/// later `poll` returns false until the next `start`, including fires already
/// accumulated by the same `advance`.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            elapsed: Duration::ZERO,
            armed: false,
        }
    }

    /// Arm the ticker. No-op if already armed.
    pub fn start(&mut self) {
        if !self.armed {
            self.armed = true;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Disarm and drop any accumulated time
    pub fn stop(&mut self) {
        self.armed = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Accumulate elapsed time; ignored while disarmed
    pub fn advance(&mut self, delta: Duration) {
        if self.armed {
            self.elapsed += delta;
        }
    }

    /// Consume one due fire, if any
    pub fn poll(&mut self) -> bool {
        if self.armed && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_500: Duration = Duration::from_millis(500);

    fn drain(ticker: &mut Ticker) -> usize {
        std::iter::from_fn(|| ticker.poll().then_some(())).count()
    }

    #[test]
    fn test_fires_at_interval() {
        let mut ticker = Ticker::new(MS_500);
        ticker.start();

        ticker.advance(Duration::from_millis(499));
        assert_eq!(drain(&mut ticker), 0);

        ticker.advance(Duration::from_millis(1));
        assert_eq!(drain(&mut ticker), 1);

        ticker.advance(Duration::from_millis(1600));
        assert_eq!(drain(&mut ticker), 3);
    }

    #[test]
    fn test_disarmed_ignores_time() {
        let mut ticker = Ticker::new(MS_500);
        ticker.advance(Duration::from_secs(10));
        assert!(!ticker.poll());

        ticker.start();
        assert!(!ticker.poll());
    }

    #[test]
    fn test_stop_cancels_pending_fires() {
        let mut ticker = Ticker::new(MS_500);
        ticker.start();
        ticker.advance(Duration::from_secs(5));

        assert!(ticker.poll());
        ticker.stop();
        assert!(!ticker.poll());

        // Restart begins a fresh interval
        ticker.start();
        assert!(!ticker.poll());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut ticker = Ticker::new(MS_500);
        ticker.start();
        ticker.advance(Duration::from_millis(400));
        ticker.start();
        ticker.advance(Duration::from_millis(100));
        assert!(ticker.poll());
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), MIN_INTERVAL);
    }
}
