use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Monotonic time source the loop consults for its start instant, the
/// per-sample timestamps, and the termination check. Injected so the loop
/// can be driven deterministically in tests.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed epoch. Never decreases.
    fn now(&mut self) -> Duration;
}

/// Wall clock anchored at construction.
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Scripted clock for tests: hands out the queued instants in order and
/// sticks at the last one once exhausted.
pub struct ManualClock {
    ticks: VecDeque<Duration>,
    last: Duration,
}

impl ManualClock {
    pub fn new(ticks_s: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ticks: ticks_s.into_iter().map(Duration::from_secs_f64).collect(),
            last: Duration::ZERO,
        }
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Duration {
        if let Some(t) = self.ticks.pop_front() {
            self.last = t;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_pops_then_sticks() {
        let mut clock = ManualClock::new([0.0, 0.5, 1.0]);
        assert_eq!(clock.now(), Duration::from_secs_f64(0.0));
        assert_eq!(clock.now(), Duration::from_secs_f64(0.5));
        assert_eq!(clock.now(), Duration::from_secs_f64(1.0));
        assert_eq!(clock.now(), Duration::from_secs_f64(1.0));
    }

    #[test]
    fn test_monotonic_clock_advances() {
        let mut clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
