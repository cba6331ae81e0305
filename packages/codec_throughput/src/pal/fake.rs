//! Fake clock implementation for testing.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::pal::Clock;

#[derive(Debug)]
struct FakeClockState {
    elapsed: Duration,
    step: Duration,
}

/// Fake clock whose time only moves when asked to.
///
/// Every call to `now()` first returns the current fake time and then advances it by the
/// configured step, which simulates each timed batch taking a fixed amount of time.
#[derive(Debug)]
pub(crate) struct FakeClock {
    origin: Instant,
    state: Mutex<FakeClockState>,
}

impl FakeClock {
    /// Creates a fake clock that advances by `step` on every reading.
    pub(crate) fn with_step(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            state: Mutex::new(FakeClockState {
                elapsed: Duration::ZERO,
                step,
            }),
        }
    }

    /// Creates a fake clock that never advances.
    pub(crate) fn frozen() -> Self {
        Self::with_step(Duration::ZERO)
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        let mut state = self
            .state
            .lock()
            .expect("FakeClock state lock should not be poisoned");

        let now = self.origin.checked_add(state.elapsed).expect(
            "fake clock cannot run past the end of time - this indicates an unrealistic scenario",
        );
        state.elapsed = state.elapsed.saturating_add(state.step);

        now
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn advances_by_step_per_reading() {
        let clock = FakeClock::with_step(Duration::from_millis(3));

        let first = clock.now();
        let second = clock.now();
        let third = clock.now();

        assert_eq!(second.duration_since(first), Duration::from_millis(3));
        assert_eq!(third.duration_since(first), Duration::from_millis(6));
    }

    #[test]
    fn frozen_clock_never_moves() {
        let clock = FakeClock::frozen();

        let first = clock.now();
        let second = clock.now();

        assert_eq!(second.duration_since(first), Duration::ZERO);
    }
}
