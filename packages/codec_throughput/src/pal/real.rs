//! Real clock backed by the operating system monotonic clock.

use std::time::Instant;

use crate::pal::Clock;

#[derive(Debug, Default)]
pub(crate) struct RealClock;

impl Clock for RealClock {
    #[cfg_attr(test, mutants::skip)] // Real time cannot be asserted on.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
