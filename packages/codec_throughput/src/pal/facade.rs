use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;
use std::time::Instant;

#[cfg(test)]
use crate::pal::FakeClock;
use crate::pal::{Clock, RealClock};

/// Static instance of the real clock for production use.
static REAL_CLOCK: RealClock = RealClock;

/// Dispatches to either the real clock or, in test builds, a fake one.
#[derive(Clone)]
pub(crate) enum ClockFacade {
    Real(&'static RealClock),

    #[cfg(test)]
    Fake(Arc<FakeClock>),
}

impl ClockFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&REAL_CLOCK)
    }

    #[cfg(test)]
    pub(crate) fn fake(clock: FakeClock) -> Self {
        Self::Fake(Arc::new(clock))
    }
}

impl Clock for ClockFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(clock) => clock.now(),
            #[cfg(test)]
            Self::Fake(clock) => clock.now(),
        }
    }
}

impl Debug for ClockFacade {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(clock) => clock.fmt(f),
            #[cfg(test)]
            Self::Fake(clock) => clock.fmt(f),
        }
    }
}
