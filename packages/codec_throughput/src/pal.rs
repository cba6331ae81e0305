//! Platform abstraction layer for wall-clock timing.
//!
//! This module allows switching between the real monotonic clock and a fake clock whose
//! progression is controlled by tests, so the adaptive sampling logic can be verified
//! without depending on the speed of the machine running the tests.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Clock;
pub(crate) use facade::ClockFacade;
#[cfg(test)]
pub(crate) use fake::FakeClock;
pub(crate) use real::RealClock;
