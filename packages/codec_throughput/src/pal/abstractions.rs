//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides monotonic wall-clock timestamps.
pub(crate) trait Clock: Debug + Send + Sync + 'static {
    /// Gets the current instant.
    fn now(&self) -> Instant;
}
