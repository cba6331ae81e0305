use std::fmt;
use std::time::Duration;

use crate::SampleStats;

/// Direction of a codec operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum OperationKind {
    /// Bytes to text.
    Encode,

    /// Text to bytes.
    Decode,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Result of timing one operation kind for one payload size.
///
/// Throughput is always expressed in payload bytes. For decode this is the length of the
/// original payload, not the (longer) encoded text the decoder actually reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    kind: OperationKind,
    name: String,
    payload_len: usize,
    total_iterations: u64,
    total_time: Duration,
    stats: SampleStats,
}

impl Measurement {
    pub(crate) fn new(
        kind: OperationKind,
        name: String,
        payload_len: usize,
        total_iterations: u64,
        total_time: Duration,
        stats: SampleStats,
    ) -> Self {
        Self {
            kind,
            name,
            payload_len,
            total_iterations,
            total_time,
            stats,
        }
    }

    /// The operation direction this measurement describes.
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Display name of the measured operation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the payload the operation was measured against.
    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// Number of timing samples that contributed to the rate.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.stats.sample_count()
    }

    /// Total invocations across all samples.
    #[must_use]
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    /// Total wall-clock time across all samples.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Per-sample statistics of the invocation rate.
    #[must_use]
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }

    /// Mean invocation rate in operations per second.
    ///
    /// Derived from total iterations over total time. Zero if no iteration completed in
    /// measurable time.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "iteration counts far beyond 2^52 are not realistic"
    )]
    pub fn rate(&self) -> f64 {
        let seconds = self.total_time.as_secs_f64();

        if self.total_iterations == 0 || seconds <= 0.0 {
            0.0
        } else {
            self.total_iterations as f64 / seconds
        }
    }

    /// Mean wall-clock time of one invocation, or `None` if unbounded (the rate is zero).
    #[must_use]
    pub fn time_per_op(&self) -> Option<Duration> {
        let rate = self.rate();

        if rate > 0.0 {
            Duration::try_from_secs_f64(rate.recip()).ok()
        } else {
            None
        }
    }

    /// Throughput in payload bytes per second. Never negative.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "payload sizes are far below 2^52"
    )]
    pub fn throughput(&self) -> f64 {
        (self.payload_len as f64 * self.rate()).max(0.0)
    }
}
