use std::num::NonZero;
use std::time::Duration;

/// Controls how long each timed trial runs and how many samples it collects.
///
/// A trial first calibrates a batch size (the number of invocations timed together as one
/// sample) by doubling it until one batch takes at least [`min_sample_time()`][Self::min_sample_time].
/// It then collects samples until both [`min_samples()`][Self::min_samples] and
/// [`min_trial_time()`][Self::min_trial_time] are reached, or [`max_samples()`][Self::max_samples]
/// is hit.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use codec_throughput::SamplingConfig;
///
/// let config = SamplingConfig::builder()
///     .min_samples(10)
///     .min_trial_time(Duration::from_millis(100))
///     .build();
///
/// assert_eq!(config.min_samples().get(), 10);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SamplingConfig {
    min_samples: NonZero<usize>,
    max_samples: NonZero<usize>,
    min_sample_time: Duration,
    min_trial_time: Duration,
    max_batch_iterations: NonZero<u64>,
}

impl SamplingConfig {
    /// Starts building a configuration from the default values.
    #[must_use]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// A short sampling budget for smoke runs, trading precision for speed.
    #[must_use]
    pub fn quick() -> Self {
        Self::builder()
            .min_sample_time(Duration::from_millis(2))
            .min_trial_time(Duration::from_millis(20))
            .build()
    }

    /// Minimum number of samples each trial collects.
    #[must_use]
    pub fn min_samples(&self) -> NonZero<usize> {
        self.min_samples
    }

    /// Maximum number of samples a trial collects, regardless of elapsed time.
    #[must_use]
    pub fn max_samples(&self) -> NonZero<usize> {
        self.max_samples
    }

    /// Minimum wall-clock time of one sample after calibration.
    #[must_use]
    pub fn min_sample_time(&self) -> Duration {
        self.min_sample_time
    }

    /// Minimum total sampled time of a trial.
    #[must_use]
    pub fn min_trial_time(&self) -> Duration {
        self.min_trial_time
    }

    /// Upper bound for the calibrated batch size.
    #[must_use]
    pub fn max_batch_iterations(&self) -> NonZero<u64> {
        self.max_batch_iterations
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`SamplingConfig`].
#[derive(Debug)]
#[must_use]
pub struct SamplingConfigBuilder {
    min_samples: NonZero<usize>,
    max_samples: NonZero<usize>,
    min_sample_time: Duration,
    min_trial_time: Duration,
    max_batch_iterations: NonZero<u64>,
}

impl Default for SamplingConfigBuilder {
    fn default() -> Self {
        Self {
            min_samples: NonZero::new(5).expect("literal is non-zero"),
            max_samples: NonZero::new(1000).expect("literal is non-zero"),
            min_sample_time: Duration::from_millis(10),
            min_trial_time: Duration::from_millis(250),
            max_batch_iterations: NonZero::new(1 << 30).expect("literal is non-zero"),
        }
    }
}

impl SamplingConfigBuilder {
    /// Sets the minimum number of samples per trial.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn min_samples(mut self, count: usize) -> Self {
        self.min_samples = NonZero::new(count).expect("min_samples cannot be zero");
        self
    }

    /// Sets the maximum number of samples per trial.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn max_samples(mut self, count: usize) -> Self {
        self.max_samples = NonZero::new(count).expect("max_samples cannot be zero");
        self
    }

    /// Sets the minimum duration of one sample.
    pub fn min_sample_time(mut self, duration: Duration) -> Self {
        self.min_sample_time = duration;
        self
    }

    /// Sets the minimum total sampled time per trial.
    pub fn min_trial_time(mut self, duration: Duration) -> Self {
        self.min_trial_time = duration;
        self
    }

    /// Sets the upper bound for the calibrated batch size.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    pub fn max_batch_iterations(mut self, iterations: u64) -> Self {
        self.max_batch_iterations =
            NonZero::new(iterations).expect("max_batch_iterations cannot be zero");
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `max_samples` is less than `min_samples`.
    #[must_use]
    pub fn build(self) -> SamplingConfig {
        assert!(
            self.max_samples >= self.min_samples,
            "max_samples ({}) cannot be less than min_samples ({})",
            self.max_samples,
            self.min_samples
        );

        SamplingConfig {
            min_samples: self.min_samples,
            max_samples: self.max_samples,
            min_sample_time: self.min_sample_time,
            min_trial_time: self.min_trial_time,
            max_batch_iterations: self.max_batch_iterations,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SamplingConfig::default();

        assert_eq!(config.min_samples().get(), 5);
        assert_eq!(config.max_samples().get(), 1000);
        assert_eq!(config.min_sample_time(), Duration::from_millis(10));
        assert_eq!(config.min_trial_time(), Duration::from_millis(250));
        assert_eq!(config.max_batch_iterations().get(), 1 << 30);
    }

    #[test]
    fn builder_overrides_values() {
        let config = SamplingConfig::builder()
            .min_samples(3)
            .max_samples(7)
            .min_sample_time(Duration::from_millis(1))
            .min_trial_time(Duration::from_millis(4))
            .max_batch_iterations(64)
            .build();

        assert_eq!(config.min_samples().get(), 3);
        assert_eq!(config.max_samples().get(), 7);
        assert_eq!(config.min_sample_time(), Duration::from_millis(1));
        assert_eq!(config.min_trial_time(), Duration::from_millis(4));
        assert_eq!(config.max_batch_iterations().get(), 64);
    }

    #[test]
    fn quick_is_shorter_than_default() {
        let quick = SamplingConfig::quick();
        let default = SamplingConfig::default();

        assert!(quick.min_trial_time() < default.min_trial_time());
        assert_eq!(quick.min_samples(), default.min_samples());
    }

    #[test]
    #[should_panic(expected = "min_samples cannot be zero")]
    fn panics_on_zero_min_samples() {
        let _builder = SamplingConfig::builder().min_samples(0);
    }

    #[test]
    #[should_panic(expected = "cannot be less than min_samples")]
    fn panics_on_inverted_bounds() {
        let _config = SamplingConfig::builder()
            .min_samples(10)
            .max_samples(5)
            .build();
    }
}
