//! Statistics over the per-sample invocation rates of a trial.

/// Two-tailed Student's t critical values at 95% confidence, indexed by degrees of freedom
/// minus one. Beyond the table the normal approximation is used.
const T_TABLE_95: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, 2.201, 2.179, 2.160,
    2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086, 2.080, 2.074, 2.069, 2.064, 2.060, 2.056,
    2.052, 2.048, 2.045, 2.042,
];

const T_INFINITY_95: f64 = 1.96;

/// Summary statistics of the invocation rates (operations per second) observed in the
/// individual samples of one trial.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleStats {
    sample_count: usize,
    mean: f64,
    std_dev: f64,
    margin_of_error: f64,
}

impl SampleStats {
    /// Calculates statistics from per-sample rates.
    ///
    /// Fewer than two samples yield a zero deviation and margin of error.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sample counts are tiny compared to 2^52"
    )]
    pub fn from_rates(rates: &[f64]) -> Self {
        let sample_count = rates.len();

        if sample_count == 0 {
            return Self {
                sample_count,
                mean: 0.0,
                std_dev: 0.0,
                margin_of_error: 0.0,
            };
        }

        let n = sample_count as f64;
        let mean = rates.iter().sum::<f64>() / n;

        if sample_count < 2 {
            return Self {
                sample_count,
                mean,
                std_dev: 0.0,
                margin_of_error: 0.0,
            };
        }

        let variance = rates.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let std_dev = variance.sqrt();
        let standard_error = std_dev / n.sqrt();
        let margin_of_error = standard_error * t_critical(sample_count.saturating_sub(1));

        Self {
            sample_count,
            mean,
            std_dev,
            margin_of_error,
        }
    }

    /// Number of samples the statistics were calculated from.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Arithmetic mean of the per-sample rates.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the per-sample rates.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Half-width of the 95% confidence interval of the mean rate.
    #[must_use]
    pub fn margin_of_error(&self) -> f64 {
        self.margin_of_error
    }

    /// Margin of error as a percentage of the mean. Zero when the mean is zero.
    #[must_use]
    pub fn relative_margin_of_error(&self) -> f64 {
        if self.mean > 0.0 {
            self.margin_of_error / self.mean * 100.0
        } else {
            0.0
        }
    }

    /// Whether the 95% confidence intervals of the two means overlap, meaning neither can be
    /// called faster than the other.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (low, high) = self.interval();
        let (other_low, other_high) = other.interval();

        low <= other_high && other_low <= high
    }

    fn interval(&self) -> (f64, f64) {
        (
            self.mean - self.margin_of_error,
            self.mean + self.margin_of_error,
        )
    }
}

fn t_critical(degrees_of_freedom: usize) -> f64 {
    degrees_of_freedom
        .checked_sub(1)
        .and_then(|index| T_TABLE_95.get(index).copied())
        .unwrap_or(T_INFINITY_95)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_rates_are_all_zero() {
        let stats = SampleStats::from_rates(&[]);

        assert_eq!(stats.sample_count(), 0);
        assert!(approx_eq(stats.mean(), 0.0));
        assert!(approx_eq(stats.relative_margin_of_error(), 0.0));
    }

    #[test]
    fn single_rate_has_no_spread() {
        let stats = SampleStats::from_rates(&[100.0]);

        assert_eq!(stats.sample_count(), 1);
        assert!(approx_eq(stats.mean(), 100.0));
        assert!(approx_eq(stats.std_dev(), 0.0));
        assert!(approx_eq(stats.margin_of_error(), 0.0));
    }

    #[test]
    fn identical_rates_have_no_spread() {
        let stats = SampleStats::from_rates(&[50.0; 5]);

        assert!(approx_eq(stats.mean(), 50.0));
        assert!(approx_eq(stats.std_dev(), 0.0));
        assert!(approx_eq(stats.margin_of_error(), 0.0));
    }

    #[test]
    fn margin_uses_t_distribution() {
        // Mean 3, sample variance 2.5, standard error sqrt(2.5 / 5) = sqrt(0.5).
        let stats = SampleStats::from_rates(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!(approx_eq(stats.mean(), 3.0));
        assert!(approx_eq(stats.std_dev(), 2.5_f64.sqrt()));
        assert!(approx_eq(stats.margin_of_error(), 0.5_f64.sqrt() * 2.776));
        assert!(approx_eq(
            stats.relative_margin_of_error(),
            0.5_f64.sqrt() * 2.776 / 3.0 * 100.0
        ));
    }

    #[test]
    fn t_critical_falls_back_to_normal() {
        assert!(approx_eq(t_critical(1), 12.706));
        assert!(approx_eq(t_critical(30), 2.042));
        assert!(approx_eq(t_critical(31), T_INFINITY_95));
        assert!(approx_eq(t_critical(0), T_INFINITY_95));
    }

    #[test]
    fn overlapping_intervals() {
        let a = SampleStats::from_rates(&[90.0, 100.0, 110.0]);
        let b = SampleStats::from_rates(&[105.0, 115.0, 125.0]);
        let c = SampleStats::from_rates(&[1000.0; 3]);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }
}
