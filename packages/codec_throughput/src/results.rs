use std::fmt;

use crate::{
    Measurement, TrialError, TrialPair, ValidationOutcome, format_bytes, format_throughput,
};

/// Everything recorded for one payload size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeResult {
    payload_len: usize,
    trials: Result<TrialPair, TrialError>,
    validation: Option<ValidationOutcome>,
}

impl SizeResult {
    pub(crate) fn new(
        payload_len: usize,
        trials: Result<TrialPair, TrialError>,
        validation: Option<ValidationOutcome>,
    ) -> Self {
        Self {
            payload_len,
            trials,
            validation,
        }
    }

    /// The payload size this result belongs to.
    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    /// The encode and decode measurements, or the error that aborted them.
    #[must_use]
    pub fn trials(&self) -> Result<&TrialPair, &TrialError> {
        self.trials.as_ref()
    }

    /// The round-trip validation outcome.
    ///
    /// `None` if the encoded form could not be derived, in which case there was nothing to
    /// validate.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationOutcome> {
        self.validation.as_ref()
    }
}

/// Results of a benchmark run, in the order the payload sizes were processed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    sizes: Vec<SizeResult>,
}

impl ResultSet {
    pub(crate) fn push(&mut self, result: SizeResult) {
        self.sizes.push(result);
    }

    /// Per-size results in processing order.
    pub fn sizes(&self) -> impl Iterator<Item = &SizeResult> {
        self.sizes.iter()
    }

    /// All measurements across sizes, in processing order and encode before decode.
    ///
    /// Sizes whose trials were aborted contribute nothing.
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        self.sizes
            .iter()
            .filter_map(|size| size.trials.as_ref().ok())
            .flat_map(TrialPair::iter)
    }

    /// Number of payload sizes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether no payload size was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measurements().next().is_none() {
            return writeln!(f, "No measurements captured.");
        }

        writeln!(f, "Summary:")?;

        for size in &self.sizes {
            let size_label = format_bytes(u64::try_from(size.payload_len).unwrap_or(u64::MAX));

            match &size.trials {
                Ok(trials) => {
                    for m in trials.iter() {
                        writeln!(
                            f,
                            "  {size_label:>10}  {:<32} {:>10} MiB/s  ±{:.2}% ({} samples)",
                            m.name(),
                            format_throughput(m.throughput()),
                            m.stats().relative_margin_of_error(),
                            m.sample_count()
                        )?;
                    }
                }
                Err(e) => writeln!(f, "  {size_label:>10}  error ({e})")?,
            }
        }

        Ok(())
    }
}
