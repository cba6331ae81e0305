//! Drives every payload size through generation, measurement, validation and reporting.

use std::io::Write;

use tracing::{info, warn};

use crate::error::Result;
use crate::pal::ClockFacade;
use crate::{
    Codec, OperationKind, PAYLOAD_SIZES, ResultSet, Runner, SamplingConfig, SizeResult,
    TrialError, check_support, format_bytes, format_measurement_line, format_validation, generate,
    validate,
};

/// Runs the complete benchmark over [`PAYLOAD_SIZES`].
///
/// Sizes are processed strictly one after another. The report block of a size is written
/// and flushed before the next size starts, so report blocks appear in size order and no
/// size is measured while another one is running.
///
/// # Examples
///
/// ```
/// use codec_throughput::{Base64Codec, Orchestrator, SamplingConfig};
///
/// let orchestrator = Orchestrator::new(Base64Codec::standard(), SamplingConfig::quick());
///
/// let mut report = Vec::new();
/// let results = orchestrator.run(&mut report).unwrap();
///
/// assert_eq!(results.len(), 4);
/// assert!(String::from_utf8(report).unwrap().contains("Validation     : OK"));
/// ```
#[derive(Debug)]
pub struct Orchestrator<C: Codec> {
    codec: C,
    config: SamplingConfig,
    clock: ClockFacade,
}

impl<C: Codec> Orchestrator<C> {
    /// Creates an orchestrator that benchmarks `codec`.
    #[must_use]
    pub fn new(codec: C, config: SamplingConfig) -> Self {
        Self {
            codec,
            config,
            clock: ClockFacade::real(),
        }
    }

    #[cfg(test)]
    fn with_clock(codec: C, config: SamplingConfig, clock: ClockFacade) -> Self {
        Self {
            codec,
            config,
            clock,
        }
    }

    /// Runs the benchmark, writing the human-readable report to `out`.
    ///
    /// Failures scoped to one payload size are written to the report and recorded in the
    /// returned [`ResultSet`]; the remaining sizes are still benchmarked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCodec`][crate::Error::UnsupportedCodec] before anything is
    /// measured if the codec lacks a primitive, and [`Error::Output`][crate::Error::Output] if
    /// writing the report fails.
    pub fn run(&self, out: &mut impl Write) -> Result<ResultSet> {
        check_support(&self.codec)?;

        writeln!(out, "Running benchmarks for all payload sizes...")?;
        writeln!(out)?;

        let runner = Runner::with_clock(&self.codec, self.config.clone(), self.clock.clone());
        let mut results = ResultSet::default();

        for size in PAYLOAD_SIZES {
            results.push(self.run_size(&runner, size, out)?);
        }

        write!(out, "{results}")?;
        writeln!(out)?;
        writeln!(out, "All benchmarks completed.")?;
        out.flush()?;

        Ok(results)
    }

    fn run_size(
        &self,
        runner: &Runner<'_, C>,
        size: usize,
        out: &mut impl Write,
    ) -> Result<SizeResult> {
        info!(size, "benchmarking payload size");

        writeln!(
            out,
            "--- Payload size: {} ---",
            format_bytes(u64::try_from(size).unwrap_or(u64::MAX))
        )?;

        let payload = generate(size);

        let encoded = match self.codec.encode(&payload) {
            Ok(encoded) => encoded,
            Err(e) => {
                let error = TrialError::new(OperationKind::Encode, e);
                warn!(size, %error, "could not derive encoded form");

                writeln!(out, "Error          : {error}")?;
                writeln!(out)?;
                out.flush()?;

                return Ok(SizeResult::new(size, Err(error), None));
            }
        };

        let trials = runner.run(&payload, &encoded);
        let validation = validate(&self.codec, &payload, &encoded);

        match &trials {
            Ok(pair) => {
                for measurement in pair.iter() {
                    writeln!(out, "{}", format_measurement_line(measurement))?;
                }
            }
            Err(error) => {
                warn!(size, %error, "trial aborted");
                writeln!(out, "Error          : {error}")?;
            }
        }

        if !validation.is_valid() {
            warn!(size, ?validation, "round trip validation failed");
        }

        writeln!(out)?;
        writeln!(out, "Validation     : {}", format_validation(&validation))?;

        if let Ok(pair) = &trials {
            let fastest: Vec<_> = pair.fastest().iter().map(|m| m.name()).collect();
            writeln!(out, "Fastest: {}", fastest.join(", "))?;
        }

        writeln!(out)?;
        out.flush()?;

        Ok(SizeResult::new(size, trials, Some(validation)))
    }
}
