//! Timed trials of the codec primitives.

use std::hint::black_box;
use std::ptr;
use std::time::Duration;

use tracing::{debug, trace};

use crate::pal::{Clock, ClockFacade};
use crate::{
    Codec, CodecError, Measurement, OperationKind, Payload, SampleStats, SamplingConfig,
    TrialError,
};

/// Measures encode and decode rates of a codec for one payload at a time.
///
/// Each trial is an adaptive sampling loop. The batch size (invocations timed together as one
/// sample) is calibrated to the speed of the machine first, then samples are collected until
/// the [`SamplingConfig`] is satisfied. The reported rate is always total iterations over
/// total sampled time, never a single invocation.
///
/// # Examples
///
/// ```
/// use codec_throughput::{Base64Codec, Codec, PayloadGenerator, Runner, SamplingConfig};
///
/// let codec = Base64Codec::standard();
/// let runner = Runner::new(&codec, SamplingConfig::quick());
///
/// let payload = PayloadGenerator::with_seed(1).generate(1024);
/// let encoded = codec.encode(&payload).unwrap();
///
/// let trials = runner.run(&payload, &encoded).unwrap();
/// assert!(trials.encode().sample_count() >= 5);
/// assert!(trials.decode().throughput() >= 0.0);
/// ```
#[derive(Debug)]
pub struct Runner<'c, C: Codec + ?Sized> {
    codec: &'c C,
    config: SamplingConfig,
    clock: ClockFacade,
}

impl<'c, C: Codec + ?Sized> Runner<'c, C> {
    /// Creates a runner that times `codec` with the given sampling configuration.
    #[must_use]
    pub fn new(codec: &'c C, config: SamplingConfig) -> Self {
        Self::with_clock(codec, config, ClockFacade::real())
    }

    pub(crate) fn with_clock(codec: &'c C, config: SamplingConfig, clock: ClockFacade) -> Self {
        Self {
            codec,
            config,
            clock,
        }
    }

    /// Runs the encode trial and then the decode trial.
    ///
    /// `encoded` must be the encoded form of `payload`. It is derived once by the caller and
    /// reused by every decode invocation, so the decode trial measures decoding only.
    ///
    /// # Errors
    ///
    /// Returns [`TrialError`] if any invocation fails. The failing trial is aborted and no
    /// measurement is produced for this payload.
    pub fn run(&self, payload: &Payload, encoded: &str) -> Result<TrialPair, TrialError> {
        let encode = self.trial(
            OperationKind::Encode,
            self.codec.encode_name(),
            payload.len(),
            || {
                black_box(self.codec.encode(black_box(payload))?);
                Ok(())
            },
        )?;

        let decode = self.trial(
            OperationKind::Decode,
            self.codec.decode_name(),
            payload.len(),
            || {
                black_box(self.codec.decode(black_box(encoded))?);
                Ok(())
            },
        )?;

        Ok(TrialPair { encode, decode })
    }

    fn trial(
        &self,
        kind: OperationKind,
        name: &str,
        payload_len: usize,
        mut operation: impl FnMut() -> Result<(), CodecError>,
    ) -> Result<Measurement, TrialError> {
        let batch = self
            .calibrate(&mut operation)
            .map_err(|e| TrialError::new(kind, e))?;

        debug!(operation = name, batch, "calibrated batch size");

        let mut rates = Vec::new();
        let mut total_iterations = 0_u64;
        let mut total_time = Duration::ZERO;

        while rates.len() < self.config.max_samples().get()
            && (rates.len() < self.config.min_samples().get()
                || total_time < self.config.min_trial_time())
        {
            let elapsed = self
                .time_batch(batch, &mut operation)
                .map_err(|e| TrialError::new(kind, e))?;

            total_iterations = total_iterations.saturating_add(batch);
            total_time = total_time.saturating_add(elapsed);

            let rate = batch_rate(batch, elapsed);
            trace!(operation = name, ?elapsed, rate, "sample");
            rates.push(rate);
        }

        let measurement = Measurement::new(
            kind,
            name.to_string(),
            payload_len,
            total_iterations,
            total_time,
            SampleStats::from_rates(&rates),
        );

        debug!(
            operation = name,
            samples = measurement.sample_count(),
            iterations = total_iterations,
            rate = measurement.rate(),
            rme = measurement.stats().relative_margin_of_error(),
            "trial completed"
        );

        Ok(measurement)
    }

    /// Doubles the batch size until one batch takes at least the minimum sample time or the
    /// batch size cap is reached.
    fn calibrate(
        &self,
        operation: &mut impl FnMut() -> Result<(), CodecError>,
    ) -> Result<u64, CodecError> {
        let max_batch = self.config.max_batch_iterations().get();
        let mut batch = 1_u64;

        loop {
            let elapsed = self.time_batch(batch, operation)?;

            if elapsed >= self.config.min_sample_time() || batch >= max_batch {
                return Ok(batch);
            }

            batch = batch.saturating_mul(2).min(max_batch);
        }
    }

    fn time_batch(
        &self,
        iterations: u64,
        operation: &mut impl FnMut() -> Result<(), CodecError>,
    ) -> Result<Duration, CodecError> {
        let start = self.clock.now();

        for _ in 0..iterations {
            operation()?;
        }

        Ok(self.clock.now().saturating_duration_since(start))
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "batch sizes are capped far below 2^52"
)]
fn batch_rate(iterations: u64, elapsed: Duration) -> f64 {
    if elapsed.is_zero() {
        0.0
    } else {
        iterations as f64 / elapsed.as_secs_f64()
    }
}

/// The encode and decode measurements of one payload size.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialPair {
    encode: Measurement,
    decode: Measurement,
}

impl TrialPair {
    #[cfg(test)]
    pub(crate) fn from_measurements(encode: Measurement, decode: Measurement) -> Self {
        Self { encode, decode }
    }

    /// The encode measurement.
    #[must_use]
    pub fn encode(&self) -> &Measurement {
        &self.encode
    }

    /// The decode measurement.
    #[must_use]
    pub fn decode(&self) -> &Measurement {
        &self.decode
    }

    /// Both measurements, encode first.
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        [&self.encode, &self.decode].into_iter()
    }

    /// The operations with the highest invocation rate.
    ///
    /// Operations are compared by raw invocation rate. Both directions of a trial pair are
    /// normalized to the same payload length, so this is also the throughput order. When the
    /// confidence intervals of the two rates overlap the difference is not significant and
    /// both operations are returned, encode first.
    #[must_use]
    pub fn fastest(&self) -> Vec<&Measurement> {
        let top = if self.decode.rate() > self.encode.rate() {
            &self.decode
        } else {
            &self.encode
        };

        self.iter()
            .filter(|m| ptr::eq(*m, top) || m.stats().overlaps(top.stats()))
            .collect()
    }
}
