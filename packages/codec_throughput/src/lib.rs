//! Throughput measurement for binary-to-text codecs.
//!
//! This package measures how fast a codec turns bytes into text and back, over a fixed ladder
//! of payload sizes, and checks after every measurement that the codec round-trips the payload
//! exactly. Results are reported as time per operation and as throughput in MiB/s.
//!
//! The core functionality includes:
//! - [`Codec`] - The boundary between the harness and the codec under test
//! - [`Base64Codec`] - A codec backed by the `base64` crate
//! - [`PayloadGenerator`] - Produces the pseudo-random payloads that are measured
//! - [`Runner`] - Adaptive sampling of the encode and decode operations
//! - [`validate()`] - Round-trip correctness check
//! - [`Orchestrator`] - Drives every payload size and writes the report
//!
//! This package is not meant for use in production, serving only as a development tool.
//!
//! # Simple Usage
//!
//! ```
//! use codec_throughput::{Base64Codec, Orchestrator, SamplingConfig};
//!
//! # fn main() {
//! let orchestrator = Orchestrator::new(Base64Codec::standard(), SamplingConfig::quick());
//!
//! let mut report = Vec::new();
//! let results = orchestrator.run(&mut report).unwrap();
//!
//! for measurement in results.measurements() {
//!     println!("{} {:.0} B/s", measurement.name(), measurement.throughput());
//! }
//! # }
//! ```
//!
//! # Measuring a single size
//!
//! The building blocks can also be used on their own, for example to measure one payload:
//!
//! ```
//! use codec_throughput::{Base64Codec, Codec, PayloadGenerator, Runner, SamplingConfig, validate};
//!
//! # fn main() {
//! let codec = Base64Codec::standard();
//! let payload = PayloadGenerator::with_seed(42).generate(4096);
//! let encoded = codec.encode(&payload).unwrap();
//!
//! let trials = Runner::new(&codec, SamplingConfig::quick())
//!     .run(&payload, &encoded)
//!     .unwrap();
//!
//! assert!(validate(&codec, &payload, &encoded).is_valid());
//! assert!(trials.encode().rate() > 0.0);
//! # }
//! ```
//!
//! # Threading
//!
//! Measurements run on the calling thread, one payload size after another. Running other
//! CPU-heavy work at the same time distorts the results.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod codec;
mod error;
mod format;
mod generator;
mod measurement;
mod orchestrator;
mod pal;
mod results;
mod runner;
mod sampling;
mod stats;
mod support;
mod validator;

#[cfg(test)]
pub(crate) use codec::MockCodec;
pub use codec::{Alphabet, Base64Codec, Codec, Primitives};
pub use error::{CodecError, Error, TrialError};
pub use format::{
    NAME_WIDTH, format_bytes, format_measurement_line, format_throughput, format_time_per_op,
    format_validation,
};
pub use generator::{Payload, PayloadGenerator, generate};
pub use measurement::{Measurement, OperationKind};
pub use orchestrator::Orchestrator;
pub use results::{ResultSet, SizeResult};
pub use runner::{Runner, TrialPair};
pub use sampling::{SamplingConfig, SamplingConfigBuilder};
pub use stats::SampleStats;
pub use support::check_support;
pub use validator::{MismatchDetail, ValidationOutcome, validate};

/// Payload sizes benchmarked by [`Orchestrator`], in processing order.
pub const PAYLOAD_SIZES: [usize; 4] = [1024, 16384, 32768, 65536];
