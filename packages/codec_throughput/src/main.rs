#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point that benchmarks the `base64` crate and prints the report to stdout.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! requires spawning subprocesses and checking exit codes.

use std::io;
use std::process::ExitCode;

use argh::FromArgs;
use codec_throughput::{Alphabet, Base64Codec, Orchestrator, SamplingConfig};
use tracing_subscriber::EnvFilter;

/// Measures base64 encode and decode throughput across a fixed set of payload sizes.
#[derive(FromArgs)]
struct Args {
    /// alphabet to encode with (standard, url-safe)
    #[argh(option)]
    alphabet: Option<Alphabet>,

    /// encode without trailing padding
    #[argh(switch)]
    no_padding: bool,

    /// use a shortened sampling budget, for smoke runs
    #[argh(switch)]
    quick: bool,
}

#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    // The report owns stdout, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let codec = Base64Codec::new(args.alphabet.unwrap_or_default(), !args.no_padding);

    let config = if args.quick {
        SamplingConfig::quick()
    } else {
        SamplingConfig::default()
    };

    let orchestrator = Orchestrator::new(codec, config);

    match orchestrator.run(&mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
