use std::io;

use thiserror::Error;

use crate::OperationKind;

/// Errors that abort an entire benchmark run.
///
/// Problems scoped to a single payload size (a failing trial, a failed round trip) are not
/// represented here. Those are recorded in the [`SizeResult`][crate::SizeResult] of the
/// affected size and the run continues with the next size.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The codec does not provide one or both of the primitives the harness needs.
    ///
    /// Detected before any payload is generated, so a run that fails with this error has
    /// produced no measurements.
    #[error("the codec does not support the required primitives (missing: {missing})")]
    UnsupportedCodec {
        /// Human-readable list of the missing primitives, e.g. `decode`.
        missing: String,
    },

    /// Writing the report to the output stream failed.
    #[error("failed to write benchmark report: {0}")]
    Output(#[from] io::Error),
}

/// Failure reported by a [`Codec`][crate::Codec] primitive.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum CodecError {
    /// The encode primitive failed or is not available.
    #[error("encode failed: {0}")]
    Encode(String),

    /// The decode primitive failed or is not available.
    #[error("decode failed: {0}")]
    Decode(String),
}

/// An invocation of a codec primitive failed during a timed trial.
///
/// This aborts the measurement of the payload size the trial belonged to.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{operation} trial aborted: {source}")]
pub struct TrialError {
    operation: OperationKind,
    source: CodecError,
}

impl TrialError {
    pub(crate) fn new(operation: OperationKind, source: CodecError) -> Self {
        Self { operation, source }
    }

    /// The direction of the trial that failed.
    #[must_use]
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// The codec failure that aborted the trial.
    #[must_use]
    pub fn codec_error(&self) -> &CodecError {
        &self.source
    }
}

/// A specialized `Result` type for benchmark runs, returning the crate's [`Error`] type as
/// the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);
    assert_impl_all!(CodecError: Send, Sync, Debug);
    assert_impl_all!(TrialError: Send, Sync, Debug);

    #[test]
    fn unsupported_codec_names_missing_primitives() {
        let error = Error::UnsupportedCodec {
            missing: "encode, decode".to_string(),
        };

        assert!(error.to_string().contains("missing: encode, decode"));
    }

    #[test]
    fn trial_error_exposes_source() {
        let error = TrialError::new(
            OperationKind::Decode,
            CodecError::Decode("invalid byte 61, offset 3".to_string()),
        );

        assert_eq!(error.operation(), OperationKind::Decode);
        assert_eq!(
            error.codec_error(),
            &CodecError::Decode("invalid byte 61, offset 3".to_string())
        );
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("decode trial aborted"));
    }

    #[test]
    fn io_error_converts_to_output() {
        let error: Error = io::Error::other("pipe closed").into();

        assert!(matches!(error, Error::Output(_)));
    }
}
