//! Round-trip correctness check.

use std::fmt;

use tracing::debug;

use crate::{Codec, Payload};

/// Outcome of decoding the encoded form of a payload and comparing it with the original.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ValidationOutcome {
    /// The decoded bytes equal the payload.
    Valid,

    /// Decoding succeeded but produced different bytes.
    Mismatch(MismatchDetail),

    /// Decoding itself failed.
    Error {
        /// The message of the underlying codec error.
        message: String,
    },
}

impl ValidationOutcome {
    /// Whether the round trip reproduced the payload exactly.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Where a decoded payload first diverges from the original.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MismatchDetail {
    /// The decoded payload has a different length.
    Length {
        /// Length of the original payload.
        expected: usize,
        /// Length of the decoded payload.
        actual: usize,
    },

    /// The first byte that differs between the original and the decoded payload.
    Byte {
        /// Index of the first differing byte.
        index: usize,
        /// The original byte.
        expected: u8,
        /// The decoded byte.
        actual: u8,
    },
}

impl fmt::Display for MismatchDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "decoded {actual} bytes, expected {expected}")
            }
            Self::Byte {
                index,
                expected,
                actual,
            } => write!(
                f,
                "first difference at byte {index}: expected 0x{expected:02x}, got 0x{actual:02x}"
            ),
        }
    }
}

/// Decodes `encoded` and compares the result with `payload` byte for byte.
///
/// The comparison stops at the first differing byte.
#[must_use]
pub fn validate<C: Codec + ?Sized>(
    codec: &C,
    payload: &Payload,
    encoded: &str,
) -> ValidationOutcome {
    let decoded = match codec.decode(encoded) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(error = %e, "decode failed during validation");
            return ValidationOutcome::Error {
                message: e.to_string(),
            };
        }
    };

    if decoded.len() != payload.len() {
        return ValidationOutcome::Mismatch(MismatchDetail::Length {
            expected: payload.len(),
            actual: decoded.len(),
        });
    }

    payload
        .iter()
        .zip(&decoded)
        .position(|(expected, actual)| expected != actual)
        .map_or(ValidationOutcome::Valid, |index| {
            ValidationOutcome::Mismatch(MismatchDetail::Byte {
                index,
                expected: payload.get(index).copied().unwrap_or_default(),
                actual: decoded.get(index).copied().unwrap_or_default(),
            })
        })
}
