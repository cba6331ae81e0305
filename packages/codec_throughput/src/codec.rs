//! The codec boundary: what the harness measures.

use std::fmt::{self, Debug};
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::{
    GeneralPurpose, STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD,
};

use crate::CodecError;

/// A binary-to-text codec whose throughput is measured by the harness.
///
/// The harness treats the codec as an external collaborator. A codec that lacks a primitive
/// is rejected before benchmarking starts (see [`check_support()`][crate::check_support]) and
/// a codec that produces wrong output is reported as a validation failure, never as an
/// internal error of the harness.
///
/// # Examples
///
/// ```
/// use codec_throughput::{Base64Codec, Codec};
///
/// let codec = Base64Codec::standard();
/// let text = codec.encode(b"Man").unwrap();
/// assert_eq!(text, "TWFu");
/// assert_eq!(codec.decode(&text).unwrap(), b"Man");
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait Codec: Debug {
    /// Encodes bytes into their text form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if the codec cannot encode the input.
    fn encode(&self, input: &[u8]) -> Result<String, CodecError>;

    /// Decodes text back into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if the input is not valid for this codec.
    fn decode(&self, input: &str) -> Result<Vec<u8>, CodecError>;

    /// Reports which primitives this codec can actually execute.
    fn primitives(&self) -> Primitives;

    /// Name of the encode operation as shown in reports.
    fn encode_name(&self) -> &str;

    /// Name of the decode operation as shown in reports.
    fn decode_name(&self) -> &str;
}

/// The set of primitives a [`Codec`] makes available.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "the two primitives are the whole codec contract"
)]
pub struct Primitives {
    /// Whether `encode()` is callable.
    pub encode: bool,

    /// Whether `decode()` is callable.
    pub decode: bool,
}

impl Primitives {
    /// Both primitives are available.
    pub const ALL: Self = Self {
        encode: true,
        decode: true,
    };

    /// Neither primitive is available.
    pub const NONE: Self = Self {
        encode: false,
        decode: false,
    };

    /// Names of the primitives that are missing, in `encode, decode` order.
    #[must_use]
    pub fn missing(self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if !self.encode {
            missing.push("encode");
        }

        if !self.decode {
            missing.push("decode");
        }

        missing
    }
}

/// Base64 alphabet used by [`Base64Codec`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Alphabet {
    /// The standard alphabet from RFC 4648 (`+` and `/`).
    #[default]
    Standard,

    /// The URL and filename safe alphabet from RFC 4648 (`-` and `_`).
    UrlSafe,
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "url-safe" | "urlsafe" => Ok(Self::UrlSafe),
            _ => Err(format!(
                "Invalid alphabet: '{s}'. Valid options are: standard, url-safe"
            )),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::UrlSafe => write!(f, "url-safe"),
        }
    }
}

/// Base64 codec backed by the general purpose engines of the `base64` crate.
#[derive(Clone, Debug)]
pub struct Base64Codec {
    engine: &'static GeneralPurpose,
    encode_name: String,
    decode_name: String,
}

impl Base64Codec {
    /// Creates a codec for the given alphabet, with or without `=` padding.
    #[must_use]
    pub fn new(alphabet: Alphabet, padding: bool) -> Self {
        let engine = match (alphabet, padding) {
            (Alphabet::Standard, true) => &STANDARD,
            (Alphabet::Standard, false) => &STANDARD_NO_PAD,
            (Alphabet::UrlSafe, true) => &URL_SAFE,
            (Alphabet::UrlSafe, false) => &URL_SAFE_NO_PAD,
        };

        let variant = if padding {
            alphabet.to_string()
        } else {
            format!("{alphabet}, no padding")
        };

        Self {
            engine,
            encode_name: format!("base64::encode({variant})"),
            decode_name: format!("base64::decode({variant})"),
        }
    }

    /// The standard padded Base64 codec.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Alphabet::Standard, true)
    }
}

impl Codec for Base64Codec {
    fn encode(&self, input: &[u8]) -> Result<String, CodecError> {
        Ok(self.engine.encode(input))
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, CodecError> {
        self.engine
            .decode(input)
            .map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn primitives(&self) -> Primitives {
        Primitives::ALL
    }

    fn encode_name(&self) -> &str {
        &self.encode_name
    }

    fn decode_name(&self) -> &str {
        &self.decode_name
    }
}
