use tracing::debug;

use crate::{Codec, Error};

/// Verifies that `codec` provides both the encode and the decode primitive.
///
/// This is a precondition for a benchmark run, checked once before any payload is generated.
///
/// # Errors
///
/// Returns [`Error::UnsupportedCodec`] naming the missing primitives if either is absent.
///
/// # Examples
///
/// ```
/// use codec_throughput::{Base64Codec, check_support};
///
/// assert!(check_support(&Base64Codec::standard()).is_ok());
/// ```
pub fn check_support<C: Codec + ?Sized>(codec: &C) -> Result<(), Error> {
    let missing = codec.primitives().missing();

    if missing.is_empty() {
        debug!(
            encode = codec.encode_name(),
            decode = codec.decode_name(),
            "codec primitives available"
        );
        Ok(())
    } else {
        Err(Error::UnsupportedCodec {
            missing: missing.join(", "),
        })
    }
}
