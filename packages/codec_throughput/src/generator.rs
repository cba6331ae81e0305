//! Reproducible pseudo-random payloads.
//!
//! Bulk bytes come from a 32-bit linear congruential generator instead of an entropy source,
//! so generating large buffers over and over does not contend for the system RNG. Only the
//! seed is drawn from `rand`, once per generator.

use std::fmt;
use std::ops::Deref;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Immutable payload of bytes that a codec is measured against.
#[derive(Clone, Eq, PartialEq)]
pub struct Payload {
    bytes: Box<[u8]>,
}

impl Payload {
    /// The payload contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for Payload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }
}

impl fmt::Debug for Payload {
    #[cfg_attr(test, mutants::skip)] // No API contract to test.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Linear congruential state (`x = x * 1664525 + 1013904223 mod 2^32`).
///
/// Output is the most significant byte of the state. The low bits of a power-of-two modulus
/// LCG have short periods (the lowest byte repeats every 256 steps and depends only on the
/// lowest byte of the seed).
#[derive(Clone, Debug)]
struct Lcg {
    state: u32,
}

impl Lcg {
    fn next_byte(&mut self) -> u8 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        self.state.to_be_bytes()[0]
    }
}

/// Generates pseudo-random payloads from one seed lineage.
///
/// Each generator owns its own state; nothing is shared between generators.
///
/// # Examples
///
/// ```
/// use codec_throughput::PayloadGenerator;
///
/// let mut a = PayloadGenerator::with_seed(42);
/// let mut b = PayloadGenerator::with_seed(42);
///
/// assert_eq!(a.generate(64), b.generate(64));
/// ```
#[derive(Clone, Debug)]
pub struct PayloadGenerator {
    lcg: Lcg,
}

impl PayloadGenerator {
    /// Creates a generator seeded from the thread-local random number generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates a generator with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            lcg: Lcg { state: seed },
        }
    }

    /// Produces the next `len` bytes of this generator's sequence.
    pub fn generate(&mut self, len: usize) -> Payload {
        let bytes: Vec<u8> = (0..len).map(|_| self.lcg.next_byte()).collect();
        bytes.into()
    }
}

/// Produces `len` pseudo-random bytes from a freshly seeded generator.
///
/// Two calls yield different sequences with overwhelming probability.
#[must_use]
pub fn generate(len: usize) -> Payload {
    PayloadGenerator::from_entropy().generate(len)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_empty() {
        let payload = generate(0);

        assert!(payload.is_empty());
    }

    #[test]
    fn length_is_exact() {
        for len in [1, 7, 1023, 1024, 65536] {
            assert_eq!(generate(len).len(), len);
        }
    }

    #[test]
    fn same_seed_same_bytes() {
        let a = PayloadGenerator::with_seed(7).generate(256);
        let b = PayloadGenerator::with_seed(7).generate(256);

        assert_eq!(a, b);
    }

    #[test]
    fn lcg_sequence_matches_recurrence() {
        // 0 * 1664525 + 1013904223 = 0x3C6E_F35F
        let mut lcg = Lcg { state: 0 };

        assert_eq!(lcg.next_byte(), 0x3C);
        assert_eq!(lcg.state, 1_013_904_223);

        let expected_state = 1_013_904_223_u32
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        assert_eq!(lcg.next_byte(), expected_state.to_be_bytes()[0]);
    }

    #[test]
    fn generator_continues_its_sequence() {
        let mut split = PayloadGenerator::with_seed(99);
        let mut whole = PayloadGenerator::with_seed(99);

        let mut joined = split.generate(10).to_vec();
        joined.extend_from_slice(&split.generate(10));

        assert_eq!(joined, whole.generate(20).to_vec());
    }

    #[test]
    fn fresh_generators_differ() {
        // Identical seeds from `rand` are possible in principle (1 in 2^32), so retry once.
        let differs = (0..2).any(|_| generate(4096) != generate(4096));

        assert!(differs);
    }
}
