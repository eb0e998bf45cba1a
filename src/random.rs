//! Cryptographically secure random numbers.
//!
//! [`SecureRandom`] turns raw output of a [`CryptoRng`] into uniformly
//! distributed integers and doubles. Bounded draws use rejection sampling, so
//! every value in the requested range is exactly equally likely no matter
//! whether the range divides `2^32`.
//!
//! A deck owns one `SecureRandom` for its whole lifetime and reuses it across
//! shuffles.

use core::fmt;

use rand::{CryptoRng, SeedableRng};
use rand_chacha::ChaCha20Rng;
#[cfg(feature = "os_rng")]
use rand::rand_core::UnwrapErr;
#[cfg(feature = "os_rng")]
use rand::rngs::OsRng;

use crate::error::RandomError;

/// Operating-system entropy as an infallible [`CryptoRng`].
///
/// Panics if the operating system cannot provide entropy, the same way
/// `rand::rng()` does.
#[cfg(feature = "os_rng")]
pub type OsEntropy = UnwrapErr<OsRng>;

/// `2^32`, the number of distinct values in one 32-bit draw.
const U32_SPAN: u64 = 1 << 32;

/// A uniform random number source backed by a cryptographic RNG.
pub struct SecureRandom<R> {
    rng: R,
}

#[cfg(feature = "os_rng")]
impl SecureRandom<OsEntropy> {
    /// Creates a source that reads directly from operating-system entropy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rng: UnwrapErr(OsRng),
        }
    }
}

#[cfg(feature = "os_rng")]
impl Default for SecureRandom<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRandom<ChaCha20Rng> {
    /// Creates a reproducible ChaCha20 stream from a seed.
    ///
    /// The same seed always yields the same draws, which makes shuffles
    /// replayable. Only use this where replay is wanted; a seed that can be
    /// guessed makes every shuffle predictable.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: CryptoRng> SecureRandom<R> {
    /// Wraps an existing cryptographic RNG.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a uniformly random integer in `[min, max)`.
    ///
    /// Returns `min` without drawing when `min == max`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `min > max`.
    pub fn next_int_in(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange {
                min: i64::from(min),
                max: i64::from(max),
            });
        }
        if min == max {
            return Ok(min);
        }

        // At most u32::MAX since both bounds are i32.
        let range = (i64::from(max) - i64::from(min)) as u32;
        let offset = self.bounded_u32(range);
        Ok((i64::from(min) + i64::from(offset)) as i32)
    }

    /// Returns a uniformly random integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `max` is negative.
    pub fn next_int_below(&mut self, max: i32) -> Result<i32, RandomError> {
        self.next_int_in(0, max)
    }

    /// Returns a uniformly random non-negative integer.
    ///
    /// Uses the top 31 bits of one 32-bit draw.
    pub fn next_int(&mut self) -> i32 {
        (self.rng.next_u32() >> 1) as i32
    }

    /// Returns a uniformly random double in `[0, 1)`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "2^32 and every u32 are exactly representable in f64"
    )]
    pub fn next_double(&mut self) -> f64 {
        f64::from(self.rng.next_u32()) / U32_SPAN as f64
    }

    /// Fills `buffer` with secure random bytes.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        self.rng.fill_bytes(buffer);
    }

    /// Returns a uniformly random index in `[0, bound)`.
    ///
    /// Returns 0 when `bound` is 0 or 1. Bounds that fit in 32 bits use the
    /// same 32-bit rejection sampling as [`next_int_in`](Self::next_int_in).
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        match u32::try_from(bound) {
            Ok(range) => self.bounded_u32(range) as usize,
            Err(_) => self.bounded_u64(bound as u64) as usize,
        }
    }

    /// Uniform draw in `[0, range)` for `range > 0`.
    fn bounded_u32(&mut self, range: u32) -> u32 {
        let range = u64::from(range);
        // Largest multiple of `range` not exceeding 2^32. Draws at or above it
        // fall in the biased remainder band and are redrawn.
        let zone = U32_SPAN / range * range;
        loop {
            let draw = u64::from(self.rng.next_u32());
            if draw < zone {
                return (draw % range) as u32;
            }
        }
    }

    /// Uniform draw in `[0, range)` for `range > 0`.
    fn bounded_u64(&mut self, range: u64) -> u64 {
        // 2^64 mod range.
        let remainder = (u64::MAX % range + 1) % range;
        let last_accepted = u64::MAX - remainder;
        loop {
            let draw = self.rng.next_u64();
            if draw <= last_accepted {
                return draw % range;
            }
        }
    }
}

impl<R> fmt::Debug for SecureRandom<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandom").finish_non_exhaustive()
    }
}
