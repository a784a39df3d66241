//! Thread-safe xorshift1024★ generator and derived value layer
//!
//! [`Xorshift`] wraps one [`XorshiftState`] behind a mutex and derives
//! every public output type from serialized 64-bit draws. Each draw is
//! one lock acquisition; multi-draw operations (the bounded rejection
//! loop, byte fills) never hold the lock across the whole operation, so
//! concurrent callers interleave at draw granularity without one caller
//! starving the rest.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::seed::random_seed;
use super::state::XorshiftState;

/// 2^-53, scales the top 53 bits of a draw into [0, 1).
const NORM_53: f64 = 1.0 / (1u64 << 53) as f64;
/// 2^-24, scales the top 24 bits of a draw into [0, 1).
const NORM_24: f64 = 1.0 / (1u64 << 24) as f64;

/// Draws discarded after every reseed (4 per state word), so a
/// poorly-mixed initial fill never leaks into visible output.
const WARMUP_DRAWS: usize = 16 * 4;

/// Errors that can occur when drawing from the generator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    #[error("bound must be positive, got {bound}")]
    NonPositiveBound { bound: i64 },
}

/// Thread-safe uniform random number generator using xorshift1024★
///
/// One instance may be shared across threads; all state mutation is
/// serialized, so the draws observed by all callers together form a
/// single deterministic sequence.
///
/// # Example
/// ```
/// use xorshift_rng_rs::Xorshift;
///
/// let rng = Xorshift::from_seed(12345);
/// assert_eq!(rng.next_long(), 312318130903360016);
/// ```
#[derive(Debug)]
pub struct Xorshift {
    /// Internal state (16 x 64-bit words plus cursor)
    state: Mutex<XorshiftState>,
}

impl Xorshift {
    /// Create a new generator seeded via [`random_seed`].
    pub fn new() -> Self {
        Self::from_seed(random_seed())
    }

    /// Create a new generator using a given seed.
    ///
    /// A zero seed is remapped to -1 (all bits set), so seeds 0 and -1
    /// produce the same sequence; every other seed gets its own.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_rs::Xorshift;
    ///
    /// let a = Xorshift::from_seed(0);
    /// let b = Xorshift::from_seed(-1);
    /// assert_eq!(a.next_long(), b.next_long());
    /// ```
    pub fn from_seed(seed: i64) -> Self {
        let rng = Self {
            state: Mutex::new(XorshiftState::new(seed)),
        };
        rng.warm_up();
        rng
    }

    /// Reseed this generator, fully replacing its prior state.
    ///
    /// Fills all 16 state words with `seed` (or -1 when `seed` is 0)
    /// and discards 64 warm-up draws, all under one lock acquisition,
    /// before any output is exposed.
    pub fn set_seed(&self, seed: i64) {
        let mut state = self.lock();
        state.fill(seed);
        for _ in 0..WARMUP_DRAWS {
            state.step();
        }
    }

    /// Generate the next pseudorandom `i64`, uniform over all 2^64
    /// bit patterns.
    pub fn next_long(&self) -> i64 {
        self.step() as i64
    }

    /// Generate a pseudorandom `i64` uniform in `[0, bound)`.
    ///
    /// Uses rejection sampling on a 63-bit non-negative draw: the small
    /// top slice of the draw space that would bias the reduction is
    /// redrawn. The expected redraw probability is below 2^-62 for any
    /// bound, so the loop terminates after one draw in practice.
    ///
    /// The bound is validated before anything is drawn; an invalid
    /// bound does not advance the generator.
    ///
    /// # Errors
    /// [`RngError::NonPositiveBound`] if `bound <= 0`.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_rs::Xorshift;
    ///
    /// let rng = Xorshift::from_seed(42);
    /// let value = rng.next_long_bounded(100).unwrap();
    /// assert!((0..100).contains(&value));
    /// assert!(rng.next_long_bounded(0).is_err());
    /// ```
    pub fn next_long_bounded(&self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError::NonPositiveBound { bound });
        }
        // No special provision for a power-of-two bound: all bits are good.
        loop {
            let bits = (self.step() >> 1) as i64;
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return Ok(value);
            }
        }
    }

    /// Generate the next pseudorandom `i32` (the low 32 bits of one
    /// 64-bit draw).
    pub fn next_int(&self) -> i32 {
        self.step() as i32
    }

    /// Generate a pseudorandom `i32` uniform in `[0, bound)`.
    ///
    /// # Errors
    /// [`RngError::NonPositiveBound`] if `bound <= 0`.
    pub fn next_int_bounded(&self, bound: i32) -> Result<i32, RngError> {
        Ok(self.next_long_bounded(i64::from(bound))? as i32)
    }

    /// Extract the top `bits` bits of one draw, for `bits` in `1..=32`.
    pub fn next_bits(&self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        (self.step() >> (64 - bits)) as i32
    }

    /// Generate a pseudorandom `f64` in `[0.0, 1.0)`, using the top 53
    /// bits of one draw as the mantissa.
    ///
    /// # Example
    /// ```
    /// use xorshift_rng_rs::Xorshift;
    ///
    /// let rng = Xorshift::from_seed(42);
    /// let value = rng.next_double();
    /// assert!((0.0..1.0).contains(&value));
    /// ```
    pub fn next_double(&self) -> f64 {
        (self.step() >> 11) as f64 * NORM_53
    }

    /// Generate a pseudorandom `f32` in `[0.0, 1.0)`, using the top 24
    /// bits of one draw.
    pub fn next_float(&self) -> f32 {
        ((self.step() >> 40) as f64 * NORM_24) as f32
    }

    /// Generate a pseudorandom `bool` (the lowest bit of one draw).
    pub fn next_boolean(&self) -> bool {
        self.step() & 1 != 0
    }

    /// Fill `buf` with pseudorandom bytes.
    ///
    /// The buffer is filled from its end toward its start, one draw per
    /// up-to-8-byte group, each group taken from the draw's low byte
    /// upward. An 8-byte buffer therefore holds exactly the big-endian
    /// bytes of the corresponding [`next_long`](Self::next_long) value.
    /// A trailing partial group still consumes one full draw.
    pub fn next_bytes(&self, buf: &mut [u8]) {
        let mut i = buf.len();
        while i != 0 {
            let mut bits = self.step();
            for _ in 0..i.min(8) {
                i -= 1;
                buf[i] = bits as u8;
                bits >>= 8;
            }
        }
    }

    /// One serialized draw: acquire the lock, advance the state once,
    /// release. Every derived value goes through here.
    fn step(&self) -> u64 {
        self.lock().step()
    }

    fn warm_up(&self) {
        let mut state = self.lock();
        for _ in 0..WARMUP_DRAWS {
            state.step();
        }
    }

    /// Nothing can panic while the lock is held, so a poisoned guard
    /// still protects a valid state; recover it instead of propagating
    /// a failure mode the generator cannot otherwise have.
    fn lock(&self) -> MutexGuard<'_, XorshiftState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Xorshift {
    fn default() -> Self {
        Self::new()
    }
}
