//! Default seed generation
//!
//! Seeds produced here feed [`crate::Xorshift::new`]. A process-wide
//! atomic counter keeps seeds distinct even when generators are created
//! faster than the clock resolution.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-wide counter diversifying default seeds.
///
/// Initialized once at process start, incremented atomically on every
/// [`random_seed`] call, never reset. Uniqueness is the only guarantee
/// needed, so relaxed ordering suffices.
static SEED_UNIQUIFIER: AtomicI64 = AtomicI64::new(0);

/// Returns a random seed generated by taking a unique increasing value,
/// adding the current time in nanoseconds, and scrambling the result
/// with the 64-bit finalization mix of MurmurHash3.
///
/// # Example
/// ```
/// use xorshift_rng_rs::random_seed;
///
/// let a = random_seed();
/// let b = random_seed();
/// assert_ne!(a, b);
/// ```
pub fn random_seed() -> i64 {
    let unique = SEED_UNIQUIFIER.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as i64);

    let mut seed = unique.wrapping_add(nanos) as u64;
    seed ^= seed >> 33;
    seed = seed.wrapping_mul(0xff51afd7ed558ccd);
    seed ^= seed >> 33;
    seed = seed.wrapping_mul(0xc4ceb9fe1a85ec53);
    seed ^= seed >> 33;

    seed as i64
}
