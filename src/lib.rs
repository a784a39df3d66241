//! xorshift1024★ uniform random number generator
//!
//! A general-purpose PRNG with a 1024-bit state, cycle length 2^1024 - 1,
//! and high statistical quality, usable as a drop-in replacement for a
//! standard uniform RNG.
//!
//! # Architecture
//!
//! - **rng**: generator state, derived value layer, and seeding
//!
//! # Critical Invariants
//!
//! 1. The 1024-bit state is never the all-zero vector
//! 2. Same seed → same sequence, for every seed including 0
//! 3. All state mutation on one instance is serialized by a mutex

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{random_seed, RngError, Xorshift};
