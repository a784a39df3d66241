//! xorshift1024★ random number generation
//!
//! Uses the xorshift1024★ algorithm: a 16-word xorshift state advanced by
//! XORs and logical shifts, scrambled on output by a wrapping multiply.
//! Cycle length is 2^1024 - 1.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This holds for every
//! seed, including 0 (remapped to the all-ones fill at seeding time).
//!
//! # Thread safety
//!
//! One [`Xorshift`] instance may be shared across threads; every draw is
//! a serialized point in a single global sequence.

mod generator;
mod seed;
mod state;

pub use generator::{RngError, Xorshift};
pub use seed::random_seed;
