//! xorshift1024★ state and core stepper
//!
//! # Algorithm
//!
//! The state is 16 64-bit words plus a cursor. Each step xorshifts two
//! words into a new word (shift amounts 1, 7, 13, all logical) and
//! returns that word scrambled by a wrapping multiply with an odd
//! constant (the ★ step). The raw xorshift component has period
//! 2^1024 - 1; the multiply does not shorten it, it only improves
//! output quality.
//!
//! Callers synchronize: this type is raw state, owned by exactly one
//! generator and mutated only under its lock.

/// Output scramble multiplier. Odd, so the map is a bijection on u64.
const STAR: u64 = 1181783497276652981;

/// The internal state of the algorithm: 16 words and a cursor in [0, 16).
///
/// Invariant: the word array is never all-zero. [`XorshiftState::fill`]
/// remaps a zero seed to the all-ones fill, and the update step maps
/// non-zero states to non-zero states.
#[derive(Debug)]
pub(crate) struct XorshiftState {
    s: [u64; 16],
    p: usize,
}

impl XorshiftState {
    /// Create a state filled from `seed`, not yet warmed up.
    pub(crate) fn new(seed: i64) -> Self {
        let mut state = Self { s: [0; 16], p: 0 };
        state.fill(seed);
        state
    }

    /// Overwrite every word with `seed` and reset the cursor.
    ///
    /// A zero seed would violate the non-zero invariant, so it is
    /// remapped to -1 (all bits set).
    pub(crate) fn fill(&mut self, seed: i64) {
        let word = if seed == 0 { u64::MAX } else { seed as u64 };
        self.s = [word; 16];
        self.p = 0;
    }

    /// Advance the state one step and return the next scrambled value.
    pub(crate) fn step(&mut self) -> u64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 1;
        self.s[self.p] = s1 ^ s0 ^ (s0 >> 7) ^ (s1 >> 13);
        self.s[self.p].wrapping_mul(STAR)
    }
}
