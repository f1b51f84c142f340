//! 48-bit linear congruential generator
//!
//! The classic LCG (multiplier 0x5DEECE66D, increment 0xB, 48-bit state)
//! used as the deterministic algorithmic fallback behind the file-backed
//! source. A request for `b` bits returns the high `b` bits of the state,
//! which is where this generator's quality lives.
//!
//! # Determinism
//!
//! Same seed → same sequence. The file-backed source seeds its fallback
//! with the fixed constant [`Lcg48::FIXED_SEED`], whose scrambled initial
//! state is exactly zero, so fallback output is identical across runs.

use serde::{Deserialize, Serialize};

use crate::rng::source::{RandomBits, RngError};

const MULTIPLIER: u64 = 0x5DEECE66D;
const INCREMENT: u64 = 0xB;
const STATE_MASK: u64 = (1 << 48) - 1;

/// Deterministic 48-bit linear congruential generator
///
/// # Example
/// ```
/// use replay_rng_core_rs::{Lcg48, RandomBits};
///
/// let mut rng = Lcg48::new(12345);
/// let value = rng.next_bits(32).unwrap();
/// let in_range = rng.range(0, 100).unwrap(); // [0, 100)
/// assert!(in_range < 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lcg48 {
    /// Internal state (low 48 bits significant)
    state: u64,
}

impl Lcg48 {
    /// The fixed fallback seed used by the file-backed source
    ///
    /// Scrambling maps this seed to an initial state of zero.
    pub const FIXED_SEED: u64 = 0x5DEECE66D;

    /// Create a new generator from a seed
    ///
    /// The seed is scrambled into the initial state:
    /// `state = (seed ^ 0x5DEECE66D) & ((1 << 48) - 1)`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & STATE_MASK,
        }
    }

    /// Recreate a generator from a raw state snapshot
    ///
    /// Unlike [`new`](Lcg48::new), no scrambling is applied; this resumes
    /// the sequence exactly where [`state`](Lcg48::state) captured it.
    pub fn from_state(state: u64) -> Self {
        Self {
            state: state & STATE_MASK,
        }
    }

    /// Current raw state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use replay_rng_core_rs::{Lcg48, RandomBits};
    ///
    /// let mut rng = Lcg48::new(12345);
    /// let _ = rng.next_bits(32).unwrap();
    ///
    /// let mut resumed = Lcg48::from_state(rng.state());
    /// assert_eq!(resumed.next_bits(32).unwrap(), rng.next_bits(32).unwrap());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RandomBits for Lcg48 {
    fn next_bits(&mut self, bits: u32) -> Result<u32, RngError> {
        if !(1..=32).contains(&bits) {
            return Err(RngError::InvalidBitCount { bits });
        }
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        Ok((self.state >> (48 - bits)) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_scrambles_to_zero() {
        let rng = Lcg48::new(Lcg48::FIXED_SEED);
        assert_eq!(rng.state(), 0, "Fixed seed must scramble to state 0");
    }

    #[test]
    fn test_known_sequence_from_state_zero() {
        // state advances 0 -> 0xB -> 0xB * 0x5DEECE66D + 0xB
        let mut rng = Lcg48::from_state(0);
        assert_eq!(rng.next_bits(32).unwrap(), 0); // 0xB >> 16
        assert_eq!(rng.next_bits(32).unwrap(), 4232237); // 277363943098 >> 16
    }

    #[test]
    fn test_bit_count_validation_does_not_advance_state() {
        let mut rng = Lcg48::new(42);
        let before = rng.state();
        assert!(rng.next_bits(0).is_err());
        assert!(rng.next_bits(33).is_err());
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_result_fits_requested_width() {
        let mut rng = Lcg48::new(99);
        for bits in 1..=31u32 {
            let val = rng.next_bits(bits).unwrap();
            assert!(val < (1u32 << bits), "{val} exceeds {bits} bits");
        }
    }
}
