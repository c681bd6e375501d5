//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for game logic.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact game session)
//! - Testing (verify behavior)
//! - Replays (resume a sequence from a saved state)

use serde::{Deserialize, Serialize};

/// Deterministic bit generator using xorshift64*
///
/// This is the raw engine underneath [`crate::RandomSource`]. Most callers
/// want the source, which adds seed bookkeeping and ranged sampling; the
/// engine is exposed for code that only needs a stream of 64-bit values.
///
/// # Example
/// ```
/// use gamekit_random::Xorshift64Star;
///
/// let mut engine = Xorshift64Star::new(12345);
/// let bits = engine.next_u64();
/// let unit = engine.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64Star {
    /// Internal state (64-bit)
    state: u64,
}

impl Xorshift64Star {
    /// Create a new engine with the given seed
    ///
    /// A zero seed is coerced to 1 (xorshift state must never be zero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value
    ///
    /// Advances the internal state and returns a random value.
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in [0.0, 1.0)
    ///
    /// Uses the top 53 bits of the output, so every value is an exact
    /// multiple of 2^-53 and 1.0 itself is unreachable.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Get the current engine state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use gamekit_random::Xorshift64Star;
    ///
    /// let mut engine = Xorshift64Star::new(12345);
    /// engine.next_u64();
    /// let state = engine.state();
    ///
    /// // A new engine seeded from this state continues the sequence
    /// let mut replay = Xorshift64Star::new(state);
    /// assert_eq!(replay.next_u64(), engine.next_u64());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let engine = Xorshift64Star::new(0);
        assert_ne!(engine.state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut engine = Xorshift64Star::new(12345);

        for _ in 0..1000 {
            let val = engine.next_f64();
            assert!(
                val >= 0.0 && val < 1.0,
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_next_f64_deterministic() {
        let mut engine1 = Xorshift64Star::new(99999);
        let mut engine2 = Xorshift64Star::new(99999);

        for _ in 0..100 {
            let val1 = engine1.next_f64();
            let val2 = engine2.next_f64();
            assert_eq!(val1, val2, "next_f64() not deterministic");
        }
    }

    #[test]
    fn test_state_advances() {
        let mut engine = Xorshift64Star::new(12345);
        let initial_state = engine.state();

        engine.next_u64();

        assert_ne!(initial_state, engine.state(), "Engine state should advance");
    }
}
