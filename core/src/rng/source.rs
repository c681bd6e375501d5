//! Seeded sampling context
//!
//! [`RandomSource`] owns one xorshift64* engine plus the seed that created
//! it, and layers the full sampling API on top: unit floats, scaled and
//! bounded float ranges, int/long ranges with bound-inclusion control,
//! booleans, signs, uniform picking and in-place shuffling.
//!
//! Sources are plain values: give each system its own source with its own
//! seed and the systems stay reproducible independently of each other. A
//! process-wide fallback lives in [`crate::rng::shared`].

use super::bounds::Inclusion;
use super::xorshift::Xorshift64Star;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fallback seed when the system clock is unreadable
const FALLBACK_SEED: u64 = 0x9E3779B97F4A7C15;

/// Derive a seed from wall-clock time
///
/// Nanosecond resolution keeps two sources created back-to-back from
/// sharing a seed in practice; reproducible runs should seed explicitly.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(FALLBACK_SEED, |elapsed| elapsed.as_nanos() as u64)
}

/// Deterministic sampling context
///
/// # Determinism
///
/// Same seed → same sequence of samples, across every method. Snapshots
/// (serde or [`RandomSource::state`]) resume the sequence mid-stream.
///
/// # Example
/// ```
/// use gamekit_random::{Inclusion, RandomSource};
///
/// let mut rng = RandomSource::with_seed(12345);
/// assert_eq!(rng.seed(), 12345);
///
/// let unit = rng.next_f64();               // [0.0, 1.0)
/// let damage = rng.i32_range(10, 20, Inclusion::Both);
/// assert!(unit < 1.0);
/// assert!((10..=20).contains(&damage));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSource {
    /// Seed the engine was last initialized with
    seed: u64,
    /// Underlying deterministic bit generator
    engine: Xorshift64Star,
}

impl RandomSource {
    /// Create a source seeded from wall-clock time
    ///
    /// For reproducible sessions use [`RandomSource::with_seed`]; the
    /// time-derived seed is still readable afterwards via
    /// [`RandomSource::seed`], so a session can be replayed after the fact.
    pub fn new() -> Self {
        Self::with_seed(time_seed())
    }

    /// Create a source with the given seed
    ///
    /// # Example
    /// ```
    /// use gamekit_random::RandomSource;
    ///
    /// let mut a = RandomSource::with_seed(42);
    /// let mut b = RandomSource::with_seed(42);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            engine: Xorshift64Star::new(seed),
        }
    }

    /// Discard the engine and re-initialize with the given seed
    ///
    /// From the caller's perspective the replacement is atomic: no sample
    /// can observe the old engine with the new seed or vice versa.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.engine = Xorshift64Star::new(seed);
    }

    /// Discard the engine and re-initialize from wall-clock time
    pub fn reseed_from_time(&mut self) {
        self.reseed(time_seed());
    }

    /// Seed used by the last initialization (construction or reseed)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current engine state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use gamekit_random::RandomSource;
    ///
    /// let mut rng = RandomSource::with_seed(12345);
    /// rng.next_u64();
    ///
    /// let checkpoint = rng.state();
    /// let mut replay = RandomSource::with_seed(checkpoint);
    /// assert_eq!(replay.next_u64(), rng.next_u64());
    /// ```
    pub fn state(&self) -> u64 {
        self.engine.state()
    }

    // ------------------------------------------------------------------
    // Continuous sampling
    // ------------------------------------------------------------------

    /// Next raw 64-bit value from the engine
    pub fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Uniform f64 in [0.0, 1.0)
    ///
    /// The foundational continuous primitive; scaled and bounded float
    /// sampling routes through it.
    pub fn next_f64(&mut self) -> f64 {
        self.engine.next_f64()
    }

    /// Uniform f64 in [0.0, max)
    ///
    /// No bound validation: a negative `max` yields values in `(max, 0.0]`
    /// (the result's sign follows `max`).
    pub fn f64_to(&mut self, max: f64) -> f64 {
        self.next_f64() * max
    }

    /// Uniform f64 in [min, max)
    ///
    /// Order-independent: swapped bounds are sorted before sampling. Equal
    /// bounds return `min` exactly.
    ///
    /// # Example
    /// ```
    /// use gamekit_random::RandomSource;
    ///
    /// let mut rng = RandomSource::with_seed(9);
    /// let x = rng.f64_range(-1.0, 1.0);
    /// assert!(x >= -1.0 && x < 1.0);
    /// assert_eq!(rng.f64_range(3.0, 3.0), 3.0);
    /// ```
    pub fn f64_range(&mut self, min: f64, max: f64) -> f64 {
        if min > max {
            return self.f64_range(max, min);
        }
        if min == max {
            return min;
        }
        min + (max - min) * self.next_f64()
    }

    /// Uniform f32 in [0.0, 1.0)
    ///
    /// Sampled with a 24-bit mantissa directly from the engine: narrowing
    /// the 53-bit double can round up to 1.0, which would break the
    /// half-open contract.
    pub fn next_f32(&mut self) -> f32 {
        let value = self.engine.next_u64();
        (value >> 40) as f32 * (1.0 / (1u64 << 24) as f32)
    }

    /// Uniform f32 in [0.0, max)
    ///
    /// As [`RandomSource::f64_to`]: the result's sign follows `max`.
    pub fn f32_to(&mut self, max: f32) -> f32 {
        self.next_f32() * max
    }

    /// Uniform f32 in [min, max)
    ///
    /// Order-independent; equal bounds return `min` exactly.
    pub fn f32_range(&mut self, min: f32, max: f32) -> f32 {
        if min > max {
            return self.f32_range(max, min);
        }
        if min == max {
            return min;
        }
        min + (max - min) * self.next_f32()
    }

    // ------------------------------------------------------------------
    // Discrete sampling
    // ------------------------------------------------------------------

    /// Uniform i32 over [0, i32::MAX] inclusive
    pub fn next_i32(&mut self) -> i32 {
        (self.engine.next_u64() >> 33) as i32
    }

    /// Uniform i32 in [0, max)
    ///
    /// Equivalent to `i32_range(0, max, Inclusion::Lower)`, the documented
    /// default for the one-bound form; pass a different [`Inclusion`] to
    /// `i32_range` directly for other policies.
    pub fn i32_up_to(&mut self, max: i32) -> i32 {
        self.i32_range(0, max, Inclusion::Lower)
    }

    /// Uniform i32 in [min, max] inclusive
    ///
    /// Equivalent to `i32_range(min, max, Inclusion::Both)`, the documented
    /// default for the two-bound form.
    ///
    /// # Example
    /// ```
    /// use gamekit_random::RandomSource;
    ///
    /// let mut rng = RandomSource::with_seed(42);
    /// let roll = rng.i32_inclusive(1, 6);
    /// assert!((1..=6).contains(&roll));
    /// ```
    pub fn i32_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.i32_range(min, max, Inclusion::Both)
    }

    /// Uniform i32 over `[min, max]` under the given inclusion policy
    ///
    /// Order-independent (swapped bounds are sorted, the policy is kept).
    /// Equal bounds return `min` regardless of policy. Requests touching
    /// `i32::MIN`/`i32::MAX` are degraded by [`Inclusion::effective`] so
    /// the internal half-open reduction cannot overflow.
    pub fn i32_range(&mut self, min: i32, max: i32, inclusion: Inclusion) -> i32 {
        if min > max {
            return self.i32_range(max, min, inclusion);
        }
        if min == max {
            return min;
        }
        let corrected = inclusion.effective(min == i32::MIN, max == i32::MAX);
        let (lo, hi) = corrected.half_open(i64::from(min), i64::from(max));
        self.half_open_i64(lo, hi) as i32
    }

    /// Uniform i64 over [0, i64::MAX] inclusive
    pub fn next_i64(&mut self) -> i64 {
        (self.engine.next_u64() >> 1) as i64
    }

    /// Uniform i64 in [0, max)
    ///
    /// Equivalent to `i64_range(0, max, Inclusion::Lower)`.
    pub fn i64_up_to(&mut self, max: i64) -> i64 {
        self.i64_range(0, max, Inclusion::Lower)
    }

    /// Uniform i64 in [min, max] inclusive
    ///
    /// Equivalent to `i64_range(min, max, Inclusion::Both)`.
    pub fn i64_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.i64_range(min, max, Inclusion::Both)
    }

    /// Uniform i64 over `[min, max]` under the given inclusion policy
    ///
    /// Same contract as [`RandomSource::i32_range`] at 64-bit width, with
    /// `i64::MIN`/`i64::MAX` as the boundary constants.
    pub fn i64_range(&mut self, min: i64, max: i64, inclusion: Inclusion) -> i64 {
        if min > max {
            return self.i64_range(max, min, inclusion);
        }
        if min == max {
            return min;
        }
        let corrected = inclusion.effective(min == i64::MIN, max == i64::MAX);
        let (lo, hi) = corrected.half_open(min, max);
        self.half_open_i64(lo, hi)
    }

    /// Uniform-ish i64 in the half-open range [lo, hi)
    ///
    /// One raw draw, interpreted as signed, absolute value modulo the range
    /// width. The width is computed in wrapping two's-complement arithmetic
    /// so corrected full-width ranges (wider than `i64::MAX`) stay exact.
    /// The modulo reduction carries a small bias for widths that do not
    /// divide 2^63; callers accepting that bias is part of the contract.
    ///
    /// A corrected range can collapse to empty (adjacent bounds with both
    /// endpoints excluded); that degenerate case returns `lo` rather than
    /// dividing by zero.
    fn half_open_i64(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi as u64).wrapping_sub(lo as u64);
        if span == 0 {
            return lo;
        }
        let raw = self.engine.next_u64() as i64;
        let offset = raw.unsigned_abs() % span;
        lo.wrapping_add(offset as i64)
    }

    // ------------------------------------------------------------------
    // Boolean / sign
    // ------------------------------------------------------------------

    /// Fair coin flip
    pub fn next_bool(&mut self) -> bool {
        self.next_f64() < 0.5
    }

    /// +1 or -1 with equal probability
    pub fn next_sign(&mut self) -> i32 {
        if self.next_bool() {
            1
        } else {
            -1
        }
    }

    // ------------------------------------------------------------------
    // Sequences
    // ------------------------------------------------------------------

    /// In-place Fisher-Yates shuffle
    ///
    /// Each position `i` is swapped with a position drawn uniformly from
    /// `[i, len)`, producing a uniformly random permutation (up to the
    /// engine's quality). Elements need no ordering or comparability; a
    /// slice of length 0 or 1 is left untouched.
    ///
    /// # Example
    /// ```
    /// use gamekit_random::RandomSource;
    ///
    /// let mut rng = RandomSource::with_seed(42);
    /// let mut deck: Vec<u32> = (0..52).collect();
    /// rng.shuffle(&mut deck);
    ///
    /// let mut sorted = deck.clone();
    /// sorted.sort();
    /// assert_eq!(sorted, (0..52).collect::<Vec<u32>>());
    /// ```
    pub fn shuffle<T>(&mut self, elements: &mut [T]) {
        for i in 0..elements.len() {
            let j = self.half_open_i64(i as i64, elements.len() as i64) as usize;
            elements.swap(i, j);
        }
    }

    /// Uniformly pick one element of a slice
    ///
    /// Returns `None` on an empty slice.
    ///
    /// # Example
    /// ```
    /// use gamekit_random::RandomSource;
    ///
    /// let mut rng = RandomSource::with_seed(7);
    /// let spawn_points = ["north", "south", "east"];
    /// let chosen = rng.pick(&spawn_points).unwrap();
    /// assert!(spawn_points.contains(chosen));
    ///
    /// let empty: [&str; 0] = [];
    /// assert_eq!(rng.pick(&empty), None);
    /// ```
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> Option<&'a T> {
        if elements.is_empty() {
            return None;
        }
        let idx = self.half_open_i64(0, elements.len() as i64) as usize;
        Some(&elements[idx])
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_seed_records_seed() {
        let rng = RandomSource::with_seed(12345);
        assert_eq!(rng.seed(), 12345);
    }

    #[test]
    fn test_reseed_replaces_sequence() {
        let mut rng = RandomSource::with_seed(1);
        let first = rng.next_u64();

        rng.reseed(1);
        assert_eq!(rng.seed(), 1);
        assert_eq!(rng.next_u64(), first, "reseed should restart the sequence");
    }

    #[test]
    fn test_time_seeded_sources_are_usable() {
        let mut rng = RandomSource::new();
        let val = rng.next_f64();
        assert!(val >= 0.0 && val < 1.0);
    }

    #[test]
    fn test_next_f32_in_unit_range() {
        let mut rng = RandomSource::with_seed(12345);
        for _ in 0..1000 {
            let val = rng.next_f32();
            assert!(
                val >= 0.0 && val < 1.0,
                "next_f32() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_f64_to_sign_follows_max() {
        let mut rng = RandomSource::with_seed(12345);
        for _ in 0..100 {
            let val = rng.f64_to(-2.0);
            assert!(val <= 0.0 && val > -2.0, "value {} outside (-2.0, 0.0]", val);
        }
    }

    #[test]
    fn test_next_i32_nonnegative() {
        let mut rng = RandomSource::with_seed(777);
        for _ in 0..1000 {
            assert!(rng.next_i32() >= 0);
        }
    }

    #[test]
    fn test_next_i64_nonnegative() {
        let mut rng = RandomSource::with_seed(777);
        for _ in 0..1000 {
            assert!(rng.next_i64() >= 0);
        }
    }

    #[test]
    fn test_half_open_degenerate_range_returns_lo() {
        let mut rng = RandomSource::with_seed(1);
        // Adjacent bounds with both endpoints excluded collapse to empty
        let val = rng.i32_range(0, 1, Inclusion::None);
        assert_eq!(val, 1);
    }

    #[test]
    fn test_pick_uniform_over_slice() {
        let mut rng = RandomSource::with_seed(42);
        let items = [10, 20, 30];
        for _ in 0..100 {
            let chosen = *rng.pick(&items).unwrap();
            assert!(items.contains(&chosen));
        }
    }

    #[test]
    fn test_serde_round_trip_resumes_sequence() {
        let mut rng = RandomSource::with_seed(2024);
        for _ in 0..10 {
            rng.next_u64();
        }

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: RandomSource = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed(), rng.seed());
        for _ in 0..20 {
            assert_eq!(restored.next_u64(), rng.next_u64());
        }
    }
}
