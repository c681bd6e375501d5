//! GameKit Random - Deterministic Randomness Toolkit
//!
//! Seedable random-number generation for game logic: uniform sampling over
//! floats, doubles, ints and longs with configurable bound-inclusion
//! semantics, boolean/sign sampling, uniform picking and in-place shuffling.
//!
//! # Architecture
//!
//! - **rng**: the sampling core
//!   - `Xorshift64Star`: the deterministic bit generator
//!   - `Inclusion`: which endpoints of a `[min, max]` pair are reachable
//!   - `RandomSource`: seeded sampling context (the primary API)
//!   - `shared`: process-wide default instance for callers that do not
//!     thread a context through
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic given a seed
//! 2. Ranged sampling never overflows at the integer extremes
//! 3. Sampling through the shared instance never fails, even before
//!    explicit initialization
//!
//! # Example
//!
//! ```
//! use gamekit_random::{Inclusion, RandomSource};
//!
//! let mut rng = RandomSource::with_seed(42);
//! let roll = rng.i32_range(1, 6, Inclusion::Both); // fair die, 1..=6
//! assert!((1..=6).contains(&roll));
//!
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//! ```

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{Inclusion, InclusionError, RandomSource, Xorshift64Star};
