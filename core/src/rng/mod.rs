//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. All randomness in a game session SHOULD go through a single
//! `RandomSource` (or the `shared` instance) so runs are reproducible.

mod bounds;
mod source;
pub mod shared;
mod xorshift;

pub use bounds::{Inclusion, InclusionError};
pub use source::RandomSource;
pub use xorshift::Xorshift64Star;
