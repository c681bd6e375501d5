//! Process-wide default random source
//!
//! Convenience wrapper for callers that do not thread a [`RandomSource`]
//! through: one instance for the whole process, behind a mutex. The first
//! sampling call auto-initializes from wall-clock time, so sampling never
//! fails; reproducible sessions should call [`initialize_with`] up front.
//!
//! Systems that need isolated, independently seeded streams (including
//! tests) should own their `RandomSource` instead of going through here:
//! everything in this module contends on one lock and one sequence.
//!
//! # Example
//!
//! ```
//! use gamekit_random::rng::shared;
//!
//! shared::initialize_with(42);
//! assert_eq!(shared::seed(), 42);
//! let roll = shared::i32_inclusive(1, 6);
//! assert!((1..=6).contains(&roll));
//! ```

use super::bounds::Inclusion;
use super::source::RandomSource;
use std::sync::Mutex;

/// The process-wide instance; `None` until first use or explicit init
static SHARED: Mutex<Option<RandomSource>> = Mutex::new(None);

/// Single synchronized entry point for every shared-instance operation
///
/// Lazily initializes from wall-clock time. Holding the lock for both the
/// initialization check and the draw keeps concurrent callers from ever
/// observing a half-initialized instance or interleaving engine updates.
fn with_shared<R>(f: impl FnOnce(&mut RandomSource) -> R) -> R {
    let mut guard = SHARED.lock().expect("shared random source lock poisoned");
    let source = guard.get_or_insert_with(RandomSource::new);
    f(source)
}

/// Re-initialize the shared instance from wall-clock time
pub fn initialize() {
    let mut guard = SHARED.lock().expect("shared random source lock poisoned");
    *guard = Some(RandomSource::new());
}

/// Re-initialize the shared instance with the given seed
///
/// Replaces the engine and seed atomically from the caller's perspective.
pub fn initialize_with(seed: u64) {
    let mut guard = SHARED.lock().expect("shared random source lock poisoned");
    *guard = Some(RandomSource::with_seed(seed));
}

/// Seed of the shared instance (auto-initializing if needed)
pub fn seed() -> u64 {
    with_shared(|rng| rng.seed())
}

/// Engine state of the shared instance (for checkpointing/replay)
pub fn state() -> u64 {
    with_shared(|rng| rng.state())
}

/// See [`RandomSource::next_u64`]
pub fn next_u64() -> u64 {
    with_shared(|rng| rng.next_u64())
}

/// See [`RandomSource::next_f64`]
pub fn next_f64() -> f64 {
    with_shared(|rng| rng.next_f64())
}

/// See [`RandomSource::f64_to`]
pub fn f64_to(max: f64) -> f64 {
    with_shared(|rng| rng.f64_to(max))
}

/// See [`RandomSource::f64_range`]
pub fn f64_range(min: f64, max: f64) -> f64 {
    with_shared(|rng| rng.f64_range(min, max))
}

/// See [`RandomSource::next_f32`]
pub fn next_f32() -> f32 {
    with_shared(|rng| rng.next_f32())
}

/// See [`RandomSource::f32_to`]
pub fn f32_to(max: f32) -> f32 {
    with_shared(|rng| rng.f32_to(max))
}

/// See [`RandomSource::f32_range`]
pub fn f32_range(min: f32, max: f32) -> f32 {
    with_shared(|rng| rng.f32_range(min, max))
}

/// See [`RandomSource::next_i32`]
pub fn next_i32() -> i32 {
    with_shared(|rng| rng.next_i32())
}

/// See [`RandomSource::i32_up_to`]
pub fn i32_up_to(max: i32) -> i32 {
    with_shared(|rng| rng.i32_up_to(max))
}

/// See [`RandomSource::i32_inclusive`]
pub fn i32_inclusive(min: i32, max: i32) -> i32 {
    with_shared(|rng| rng.i32_inclusive(min, max))
}

/// See [`RandomSource::i32_range`]
pub fn i32_range(min: i32, max: i32, inclusion: Inclusion) -> i32 {
    with_shared(|rng| rng.i32_range(min, max, inclusion))
}

/// See [`RandomSource::next_i64`]
pub fn next_i64() -> i64 {
    with_shared(|rng| rng.next_i64())
}

/// See [`RandomSource::i64_up_to`]
pub fn i64_up_to(max: i64) -> i64 {
    with_shared(|rng| rng.i64_up_to(max))
}

/// See [`RandomSource::i64_inclusive`]
pub fn i64_inclusive(min: i64, max: i64) -> i64 {
    with_shared(|rng| rng.i64_inclusive(min, max))
}

/// See [`RandomSource::i64_range`]
pub fn i64_range(min: i64, max: i64, inclusion: Inclusion) -> i64 {
    with_shared(|rng| rng.i64_range(min, max, inclusion))
}

/// See [`RandomSource::next_bool`]
pub fn next_bool() -> bool {
    with_shared(|rng| rng.next_bool())
}

/// See [`RandomSource::next_sign`]
pub fn next_sign() -> i32 {
    with_shared(|rng| rng.next_sign())
}

/// See [`RandomSource::shuffle`]
pub fn shuffle<T>(elements: &mut [T]) {
    with_shared(|rng| rng.shuffle(elements));
}

/// See [`RandomSource::pick`]
pub fn pick<T>(elements: &[T]) -> Option<&T> {
    with_shared(|rng| rng.pick(elements))
}
