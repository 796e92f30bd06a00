//! Deterministic per-car RNG.
//!
//! # Determinism strategy
//!
//! Each car gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (car_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive car IDs uniformly across the seed space.
//! This means:
//!
//! - Cars never share RNG state, so the reservation plan a car draws does not
//!   depend on how many random values other cars consumed before it.
//! - Adding or removing cars at the end of the list does not disturb the
//!   seeds of existing cars — runs are reproducible even as fleets grow.
//!
//! The RNG is constructed once per car at fleet-build time and threaded
//! explicitly into the reservation planner; there is no global RNG state
//! anywhere in the framework.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CarId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── CarRng ────────────────────────────────────────────────────────────────────

/// Per-car deterministic RNG.
///
/// Create one per car at fleet-build time; store in a parallel `Vec<CarRng>`
/// alongside the other SoA arrays (see `ev-fleet`'s `CarRngs`).
#[derive(Debug)]
pub struct CarRng(SmallRng);

impl CarRng {
    /// Seed deterministically from the run's global seed and a car ID.
    pub fn new(global_seed: u64, car: CarId) -> Self {
        let seed = global_seed ^ (car.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CarRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Sample `amount` distinct indices uniformly from `0..length`, in random
    /// order.
    ///
    /// Used by the reservation planner to pick which chargers a car reserves.
    ///
    /// # Panics
    /// Panics if `amount > length` — callers must clamp first.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
