//! Deterministic trial-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each independent trial gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (trial_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial indices uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state (no ordering dependency between trials).
//! - Re-running a trial with the same global seed and index reproduces it
//!   exactly, regardless of how many trials ran before it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-trial deterministic RNG.
///
/// One `SimRng` drives every stochastic draw within a trial (interarrival
/// delays, service durations).  Single-threaded by construction; the engine's
/// cooperative scheduling means draws happen in a deterministic order.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and a trial index.
    pub fn for_trial(global_seed: u64, trial: u32) -> Self {
        let seed = global_seed ^ (trial as u64).wrapping_mul(MIXING_CONSTANT);
        SimRng::new(seed)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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

    /// Sample from any `rand` distribution.
    #[inline]
    pub fn sample<T, D>(&mut self, dist: D) -> T
    where
        D: rand::distributions::Distribution<T>,
    {
        dist.sample(&mut self.0)
    }
}
