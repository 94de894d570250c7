//! Deterministic per-resource and store-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each resource gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (resource_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive resource IDs uniformly across the seed space.
//! This means:
//!
//! - Resources never share RNG state (no contention, no ordering dependency).
//! - Re-initializing with the same seed and fleet reproduces the exact same
//!   jitter offsets, initial speeds, and per-tick perturbations.
//! - The RNG is an explicit value threaded through the integrator, so tests
//!   can assert exact trajectories; production wiring just picks a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ResourceId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ResourceRng ───────────────────────────────────────────────────────────────

/// Per-resource deterministic RNG.
///
/// Create one per resource at initialization; store in a `Vec<ResourceRng>`
/// parallel to the kinematic state array.  The type is `!Sync` to prevent
/// accidental sharing across threads — the parallel tick hands each worker
/// exclusive `&mut` access to one element.
pub struct ResourceRng(SmallRng);

impl ResourceRng {
    /// Seed deterministically from the run's global seed and a resource ID.
    pub fn new(global_seed: u64, resource: ResourceId) -> Self {
        let seed = global_seed ^ (resource.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ResourceRng(SmallRng::seed_from_u64(seed))
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
}

// ── FleetRng ──────────────────────────────────────────────────────────────────

/// Store-level RNG for operations not tied to a single resource.
///
/// Used only in single-threaded contexts (initialization order is the fleet
/// order, so draws are reproducible for a given seed and fleet).
pub struct FleetRng(SmallRng);

impl FleetRng {
    pub fn new(seed: u64) -> Self {
        FleetRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
