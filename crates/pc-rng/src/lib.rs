//! pc-rng: random sources for the path carver
//!
//! The carver only ever asks for "an integer in `[0, n)`". That request is
//! the [`RandomSource`] trait, so a run can be driven by a seeded ChaCha
//! stream in production, by a fixed script in tests, or by either one
//! wrapped in a recorder when two runs need to be compared draw by draw.

mod sequence;
mod trace;

pub use sequence::SequenceRng;
pub use trace::{RngTraceEntry, TracingRng};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random integers.
pub trait RandomSource {
    /// Returns an integer in `0..n`. Returns 0 if n is 0.
    fn below(&mut self, n: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, n: u32) -> u32 {
        (**self).below(n)
    }
}

/// Shuffle a slice in place (Fisher-Yates).
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

/// Seeded carver random number generator
///
/// Wraps ChaCha8Rng for reproducible generation.
/// Only the seed is serialized; deserializing restarts the stream.
#[derive(Debug, Clone)]
pub struct CarveRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for CarveRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CarveRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(CarveRng::new(seed))
    }
}

impl CarveRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for CarveRng {
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for CarveRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
