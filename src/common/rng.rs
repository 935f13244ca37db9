//! Gameplay randomness.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for procedural spawning.
///
/// Entropy-seeded by default; tests insert a seeded one for repeatable runs.
#[derive(Resource, Debug)]
pub struct GameRng(StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniform integer in `0..bound`; `0` when `bound <= 0`.
    pub fn below(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        self.0.gen_range(0..bound)
    }
}
