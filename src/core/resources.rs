//! Core domain: shared run resources.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Deterministic RNG for ambient behaviour, seeded from [`RunConfig`].
#[derive(Resource, Debug)]
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
