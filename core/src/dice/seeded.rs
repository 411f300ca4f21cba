use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Fair six-sided die, reproducible from its seed.
#[derive(Clone, Debug)]
pub struct SeededDie {
    seed: u64,
    rng: SmallRng,
}

impl SeededDie {
    pub fn new(seed: u64) -> Self {
        log::debug!("die seed: {}", seed);
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Die for SeededDie {
    fn roll(&mut self) -> DieFace {
        DieFace::new_unchecked(self.rng.random_range(DieFace::MIN..=DieFace::MAX))
    }
}
