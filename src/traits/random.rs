use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source used for waypoint selection
pub trait RandomSource {
    /// Draw from `[low, high_exclusive)`
    fn uniform_int(&mut self, low: usize, high_exclusive: usize) -> usize;
}

/// `StdRng` backed random source
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, low: usize, high_exclusive: usize) -> usize {
        self.rng.gen_range(low..high_exclusive)
    }
}
