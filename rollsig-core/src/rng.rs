//! Seeded entropy source.
//!
//! The job seeds one generator from the run configuration and owns it for the
//! rest of the run. Nothing in the pipeline draws from it today; it exists so
//! that any randomized stage added later is reproducible from the config seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct EntropySource {
    seed: u64,
    // Only tests draw from it so far.
    #[cfg_attr(not(test), allow(dead_code))]
    rng: StdRng,
}

impl EntropySource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
