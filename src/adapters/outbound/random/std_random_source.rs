use crate::ports::outbound::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// StdRandomSource adapter backed by `rand`'s StdRng
///
/// Seeded sources repeat the same sequence; unseeded ones draw their seed
/// from the OS.
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}
