use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers used for food placement
pub trait RandomSource {
    /// A uniform integer in `[min, max]`, both ends inclusive
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }
}

/// Seeded generator when `seed` is given, otherwise one seeded from entropy
pub fn game_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
