use rand::prelude::*;

/// Source of the random draws a morph needs.
///
/// The scene owns one of these rather than reaching for a thread-local RNG so
/// that tests can script exact draws and hosts can replay a session by seed.
pub trait RandomSource {
    /// Uniform draw from the closed range `[lo, hi]`.
    fn uniform(&mut self, lo: f32, hi: f32) -> f32;

    /// Uniform index into a collection of `len` items, `None` when empty.
    fn pick(&mut self, len: usize) -> Option<usize>;
}

pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
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
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }
}

