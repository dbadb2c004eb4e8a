use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Per-player uniform integer generator over a closed range.
/// Owned by exactly one thread, so no locking.
#[derive(Debug, Clone)]
pub struct Random {
    rng: SmallRng,
    min: u32,
    max: u32,
}

impl Random {
    /// Seed from the operating system. Caller guarantees `min <= max`.
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);
        Self {
            rng: SmallRng::from_os_rng(),
            min,
            max,
        }
    }
    /// Reproducible sequence for a fixed `seed`.
    pub fn seeded(min: u32, max: u32, seed: u64) -> Self {
        debug_assert!(min <= max);
        Self {
            rng: SmallRng::seed_from_u64(seed),
            min,
            max,
        }
    }
    /// Reconfigure the range, keeping the generator state.
    pub fn init(&mut self, min: u32, max: u32) {
        debug_assert!(min <= max);
        self.min = min;
        self.max = max;
    }
    pub fn draw(&mut self) -> u32 {
        self.rng.random_range(self.min..=self.max)
    }
    /// Uniform index into a non-empty collection of `n` items.
    pub fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        self.draw() as usize % n
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(0, crate::RAND_MAX)
    }
}

impl Iterator for Random {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}
