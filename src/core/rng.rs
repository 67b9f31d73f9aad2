//! Seedable random number generation for the opponent's fallback move.
//!
//! ```
//! use prime_race::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(a.gen_range_inclusive(1, 5), b.gen_range_inclusive(1, 5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create a seeded RNG, or an entropy-seeded one when `seed` is `None`.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `low..=high`.
    pub fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_inclusive(1, 5), rng2.gen_range_inclusive(1, 5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_range_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_range_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..500 {
            let v = rng.gen_range_inclusive(1, 5);
            assert!((1..=5).contains(&v));
            seen[v as usize] = true;
        }

        // Every face of 1..=5 shows up in 500 draws
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_seed_option() {
        assert_eq!(GameRng::from_seed_option(Some(9)).seed(), 9);
        let _ = GameRng::from_seed_option(None);
    }
}
