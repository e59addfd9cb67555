//! Randomness abstraction for shuffling and distractor selection.
//!
//! The session randomizer only ever needs "an unbiased integer below N", so
//! that is the whole trait. Both backends reject-sample a 32-bit draw
//! instead of taking a plain modulo, which would skew the distribution
//! whenever `max` does not divide 2^32.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Source of unbiased random integers, injected into the session randomizer.
pub trait RandomSource {
    /// Uniform integer in `[0, max)`. Returns 0 when `max <= 1`.
    fn below(&mut self, max: usize) -> usize;
}

/// Rejection-sample `[0, max)` from repeated 32-bit draws.
fn sample_below<R: RngCore>(rng: &mut R, max: usize) -> usize {
    if max <= 1 {
        return 0;
    }
    debug_assert!(max <= u32::MAX as usize);
    let max = max as u64;
    // Largest multiple of `max` not above 2^32; draws at or past it are
    // biased and get rediscarded. Kept in u64: for a power-of-two `max`
    // the limit is exactly 2^32, which does not fit in u32.
    let limit = (0x1_0000_0000u64 / max) * max;
    loop {
        let value = rng.next_u32() as u64;
        if value < limit {
            return (value % max) as usize;
        }
    }
}

/// Cryptographically strong backend over the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn below(&mut self, max: usize) -> usize {
        sample_below(&mut OsRng, max)
    }
}

/// Deterministic pseudo-random backend. Seed it for reproducible sessions
/// (tests, replays); statistically acceptable as a fallback for platforms
/// without an OS entropy source.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        SeededRandom { rng: StdRng::from_entropy() }
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, max: usize) -> usize {
        sample_below(&mut self.rng, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_zero_and_one_return_zero() {
        let mut rng = SeededRandom::new(7);
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(1), 0);
        assert_eq!(OsRandom.below(1), 0);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = SeededRandom::new(42);
        for max in [2usize, 3, 4, 7, 10, 100] {
            for _ in 0..200 {
                assert!(rng.below(max) < max);
            }
        }
        for _ in 0..50 {
            assert!(OsRandom.below(4) < 4);
        }
    }

    #[test]
    fn seeded_backend_is_deterministic() {
        let draw = |seed: u64| -> Vec<usize> {
            let mut rng = SeededRandom::new(seed);
            (0..20).map(|_| rng.below(10)).collect()
        };
        assert_eq!(draw(99), draw(99));
        assert_ne!(draw(99), draw(100));
    }

    #[test]
    fn distribution_is_roughly_uniform() {
        let mut rng = SeededRandom::new(1234);
        let mut counts = [0usize; 4];
        let trials = 40_000;
        for _ in 0..trials {
            counts[rng.below(4)] += 1;
        }
        // Each bucket expects 10_000; allow a generous 10% band.
        for (i, count) in counts.iter().enumerate() {
            assert!(
                (9_000..=11_000).contains(count),
                "bucket {i} count {count} outside uniform band"
            );
        }
    }
}
