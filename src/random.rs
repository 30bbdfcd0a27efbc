//! Seeded random source construction.
//!
//! Every operation in this crate that draws randomness takes an explicit
//! `&mut impl Rng`. Nothing in the core reaches for an ambient or global
//! generator, so a run is fully determined by the RNG handed in at the top.
//! This module provides the one sanctioned constructor for that RNG.
//!
//! ChaCha8 is used because its output is identical across platforms and
//! word sizes, which keeps seeded regression tests stable.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Creates a deterministic RNG from a `u64` seed.
///
/// Two RNGs built from the same seed produce identical streams, so any
/// seeded run of the engine can be replayed exactly.
///
/// # Examples
///
/// ```
/// use rand::Rng;
///
/// let mut a = evosearch::random::create_rng(42);
/// let mut b = evosearch::random::create_rng(42);
/// assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
/// ```
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.random_range(0..u32::MAX), b.random_range(0..u32::MAX));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let xs: Vec<u32> = (0..16).map(|_| a.random_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.random_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
