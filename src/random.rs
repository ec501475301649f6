//! Randomness handle injected into the data generator and the perceptron.

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// The two draws the algorithms need. Implemented for every [`rand::Rng`],
/// so a seeded `StdRng` gives deterministic tests and `StdRng::from_entropy()`
/// gives fresh randomness per instance.
pub trait RandomSource {
    /// Uniform draw in the closed interval `[low, high]`.
    fn uniform<F>(&mut self, low: F, high: F) -> F
    where
        F: Float + SampleUniform;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform<F>(&mut self, low: F, high: F) -> F
    where
        F: Float + SampleUniform,
    {
        self.gen_range(low..=high)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Hands out one independently seeded generator per data generator / perceptron.
///
/// Without a seed every generator is seeded from system entropy. With a seed the
/// whole sequence of generators is reproducible.
#[derive(Debug)]
pub struct RngFactory {
    master: Option<StdRng>,
}

impl RngFactory {
    pub fn new(seed: Option<u64>) -> Self {
        RngFactory {
            master: seed.map(StdRng::seed_from_u64),
        }
    }

    pub fn fresh(&mut self) -> StdRng {
        match self.master.as_mut() {
            Some(master) => StdRng::seed_from_u64(master.next_u64()),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_closed_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x: f64 = rng.uniform(-1.0, 1.0);
            assert!((-1.0..=1.0).contains(&x), "draw {} escaped [-1, 1]", x);
        }
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..20 {
            assert!(rng.pick_index(len) < len);
        }
    }

    #[test]
    fn test_seeded_factory_is_reproducible() {
        let mut a = RngFactory::new(Some(42));
        let mut b = RngFactory::new(Some(42));
        for _ in 0..5 {
            assert_eq!(a.fresh().next_u64(), b.fresh().next_u64());
        }
    }

    #[test]
    fn test_seeded_factory_hands_out_distinct_streams() {
        let mut factory = RngFactory::new(Some(42));
        let first = factory.fresh().next_u64();
        let second = factory.fresh().next_u64();
        assert_ne!(first, second);
    }
}
