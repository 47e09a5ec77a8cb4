//! Generation and shuffling of the sequences of values to multiply.
//!
//! Everything is driven by a single seeded [`ChaCha20Rng`] stream, so that a given seed
//! reproduces both the data and its permutation on every platform.

use rand::{Rng, SeedableRng};
use rand::distributions::Uniform;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::config::{Config, ConfigError};

/// A fresh generator for the experiment described by `config`.
pub fn rng(config: &Config) -> ChaCha20Rng {
  ChaCha20Rng::seed_from_u64(config.seed)
}

/// Draw `config.sample_count` values uniformly from `config.value_range`.
///
/// ```
/// # use product_accuracy::{Config, sample};
/// let config = Config::default();
/// let data = sample::generate(&config, &mut sample::rng(&config)).unwrap();
/// assert_eq!(data.len(), 1000);
/// assert!(data.iter().all(|x| (0.8 .. 1.2).contains(x)));
/// ```
pub fn generate(config: &Config, rng: &mut impl Rng) -> Result<Vec<f64>, ConfigError> {
  config.validate()?;
  let (min, max) = config.value_range;
  let distribution = Uniform::new(min, max);
  Ok((0 .. config.sample_count).map(|_| rng.sample(&distribution)).collect())
}

/// A copy of `data` in random order.
pub fn shuffled(data: &[f64], rng: &mut impl Rng) -> Vec<f64> {
  let mut copy = data.to_vec();
  copy.shuffle(rng);
  copy
}

/// Whether `a` and `b` hold the same values the same number of times, in any order. Values are
/// compared by bit pattern, so `0.` and `-0.` are distinct and a NaN matches itself.
pub fn is_permutation(a: &[f64], b: &[f64]) -> bool {
  if a.len() != b.len() {
    return false
  }
  let sorted_bits = |xs: &[f64]| {
    let mut bits = xs.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    bits.sort_unstable();
    bits
  };
  sorted_bits(a) == sorted_bits(b)
}
