use thiserror::Error;

use crate::config::ConfigError;

/// The error type returned by [`experiment::run`](crate::experiment::run).
///
/// The numeric kernels themselves never fail: every failure mode is folded into their `f64`
/// result (NaN or ±∞).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  #[error("invalid configuration: {0}")]
  Config(#[from] ConfigError),

  /// The shuffled sequence is not a rearrangement of the original one, so comparing the results
  /// computed on them says nothing about order dependence.
  #[error("shuffled sequence of {shuffled} values is not a permutation of the original {original} values")]
  NotAPermutation { original: usize, shuffled: usize },
}
