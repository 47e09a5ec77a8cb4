//! Parameters of an accuracy experiment.

use thiserror::Error;

/// What data to generate and how precise the reference must be.
///
/// The [`Default`] is the standard experiment: 1000 values uniformly distributed in `[0.8, 1.2[`,
/// a 256-bit reference, and seed 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Number of values to multiply.
  pub sample_count: usize,
  /// Values are drawn uniformly from `[min, max[`.
  pub value_range: (f64, f64),
  /// Significand precision of the reference product, in bits.
  pub reference_precision_bits: u64,
  /// Seed of the random generator; the same seed gives the same data and the same shuffle.
  pub seed: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      sample_count: 1000,
      value_range: (0.8, 1.2),
      reference_precision_bits: 256,
      seed: 1,
    }
  }
}

/// The ways in which a [`Config`] can be invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
  #[error("sample count must be at least 1")]
  NoSamples,

  #[error("value range [{min}, {max}) must be finite")]
  NonFiniteRange { min: f64, max: f64 },

  #[error("value range [{min}, {max}) must be strictly positive, for the logarithms to be defined")]
  NonPositiveRange { min: f64, max: f64 },

  #[error("value range [{min}, {max}) is empty or inverted")]
  EmptyRange { min: f64, max: f64 },

  #[error("reference precision must be at least 1 bit")]
  ZeroPrecision,
}

impl Config {
  /// Check that the experiment can run: there is at least one sample, the value range is a
  /// nonempty interval of finite, strictly positive numbers, and the reference has some
  /// precision.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let (min, max) = self.value_range;
    if self.sample_count == 0 {
      Err(ConfigError::NoSamples)
    } else if !min.is_finite() || !max.is_finite() {
      Err(ConfigError::NonFiniteRange { min, max })
    } else if min <= 0. {
      Err(ConfigError::NonPositiveRange { min, max })
    } else if min >= max {
      Err(ConfigError::EmptyRange { min, max })
    } else if self.reference_precision_bits == 0 {
      Err(ConfigError::ZeroPrecision)
    } else {
      Ok(())
    }
  }
}
