//! The accuracy experiment: generate a sequence, compute its product with every method, in the
//! original order and shuffled, and compare.

use core::fmt;

use crate::{
  Config,
  Error,
  Extended,
  ReferenceProduct,
  arbitrary_precision_product,
  log_sum_exp_product,
  naive_product,
  sample,
  ulp::{INCOMPARABLE, ulp_distance},
};

/// Significand width of a floating point format, as reported in the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionTier {
  pub name: &'static str,
  /// Significand bits, including the implicit one.
  pub mantissa_digits: u32,
  /// Decimal digits needed to round-trip any value.
  pub max_digits10: u32,
}

impl PrecisionTier {
  pub const STANDARD: Self = Self {
    name: "f64",
    mantissa_digits: f64::MANTISSA_DIGITS,
    max_digits10: 17,
  };

  pub const EXTENDED: Self = Self {
    name: "Extended",
    mantissa_digits: Extended::MANTISSA_DIGITS,
    max_digits10: Extended::MAX_DIGITS10,
  };
}

/// The results of every method on one ordering of the data, and their distance to the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
  pub naive: f64,
  pub log_sum_exp: f64,
  /// The reference, rounded to `f64`.
  pub reference: f64,
  pub naive_ulps: u64,
  pub log_sum_exp_ulps: u64,
}

impl Comparison {
  fn new(data: &[f64], reference: f64) -> Self {
    let naive = naive_product(data);
    let log_sum_exp = log_sum_exp_product(data);
    Self {
      naive,
      log_sum_exp,
      reference,
      naive_ulps: ulp_distance(naive, reference),
      log_sum_exp_ulps: ulp_distance(log_sum_exp, reference),
    }
  }
}

/// Whether a method gives the same result on the shuffled data as on the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PermutationCheck {
  Unchanged,
  Changed { ulps: u64, original: f64, shuffled: f64 },
}

impl PermutationCheck {
  fn new(original: f64, shuffled: f64) -> Self {
    match ulp_distance(original, shuffled) {
      0 => Self::Unchanged,
      ulps => Self::Changed { ulps, original, shuffled },
    }
  }

  pub fn is_unchanged(&self) -> bool {
    matches!(self, Self::Unchanged)
  }
}

/// Everything an experiment measured. The [`Display`](fmt::Display) implementation renders it as
/// a human-readable report.
#[derive(Debug, Clone)]
pub struct Report {
  pub config: Config,
  pub standard: PrecisionTier,
  pub extended: PrecisionTier,
  pub reference: ReferenceProduct,
  pub original: Comparison,
  pub shuffled: Comparison,
  pub naive_permutation: PermutationCheck,
  pub log_sum_exp_permutation: PermutationCheck,
}

impl Report {
  /// Whether intermediate computations are carried out with more significand bits than the
  /// results. If not, the extended methods cannot be expected to beat plain `f64`.
  pub fn extended_is_wider(&self) -> bool {
    self.extended.mantissa_digits > self.standard.mantissa_digits
  }
}

/// Run the experiment described by `config`.
///
/// The reference is computed once, on the original order, and used for both orders: the exact
/// product does not depend on the order, and at the reference precision neither does its
/// rounding to `f64`, in practice.
pub fn run(config: &Config) -> Result<Report, Error> {
  let mut rng = sample::rng(config);
  let data = sample::generate(config, &mut rng)?;
  tracing::debug!(count = data.len(), seed = config.seed, "generated sample");

  let reference = arbitrary_precision_product(&data, config.reference_precision_bits);
  let reference_f64 = reference.to_f64();
  tracing::debug!(reference = reference_f64, bits = reference.precision_bits(), "computed reference");

  let original = Comparison::new(&data, reference_f64);
  tracing::debug!(?original, "original order");

  let shuffled_data = sample::shuffled(&data, &mut rng);
  if !sample::is_permutation(&data, &shuffled_data) {
    return Err(Error::NotAPermutation { original: data.len(), shuffled: shuffled_data.len() })
  }
  tracing::trace!("shuffled data is a permutation of the original");

  let shuffled = Comparison::new(&shuffled_data, reference_f64);
  tracing::debug!(?shuffled, "shuffled order");

  let naive_permutation = PermutationCheck::new(original.naive, shuffled.naive);
  let log_sum_exp_permutation = PermutationCheck::new(original.log_sum_exp, shuffled.log_sum_exp);
  tracing::debug!(?naive_permutation, ?log_sum_exp_permutation, "permutation invariance");

  let report = Report {
    config: config.clone(),
    standard: PrecisionTier::STANDARD,
    extended: PrecisionTier::EXTENDED,
    reference,
    original,
    shuffled,
    naive_permutation,
    log_sum_exp_permutation,
  };
  if !report.extended_is_wider() {
    tracing::warn!("extended precision is not wider than standard precision");
  }
  Ok(report)
}

/// Digits after the point when printing `f64` results.
const DIGITS: usize = PrecisionTier::STANDARD.max_digits10 as usize;

struct Ulps(u64);

impl fmt::Display for Ulps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0 == INCOMPARABLE { f.write_str("incomparable") } else { write!(f, "{}", self.0) }
  }
}

impl Report {
  fn fmt_tier(f: &mut fmt::Formatter<'_>, tier: &PrecisionTier) -> fmt::Result {
    writeln!(
      f,
      "{} precision: {} significand bits ({} significant decimal digits)",
      tier.name, tier.mantissa_digits, tier.max_digits10,
    )
  }

  fn fmt_comparison(&self, f: &mut fmt::Formatter<'_>, label: &str, comparison: &Comparison) -> fmt::Result {
    writeln!(f, "[{label}]")?;
    writeln!(f, "  Naive product:           {:.DIGITS$}", comparison.naive)?;
    writeln!(f, "  Log-sum-exp product:     {:.DIGITS$}", comparison.log_sum_exp)?;
    writeln!(f, "  Reference (f64):         {:.DIGITS$}", comparison.reference)?;
    writeln!(f, "  Reference (full):        {}", self.reference)?;
    writeln!(f, "--- Accuracy ({label}) ---")?;
    writeln!(f, "  ULPs (naive vs reference):       {}", Ulps(comparison.naive_ulps))?;
    writeln!(f, "  ULPs (log-sum-exp vs reference): {}", Ulps(comparison.log_sum_exp_ulps))
  }

  fn fmt_permutation(f: &mut fmt::Formatter<'_>, label: &str, check: &PermutationCheck) -> fmt::Result {
    match check {
      PermutationCheck::Unchanged => writeln!(f, "{label}: unchanged by the permutation"),
      PermutationCheck::Changed { ulps, original, shuffled } => {
        writeln!(f, "{label}: changed by the permutation")?;
        writeln!(f, "  ULPs:     {}", Ulps(*ulps))?;
        writeln!(f, "  Original: {original:.DIGITS$}")?;
        writeln!(f, "  Shuffled: {shuffled:.DIGITS$}")
      },
    }
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Self::fmt_tier(f, &self.standard)?;
    Self::fmt_tier(f, &self.extended)?;
    if !self.extended_is_wider() {
      writeln!(f, "*** Warning: {} is not wider than {}; no accuracy gain is to be expected. ***",
        self.extended.name, self.standard.name)?;
    }
    writeln!(f)?;

    let (min, max) = self.config.value_range;
    writeln!(f, "--- Product accuracy comparison ---")?;
    writeln!(f, "Sample count: {}", self.config.sample_count)?;
    writeln!(f, "Value range: [{min:.DIGITS$}, {max:.DIGITS$})")?;
    writeln!(f, "Reference precision: {} bits", self.config.reference_precision_bits)?;
    writeln!(f, "Seed: {}", self.config.seed)?;
    writeln!(f)?;

    writeln!(f, "--- Original order ---")?;
    self.fmt_comparison(f, "Original order", &self.original)?;
    writeln!(f)?;
    writeln!(f, "--- Shuffled order ---")?;
    self.fmt_comparison(f, "Shuffled order", &self.shuffled)?;
    writeln!(f)?;

    writeln!(f, "--- Permutation invariance ---")?;
    Self::fmt_permutation(f, "Naive product", &self.naive_permutation)?;
    Self::fmt_permutation(f, "Log-sum-exp product", &self.log_sum_exp_permutation)
  }
}
