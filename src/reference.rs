//! The ground truth against which the approximate methods are measured: the product computed in
//! arbitrary precision.
//!
//! The accumulator is an exact [`Rational`], but after every multiplication it is rounded to the
//! nearest value with a `precision_bits`-bit significand (ties to even), exactly as a binary
//! floating point number with that significand and an unbounded exponent would be. With the default
//! of 256 bits, the accumulated error over a few thousand factors stays some 190 bits below the
//! precision of an `f64`, so the result, [rounded](ReferenceProduct::to_f64) once to `f64`, is the
//! correctly rounded product in all but pathological cases.

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, Pow, PowerOf2, RoundToMultiple};
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::base::rounding_modes::RoundingMode;

/// The product of a sequence of `f64`, to `precision_bits` of significand. Obtained with
/// [`arbitrary_precision_product`].
///
/// The accumulator is owned by this value and released when it is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct ReferenceProduct {
  value: Rational,
  precision_bits: u64,
}

/// Multiply `data` sequentially, rounding to `precision_bits` of significand after every step.
///
///   - Non-finite values are skipped, as if they were not part of the sequence.
///   - The product of no values is 1.
///   - There is no overflow or underflow: the exponent range is unbounded.
///   - A `precision_bits` of 0 is taken as 1.
///
/// ```
/// # use product_accuracy::arbitrary_precision_product;
/// let product = arbitrary_precision_product(&[0.5, 0.5, 4.], 256);
/// assert_eq!(product.to_f64(), 1.);
/// ```
pub fn arbitrary_precision_product(data: &[f64], precision_bits: u64) -> ReferenceProduct {
  let precision_bits = precision_bits.max(1);
  let mut value = Rational::from(1);
  for &x in data {
    // Fails exactly for the non-finite values.
    let Ok(x) = Rational::try_from(x) else { continue };
    value *= x;
    value = round_to_precision(value, precision_bits);
  }
  ReferenceProduct { value, precision_bits }
}

/// `⌊log₂ |x|⌋`, for nonzero `x`.
fn floor_log2(x: &Rational) -> i64 {
  let numerator_bits = x.numerator_ref().significant_bits() as i64;
  let denominator_bits = x.denominator_ref().significant_bits() as i64;
  // With `n` and `d` significant bits, `|x|` lies in `]2^(n-d-1), 2^(n-d+1)[`.
  let guess = numerator_bits - denominator_bits;
  if x.abs() < Rational::power_of_2(guess) { guess - 1 } else { guess }
}

/// Round `x` to the nearest value with `precision_bits` significant bits, ties to even.
fn round_to_precision(x: Rational, precision_bits: u64) -> Rational {
  if x == Rational::from(0) {
    return x
  }
  let precision_bits = i64::try_from(precision_bits).unwrap_or(i64::MAX);
  // The weight of the last bit of the significand.
  let quantum = floor_log2(&x).saturating_sub(precision_bits).saturating_add(1);
  x.round_to_multiple(Rational::power_of_2(quantum), RoundingMode::Nearest).0
}

impl ReferenceProduct {
  /// Precision of the significand, in bits.
  pub fn precision_bits(&self) -> u64 {
    self.precision_bits
  }

  /// The exact value held.
  pub fn as_rational(&self) -> &Rational {
    &self.value
  }

  /// Round to the nearest `f64` (ties to even). Values beyond the range of `f64` round to ±∞ or
  /// ±0.
  pub fn to_f64(&self) -> f64 {
    // Halfway between `f64::MAX` and `2^1024`; a tie rounds up, as `f64::MAX` has an odd
    // significand.
    let overflow = Rational::power_of_2(1024_i64) - Rational::power_of_2(970_i64);
    if (&self.value).abs() >= overflow {
      return if self.value < Rational::from(0) { f64::NEG_INFINITY } else { f64::INFINITY }
    }
    f64::rounding_from(&self.value, RoundingMode::Nearest).0
  }

  /// The value in fixed-point decimal notation, with enough decimal places (`precision_bits / 3 +
  /// 10`) to show every bit of the significand of a value near 1.
  pub fn to_fixed_string(&self) -> String {
    self.to_fixed_string_with(self.precision_bits / 3 + 10)
  }

  /// The value in fixed-point decimal notation, rounded to `places` decimal places.
  pub fn to_fixed_string_with(&self, places: u64) -> String {
    let negative = self.value < Rational::from(0);
    let scale = Rational::pow(Rational::from(10), places as i64);
    let scaled = (&self.value).abs() * scale;
    let digits = scaled
      .round_to_multiple(Rational::from(1), RoundingMode::Nearest).0
      .into_numerator()
      .to_string();

    // Pad so that there is at least one digit before the point.
    let places = places as usize;
    let digits = if digits.len() <= places {
      format!("{}{digits}", "0".repeat(places + 1 - digits.len()))
    } else {
      digits
    };
    let (integer, fraction) = digits.split_at(digits.len() - places);

    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
      format!("{sign}{integer}")
    } else {
      format!("{sign}{integer}.{fraction}")
    }
  }
}

impl core::fmt::Display for ReferenceProduct {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.to_fixed_string())
  }
}

impl core::fmt::Debug for ReferenceProduct {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ReferenceProduct")
      .field("value", &format_args!("{:e}", self.to_f64()))
      .field("precision_bits", &self.precision_bits)
      .finish()
  }
}
