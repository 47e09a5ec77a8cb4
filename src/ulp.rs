//! Distance between two `f64`, in units in the last place.
//!
//! For two finite values of the same sign, the IEEE 754 bit patterns, read as integers, are
//! ordered the same way as the values themselves, and adjacent values differ by exactly 1. So the
//! number of representable values between `a` and `b` is simply the difference of their bit
//! patterns, regardless of binade.

/// Returned by [`ulp_distance`] when the two values cannot be meaningfully compared.
pub const INCOMPARABLE: u64 = u64::MAX;

/// The number of representable `f64` steps between `a` and `b`.
///
/// The first matching rule applies:
///
///   - If either is NaN, the values are [`INCOMPARABLE`].
///   - If either is infinite, the distance is 0 if they are equal, otherwise [`INCOMPARABLE`].
///   - If both are zero, of any sign, the distance is 0.
///   - If the signs differ, the values are [`INCOMPARABLE`].
///   - Otherwise, the distance is the difference between their bit patterns.
///
/// The distance is symmetric.
///
/// ```
/// # use product_accuracy::ulp::{ulp_distance, INCOMPARABLE};
/// assert_eq!(ulp_distance(1., 1.), 0);
/// assert_eq!(ulp_distance(1., 1. + f64::EPSILON), 1);
/// assert_eq!(ulp_distance(0., -0.), 0);
/// assert_eq!(ulp_distance(f64::NAN, 1.), INCOMPARABLE);
/// ```
pub fn ulp_distance(a: f64, b: f64) -> u64 {
  if a.is_nan() || b.is_nan() {
    return INCOMPARABLE
  }
  if a.is_infinite() || b.is_infinite() {
    return if a == b { 0 } else { INCOMPARABLE }
  }
  if a == 0. && b == 0. {
    return 0
  }
  if a.is_sign_negative() != b.is_sign_negative() {
    return INCOMPARABLE
  }
  a.to_bits().abs_diff(b.to_bits())
}
