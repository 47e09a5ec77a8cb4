use super::*;

/// The product of `data`, by multiplying every value in order into an [`Extended`] accumulator,
/// then rounding to `f64`.
///
///   - The product of no values is 1.
///   - Once the accumulator is no longer finite, the remaining values are not multiplied in. In
///     particular, a product that has overflowed to ±∞ stays ±∞ even if a 0 comes later.
///   - An overflow gives ±∞ with the sign of the product so far; a NaN anywhere gives NaN.
///
/// ```
/// # use product_accuracy::naive_product;
/// assert_eq!(naive_product(&[]), 1.);
/// assert_eq!(naive_product(&[0.5, 0.5, 4.]), 1.);
/// assert_eq!(naive_product(&[f64::MAX, 2., 0.]), f64::INFINITY);
/// ```
pub fn naive_product(data: &[f64]) -> f64 {
  let mut acc = Extended::ONE;
  for &x in data {
    acc *= x;
    if !acc.is_finite() { break }
  }
  narrow(acc)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ulp_distance, arbitrary_precision_product};
  use proptest::prelude::*;

  #[test]
  fn empty() {
    assert_eq!(naive_product(&[]), 1.);
  }

  #[test]
  fn exact() {
    assert_eq!(naive_product(&[2.]), 2.);
    assert_eq!(naive_product(&[0.5, 0.5, 4.]), 1.);
    assert_eq!(naive_product(&[-3., 0.25, 2.]), -1.5);
    assert_eq!(naive_product(&[1e10, 0.]), 0.);
  }

  #[test]
  fn zero_keeps_sign() {
    assert!(naive_product(&[-1., 0.]).is_sign_negative());
    assert!(naive_product(&[0., -1.]).is_sign_negative());
    assert!(naive_product(&[-1., -0.]).is_sign_positive());
    // Underflow to zero, as sequential f64 multiplication would.
    let underflow = naive_product(&[-2., 1e-200, 1e-200]);
    assert_eq!(underflow, 0.);
    assert!(underflow.is_sign_negative());
    assert_eq!(underflow.to_bits(), (-2. * 1e-200 * 1e-200_f64).to_bits());
  }

  #[test]
  fn overflow_keeps_sign() {
    assert_eq!(naive_product(&[f64::MAX, 2.]), f64::INFINITY);
    assert_eq!(naive_product(&[-f64::MAX, 2.]), f64::NEG_INFINITY);
    assert_eq!(naive_product(&[f64::MAX, -2., 3.]), f64::NEG_INFINITY);
  }

  #[test]
  fn overflow_is_not_rescued_by_zero() {
    // Infinity × 0 would be NaN, but we stopped multiplying at the infinity.
    assert_eq!(naive_product(&[f64::MAX, 2., 0.]), f64::INFINITY);
    assert_eq!(naive_product(&[f64::INFINITY, 0.]), f64::INFINITY);
  }

  #[test]
  fn nan() {
    assert!(naive_product(&[1., f64::NAN, 2.]).is_nan());
    assert!(naive_product(&[f64::INFINITY, f64::NAN]).is_infinite());
  }

  #[test]
  fn underflow() {
    assert_eq!(naive_product(&[1e-200, 1e-200]), 0.);
    let tiny = naive_product(&[1e-160, 1e-160]);
    assert!(tiny > 0. && tiny < f64::MIN_POSITIVE);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn close_to_reference(data in crate::test::samples_near_one(1 .. 500)) {
      let naive = naive_product(&data);
      let reference = arbitrary_precision_product(&data, 256).to_f64();
      prop_assert!(naive.is_finite());
      prop_assert!(ulp_distance(naive, reference) <= 1, "{naive:e} vs {reference:e}");
    }

    #[test]
    fn wide_range_close_to_reference(data in crate::test::samples_wide(1 .. 20)) {
      let naive = naive_product(&data);
      let reference = arbitrary_precision_product(&data, 256).to_f64();
      prop_assert!(ulp_distance(naive, reference) <= 1, "{naive:e} vs {reference:e}");
    }
  }
}
