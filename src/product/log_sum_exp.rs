use super::*;

use crate::kahan::kahan_sum;

/// The product of `data`, computed as `exp(Σ ln xᵢ)`, where the logarithms and the exponential
/// are evaluated in [`Extended`] precision and the sum is [compensated](crate::kahan).
///
/// A product of many values near 1 accumulates one relative rounding error per multiplication,
/// and which errors occur depends on the order of the factors. Taking logarithms turns the product
/// into a sum, where compensated summation keeps the error small and nearly independent of the
/// order; the final exponential adds a single rounding step.
///
///   - Every value must be strictly positive: any value `≤ 0` (or NaN) gives NaN.
///   - A value whose logarithm is not finite (i.e. +∞) gives NaN.
///   - Overflow gives +∞, underflow gives 0.
///   - The product of no values is 1.
///
/// ```
/// # use product_accuracy::log_sum_exp_product;
/// assert_eq!(log_sum_exp_product(&[2., 0.5]), 1.);
/// assert!(log_sum_exp_product(&[1., -0.5, 2.]).is_nan());
/// ```
pub fn log_sum_exp_product(data: &[f64]) -> f64 {
  let logs = data.iter().map(|&x| {
    // Written so that NaN also fails the test.
    if !(x > 0.) {
      return None
    }
    let ln = Extended::ln(x);
    ln.is_finite().then_some(ln)
  }).collect::<Option<Vec<_>>>();
  let Some(logs) = logs else { return f64::NAN };

  let sum = kahan_sum(logs);
  if !sum.is_finite() {
    return f64::NAN
  }

  let result = sum.exp();
  if result.is_zero() {
    0.
  } else {
    narrow(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ulp_distance, arbitrary_precision_product};
  use proptest::prelude::*;

  #[test]
  fn empty() {
    assert_eq!(log_sum_exp_product(&[]), 1.);
  }

  #[test]
  fn reciprocal_pair() {
    let result = log_sum_exp_product(&[2., 0.5]);
    assert!(ulp_distance(result, 1.) <= 2, "{result:e}");
  }

  #[test]
  fn known_products() {
    for (data, exact) in [
      (&[0.5, 0.5, 4.][..], 1.),
      (&[3.][..], 3.),
      (&[10., 10., 10.][..], 1000.),
      (&[1.25, 0.8][..], 1.),
      (&[0.125; 8][..], f64::powi(2., -24)),
    ] {
      let result = log_sum_exp_product(data);
      assert!(ulp_distance(result, exact) <= 2, "{data:?}: {result:e} vs {exact:e}");
    }
  }

  #[test]
  fn non_positive_is_nan() {
    assert!(log_sum_exp_product(&[1., -0.5, 2.]).is_nan());
    assert!(log_sum_exp_product(&[0.]).is_nan());
    assert!(log_sum_exp_product(&[-0.]).is_nan());
    assert!(log_sum_exp_product(&[2., 3., -1e-300]).is_nan());
  }

  #[test]
  fn non_finite_is_nan() {
    assert!(log_sum_exp_product(&[f64::NAN]).is_nan());
    assert!(log_sum_exp_product(&[1., f64::INFINITY]).is_nan());
  }

  #[test]
  fn overflow_and_underflow() {
    assert_eq!(log_sum_exp_product(&[1e200, 1e200]), f64::INFINITY);
    assert_eq!(log_sum_exp_product(&[1e-200, 1e-200]), 0.);
  }

  #[test]
  fn subnormal_inputs() {
    let tiny = f64::from_bits(1);
    let result = log_sum_exp_product(&[tiny, 2f64.powi(1000)]);
    let exact = 2f64.powi(-74);
    assert!(ulp_distance(result, exact) <= 2, "{result:e} vs {exact:e}");
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn close_to_reference(data in crate::test::samples_near_one(1 .. 500)) {
      let result = log_sum_exp_product(&data);
      let reference = arbitrary_precision_product(&data, 256).to_f64();
      prop_assert!(result.is_finite());
      prop_assert!(ulp_distance(result, reference) <= 2, "{result:e} vs {reference:e}");
    }

    #[test]
    fn wide_range_close_to_reference(data in crate::test::samples_wide(1 .. 20)) {
      let result = log_sum_exp_product(&data);
      let reference = arbitrary_precision_product(&data, 256).to_f64();
      prop_assert!(ulp_distance(result, reference) <= 2, "{result:e} vs {reference:e}");
    }

    #[test]
    fn reversal_barely_matters(data in crate::test::samples_near_one(1 .. 500)) {
      let forward = log_sum_exp_product(&data);
      let reversed = data.iter().rev().copied().collect::<Vec<_>>();
      let backward = log_sum_exp_product(&reversed);
      prop_assert!(ulp_distance(forward, backward) <= 1, "{forward:e} vs {backward:e}");
    }
  }
}
