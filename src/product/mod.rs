//! The two approximate algorithms for the product of a sequence of `f64`, both computed with an
//! [`Extended`] intermediate and narrowed to `f64` at the end.
//!
//! Neither function ever panics or returns an error: every failure mode is folded into the
//! returned `f64` (NaN for "undefined", ±∞ for overflow), so that they can be run over large
//! batches of data without aborting.

use crate::Extended;

/// Sequential multiplication.
mod naive;

/// Exponential of a compensated sum of logarithms.
mod log_sum_exp;

pub use naive::naive_product;
pub use log_sum_exp::log_sum_exp_product;

/// Narrow an extended precision result to standard precision.
///
///   - Finite values are rounded to the nearest `f64`.
///   - ±∞ maps to ±∞ (the sign is preserved).
///   - NaN maps to the canonical `f64::NAN`.
fn narrow(x: Extended) -> f64 {
  use core::num::FpCategory;
  match x.classify() {
    FpCategory::Normal | FpCategory::Subnormal | FpCategory::Zero => x.to_f64(),
    FpCategory::Infinite => if x.is_sign_negative() { f64::NEG_INFINITY } else { f64::INFINITY },
    FpCategory::Nan => f64::NAN,
  }
}
