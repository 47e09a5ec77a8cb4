use super::*;
use super::basics::{two_sum, quick_two_sum, two_prod};

impl Extended {
  /// Accurate double-double addition (the "IEEE-style" variant, which keeps full relative
  /// precision even under heavy cancellation).
  pub(crate) fn add(self, other: Self) -> Self {
    // Add the leading and the trailing components separately, each with its exact error term,
    // and then fold everything back into a normalised pair:
    //
    //   (s1 + s2) = a.hi + b.hi   exactly
    //   (t1 + t2) = a.lo + b.lo   exactly
    //
    // The only rounding errors are in the two final renormalisations.
    let (s1, s2) = two_sum(self.hi, other.hi);
    if !s1.is_finite() {
      return Self::from_parts(s1, 0.)
    }
    let (t1, t2) = two_sum(self.lo, other.lo);
    let s2 = s2 + t1;
    let (s1, s2) = quick_two_sum(s1, s2);
    let s2 = s2 + t2;
    let (hi, lo) = quick_two_sum(s1, s2);
    if hi == 0. {
      // The renormalisation adds `+0` terms, which would turn `-0 + -0` into `+0`.
      return Self::from_parts(self.hi + other.hi, 0.)
    }
    Self::from_parts(hi, lo)
  }

  pub(crate) fn add_f64(self, other: f64) -> Self {
    let (s1, s2) = two_sum(self.hi, other);
    if !s1.is_finite() {
      return Self::from_parts(s1, 0.)
    }
    let s2 = s2 + self.lo;
    let (hi, lo) = quick_two_sum(s1, s2);
    if hi == 0. {
      return Self::from_parts(self.hi + other, 0.)
    }
    Self::from_parts(hi, lo)
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    // (a.hi + a.lo)(b.hi + b.lo) = a.hi·b.hi + (a.hi·b.lo + a.lo·b.hi) + a.lo·b.lo
    //
    // The first product is computed exactly with `two_prod`, the cross terms in plain `f64` (they
    // only contribute to the trailing component), and the last one is below the precision of the
    // result, so it is dropped.
    //
    // If the leading product overflows, the error term of `two_prod` is `inf - inf = NaN`; we must
    // short-circuit or an overflow to ±∞ would turn into a NaN.
    let (p1, p2) = two_prod(self.hi, other.hi);
    // A zero (exact or from underflow) keeps the sign of the product.
    if !p1.is_finite() || p1 == 0. {
      return Self::from_parts(p1, 0.)
    }
    let p2 = p2 + (self.hi * other.lo + self.lo * other.hi);
    let (hi, lo) = quick_two_sum(p1, p2);
    Self::from_parts(hi, lo)
  }

  pub(crate) fn mul_f64(self, other: f64) -> Self {
    let (p1, p2) = two_prod(self.hi, other);
    if !p1.is_finite() || p1 == 0. {
      return Self::from_parts(p1, 0.)
    }
    let p2 = p2 + self.lo * other;
    let (hi, lo) = quick_two_sum(p1, p2);
    Self::from_parts(hi, lo)
  }

  pub(crate) fn div_f64(self, other: f64) -> Self {
    // Long division: a first quotient `q1` in f64, then correct it with the exact remainder
    // `self - q1 × other`.
    let q1 = self.hi / other;
    if !q1.is_finite() || q1 == 0. {
      return Self::from_parts(q1, 0.)
    }
    let (p1, p2) = two_prod(q1, other);
    let (s, e) = two_sum(self.hi, -p1);
    let e = e - p2 + self.lo;
    let q2 = (s + e) / other;
    let (hi, lo) = quick_two_sum(q1, q2);
    Self::from_parts(hi, lo)
  }

  pub(crate) fn neg(self) -> Self {
    Self { hi: -self.hi, lo: -self.lo }
  }
}

/// Helper macro for implementing a binary operator and its assigning form, with `Rhs` either
/// `Extended` or `f64`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $rhs:ty, $method:ident) => {
    impl $trait<$rhs> for Extended {
      type Output = Extended;

      #[inline]
      fn $name(self, rhs: $rhs) -> Self::Output { self.$method(rhs) }
    }

    impl $trait_assign<$rhs> for Extended {
      #[inline]
      fn $name_assign(&mut self, rhs: $rhs) { *self = self.$method(rhs) }
    }
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg};

mk_ops!{Add, AddAssign, add, add_assign, Extended, add}
mk_ops!{Add, AddAssign, add, add_assign, f64, add_f64}
mk_ops!{Mul, MulAssign, mul, mul_assign, Extended, mul}
mk_ops!{Mul, MulAssign, mul, mul_assign, f64, mul_f64}
mk_ops!{Div, DivAssign, div, div_assign, f64, div_f64}

impl Sub<Extended> for Extended {
  type Output = Extended;

  #[inline]
  fn sub(self, rhs: Extended) -> Self::Output { self.add(rhs.neg()) }
}

impl SubAssign<Extended> for Extended {
  #[inline]
  fn sub_assign(&mut self, rhs: Extended) { *self = self.add(rhs.neg()) }
}

impl Sub<f64> for Extended {
  type Output = Extended;

  #[inline]
  fn sub(self, rhs: f64) -> Self::Output { self.add_f64(-rhs) }
}

impl SubAssign<f64> for Extended {
  #[inline]
  fn sub_assign(&mut self, rhs: f64) { *self = self.add_f64(-rhs) }
}

impl Neg for Extended {
  type Output = Extended;

  #[inline]
  fn neg(self) -> Self::Output { Extended::neg(self) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};
  use proptest::prelude::*;

  /// Aux function: the exact value of an `Extended` (which must be finite).
  fn exact(x: Extended) -> Rational {
    Rational::try_from(x).unwrap()
  }

  /// Aux function: `|computed - exact| / |exact|`, for `exact != 0`.
  fn relative_error(computed: Extended, exact_value: &Rational) -> Rational {
    ((exact(computed) - exact_value) / exact_value).abs()
  }

  /// Aux function: 2^-n as a rational.
  fn epsilon(n: i64) -> Rational {
    Rational::power_of_2(-n)
  }

  #[test]
  fn ops() {
    let mut a = Extended::ONE;
    let _ = a + a;
    let _ = a - a;
    let _ = a * a;
    let _ = a + 1.;
    let _ = a - 1.;
    let _ = a * 2.;
    let _ = a / 3.;
    let _ = -a;
    a += Extended::ONE;
    a -= Extended::ONE;
    a *= Extended::ONE;
    a += 1.;
    a -= 1.;
    a *= 2.;
    a /= 2.;
    assert_eq!(a.hi(), 1.);
    assert_eq!(a.lo(), 0.);
  }

  #[test]
  fn cancellation() {
    // 1 + 2^-80 cannot be held by an f64, but can by an Extended; subtracting 1 recovers 2^-80.
    let tiny = f64::powi(2., -80);
    let x = Extended::ONE + tiny;
    assert_eq!(x.hi(), 1.);
    assert_eq!(x.lo(), tiny);
    let y = x - Extended::ONE;
    assert_eq!(y.hi(), tiny);
    assert_eq!(y.lo(), 0.);
  }

  #[test]
  fn one_third() {
    let third = Extended::ONE / 3.;
    let back = third * 3.;
    assert_eq!(back.hi(), 1.);
    assert!(back.lo().abs() <= f64::powi(2., -104));
  }

  #[test]
  fn overflow_is_infinite_not_nan() {
    let big = Extended::from(f64::MAX);
    assert_eq!((big * 2.).hi(), f64::INFINITY);
    assert_eq!((big * -2.).hi(), f64::NEG_INFINITY);
    assert_eq!((big * big).hi(), f64::INFINITY);
    assert_eq!((big + big).hi(), f64::INFINITY);
    assert_eq!((-big - big).hi(), f64::NEG_INFINITY);
    assert_eq!((big / 0.5).hi(), f64::INFINITY);
  }

  #[test]
  fn nan_propagates() {
    assert!((Extended::NAN + Extended::ONE).is_nan());
    assert!((Extended::NAN * 2.).is_nan());
    assert!((Extended::INFINITY - Extended::INFINITY).is_nan());
    assert!((Extended::INFINITY * 0.).is_nan());
  }

  #[test]
  fn zero_sign() {
    let neg_zero = -Extended::ZERO;
    assert!((Extended::from(-1.) * 0.).hi().is_sign_negative());
    assert!((Extended::from(-1.) * Extended::ZERO).hi().is_sign_negative());
    assert!((neg_zero * neg_zero).hi().is_sign_positive());
    assert!((Extended::from(-1e-200) * 1e-200).hi().is_sign_negative());
    assert!((neg_zero / 3.).hi().is_sign_negative());
    assert!((neg_zero + neg_zero).hi().is_sign_negative());
    assert!((neg_zero + -0.).hi().is_sign_negative());
    assert!((neg_zero + Extended::ZERO).hi().is_sign_positive());
    assert!((Extended::ONE - Extended::ONE).hi().is_sign_positive());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn add_is_accurate(a in crate::test::extended_moderate(), b in crate::test::extended_moderate()) {
      let sum = exact(a) + exact(b);
      // Under cancellation the bound is relative to the larger operand, not to the result.
      let scale = exact(a.abs()).max(exact(b.abs()));
      let error = (exact(a + b) - sum).abs();
      prop_assert!(error <= scale * epsilon(104), "{a:?} + {b:?}");
    }

    #[test]
    fn mul_is_accurate(a in crate::test::extended_moderate(), b in crate::test::extended_moderate()) {
      let product = exact(a) * exact(b);
      prop_assert!(relative_error(a * b, &product) <= epsilon(102), "{a:?} × {b:?}");
    }

    #[test]
    fn mul_f64_is_accurate(a in crate::test::extended_moderate(), b in crate::test::positive_f64()) {
      let product = exact(a) * Rational::try_from(b).unwrap();
      prop_assert!(relative_error(a * b, &product) <= epsilon(103), "{a:?} × {b:e}");
    }

    #[test]
    fn div_f64_is_accurate(a in crate::test::extended_moderate(), b in crate::test::positive_f64()) {
      let quotient = exact(a) / Rational::try_from(b).unwrap();
      prop_assert!(relative_error(a / b, &quotient) <= epsilon(102), "{a:?} / {b:e}");
    }
  }
}
