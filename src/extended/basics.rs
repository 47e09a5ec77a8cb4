use super::*;

/// Knuth's TwoSum: error-free addition. Returns `(s, e)` such that `s = fl(a + b)` and
/// `s + e = a + b` exactly (provided nothing overflows).
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let bb = s - a;
  let e = (a - (s - bb)) + (b - bb);
  (s, e)
}

/// As [`two_sum`], but only valid if `|a| ≥ |b|` (or `a` is 0). Three flops instead of six.
#[inline]
pub(crate) fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let e = b - (s - a);
  (s, e)
}

/// Error-free multiplication using a fused multiply-add. Returns `(p, e)` such that
/// `p = fl(a × b)` and `p + e = a × b` exactly (provided nothing overflows or underflows).
#[inline]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
  let p = a * b;
  let e = a.mul_add(b, -p);
  (p, e)
}

impl Extended {
  pub const ZERO: Self = Self { hi: 0., lo: 0. };
  pub const ONE: Self = Self { hi: 1., lo: 0. };
  pub const NAN: Self = Self { hi: f64::NAN, lo: 0. };
  pub const INFINITY: Self = Self { hi: f64::INFINITY, lo: 0. };
  pub const NEG_INFINITY: Self = Self { hi: f64::NEG_INFINITY, lo: 0. };

  /// ln(2), to double-double precision.
  pub const LN_2: Self = Self { hi: 6.931471805599452862e-01, lo: 2.319046813846299558e-17 };

  /// Number of significand bits: two `f64` significands.
  pub const MANTISSA_DIGITS: u32 = 2 * f64::MANTISSA_DIGITS;

  /// Number of decimal digits needed to round-trip any value, analogous to what C++ calls
  /// `max_digits10`: `⌈MANTISSA_DIGITS × log10(2)⌉ + 1`.
  pub const MAX_DIGITS10: u32 = 33;

  /// Build from two components, which must already be normalised (`hi == fl(hi + lo)`).
  ///
  /// If `hi` is not finite, `lo` is discarded, to maintain the invariant that non-finite values
  /// have `lo == 0`.
  #[inline]
  pub(crate) fn from_parts(hi: f64, lo: f64) -> Self {
    if hi.is_finite() {
      Self { hi, lo }
    } else {
      Self { hi, lo: 0. }
    }
  }

  /// Build from two arbitrary components, normalising them.
  #[inline]
  pub fn from_sum(a: f64, b: f64) -> Self {
    let (hi, lo) = two_sum(a, b);
    Self::from_parts(hi, lo)
  }

  /// The high (leading) component; this is also the value rounded to the nearest `f64`.
  #[inline]
  pub const fn hi(self) -> f64 {
    self.hi
  }

  /// The low (trailing) component.
  #[inline]
  pub const fn lo(self) -> f64 {
    self.lo
  }

  #[inline]
  pub fn is_finite(self) -> bool {
    self.hi.is_finite()
  }

  #[inline]
  pub fn is_nan(self) -> bool {
    self.hi.is_nan()
  }

  #[inline]
  pub fn is_infinite(self) -> bool {
    self.hi.is_infinite()
  }

  /// Exactly zero (of either sign). Note that a normalised value with `hi == 0` also has
  /// `lo == 0`.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.hi == 0.
  }

  #[inline]
  pub fn is_sign_negative(self) -> bool {
    self.hi.is_sign_negative()
  }

  /// Same as [`f64::classify`] on the leading component.
  #[inline]
  pub fn classify(self) -> core::num::FpCategory {
    self.hi.classify()
  }

  #[inline]
  pub fn abs(self) -> Self {
    if self.hi.is_sign_negative() { -self } else { self }
  }
}
