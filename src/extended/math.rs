use super::*;

const SIG_BITS: u32 = f64::MANTISSA_DIGITS - 1;
const EXP_BIAS: i32 = f64::MAX_EXP - 1;
const EXP_MASK: u64 = 0x7ff << SIG_BITS;

/// Exact power of two `2^k`, for `k` in the normal exponent range `[-1022, 1023]`.
#[inline]
fn pow2(k: i32) -> f64 {
  debug_assert!((f64::MIN_EXP - 1 ..= f64::MAX_EXP - 1).contains(&k));
  f64::from_bits(((k + EXP_BIAS) as u64) << SIG_BITS)
}

/// Compute `x × 2^n`, the same as C's `scalbn`. The result is correctly rounded (only matters if
/// it is subnormal) and saturates to ±∞ or ±0.
pub(crate) fn scalbn(x: f64, mut n: i32) -> f64 {
  // Split `n` so that every individual factor is a normal power of two. In the underflow
  // direction, the intermediate is kept 53 bits above the subnormal range, so that the result is
  // rounded only once.
  let mut y = x;
  if n > 1023 {
    y *= pow2(1023);
    n -= 1023;
    if n > 1023 {
      y *= pow2(1023);
      n -= 1023;
      if n > 1023 { n = 1023 }
    }
  } else if n < -1022 {
    y *= pow2(-1022 + 53);
    n += 1022 - 53;
    if n < -1022 {
      y *= pow2(-1022 + 53);
      n += 1022 - 53;
      if n < -1022 { n = -1022 }
    }
  }
  y * pow2(n)
}

/// Split a positive finite `x` into `(m, e)` with `x = m × 2^e` and `m` in `[1, 2)`.
pub(crate) fn frexp(x: f64) -> (f64, i32) {
  debug_assert!(x > 0. && x.is_finite());
  let bits = x.to_bits();
  let biased = ((bits & EXP_MASK) >> SIG_BITS) as i32;
  if biased == 0 {
    // Subnormal: bring into the normal range first.
    let (m, e) = frexp(x * pow2(64));
    return (m, e - 64)
  }
  let m = f64::from_bits((bits & !EXP_MASK) | ((EXP_BIAS as u64) << SIG_BITS));
  (m, biased - EXP_BIAS)
}

impl Extended {
  /// `self × 2^n`, exact unless the result overflows or is subnormal.
  pub fn scale_pow2(self, n: i32) -> Self {
    let hi = scalbn(self.hi, n);
    if !hi.is_finite() || hi == 0. {
      return Self::from_parts(hi, 0.)
    }
    // Renormalise, in case the leading component lost bits to the subnormal range.
    Self::from_sum(hi, scalbn(self.lo, n))
  }

  /// The natural logarithm of a standard-precision `x`, to extended precision.
  ///
  ///   - `ln(NaN)` and `ln(x < 0)` are NaN.
  ///   - `ln(±0)` is -∞.
  ///   - `ln(+∞)` is +∞.
  pub fn ln(x: f64) -> Self {
    if x.is_nan() || x < 0. {
      return Self::NAN
    } else if x == 0. {
      return Self::NEG_INFINITY
    } else if x == f64::INFINITY {
      return Self::INFINITY
    }

    // Write `x = m × 2^e` with `m` in `[√½, √2[`, so that `ln x = ln m + e × ln 2` and `|ln m| ≤
    // ln(2) / 2`. Centring `m` around 1 avoids a cancellation between the two terms when `x` is
    // just below 1, which is precisely the regime of the products we care about.
    let (mut m, mut e) = frexp(x);
    if m > core::f64::consts::SQRT_2 {
      m /= 2.;
      e += 1;
    }

    // `ln m` is found by one Newton iteration on `f(y) = exp(y) - m`, starting from the f64
    // logarithm:
    //
    //   y₁ = y₀ - (exp(y₀) - m) / exp(y₀) = y₀ + m × exp(-y₀) - 1
    //
    // Newton converges quadratically, so one step takes the ~53 correct bits of `y₀` to ~106.
    let y0 = m.ln();
    let correction = Self::from(-y0).exp() * m - 1.;
    let ln_m = correction + y0;

    ln_m + Self::LN_2 * f64::from(e)
  }

  /// The exponential function, to extended precision.
  ///
  /// Overflows to +∞ when `self > ln(f64::MAX)`, underflows to 0 well below `ln(f64::MIN_POSITIVE
  /// × 2^-52)`. `exp(NaN)` is NaN.
  pub fn exp(self) -> Self {
    const OVERFLOW: f64 = 709.79;
    const UNDERFLOW: f64 = -745.2;
    // The reduced argument is further divided by `2^SQUARINGS` before the Taylor series.
    const SQUARINGS: u32 = 9;

    if self.is_nan() {
      return Self::NAN
    } else if self.hi > OVERFLOW {
      return Self::INFINITY
    } else if self.hi < UNDERFLOW {
      return Self::ZERO
    } else if self.is_zero() {
      return Self::ONE
    }

    // Argument reduction, in two stages:
    //
    //   1. `self = k × ln 2 + r`, with `|r| ≤ ln(2) / 2`, so that `exp(self) = 2^k × exp(r)`.
    //   2. `exp(r) = exp(r / 2^SQUARINGS)^(2^SQUARINGS)`, so that the Taylor series is evaluated on
    //      a tiny argument (≤ 7e-4) and converges in a handful of terms.
    let k = (self.hi / Self::LN_2.hi).round();
    let r = (self - Self::LN_2 * k).scale_pow2(-(SQUARINGS as i32));

    // Taylor series for `exp(r) - 1`. We keep the `- 1` around: squaring `1 + s` as
    // `s ← 2s + s²` does not lose the low-order bits of `s` to the leading 1.
    let mut s = r;
    let mut term = r;
    for n in 2 .. 20_u32 {
      term = term * r / f64::from(n);
      s += term;
      if term.hi.abs() <= s.hi.abs() * f64::powi(2., -110) { break }
    }
    for _ in 0 .. SQUARINGS {
      s = s * 2. + s * s;
    }

    (s + 1.).scale_pow2(k as i32)
  }
}
