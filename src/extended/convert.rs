use super::*;

use malachite::rational::Rational;

impl From<f64> for Extended {
  /// Exact: every `f64` is an `Extended` with a zero trailing component.
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_parts(value, 0.)
  }
}

impl Extended {
  /// Round to the nearest `f64`.
  ///
  /// Since `self` is normalised, this is just `hi`: `hi + lo` rounds to `hi` by definition. A zero
  /// keeps its sign, and non-finite values map to themselves: ±∞ to ±∞, NaN to NaN.
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.hi
  }
}

/// The error type returned when an [`Extended`] cannot be converted to a [`Rational`] because it
/// is infinite or NaN.
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NotFinite;

impl TryFrom<Extended> for Rational {
  type Error = NotFinite;

  /// The exact value `hi + lo`.
  fn try_from(value: Extended) -> Result<Self, Self::Error> {
    let hi = Rational::try_from(value.hi).map_err(|_| NotFinite)?;
    let lo = Rational::try_from(value.lo).map_err(|_| NotFinite)?;
    Ok(hi + lo)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_f64() {
    for x in [0., -0., 1., -2.5, f64::MAX, f64::MIN_POSITIVE, f64::from_bits(1)] {
      let e = Extended::from(x);
      assert_eq!(e.hi().to_bits(), x.to_bits());
      assert_eq!(e.lo(), 0.);
      assert_eq!(e.to_f64().to_bits(), x.to_bits());
    }
  }

  #[test]
  fn to_f64_keeps_zero_sign() {
    assert!(Extended::from(-0.).to_f64().is_sign_negative());
    assert!(Extended::from(0.).to_f64().is_sign_positive());
    assert!((-Extended::ZERO).to_f64().is_sign_negative());
  }

  #[test]
  fn to_f64_special() {
    assert_eq!(Extended::INFINITY.to_f64(), f64::INFINITY);
    assert_eq!(Extended::NEG_INFINITY.to_f64(), f64::NEG_INFINITY);
    assert!(Extended::NAN.to_f64().is_nan());
  }

  #[test]
  fn to_rational() {
    use malachite::base::num::arithmetic::traits::PowerOf2;
    let x = Extended::ONE + f64::powi(2., -80);
    assert_eq!(
      Rational::try_from(x),
      Ok(Rational::from(1) + Rational::power_of_2(-80_i64)),
    );
    assert_eq!(Rational::try_from(Extended::from(0.75)), Ok(Rational::from_signeds(3, 4)));
    assert_eq!(Rational::try_from(Extended::NAN), Err(NotFinite));
    assert_eq!(Rational::try_from(Extended::INFINITY), Err(NotFinite));
  }
}
