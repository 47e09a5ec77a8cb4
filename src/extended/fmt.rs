use super::*;

use core::fmt::Debug;

impl Debug for Extended {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Extended")
      .field(&format_args!("{:e}", self.hi))
      .field(&format_args!("{:+e}", self.lo))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug() {
    assert_eq!(
      format!("{:?}", Extended::ONE).as_str(),
      "Extended(1e0, +0e0)",
    );
    assert_eq!(
      format!("{:?}", Extended::from_sum(1., f64::powi(2., -60))).as_str(),
      "Extended(1e0, +8.673617379884035e-19)",
    );
    assert_eq!(
      format!("{:?}", Extended::NEG_INFINITY).as_str(),
      "Extended(-inf, +0e0)",
    );
  }
}
