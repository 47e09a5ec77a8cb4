//! Compensated (Kahan) summation of [`Extended`] values.
//!
//! Plain sequential addition accumulates one rounding error per term, and which errors occur
//! depends on the order of the terms. Kahan's algorithm carries a running correction `c`, the
//! part of the previous term that was lost when it was added to the sum, and feeds it back into
//! the next term. The accumulated error is then bounded by a small multiple of the machine epsilon
//! times `Σ|xᵢ|`, *independently of the number of terms*, instead of growing linearly with it.

use crate::Extended;

/// A running compensated sum.
///
/// Non-finite terms are ignored, as if they were not part of the sequence. If the running sum
/// itself overflows, the accumulator becomes *poisoned*: further terms are ignored and
/// [`total`](Self::total) is NaN.
///
/// ```
/// # use product_accuracy::{Extended, kahan::KahanSum};
/// let mut sum = KahanSum::new();
/// sum.add(Extended::from(1.));
/// sum.add(Extended::from(f64::NAN));  // Skipped
/// sum.add(Extended::from(2.));
/// assert_eq!(sum.total().to_f64(), 3.);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KahanSum {
  sum: Extended,
  c: Extended,
  poisoned: bool,
}

impl Default for KahanSum {
  fn default() -> Self {
    Self::new()
  }
}

impl KahanSum {
  pub const fn new() -> Self {
    Self { sum: Extended::ZERO, c: Extended::ZERO, poisoned: false }
  }

  /// Add a term. Returns `false` if the sum is poisoned (now or from before), in which case
  /// callers may stop feeding it.
  pub fn add(&mut self, x: Extended) -> bool {
    if self.poisoned {
      return false
    }
    if !x.is_finite() {
      return true
    }
    let y = x - self.c;
    let t = self.sum + y;
    if !t.is_finite() {
      self.poisoned = true;
      return false
    }
    // `t - sum` is what was actually added; subtracting `y` leaves what was lost (negated).
    self.c = (t - self.sum) - y;
    self.sum = t;
    true
  }

  pub fn is_poisoned(&self) -> bool {
    self.poisoned
  }

  /// The compensated sum so far, or NaN if poisoned.
  pub fn total(&self) -> Extended {
    if self.poisoned { Extended::NAN } else { self.sum }
  }
}

/// Sum `values` with Kahan's compensated summation.
///
///   - Non-finite values are skipped.
///   - If the running sum becomes non-finite, traversal stops and the result is NaN.
///   - The sum of no values is 0.
pub fn kahan_sum<I: IntoIterator<Item = Extended>>(values: I) -> Extended {
  let mut sum = KahanSum::new();
  for x in values {
    if !sum.add(x) { break }
  }
  sum.total()
}
