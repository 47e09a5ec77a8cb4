//! This module and its submodules contain a software implementation of the *extended precision*
//! tier used for intermediate computations: a "double-double" number, i.e. the unevaluated sum of
//! two `f64`.
//!
//! Rust has no stable floating point type wider than `f64` (no `long double`, and `f128` is
//! nightly-only and has no `ln`/`exp`), so we build one. The representation gives a 106-bit
//! significand, roughly 32 significant decimal digits, but the same exponent range as an `f64`:
//! overflow and underflow happen at exactly the same magnitudes as in standard precision.
//!
//! The algorithms are the classic ones from Hida, Li, and Bailey, *Library for Double-Double and
//! Quad-Double Arithmetic* (2001), built on top of the error-free transformations
//! [`two_sum`](basics::two_sum) and [`two_prod`](basics::two_prod).
//!
//! Some notation used in the comments:
//!
//!   - **hi, lo**: the two components; the value represented is exactly `hi + lo`.
//!   - **Normalised**: `hi == fl(hi + lo)`, i.e. `|lo| ≤ ulp(hi) / 2`. Every public operation
//!     returns a normalised value.
//!   - **Non-finite**: if `hi` is infinite or NaN, `lo` carries no information and is always 0.

/// A double-double floating point number: the value represented is `hi + lo`, exactly.
///
/// ```
/// # use product_accuracy::Extended;
/// let third = Extended::ONE / 3.0;
/// assert_eq!(third.to_f64(), 1.0 / 3.0);
/// assert!(third.lo() != 0.0);  // The bits that an f64 cannot hold
/// ```
#[derive(Clone, Copy)]
pub struct Extended {
  hi: f64,
  lo: f64,
}

/// Construction, constants, classification, and the error-free building blocks.
pub(crate) mod basics;

/// Arithmetic operators.
mod ops;

/// Elementary functions: `ln` and `exp`.
mod math;

/// Conversion to and from `f64`.
mod convert;

/// Debug formatting.
mod fmt;

pub use convert::NotFinite;
