//! This crate measures how accurately the product of a long sequence of `f64` can be computed,
//! and how much the result depends on the order of the factors.
//!
//! # Introduction
//!
//! Multiplying `n` floating point numbers one after the other commits up to `n` rounding errors,
//! and which errors are committed depends on the order in which the numbers are multiplied. Two
//! approximate methods are provided, both using an [`Extended`] precision intermediate wider than
//! `f64`:
//!
//!   - [`naive_product`]: multiply sequentially, in `Extended`, then round to `f64`.
//!   - [`log_sum_exp_product`]: compute `exp(Σ ln xᵢ)`, with `Extended` logarithms, a
//!     [compensated](kahan) sum, and an `Extended` exponential.
//!
//! Both are compared against [`arbitrary_precision_product`], a reference product computed with
//! a configurable number of significand bits (256 by default), and the discrepancy is measured in
//! [ULPs](ulp), the number of representable `f64` between two results.
//!
//! # Usage
//!
//! ```
//! use product_accuracy::{naive_product, log_sum_exp_product, arbitrary_precision_product, ulp_distance};
//!
//! let data = [0.9, 1.1, 1.05, 0.95, 1.2, 0.8];
//! let naive = naive_product(&data);
//! let log_sum_exp = log_sum_exp_product(&data);
//! let reference = arbitrary_precision_product(&data, 256).to_f64();
//!
//! assert!(ulp_distance(naive, reference) <= 1);
//! assert!(ulp_distance(log_sum_exp, reference) <= 2);
//! ```
//!
//! The whole experiment (generate random data, compute with every method in the original and in
//! shuffled order, compare) is available as [`experiment::run`], and as the `product-accuracy`
//! binary:
//!
//! ```
//! use product_accuracy::{Config, experiment};
//!
//! let config = Config { sample_count: 100, ..Config::default() };
//! let report = experiment::run(&config)?;
//! assert!(report.original.naive_ulps <= 1);
//! println!("{report}");
//! # Ok::<(), product_accuracy::Error>(())
//! ```
//!
//! # Failure modes
//!
//! The numeric functions never panic and never return errors: every failure is folded into the
//! returned value. An undefined result (a logarithm of a non-positive number, a NaN input) is NaN;
//! an overflowing result is ±∞. Two values that cannot be compared in ULPs give
//! [`ulp::INCOMPARABLE`].
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod extended;
pub mod kahan;
mod product;
pub mod reference;
pub mod ulp;

pub mod config;
mod error;
pub mod sample;
pub mod experiment;

pub use extended::{Extended, NotFinite};
pub use product::{naive_product, log_sum_exp_product};
pub use reference::{ReferenceProduct, arbitrary_precision_product};
pub use ulp::ulp_distance;
pub use config::Config;
pub use error::Error;


/// Number of cases for each property test; more in release builds, where they run faster.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x4000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
