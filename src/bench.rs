//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::Extended;
use crate::extended::basics::{two_sum, two_prod};

impl Extended {
  pub fn bench_two_sum(a: f64, b: f64) -> (f64, f64) {
    two_sum(a, b)
  }

  pub fn bench_two_prod(a: f64, b: f64) -> (f64, f64) {
    two_prod(a, b)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn extended_add(x: Extended, y: Extended) -> Extended {
  x + y
}

#[unsafe(no_mangle)]
pub fn extended_mul(x: Extended, y: Extended) -> Extended {
  x * y
}

#[unsafe(no_mangle)]
pub fn extended_mul_f64(x: Extended, y: f64) -> Extended {
  x * y
}

#[unsafe(no_mangle)]
pub fn extended_div_f64(x: Extended, y: f64) -> Extended {
  x / y
}

//

#[unsafe(no_mangle)]
pub fn extended_ln(x: f64) -> Extended {
  Extended::ln(x)
}

#[unsafe(no_mangle)]
pub fn extended_exp(x: Extended) -> Extended {
  x.exp()
}

//

#[unsafe(no_mangle)]
pub fn kahan_add(sum: &mut crate::kahan::KahanSum, x: Extended) -> bool {
  sum.add(x)
}

#[unsafe(no_mangle)]
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
  crate::ulp_distance(a, b)
}
