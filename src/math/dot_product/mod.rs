//! # Dot Product Algorithm
//!
//! The dot product (also known as scalar product) computes the sum of products
//! of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Strategies
//!
//! - **original**: indexed loop, one running sum (the reference)
//! - **typed**: iterator fold, same order
//! - **manual_buffer**: inputs copied into raw C-allocated buffers first
//! - **ndarray**: inputs copied into `ndarray` arrays, indexed loop
//! - **ndarray-dot**: `ndarray`'s own `dot`, the library baseline
//!
//! All but the baseline sum strictly left to right and give bit-identical
//! results. Mismatched lengths are an error for every strategy.

pub mod bench;
pub mod code;
pub mod parse;
pub mod test;

pub use code::*;
pub use parse::parse_vector;

use crate::error::{DotError, DotResult};
use crate::utils::bench::random_pair;
use tracing::debug;

pub const NAME: &str = "dot_product";
pub const DESCRIPTION: &str = "Computes the sum of products of corresponding vector elements";
pub const CATEGORY: &str = "math";

/// Dot product of two equal-length vectors, summed left to right in `f64`.
///
/// # Errors
/// [`DotError::LengthMismatch`] when `a.len() != b.len()`.
///
/// # Example
/// ```
/// use dot_product_bench::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// assert!(dot(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn dot(a: &[f64], b: &[f64]) -> DotResult<f64> {
    dot_product_original(a, b)
}

/// Dot product using a specific summation strategy.
pub fn dot_with(strategy: Strategy, a: &[f64], b: &[f64]) -> DotResult<f64> {
    (strategy.function())(a, b)
}

/// Tolerance for comparing a reordered sum to the reference.
///
/// Each of the two sums is within `n * eps * Σ|a[i]*b[i]|` of the exact
/// value whatever its order, so they differ by at most twice that.
pub fn reorder_tolerance(a: &[f64], b: &[f64]) -> f64 {
    let magnitude: f64 = a.iter().zip(b).map(|(x, y)| (x * y).abs()).sum();
    2.0 * a.len() as f64 * f64::EPSILON * magnitude
}

/// Check every strategy against the reference on seeded random vectors.
///
/// Left-to-right strategies must match bit for bit; the library baseline
/// must fall within [`reorder_tolerance`].
pub fn verify(size: usize, seed: u64) -> DotResult<()> {
    let (a, b) = random_pair(size, seed);
    let expected = dot(&a, &b)?;
    let tolerance = reorder_tolerance(&a, &b);

    for strategy in Strategy::ALL {
        let actual = dot_with(strategy, &a, &b)?;
        let ok = if strategy.is_left_to_right() {
            actual.to_bits() == expected.to_bits()
        } else {
            (actual - expected).abs() <= tolerance
        };
        debug!(variant = strategy.name(), expected, actual, ok, "verified");
        if !ok {
            return Err(DotError::Verification {
                variant: strategy.name(),
                expected,
                actual,
            });
        }
    }

    Ok(())
}
