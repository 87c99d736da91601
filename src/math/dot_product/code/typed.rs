//! Typed iterator implementation.
//!
//! Same summation order as the reference, written as a fold so the compiler
//! can drop bounds checks.

use super::check_lengths;
use crate::error::DotResult;

/// Compute the dot product with an iterator fold over zipped slices.
pub fn dot_product_typed(a: &[f64], b: &[f64]) -> DotResult<f64> {
    check_lengths(a, b)?;

    Ok(a.iter().zip(b).fold(0.0_f64, |acc, (&x, &y)| acc + x * y))
}
