//! Original (reference) implementation of dot product.
//!
//! A plain indexed loop with a single running sum. Every other left-to-right
//! variant must produce exactly the same bits as this one.

use super::check_lengths;
use crate::error::DotResult;

/// Compute the dot product of two vectors.
///
/// Products are accumulated left to right into one `f64` starting at `0.0`.
///
/// # Errors
/// Returns [`DotError::LengthMismatch`](crate::error::DotError::LengthMismatch)
/// if the vectors have different lengths.
///
/// # Example
/// ```
/// use dot_product_bench::math::dot_product::dot_product_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_original(&a, &b).unwrap(), 32.0);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn dot_product_original(a: &[f64], b: &[f64]) -> DotResult<f64> {
    check_lengths(a, b)?;

    let mut sum = 0.0;
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }
    Ok(sum)
}
