//! Library-array implementation.
//!
//! The inputs are copied into owned `ndarray` arrays and summed with an
//! indexed loop, keeping the reference summation order.

use super::check_lengths;
use crate::error::DotResult;
use ndarray::Array1;

/// Compute the dot product over `Array1<f64>` copies of the inputs.
#[allow(clippy::needless_range_loop)]
pub fn dot_product_ndarray_loop(a: &[f64], b: &[f64]) -> DotResult<f64> {
    check_lengths(a, b)?;

    let arr_a = Array1::from(a.to_vec());
    let arr_b = Array1::from(b.to_vec());

    let mut sum = 0.0;
    for i in 0..arr_a.len() {
        sum += arr_a[i] * arr_b[i];
    }
    Ok(sum)
}
