//! Numerical-library baseline.
//!
//! Delegates to `ndarray`'s `dot`, which is free to split the sum across
//! several accumulators. Results are compared to the reference within a
//! tolerance, never bit for bit.

use super::check_lengths;
use crate::error::DotResult;
use ndarray::ArrayView1;

/// Compute the dot product with `ArrayView1::dot` on zero-copy views.
pub fn dot_product_ndarray_dot(a: &[f64], b: &[f64]) -> DotResult<f64> {
    check_lengths(a, b)?;

    let va = ArrayView1::from(a);
    let vb = ArrayView1::from(b);
    Ok(va.dot(&vb))
}
