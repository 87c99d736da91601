//! Dot product implementations.
//!
//! This module contains all implementation variants of the dot product algorithm.
//! Every variant shares one signature and one length policy: mismatched
//! lengths are rejected before any element is read.

mod manual_buffer;
mod ndarray_dot;
mod ndarray_loop;
mod original;
mod typed;

pub use manual_buffer::{dot_product_manual_buffer, RawBuffer};
pub use ndarray_dot::dot_product_ndarray_dot;
pub use ndarray_loop::dot_product_ndarray_loop;
pub use original::dot_product_original;
pub use typed::dot_product_typed;

use crate::error::{DotError, DotResult};
use crate::utils::VariantInfo;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> DotResult<f64>;

/// Reject inputs whose lengths differ.
#[inline(always)]
pub fn check_lengths(a: &[f64], b: &[f64]) -> DotResult<()> {
    if a.len() != b.len() {
        return Err(DotError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Summation strategy used to evaluate a dot product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Indexed loop with a running sum; the reference.
    Original,
    /// Iterator fold over zipped slices.
    Typed,
    /// Copies into raw C-allocated buffers before summing.
    ManualBuffer,
    /// Copies into `ndarray` arrays and sums with an indexed loop.
    NdarrayLoop,
    /// `ndarray`'s own `dot`, the library baseline.
    NdarrayDot,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Original,
        Strategy::Typed,
        Strategy::ManualBuffer,
        Strategy::NdarrayLoop,
        Strategy::NdarrayDot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Original => "original",
            Strategy::Typed => "typed",
            Strategy::ManualBuffer => "manual_buffer",
            Strategy::NdarrayLoop => "ndarray",
            Strategy::NdarrayDot => "ndarray-dot",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::Original => "Indexed loop with a plain running sum (reference)",
            Strategy::Typed => "Typed iterator fold over zipped slices",
            Strategy::ManualBuffer => "Raw malloc'd buffers, copied in, summed, freed on drop",
            Strategy::NdarrayLoop => "Indexed loop over ndarray Array1 copies",
            Strategy::NdarrayDot => "ndarray ArrayView1::dot library baseline",
        }
    }

    pub fn function(self) -> DotProductFn {
        match self {
            Strategy::Original => dot_product_original,
            Strategy::Typed => dot_product_typed,
            Strategy::ManualBuffer => dot_product_manual_buffer,
            Strategy::NdarrayLoop => dot_product_ndarray_loop,
            Strategy::NdarrayDot => dot_product_ndarray_dot,
        }
    }

    /// Whether the strategy accumulates strictly left to right, making it
    /// bit-identical to [`Strategy::Original`].
    pub fn is_left_to_right(self) -> bool {
        !matches!(self, Strategy::NdarrayDot)
    }

    pub fn from_name(name: &str) -> Option<Strategy> {
        Strategy::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::str::FromStr for Strategy {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::from_name(s).ok_or_else(|| DotError::UnknownStrategy {
            name: s.to_string(),
        })
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Get all available variants, reference first
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    Strategy::ALL
        .into_iter()
        .map(|s| VariantInfo {
            name: s.name(),
            description: s.description(),
            function: s.function(),
        })
        .collect()
}
