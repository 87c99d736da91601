//! # Dot-Product-Bench
//!
//! Several ways of computing a dot product over `f64` slices, and a
//! micro-benchmark harness that times them against a numerical-library
//! baseline.

pub mod error;
pub mod math;
pub mod utils;

pub use error::{DotError, DotResult};
pub use math::dot_product::{dot, dot_with, parse_vector, verify, Strategy};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{DotError, DotResult};
    pub use crate::math::dot_product::{self, dot, dot_with, Strategy};
    pub use crate::utils::{BenchConfig, PinStrategy, TimingConfig};
}
