//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{random_pair, time_seed, unit_name, Measurement};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{run_benchmarks, BenchConfig, SizeReport};
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "ndarray-dot")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
