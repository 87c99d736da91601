//! Unified timing system for micro-benchmarks.
//!
//! - Support for both CPU cycles and wall-clock time (via features)
//! - Automatic CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias
//! - All raw measurements preserved for external analysis

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::bench::{to_units, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements (minimal overhead)
    Global,
    /// Pin and restore around every execution
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Trim the 1% extremes on each side before computing statistics
    pub filter_outliers: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            filter_outliers: false,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs one execution and returns (measurement, optional result value).
    /// Timing happens inside the closure to keep call overhead out of it.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Statistics for one measured variant, in [`unit_name`](super::bench::unit_name) units
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: &'static str,
    pub description: &'static str,
    /// Samples kept after outlier filtering
    pub runs: usize,
    pub avg: f64,
    /// Mean of the two middle samples for even counts, rounded down
    pub median: u64,
    pub min: u64,
    pub max: u64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Every raw measurement, in execution order, before filtering
    pub raw: Vec<u64>,
    /// Last value returned by the variant
    pub result_sample: Option<f64>,
}

impl VariantResult {
    /// Coefficient of variation (std_dev / avg), 0 when avg is 0.
    pub fn cv(&self) -> f64 {
        if self.avg > 0.0 {
            self.std_dev / self.avg
        } else {
            0.0
        }
    }
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Shuffles a (variant, sample) task schedule with `schedule_seed`
/// 3. Measures each task under the configured pinning
/// 4. Returns one `VariantResult` per variant, in input order
pub fn measure_variants(
    mut variants: Vec<Variant>,
    config: &TimingConfig,
    schedule_seed: u64,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(schedule_seed));

    let mut measurements: Vec<Vec<u64>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(to_units(elapsed));
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, raw), result_sample)| {
            compute_variant_result(
                variant.name,
                variant.description,
                raw,
                config.filter_outliers,
                result_sample,
            )
        })
        .collect()
}

/// Drop the 1% smallest and 1% largest values (at least one each side once
/// there are more than two values). Returns the sorted remainder.
pub fn trim_outliers(values: &[u64]) -> Vec<u64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    if sorted.len() <= 2 {
        return sorted;
    }
    let k = sorted.len().div_ceil(100);
    sorted[k..sorted.len() - k].to_vec()
}

fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    raw: Vec<u64>,
    filter: bool,
    result_sample: Option<f64>,
) -> VariantResult {
    let sorted = if filter {
        trim_outliers(&raw)
    } else {
        let mut s = raw.clone();
        s.sort_unstable();
        s
    };

    if sorted.is_empty() {
        return VariantResult {
            name,
            description,
            runs: 0,
            avg: 0.0,
            median: 0,
            min: 0,
            max: 0,
            std_dev: 0.0,
            raw,
            result_sample: None,
        };
    }

    let n = sorted.len();
    let avg = sorted.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
    let variance = sorted
        .iter()
        .map(|&v| {
            let diff = v as f64 - avg;
            diff * diff
        })
        .sum::<f64>()
        / (n - 1).max(1) as f64;

    VariantResult {
        name,
        description,
        runs: n,
        avg,
        median: median(&sorted),
        min: sorted[0],
        max: sorted[n - 1],
        std_dev: variance.sqrt(),
        raw,
        result_sample,
    }
}

/// Median of a sorted, non-empty slice.
fn median(sorted: &[u64]) -> u64 {
    let n = sorted.len();
    if n % 2 == 1 {
        return sorted[n / 2];
    }
    let (lo, hi) = (sorted[n / 2 - 1], sorted[n / 2]);
    lo + (hi - lo) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure;

    #[test]
    fn test_measure_variants_empty() {
        let results = measure_variants(vec![], &TimingConfig::default(), 1);
        assert!(results.is_empty());
    }

    #[test]
    fn test_measure_variants_single() {
        let variants = vec![Variant {
            name: "test",
            description: "Test variant",
            run: Box::new(|| {
                let (elapsed, _) = measure!(42);
                (elapsed, Some(42.0))
            }),
        }];

        let config = TimingConfig {
            runs_per_variant: 5,
            warmup_iterations: 2,
            pin_strategy: PinStrategy::Global,
            filter_outliers: false,
        };

        let results = measure_variants(variants, &config, 7);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "test");
        assert_eq!(results[0].runs, 5);
        assert_eq!(results[0].raw.len(), 5);
        assert_eq!(results[0].result_sample, Some(42.0));
        assert!(results[0].min <= results[0].median && results[0].median <= results[0].max);
    }

    #[test]
    fn test_measure_variants_counts_calls() {
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let variants = vec![
            Variant {
                name: "fast",
                description: "Fast variant",
                run: Box::new(|| {
                    calls.set(calls.get() + 1);
                    let (elapsed, _) = measure!(1);
                    (elapsed, Some(1.0))
                }),
            },
            Variant {
                name: "slow",
                description: "Slow variant",
                run: Box::new(|| {
                    let (elapsed, _) = measure!(vec![0u8; 1000]);
                    (elapsed, Some(2.0))
                }),
            },
        ];

        let config = TimingConfig {
            runs_per_variant: 6,
            warmup_iterations: 3,
            pin_strategy: PinStrategy::PerExecution,
            filter_outliers: false,
        };

        let results = measure_variants(variants, &config, 99);
        assert_eq!(calls.get(), 9);
        assert_eq!(results[0].name, "fast");
        assert_eq!(results[1].name, "slow");
        assert_eq!(results[0].result_sample, Some(1.0));
        assert_eq!(results[1].result_sample, Some(2.0));
    }

    #[test]
    fn test_trim_outliers() {
        let mut values: Vec<u64> = (1..=200).collect();
        values.push(1_000_000);
        let trimmed = trim_outliers(&values);
        // 201 values -> 3 dropped from each end
        assert_eq!(trimmed.len(), 195);
        assert_eq!(*trimmed.first().unwrap(), 4);
        assert!(!trimmed.contains(&1_000_000));
    }

    #[test]
    fn test_trim_outliers_small_input() {
        assert_eq!(trim_outliers(&[5, 1]), vec![1, 5]);
        assert_eq!(trim_outliers(&[3, 9, 1]), vec![3]);
    }

    #[test]
    fn test_statistics() {
        let r = compute_variant_result("s", "d", vec![4, 2, 6, 8], false, Some(0.0));
        assert_eq!(r.runs, 4);
        assert_eq!(r.avg, 5.0);
        assert_eq!(r.min, 2);
        assert_eq!(r.max, 8);
        assert_eq!(r.median, 5);
        // sample variance of 2,4,6,8 is 20/3
        assert!((r.std_dev - (20.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(r.raw, vec![4, 2, 6, 8]);
    }

    #[test]
    fn test_median_even_and_odd_counts() {
        assert_eq!(median(&[7]), 7);
        assert_eq!(median(&[1, 3, 100]), 3);
        assert_eq!(median(&[10, 20]), 15);
        // rounds down
        assert_eq!(median(&[1, 2, 3, 4]), 2);
        assert_eq!(median(&[u64::MAX - 1, u64::MAX]), u64::MAX - 1);

        let r = compute_variant_result("s", "d", vec![9, 1, 5, 3, 7, 11], false, None);
        assert_eq!(r.median, 6);
    }
}
