//! Benchmark closures for dot product strategies.

use super::code::Strategy;
use crate::error::DotResult;
use crate::measure;
use crate::utils::bench::random_pair;
use crate::utils::timer::{measure_variants, TimingConfig, Variant};
use std::hint::black_box;

/// Build one timing closure per strategy over shared input data.
pub fn variant_closures<'a>(
    a: &'a [f64],
    b: &'a [f64],
    strategies: &[Strategy],
) -> Vec<Variant<'a>> {
    strategies
        .iter()
        .map(|&s| {
            let func = s.function();
            Variant {
                name: s.name(),
                description: s.description(),
                run: Box::new(move || {
                    let (elapsed, result) = measure!(func(black_box(a), black_box(b)));
                    (elapsed, result.ok())
                }),
            }
        })
        .collect()
}

/// Measure `strategies` on one seeded pair of vectors of length `size`.
///
/// Every strategy is evaluated once before timing so that failures surface
/// as errors instead of missing result samples.
pub fn run_size(
    size: usize,
    strategies: &[Strategy],
    config: &TimingConfig,
    seed: u64,
) -> DotResult<Vec<crate::utils::timer::VariantResult>> {
    let (a, b) = random_pair(size, seed);

    for s in strategies {
        (s.function())(&a, &b)?;
    }

    let variants = variant_closures(&a, &b, strategies);
    Ok(measure_variants(variants, config, seed.rotate_left(17)))
}
