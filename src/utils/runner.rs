//! Benchmark orchestration across input sizes, plus CSV export.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::bench::{time_seed, unit_name};
use super::timer::{TimingConfig, VariantResult};
use crate::error::DotResult;
use crate::math::dot_product::{self, Strategy};

/// Everything a benchmark run needs
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub timing: TimingConfig,
    /// Seed for data and schedule; time-based when `None`
    pub seed: Option<u64>,
    /// Where the caller should export raw results, if anywhere
    pub csv_path: Option<PathBuf>,
    pub strategies: Vec<Strategy>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![64, 256, 1024, 4096, 16384],
            timing: TimingConfig::default(),
            seed: None,
            csv_path: None,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

/// Results for one input size
#[derive(Clone, Debug)]
pub struct SizeReport {
    pub size: usize,
    pub results: Vec<VariantResult>,
}

/// Run every configured strategy at every configured size.
///
/// Each size gets its own data, derived from the run seed, so runs with the
/// same seed measure the same vectors.
pub fn run_benchmarks(config: &BenchConfig) -> DotResult<Vec<SizeReport>> {
    let seed = config.seed.unwrap_or_else(time_seed);
    info!(
        seed,
        sizes = ?config.sizes,
        runs = config.timing.runs_per_variant,
        "starting dot product benchmarks"
    );

    let mut reports = Vec::with_capacity(config.sizes.len());
    for (i, &size) in config.sizes.iter().enumerate() {
        let size_seed = seed.wrapping_add(i as u64);
        debug!(size, size_seed, "measuring");
        let results =
            dot_product::bench::run_size(size, &config.strategies, &config.timing, size_seed)?;
        reports.push(SizeReport { size, results });
    }

    info!(sizes = reports.len(), "benchmarks finished");
    Ok(reports)
}

/// Write one row per variant and size.
///
/// Columns: `variant,input_size,runs,avg,median,min,max,std_dev,unit,result`.
pub fn export_csv(path: &Path, reports: &[SizeReport]) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, reports)?;
    file.flush()
}

pub fn write_csv<W: Write>(out: &mut W, reports: &[SizeReport]) -> std::io::Result<()> {
    writeln!(out, "variant,input_size,runs,avg,median,min,max,std_dev,unit,result")?;

    for report in reports {
        for r in &report.results {
            writeln!(
                out,
                "{},{},{},{:.2},{},{},{},{:.2},{},{}",
                r.name,
                report.size,
                r.runs,
                r.avg,
                r.median,
                r.min,
                r.max,
                r.std_dev,
                unit_name(),
                r.result_sample.map(|v| v.to_string()).unwrap_or_default()
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timer::PinStrategy;

    fn quick_config() -> BenchConfig {
        BenchConfig {
            sizes: vec![0, 17, 128],
            timing: TimingConfig {
                runs_per_variant: 4,
                warmup_iterations: 1,
                pin_strategy: PinStrategy::Global,
                filter_outliers: false,
            },
            seed: Some(2024),
            csv_path: None,
            strategies: Strategy::ALL.to_vec(),
        }
    }

    #[test]
    fn test_run_benchmarks_shape() {
        let reports = run_benchmarks(&quick_config()).unwrap();
        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert_eq!(report.results.len(), Strategy::ALL.len());
            assert!(report.results.iter().all(|r| r.runs == 4));
        }
        assert!(reports[0]
            .results
            .iter()
            .all(|r| r.result_sample == Some(0.0)));
    }

    #[test]
    fn test_same_seed_same_results() {
        let first = run_benchmarks(&quick_config()).unwrap();
        let second = run_benchmarks(&quick_config()).unwrap();
        for (x, y) in first.iter().zip(&second) {
            for (rx, ry) in x.results.iter().zip(&y.results) {
                assert_eq!(rx.result_sample, ry.result_sample);
            }
        }
    }

    #[test]
    fn test_write_csv() {
        let reports = run_benchmarks(&quick_config()).unwrap();
        let mut buf = Vec::new();
        write_csv(&mut buf, &reports).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "variant,input_size,runs,avg,median,min,max,std_dev,unit,result");
        assert_eq!(lines.len(), 1 + 3 * Strategy::ALL.len());
        assert!(lines[1].starts_with("original,0,4,"));
        assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 10));
    }
}
