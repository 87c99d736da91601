//! CLI for evaluating and benchmarking dot product strategies.
//!
//! Usage:
//!   dotbench bench                     # Benchmark every strategy
//!   dotbench bench --variant typed     # Benchmark selected strategies
//!   dotbench eval --a 1,2,3 --b 4,5,6  # Evaluate one dot product
//!   dotbench verify                    # Check strategies agree
//!   dotbench list                      # List strategies

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dot_product_bench::math::dot_product::{self, parse_vector, Strategy};
use dot_product_bench::tui;
use dot_product_bench::utils::{runner, time_seed, BenchConfig, PinStrategy, TimingConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dot product strategies and their micro-benchmarks",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time every selected strategy at several vector sizes
    Bench(BenchArgs),
    /// Evaluate one dot product from two comma-separated vectors
    Eval {
        /// First vector, e.g. "1,2,3"
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        /// Second vector, e.g. "4,5,6"
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        /// Strategy to evaluate with
        #[arg(long, default_value = "original")]
        variant: Strategy,
    },
    /// Check every strategy against the reference on random vectors
    Verify {
        /// Vector length
        #[arg(long, default_value_t = 1023)]
        size: usize,
        /// Random seed (default: time-based)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List available strategies
    List,
}

#[derive(clap::Args, Debug)]
struct BenchArgs {
    /// Comma-separated vector sizes
    #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096,16384")]
    sizes: Vec<usize>,
    /// Number of measurement runs per variant
    #[arg(long, short = 'r', default_value_t = 30)]
    runs: usize,
    /// Warmup executions per variant before measuring
    #[arg(long, default_value_t = 10)]
    warmup: usize,
    /// Random seed for reproducible data and schedule (default: time-based)
    #[arg(long)]
    seed: Option<u64>,
    /// Export raw results to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Trim the 1% extremes from measurements
    #[arg(long, short = 'f')]
    filter: bool,
    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = PinArg::PerExecution)]
    pin: PinArg,
    /// Strategies to run (repeatable; default: all)
    #[arg(long = "variant")]
    variants: Vec<Strategy>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PinArg {
    Global,
    PerExecution,
}

impl From<PinArg> for PinStrategy {
    fn from(p: PinArg) -> Self {
        match p {
            PinArg::Global => PinStrategy::Global,
            PinArg::PerExecution => PinStrategy::PerExecution,
        }
    }
}

impl From<BenchArgs> for BenchConfig {
    fn from(args: BenchArgs) -> Self {
        let strategies = if args.variants.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            args.variants
        };
        BenchConfig {
            sizes: args.sizes,
            timing: TimingConfig {
                runs_per_variant: args.runs,
                warmup_iterations: args.warmup,
                pin_strategy: args.pin.into(),
                filter_outliers: args.filter,
            },
            seed: args.seed,
            csv_path: args.csv,
            strategies,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dot_product_bench=info,dotbench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Bench(args) => bench(args.into()),
        Command::Eval { a, b, variant } => {
            let a = parse_vector(&a).context("parsing --a")?;
            let b = parse_vector(&b).context("parsing --b")?;
            let result = dot_product::dot_with(variant, &a, &b)
                .with_context(|| format!("evaluating with '{}'", variant))?;
            println!("{}", result);
            Ok(())
        }
        Command::Verify { size, seed } => {
            let seed = seed.unwrap_or_else(time_seed);
            dot_product::verify(size, seed)
                .with_context(|| format!("verification at size {} with seed {}", size, seed))?;
            info!(size, seed, "all strategies agree with the reference");
            println!("All {} strategies verified at size {}.", Strategy::ALL.len(), size);
            Ok(())
        }
        Command::List => {
            tui::print_available_strategies();
            Ok(())
        }
    }
}

fn bench(config: BenchConfig) -> Result<()> {
    if config.sizes.is_empty() {
        warn!("no sizes given, nothing to measure");
        return Ok(());
    }

    tui::print_header();
    let reports = runner::run_benchmarks(&config).context("running benchmarks")?;

    if let Some(path) = &config.csv_path {
        runner::export_csv(path, &reports)
            .with_context(|| format!("exporting CSV to {}", path.display()))?;
        println!("  Raw data exported to: {}", path.display());
        println!();
    }

    tui::print_reports(&reports, &config.strategies, config.timing.filter_outliers);
    println!(
        "Note: Speedup and relative error are relative to the first variant \
         (usually 'original')."
    );
    Ok(())
}
