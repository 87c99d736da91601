//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::math::dot_product::{self, Strategy};
use crate::utils::bench::{format_measurement, unit_name};
use crate::utils::runner::SizeReport;
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Reference first, then the order strategies are declared in
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(|r| {
        Strategy::ALL
            .iter()
            .position(|s| s.name() == r.name)
            .unwrap_or(usize::MAX)
    });
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(strategies: &[Strategy]) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
    let lines = [
        format!("Algorithm: {}", dot_product::NAME),
        format!("Category:  {}", dot_product::CATEGORY),
        dot_product::DESCRIPTION.to_string(),
        format!("Variants: {}", names.join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Relative error of `value` against `baseline`, absolute when the baseline is ~0
pub fn relative_error(value: Option<f64>, baseline: Option<f64>) -> f64 {
    match (value, baseline) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-9 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Print results table for a single size.
/// Speedup and relative error are against the first row.
pub fn print_results_table(results: &[VariantResult], size: usize, filtered: bool) {
    let Some(first) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = first.avg;
    let baseline_result = first.result_sample;

    let filter_note = if filtered { ", filtered" } else { "" };
    println!(
        "  Size: {} ({} runs{}, {})",
        size,
        first.raw.len(),
        filter_note,
        unit_name()
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg > 0.0 {
            baseline_time / result.avg
        } else {
            0.0
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(result.name, variant_col_width),
            format_measurement(result.avg.round() as u64),
            format_measurement(result.min),
            format_measurement(result.max),
            speedup,
            result.cv() * 100.0,
            relative_error(result.result_sample, baseline_result),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every size of a benchmark run
pub fn print_reports(reports: &[SizeReport], strategies: &[Strategy], filtered: bool) {
    print_algo_info_box(strategies);
    for report in reports {
        let mut results = report.results.clone();
        sort_variants(&mut results);
        print_results_table(&results, report.size, filtered);
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dot Product Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available strategies
pub fn print_available_strategies() {
    println!("Available strategies:");
    println!();
    for s in Strategy::ALL {
        let order = if s.is_left_to_right() {
            "left-to-right"
        } else {
            "library order"
        };
        println!("  {:<16} [{}] - {}", s.name(), order, s.description());
    }
}
