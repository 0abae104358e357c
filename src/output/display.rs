//! Display functions for command results

use super::formatters::{create_progress_bar, strip_markup, summary_line};
use crate::anagram::LookupReport;
use crate::commands::{BatchResult, PermuteResult};
use colored::Colorize;

/// Print the result of one anagram lookup
pub fn print_lookup_report(report: &LookupReport, words_only: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of: {}",
        report.input.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !report.is_found() {
        println!("\n{}", summary_line(report).red().bold());
        return;
    }

    println!("\n{}", summary_line(report).green());
    println!(
        "\n  {}",
        report
            .result
            .words
            .iter()
            .map(|w| w.bright_white().bold().to_string())
            .collect::<Vec<_>>()
            .join("  ")
    );

    if words_only {
        return;
    }

    println!();
    for entry in &report.result.entries {
        println!("  {}", entry.word.trim().bright_cyan().bold());
        println!("    {}", strip_markup(&entry.definition));
    }
}

/// Print the permutations generated for a word
pub fn print_permutations(result: &PermuteResult) {
    println!(
        "{} {} ({} distinct of {} generated)",
        "Permutations of".bright_cyan(),
        result.input.bright_yellow().bold(),
        result.distinct_count,
        result.generated_count
    );
    for permutation in &result.permutations {
        println!("  {permutation}");
    }
    if result.truncated {
        println!("  {}", "…".bright_black());
    }
}

/// Print the summary of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    for outcome in &result.outcomes {
        match &outcome.report {
            Ok(report) if report.is_found() => println!(
                "  {:<12} {:>3} found  {}",
                report.input.bright_white().bold(),
                report.found_count(),
                report.result.words.join(", ").green()
            ),
            Ok(report) => println!(
                "  {:<12} {:>3} found",
                report.input.bright_black(),
                0
            ),
            Err(e) => println!("  {:<12} {}", outcome.raw.red(), e.to_string().red()),
        }
    }

    let bar = create_progress_bar(result.found as f64, result.total as f64, 30);
    let pct = if result.total > 0 {
        result.found as f64 / result.total as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words looked up:  {}", result.total);
    println!(
        "   With anagrams:    [{}] {} ({pct:.1}%)",
        bar.green(),
        result.found.to_string().bright_yellow().bold()
    );
    println!("   Rejected input:   {}", result.rejected);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}
