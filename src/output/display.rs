//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let length = result.secret.len();
    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} {}",
            i + 1,
            step.guess.to_string().bright_white().bold(),
            feedback_pegs(step.feedback, length),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {} candidates", step.worst_case);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print how a probe partitions the code space
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.probe.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let length = result.probe.len();
    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    for &(feedback, size) in &result.partitions {
        let bar = create_progress_bar(size as f64, result.worst_case as f64, 30);
        println!(
            "   {} {:<8} [{}] {size:6}",
            feedback_pegs(feedback, length),
            feedback.to_string(),
            bar.green()
        );
    }

    println!(
        "\n   Outcomes:    {}",
        result.partitions.len().to_string().bright_yellow()
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.worst_case.to_string().yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", result.failures).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:5} ({pct:5.1}%)");
        }
    }
}
