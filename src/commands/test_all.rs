//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code in the space. Instead of replaying each
//! game from scratch, the solver is cloned at every feedback branch, so each
//! distinct history is solved exactly once.

use crate::config::GameConfig;
use crate::core::{Code, Feedback};
use crate::error::Result;
use crate::solver::{Solver, Status, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Outcome for a single secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretResult {
    pub secret: Code,
    /// Guesses used, including the winning one
    pub guesses: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub opening_guess: Option<Code>,
    pub worst_secrets: Vec<(Code, usize)>,
    pub failed_secrets: Vec<Code>,
}

/// Solve every secret reachable from a fresh solver
///
/// Results are sorted by secret. `progress` is advanced once per secret.
///
/// # Errors
/// Returns an error if the solver rejects its own feedback, which would mean
/// the scorer and the filter disagree.
pub fn solve_every_secret<S: Strategy + Clone>(
    solver: &Solver<S>,
    progress: &ProgressBar,
) -> Result<Vec<SecretResult>> {
    let mut results = Vec::with_capacity(solver.candidate_count());
    if solver.status() == Status::Guessing {
        walk(solver.clone(), &mut results, progress)?;
    }
    results.sort_unstable_by(|a, b| a.secret.cmp(&b.secret));
    Ok(results)
}

fn walk<S: Strategy + Clone>(
    mut solver: Solver<S>,
    results: &mut Vec<SecretResult>,
    progress: &ProgressBar,
) -> Result<()> {
    let guess = solver.next_guess()?;
    let turn = solver.guesses_made() + 1;
    let length = solver.config().secret_length;

    // Every remaining candidate is a possible secret; group them by the
    // feedback this guess would get
    let mut branches: BTreeMap<Feedback, Vec<Code>> = BTreeMap::new();
    for candidate in solver.candidates() {
        let feedback = Feedback::calculate(candidate.symbols(), guess.symbols());
        branches.entry(feedback).or_default().push(candidate.clone());
    }

    for (feedback, secrets) in branches {
        if feedback.is_perfect(length) {
            results.push(SecretResult {
                secret: guess.clone(),
                guesses: turn,
                success: true,
            });
            progress.inc(1);
            continue;
        }

        let mut branch = solver.clone();
        if branch.record_feedback(&guess, feedback)? == Status::Guessing {
            walk(branch, results, progress)?;
        } else {
            progress.inc(secrets.len() as u64);
            results.extend(secrets.into_iter().map(|secret| SecretResult {
                secret,
                guesses: turn,
                success: false,
            }));
        }
    }

    Ok(())
}

/// Run the solver on every secret of the configured space
///
/// # Errors
/// Returns an error if the space cannot be enumerated.
pub fn run_test_all<S: Strategy + Clone>(
    strategy: S,
    config: GameConfig,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let mut solver = Solver::new(strategy, config, None)?;
    let total = solver.candidate_count();
    let opening_guess = Some(solver.next_guess()?);

    let pb = if show_progress {
        println!("🎯 Testing {total} secrets...");
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results = solve_every_secret(&solver, &pb)?;
    let total_time = start.elapsed();
    pb.finish_with_message("Complete!");

    log::info!(
        "tested {} secrets in {:.2}s",
        results.len(),
        total_time.as_secs_f64()
    );

    Ok(summarize(&results, opening_guess, total_time))
}

/// Aggregate per-secret results
#[must_use]
pub fn summarize(
    results: &[SecretResult],
    opening_guess: Option<Code>,
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.guesses).or_insert(0) += 1;
    }

    let solved = results.iter().filter(|r| r.success).count();
    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses)
        .sum();

    let mut worst_secrets: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.secret.clone(), r.guesses))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        total_time,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        max_guesses: worst_secrets.first().map_or(0, |(_, n)| *n),
        min_guesses: results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.guesses)
            .min()
            .unwrap_or(0),
        opening_guess,
        worst_secrets,
        failed_secrets: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.secret.clone())
            .collect(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Worst case:           {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if let Some(opening) = &stats.opening_guess {
        println!("  Opening guess:        {}", opening.to_string().bright_white());
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({guesses} guesses)", secret.to_string().yellow());
        }
    }

    if !stats.failed_secrets.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for secret in stats.failed_secrets.iter().take(10) {
            println!("  {}", secret.to_string().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy};

    #[test]
    fn small_space_all_solved() {
        let config = GameConfig::new(3, 3, 12).unwrap();
        let stats = run_test_all(MinimaxStrategy, config, false).unwrap();

        assert_eq!(stats.total_secrets, 27);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 27);
        assert_eq!(stats.min_guesses, 1);
        assert!(stats.average_guesses >= 1.0);
    }

    #[test]
    fn every_secret_appears_once() {
        let config = GameConfig::new(4, 2, 12).unwrap();
        let solver = Solver::new(FirstCandidateStrategy, config, None).unwrap();

        let results = solve_every_secret(&solver, &ProgressBar::hidden()).unwrap();

        assert_eq!(results.len(), 16);
        assert!(results.windows(2).all(|w| w[0].secret < w[1].secret));
        assert!(results.iter().all(|r| r.success));
    }

    #[test]
    fn tree_walk_agrees_with_replay() {
        let config = GameConfig::new(4, 3, 12).unwrap();
        let solver = Solver::new(MinimaxStrategy, config, None).unwrap();
        let results = solve_every_secret(&solver, &ProgressBar::hidden()).unwrap();

        for result in results.iter().step_by(5) {
            let mut replay =
                Solver::new(MinimaxStrategy, config, Some(result.secret.clone())).unwrap();
            replay.play().unwrap();
            assert_eq!(replay.guesses_made(), result.guesses, "{}", result.secret);
        }
    }

    #[test]
    fn exhausted_branches_are_failures() {
        let config = GameConfig::new(3, 2, 2).unwrap();
        let stats = run_test_all(FirstCandidateStrategy, config, false).unwrap();

        assert_eq!(stats.total_secrets, 9);
        assert_eq!(stats.solved + stats.failed, 9);
        assert!(stats.failed > 0);
        assert_eq!(stats.failed_secrets.len(), stats.failed);
        assert!(stats.max_guesses <= 2);
    }

    #[test]
    fn summarize_empty_results() {
        let stats = summarize(&[], None, Duration::ZERO);
        assert_eq!(stats.total_secrets, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert_eq!(stats.max_guesses, 0);
    }
}
