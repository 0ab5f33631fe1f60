//! Benchmark command
//!
//! Tests solver performance across randomly drawn secrets.

use crate::config::GameConfig;
use crate::core::{Code, CodeSpace};
use crate::error::Result;
use crate::solver::{Solver, Status, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games won, keyed by guesses used
    pub distribution: HashMap<usize, usize>,
    pub failures: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games against random secrets
///
/// With a `seed` the secrets, and so the whole run, are reproducible. The
/// code space is enumerated once and shared by every game.
///
/// # Errors
/// Returns an error if the configuration's space cannot be enumerated.
pub fn run_benchmark<S: Strategy + Clone>(
    strategy: &S,
    config: GameConfig,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult> {
    let space = Arc::new(CodeSpace::new(&config)?);
    let mut rng = seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    );

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = 0;

    for _ in 0..count {
        let secret = Code::random(&config, &mut rng);
        let mut solver =
            Solver::with_space(strategy.clone(), config, Arc::clone(&space), Some(secret))?;

        let status = solver.play()?;
        let guesses = solver.guesses_made();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        if status == Status::Won {
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures += 1;
        }
    }

    let duration = start.elapsed();
    log::info!("benchmarked {count} games in {:.2}s", duration.as_secs_f64());

    Ok(BenchmarkResult {
        total_games: count,
        total_guesses,
        average_guesses: if count > 0 {
            total_guesses as f64 / count as f64
        } else {
            0.0
        },
        min_guesses: if count > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failures,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy};

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&MinimaxStrategy, GameConfig::default(), 10, Some(1)).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.failures, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result =
            run_benchmark(&FirstCandidateStrategy, GameConfig::default(), 20, Some(9)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum + result.failures, result.total_games);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = run_benchmark(&MinimaxStrategy, GameConfig::default(), 5, Some(42)).unwrap();
        let b = run_benchmark(&MinimaxStrategy, GameConfig::default(), 5, Some(42)).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn tight_budget_counts_failures() {
        let config = GameConfig::default().with_max_guesses(1).unwrap();
        let result = run_benchmark(&MinimaxStrategy, config, 10, Some(3)).unwrap();

        assert_eq!(result.max_guesses, 1);
        assert!(result.failures > 0);
    }

    #[test]
    fn benchmark_no_games() {
        let result = run_benchmark(&MinimaxStrategy, GameConfig::default(), 0, None).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&MinimaxStrategy, GameConfig::default(), 10, Some(5)).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }
}
