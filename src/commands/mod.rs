//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, solve_code};
pub use test_all::{
    SecretResult, TestAllStatistics, print_test_all_statistics, run_test_all, solve_every_secret,
    summarize,
};
