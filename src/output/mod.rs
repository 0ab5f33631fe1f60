//! Console rendering of command results
//!
//! Coloured reports for the CLI plus plain-text pegs and history tables.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::{feedback_pegs, history_table};
