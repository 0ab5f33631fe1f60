//! Minimax code-breaking
//!
//! Implements worst-case minimization in the spirit of Knuth's five-guess
//! algorithm.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback, partition_sizes};
pub use selector::select_best_guess;
