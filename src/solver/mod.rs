//! Mastermind solving algorithms
//!
//! The solver keeps the set of codes consistent with all feedback so far and
//! asks a strategy which code to probe next.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::{
    CodeBreaker, Solver, Status, Turn, candidates_consistent_with, filter_candidates,
    select_next_guess,
};
pub use strategy::{
    FirstCandidateStrategy, MinimaxStrategy, RandomCandidateStrategy, Strategy, StrategyType,
};
