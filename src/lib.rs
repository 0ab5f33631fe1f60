//! Mastermind Solver
//!
//! A Mastermind scorer and a minimax code-breaker that narrows the set of
//! possible secrets after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::config::GameConfig;
//! use mastermind_solver::core::{Code, Feedback, score};
//!
//! let config = GameConfig::default();
//! let secret = Code::new(vec![2, 1, 2, 2], &config).unwrap();
//! let guess = Code::new(vec![1, 2, 3, 2], &config).unwrap();
//!
//! // One symbol in the right place, two more present elsewhere
//! let feedback = score(&secret, &guess, config.num_choices).unwrap();
//! assert_eq!(feedback, Feedback::new(1, 2));
//! ```

// Core domain types
pub mod core;

// Game parameters
pub mod config;

// Error types
pub mod error;

// Human play state
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
