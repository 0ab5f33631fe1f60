//! Error types for the scorer, solver and game
//!
//! Every error is either bad input rejected at the boundary or a caller
//! driving the solver out of order. Running out of guesses is not an error;
//! it is reported through [`Status::Exhausted`](crate::solver::Status).

use crate::solver::Status;
use thiserror::Error;

/// Broad classification of a [`MastermindError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed code, feedback or configuration
    InvalidInput,
    /// Solver operation called in the wrong state or with the wrong guess
    ProtocolMisuse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    #[error("code has {got} symbols, expected {expected}")]
    WrongLength { got: usize, expected: usize },

    #[error("symbol {value} at position {position} is outside 1..={num_choices}")]
    SymbolOutOfRange {
        position: usize,
        value: u8,
        num_choices: u8,
    },

    #[error("cannot parse {0:?}")]
    Unparsable(String),

    #[error("feedback ({exact}, {value}) is impossible for codes of length {length}")]
    InvalidFeedback { exact: u8, value: u8, length: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{num_choices}^{secret_length} codes is too many to enumerate")]
    SpaceTooLarge { num_choices: u8, secret_length: usize },

    #[error("solver is {0}, no further guesses are allowed")]
    NotGuessing(Status),

    #[error("no guess is waiting for feedback")]
    NoPendingGuess,

    #[error("feedback was for {got}, but the last issued guess was {expected}")]
    UnexpectedGuess { got: String, expected: String },

    #[error("feedback {0} contradicts earlier feedback, no code fits")]
    InconsistentFeedback(String),

    #[error("solver was built without a secret to score against")]
    NoSecret,
}

impl MastermindError {
    /// Classify the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongLength { .. }
            | Self::SymbolOutOfRange { .. }
            | Self::Unparsable(_)
            | Self::InvalidFeedback { .. }
            | Self::InvalidConfig(_)
            | Self::SpaceTooLarge { .. } => ErrorKind::InvalidInput,
            Self::NotGuessing(_)
            | Self::NoPendingGuess
            | Self::UnexpectedGuess { .. }
            | Self::InconsistentFeedback(_)
            | Self::NoSecret => ErrorKind::ProtocolMisuse,
        }
    }
}

pub type Result<T> = std::result::Result<T, MastermindError>;
