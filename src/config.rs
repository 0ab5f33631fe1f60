//! Game configuration
//!
//! All parameters of a game are passed explicitly; nothing is read from
//! global state.

use crate::error::{MastermindError, Result};

/// Default alphabet size (symbols `1..=6`)
pub const DEFAULT_NUM_CHOICES: u8 = 6;

/// Default code length
pub const DEFAULT_SECRET_LENGTH: usize = 4;

/// Default guess budget
pub const DEFAULT_MAX_GUESSES: usize = 12;

/// Longest code the scorer supports (one bit per position in its bookkeeping)
pub const MAX_SECRET_LENGTH: usize = 64;

/// Parameters of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Symbols are drawn from `1..=num_choices`
    pub num_choices: u8,
    /// Number of positions in every code
    pub secret_length: usize,
    /// Guesses allowed before the game is lost
    pub max_guesses: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if any parameter is zero or the length exceeds
    /// [`MAX_SECRET_LENGTH`].
    pub fn new(num_choices: u8, secret_length: usize, max_guesses: usize) -> Result<Self> {
        if num_choices == 0 {
            return Err(MastermindError::InvalidConfig(
                "need at least one symbol".to_string(),
            ));
        }
        if secret_length == 0 || secret_length > MAX_SECRET_LENGTH {
            return Err(MastermindError::InvalidConfig(format!(
                "secret length must be between 1 and {MAX_SECRET_LENGTH}, got {secret_length}"
            )));
        }
        if max_guesses == 0 {
            return Err(MastermindError::InvalidConfig(
                "need at least one guess".to_string(),
            ));
        }

        Ok(Self {
            num_choices,
            secret_length,
            max_guesses,
        })
    }

    /// Same configuration with a different guess budget
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `max_guesses` is zero.
    pub fn with_max_guesses(self, max_guesses: usize) -> Result<Self> {
        Self::new(self.num_choices, self.secret_length, max_guesses)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_choices: DEFAULT_NUM_CHOICES,
            secret_length: DEFAULT_SECRET_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}
