//! Secret holder for human play
//!
//! A `Game` knows the secret and scores guesses against it. It never
//! prompts; the line-based and TUI front ends drive it.

use crate::config::GameConfig;
use crate::core::{Code, Feedback};
use crate::error::{MastermindError, Result};
use crate::solver::Status;
use rand::Rng;

/// One guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    pub guess: Code,
    pub feedback: Feedback,
}

/// A single game against a hidden secret
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: Code,
    history: Vec<GameEntry>,
    status: Status,
}

impl Game {
    /// Start a game with an explicit secret, or a random one if `None`
    ///
    /// # Errors
    /// Returns a code error if the explicit secret does not fit `config`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::{Code, Feedback};
    /// use mastermind_solver::game::Game;
    ///
    /// let config = GameConfig::default();
    /// let secret = Code::new(vec![2, 1, 2, 2], &config).unwrap();
    /// let game = Game::new(config, Some(secret), &mut rand::rng()).unwrap();
    ///
    /// let guess = Code::new(vec![1, 2, 3, 2], &config).unwrap();
    /// assert_eq!(game.evaluate_guess(&guess).unwrap(), Feedback::new(1, 2));
    /// ```
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        secret: Option<Code>,
        rng: &mut R,
    ) -> Result<Self> {
        let secret = match secret {
            Some(secret) => {
                secret.validate(&config)?;
                secret
            }
            None => Code::random(&config, rng),
        };
        log::debug!("new game with a {}-symbol secret", secret.len());

        Ok(Self {
            config,
            secret,
            history: Vec::new(),
            status: Status::Guessing,
        })
    }

    /// Score a guess without recording it
    ///
    /// # Errors
    /// Returns a code error if the guess does not fit the configuration.
    pub fn evaluate_guess(&self, guess: &Code) -> Result<Feedback> {
        guess.validate(&self.config)?;
        Ok(Feedback::calculate(self.secret.symbols(), guess.symbols()))
    }

    #[must_use]
    pub fn is_correct(&self, guess: &Code) -> bool {
        *guess == self.secret
    }

    /// Score a guess, record it and update the status
    ///
    /// # Errors
    /// Returns `NotGuessing` once the game is over, or a code error for an
    /// invalid guess. Invalid guesses do not use up the budget.
    pub fn submit(&mut self, guess: &Code) -> Result<Status> {
        if self.status.is_terminal() {
            return Err(MastermindError::NotGuessing(self.status));
        }
        let feedback = self.evaluate_guess(guess)?;

        self.history.push(GameEntry {
            guess: guess.clone(),
            feedback,
        });
        self.status = if feedback.is_perfect(self.config.secret_length) {
            Status::Won
        } else if self.history.len() >= self.config.max_guesses {
            Status::Exhausted
        } else {
            Status::Guessing
        };

        Ok(self.status)
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn history(&self) -> &[GameEntry] {
        &self.history
    }

    /// Guesses paired with their feedback, the form the solver replays
    #[must_use]
    pub fn observations(&self) -> Vec<(Code, Feedback)> {
        self.history
            .iter()
            .map(|entry| (entry.guess.clone(), entry.feedback))
            .collect()
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
