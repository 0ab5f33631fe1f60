//! Main Mastermind solver interface

use super::strategy::Strategy;
use crate::config::GameConfig;
use crate::core::{Code, CodeSpace, Feedback};
use crate::error::{MastermindError, Result};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// More guesses may be made
    Guessing,
    /// The secret was guessed
    Won,
    /// The guess budget ran out first
    Exhausted,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Guessing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Guessing => "guessing",
            Self::Won => "won",
            Self::Exhausted => "exhausted",
        })
    }
}

/// One recorded guess and what it did to the candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// The capability every automated code-breaker offers its drivers
pub trait CodeBreaker {
    /// Produce the next guess
    ///
    /// # Errors
    /// Returns `NotGuessing` once the game is over.
    fn next_guess(&mut self) -> Result<Code>;

    /// Report the feedback for the last guess and advance
    ///
    /// # Errors
    /// Returns a protocol error if the game is over, no guess is pending or
    /// `guess` is not the pending guess, and an input error for impossible
    /// feedback.
    fn record_feedback(&mut self, guess: &Code, feedback: Feedback) -> Result<Status>;

    fn status(&self) -> Status;
}

/// Main Mastermind solver
///
/// Owns the candidate set (codes consistent with every feedback so far) and
/// the turn history for one game. The candidate set only ever shrinks.
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    config: GameConfig,
    space: Arc<CodeSpace>,
    secret: Option<Code>,
    candidates: Vec<usize>,
    history: Vec<Turn>,
    pending: Option<usize>,
    status: Status,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver, enumerating the code space for `config`
    ///
    /// With a secret the solver can play itself through [`Solver::play`];
    /// without one the caller supplies feedback through
    /// [`Solver::record_feedback`].
    ///
    /// # Errors
    /// Returns `SpaceTooLarge` if the space cannot be enumerated, or a code
    /// error if the secret does not fit `config`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::Code;
    /// use mastermind_solver::solver::{MinimaxStrategy, Solver, Status};
    ///
    /// let config = GameConfig::default();
    /// let secret = Code::new(vec![2, 1, 2, 2], &config).unwrap();
    /// let mut solver = Solver::new(MinimaxStrategy, config, Some(secret)).unwrap();
    ///
    /// assert_eq!(solver.play().unwrap(), Status::Won);
    /// assert!(solver.guesses_made() <= 8);
    /// ```
    pub fn new(strategy: S, config: GameConfig, secret: Option<Code>) -> Result<Self> {
        let space = Arc::new(CodeSpace::new(&config)?);
        Self::with_space(strategy, config, space, secret)
    }

    /// Create a solver over an already enumerated space
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the space was built for a different
    /// alphabet or length, or a code error if the secret does not fit.
    pub fn with_space(
        strategy: S,
        config: GameConfig,
        space: Arc<CodeSpace>,
        secret: Option<Code>,
    ) -> Result<Self> {
        if !space.matches(&config) {
            return Err(MastermindError::InvalidConfig(format!(
                "code space is {}^{}, configuration is {}^{}",
                space.num_choices(),
                space.secret_length(),
                config.num_choices,
                config.secret_length
            )));
        }
        if let Some(secret) = &secret {
            secret.validate(&config)?;
        }

        Ok(Self {
            strategy,
            config,
            candidates: (0..space.len()).collect(),
            space,
            secret,
            history: Vec::new(),
            pending: None,
            status: Status::Guessing,
        })
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Get the next guess
    ///
    /// Calling this again before feedback is recorded returns the same guess.
    ///
    /// # Errors
    /// Returns `NotGuessing` once the game is won or exhausted.
    ///
    /// # Panics
    /// Panics if the candidate set is empty, which would mean the secret was
    /// filtered out by its own feedback.
    pub fn next_guess(&mut self) -> Result<Code> {
        self.ensure_guessing()?;

        let index = match self.pending {
            Some(index) => index,
            None => {
                let index = self.choose_guess();
                self.pending = Some(index);
                index
            }
        };

        Ok(self.space.code(index).clone())
    }

    /// Record the feedback for the pending guess and filter the candidates
    ///
    /// Feedback that no remaining candidate could produce is rejected with
    /// `InconsistentFeedback` and leaves the solver unchanged.
    ///
    /// # Errors
    /// See [`CodeBreaker::record_feedback`].
    pub fn record_feedback(&mut self, guess: &Code, feedback: Feedback) -> Result<Status> {
        self.ensure_guessing()?;

        let pending = self.pending.ok_or(MastermindError::NoPendingGuess)?;
        guess.validate(&self.config)?;
        let expected = self.space.code(pending);
        if guess != expected {
            return Err(MastermindError::UnexpectedGuess {
                got: guess.to_string(),
                expected: expected.to_string(),
            });
        }
        let feedback = feedback.validate(self.config.secret_length)?;

        let remaining = filter_candidates(&self.space, &self.candidates, guess, feedback);
        if remaining.is_empty() {
            return Err(MastermindError::InconsistentFeedback(feedback.to_string()));
        }

        let turn = Turn {
            guess: guess.clone(),
            feedback,
            candidates_before: self.candidates.len(),
            candidates_after: remaining.len(),
        };
        log::debug!(
            "turn {}: {} -> {}, candidates {} -> {}",
            self.history.len() + 1,
            turn.guess,
            turn.feedback,
            turn.candidates_before,
            turn.candidates_after
        );

        self.candidates = remaining;
        self.history.push(turn);
        self.pending = None;

        self.status = if feedback.is_perfect(self.config.secret_length) {
            Status::Won
        } else if self.history.len() >= self.config.max_guesses {
            Status::Exhausted
        } else {
            Status::Guessing
        };

        Ok(self.status)
    }

    /// Guess, score against the secret and record, in one step
    ///
    /// # Errors
    /// Returns `NoSecret` if the solver was built without a secret, or
    /// `NotGuessing` once the game is over.
    pub fn play_turn(&mut self) -> Result<Turn> {
        let secret = self.secret.clone().ok_or(MastermindError::NoSecret)?;
        let guess = self.next_guess()?;
        let feedback = Feedback::calculate(secret.symbols(), guess.symbols());

        let turn_index = self.history.len();
        self.record_feedback(&guess, feedback)?;
        debug_assert!(
            self.contains_candidate(&secret),
            "secret {secret} filtered out by its own feedback"
        );

        Ok(self.history[turn_index].clone())
    }

    /// Play turns until the game is won or the budget is spent
    ///
    /// # Errors
    /// Returns `NoSecret` if the solver was built without a secret.
    pub fn play(&mut self) -> Result<Status> {
        while self.status == Status::Guessing {
            self.play_turn()?;
        }
        Ok(self.status)
    }

    /// Remove the last turn and rebuild the candidate set from history
    ///
    /// Reopens a finished game. Returns the removed turn, or `None` if
    /// nothing has been recorded.
    pub fn undo_last(&mut self) -> Option<Turn> {
        let turn = self.history.pop()?;

        let history: Vec<(Code, Feedback)> = self
            .history
            .iter()
            .map(|t| (t.guess.clone(), t.feedback))
            .collect();
        self.candidates = candidates_consistent_with(&self.space, &history);
        self.pending = None;
        self.status = Status::Guessing;

        Some(turn)
    }

    /// Start over with the full candidate set
    pub fn reset(&mut self) {
        self.candidates = (0..self.space.len()).collect();
        self.history.clear();
        self.pending = None;
        self.status = Status::Guessing;
    }

    fn ensure_guessing(&self) -> Result<()> {
        match self.status {
            Status::Guessing => Ok(()),
            status => Err(MastermindError::NotGuessing(status)),
        }
    }

    fn choose_guess(&self) -> usize {
        assert!(
            !self.candidates.is_empty(),
            "candidate set is empty, the secret was filtered out"
        );

        select_next_guess(
            &self.strategy,
            &self.space,
            &self.candidates,
            self.history.is_empty(),
        )
        .unwrap_or(self.candidates[0])
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.history.len())
    }

    /// Enumeration indices of the remaining candidates, ascending
    #[must_use]
    pub fn candidate_indices(&self) -> &[usize] {
        &self.candidates
    }

    pub fn candidates(&self) -> impl Iterator<Item = &Code> {
        self.candidates.iter().map(|&i| self.space.code(i))
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn contains_candidate(&self, code: &Code) -> bool {
        self.space
            .index_of(code)
            .is_some_and(|index| self.candidates.binary_search(&index).is_ok())
    }

    /// The guess waiting for feedback, if any
    #[must_use]
    pub fn pending_guess(&self) -> Option<&Code> {
        self.pending.map(|index| self.space.code(index))
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn space(&self) -> &Arc<CodeSpace> {
        &self.space
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: Strategy> CodeBreaker for Solver<S> {
    fn next_guess(&mut self) -> Result<Code> {
        Self::next_guess(self)
    }

    fn record_feedback(&mut self, guess: &Code, feedback: Feedback) -> Result<Status> {
        Self::record_feedback(self, guess, feedback)
    }

    fn status(&self) -> Status {
        Self::status(self)
    }
}

/// Keep the candidates that would have given `feedback` to `guess`
///
/// Order is preserved, so sorted input gives sorted output.
#[must_use]
pub fn filter_candidates(
    space: &CodeSpace,
    candidates: &[usize],
    guess: &Code,
    feedback: Feedback,
) -> Vec<usize> {
    candidates
        .par_iter()
        .copied()
        .filter(|&candidate| {
            Feedback::calculate(space.code(candidate).symbols(), guess.symbols()) == feedback
        })
        .collect()
}

/// The guess the solver would make for `candidates`
///
/// A sole remaining candidate is guessed directly. On the first turn the
/// strategy's opening is used when it has one. Returns `None` only when
/// `candidates` is empty.
#[must_use]
pub fn select_next_guess<S: Strategy>(
    strategy: &S,
    space: &CodeSpace,
    candidates: &[usize],
    first_turn: bool,
) -> Option<usize> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        [first, ..] => {
            if first_turn && let Some(opening) = strategy.opening_guess(space) {
                return Some(opening);
            }
            Some(strategy.select_guess(space, candidates).unwrap_or(*first))
        }
    }
}

/// Filter the whole space to codes consistent with a guess history
#[must_use]
pub fn candidates_consistent_with(space: &CodeSpace, history: &[(Code, Feedback)]) -> Vec<usize> {
    (0..space.len())
        .into_par_iter()
        .filter(|&candidate| {
            let code = space.code(candidate);
            history.iter().all(|(guess, observed)| {
                Feedback::calculate(code.symbols(), guess.symbols()) == *observed
            })
        })
        .collect()
}
