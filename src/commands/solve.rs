//! Code solving command
//!
//! Plays the solver against a hidden secret and records the solution path.

use crate::core::{Code, Feedback};
use crate::error::Result;
use crate::game::Game;
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{Solver, Status, Strategy};

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest feedback partition the guess could have left
    pub worst_case: usize,
}

/// Solve `secret` with a solver that does not know it
///
/// The solver only sees feedback, exactly as it would against a human
/// code-maker. The solver should be fresh; its configuration decides the
/// guess budget.
///
/// # Errors
/// Returns an error if the secret does not fit the solver's configuration.
pub fn solve_code<S: Strategy>(solver: &mut Solver<S>, secret: Code) -> Result<SolveResult> {
    let mut game = Game::new(*solver.config(), Some(secret), &mut rand::rng())?;
    let mut steps = Vec::new();

    while solver.status() == Status::Guessing {
        let candidates_before = solver.candidate_count();
        let guess = solver.next_guess()?;
        let worst_case =
            calculate_max_remaining(solver.space(), &guess, solver.candidate_indices());

        let feedback = game.evaluate_guess(&guess)?;
        let game_status = game.submit(&guess)?;
        let status = solver.record_feedback(&guess, feedback)?;
        debug_assert_eq!(status, game_status);

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: solver.candidate_count(),
            worst_case,
        });
    }

    log::info!(
        "solved {} in {} guesses ({})",
        game.secret(),
        steps.len(),
        solver.status()
    );

    Ok(SolveResult {
        success: solver.status() == Status::Won,
        secret: game.secret().clone(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::error::MastermindError;
    use crate::solver::MinimaxStrategy;

    fn code(symbols: &[u8]) -> Code {
        Code::new(symbols.to_vec(), &GameConfig::default()).unwrap()
    }

    fn fresh_solver(config: GameConfig) -> Solver<MinimaxStrategy> {
        Solver::new(MinimaxStrategy, config, None).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let mut solver = fresh_solver(GameConfig::default());
        let result = solve_code(&mut solver, code(&[2, 1, 2, 2])).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.last().unwrap().guess, code(&[2, 1, 2, 2]));
        assert_eq!(
            result.steps.last().unwrap().feedback,
            Feedback::perfect(4)
        );
    }

    #[test]
    fn first_step_matches_opening_partition() {
        let mut solver = fresh_solver(GameConfig::default());
        let result = solve_code(&mut solver, code(&[2, 1, 2, 2])).unwrap();

        let first = &result.steps[0];
        assert_eq!(first.guess, code(&[1, 1, 1, 1]));
        assert_eq!(first.feedback, Feedback::new(1, 0));
        assert_eq!(first.candidates_before, 1296);
        assert_eq!(first.candidates_after, 500);
        assert_eq!(first.worst_case, 625);
    }

    #[test]
    fn steps_never_grow_candidates() {
        let mut solver = fresh_solver(GameConfig::default());
        let result = solve_code(&mut solver, code(&[6, 5, 4, 3])).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after <= step.worst_case);
        }
    }

    #[test]
    fn respects_guess_budget() {
        let config = GameConfig::default().with_max_guesses(2).unwrap();
        let mut solver = fresh_solver(config);
        let result = solve_code(&mut solver, code(&[2, 1, 2, 2])).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(solver.status(), Status::Exhausted);
    }

    #[test]
    fn rejects_secret_of_wrong_shape() {
        let mut solver = fresh_solver(GameConfig::default());
        let secret = Code::new(vec![1, 2, 3], &GameConfig::new(6, 3, 12).unwrap()).unwrap();

        assert!(matches!(
            solve_code(&mut solver, secret),
            Err(MastermindError::WrongLength { .. })
        ));
    }
}
