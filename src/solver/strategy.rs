//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax;
use crate::core::CodeSpace;

/// A strategy for choosing the next guess
///
/// The solver handles the trivial cases itself: a single remaining candidate
/// is always guessed directly, and an opening guess is only requested before
/// any feedback exists. Candidate lists are enumeration indices into the
/// space, sorted ascending.
pub trait Strategy {
    /// Fixed guess to open the game with, or `None` to run `select_guess`
    fn opening_guess(&self, _space: &CodeSpace) -> Option<usize> {
        None
    }

    /// Select the next guess given the remaining candidates
    ///
    /// Returns an enumeration index, or `None` if there are no candidates.
    fn select_guess(&self, space: &CodeSpace, candidates: &[usize]) -> Option<usize>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Worst-case minimization over the whole space (default)
    Minimax(MinimaxStrategy),
    /// First remaining candidate in enumeration order
    FirstCandidate(FirstCandidateStrategy),
    /// Uniformly random remaining candidate
    RandomCandidate(RandomCandidateStrategy),
}

impl Strategy for StrategyType {
    fn opening_guess(&self, space: &CodeSpace) -> Option<usize> {
        match self {
            Self::Minimax(s) => s.opening_guess(space),
            Self::FirstCandidate(s) => s.opening_guess(space),
            Self::RandomCandidate(s) => s.opening_guess(space),
        }
    }

    fn select_guess(&self, space: &CodeSpace, candidates: &[usize]) -> Option<usize> {
        match self {
            Self::Minimax(s) => s.select_guess(space, candidates),
            Self::FirstCandidate(s) => s.select_guess(space, candidates),
            Self::RandomCandidate(s) => s.select_guess(space, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first", "random"
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "first-candidate" => Self::FirstCandidate(FirstCandidateStrategy),
            "random" => Self::RandomCandidate(RandomCandidateStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::FirstCandidate(_) => "first",
            Self::RandomCandidate(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Minimax strategy
///
/// Opens with the first code of the space, then always selects the probe
/// that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn opening_guess(&self, space: &CodeSpace) -> Option<usize> {
        (!space.is_empty()).then_some(0)
    }

    fn select_guess(&self, space: &CodeSpace, candidates: &[usize]) -> Option<usize> {
        minimax::select_best_guess(space, candidates).map(|(best, worst_case)| {
            log::trace!(
                "minimax picked {} (worst case {worst_case} of {})",
                space.code(best),
                candidates.len()
            );
            best
        })
    }
}

/// First-candidate strategy
///
/// Guesses the first code still consistent with all feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(&self, _space: &CodeSpace, candidates: &[usize]) -> Option<usize> {
        candidates.first().copied()
    }
}

/// Random strategy
///
/// Randomly selects from the remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomCandidateStrategy;

impl Strategy for RandomCandidateStrategy {
    fn select_guess(&self, _space: &CodeSpace, candidates: &[usize]) -> Option<usize> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn setup_space() -> CodeSpace {
        CodeSpace::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn minimax_opens_with_first_code() {
        let space = setup_space();
        assert_eq!(MinimaxStrategy.opening_guess(&space), Some(0));
    }

    #[test]
    fn minimax_strategy_selects_guess() {
        let space = setup_space();
        let candidates: Vec<usize> = (0..space.len()).collect();

        let guess = MinimaxStrategy.select_guess(&space, &candidates);
        assert!(guess.is_some_and(|g| g < space.len()));
    }

    #[test]
    fn first_candidate_picks_lowest_index() {
        let space = setup_space();
        assert_eq!(
            FirstCandidateStrategy.select_guess(&space, &[17, 40, 99]),
            Some(17)
        );
        assert_eq!(FirstCandidateStrategy.opening_guess(&space), None);
        assert_eq!(FirstCandidateStrategy.select_guess(&space, &[]), None);
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let space = setup_space();
        let candidates = [3, 9, 27];

        for _ in 0..20 {
            let guess = RandomCandidateStrategy
                .select_guess(&space, &candidates)
                .unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(
            StrategyType::from_name("first"),
            StrategyType::FirstCandidate(FirstCandidateStrategy)
        );
        assert_eq!(
            StrategyType::from_name("random"),
            StrategyType::RandomCandidate(RandomCandidateStrategy)
        );
        assert_eq!(
            StrategyType::from_name("minimax"),
            StrategyType::Minimax(MinimaxStrategy)
        );
        assert_eq!(StrategyType::from_name("unknown"), StrategyType::default());
        assert_eq!(StrategyType::from_name("first").name(), "first");
    }

    #[test]
    fn strategy_type_dispatches() {
        let space = setup_space();
        let strategy = StrategyType::from_name("first");
        assert_eq!(strategy.select_guess(&space, &[5, 6]), Some(5));
        assert_eq!(strategy.opening_guess(&space), None);
        assert_eq!(StrategyType::default().opening_guess(&space), Some(0));
    }
}
