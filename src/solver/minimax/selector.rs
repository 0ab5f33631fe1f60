//! Minimax-based guess selection
//!
//! Probes the whole code space, not just the candidates, and picks the probe
//! whose worst-case partition is smallest.

use super::calculator::calculate_max_remaining;
use crate::core::CodeSpace;
use rayon::prelude::*;

/// Select best probe by minimizing worst-case remaining candidates
///
/// Returns the enumeration index of the chosen probe and its worst case, or
/// `None` if there are no candidates.
///
/// Ties are broken by preferring a probe that is itself a candidate, then
/// by enumeration order. The reduction compares the full
/// `(worst case, not a candidate, index)` key, so the parallel evaluation
/// always produces the same answer.
///
/// `candidates` must be sorted ascending.
///
/// # Examples
/// ```
/// use mastermind_solver::config::GameConfig;
/// use mastermind_solver::core::CodeSpace;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let space = CodeSpace::new(&GameConfig::new(3, 2, 12).unwrap()).unwrap();
/// let candidates = vec![0, 4]; // 1 1 and 2 2
///
/// let (best, worst_case) = select_best_guess(&space, &candidates).unwrap();
/// assert_eq!(worst_case, 1);
/// assert_eq!(best, 0); // 1 1 separates both and is a candidate
/// ```
#[must_use]
pub fn select_best_guess(space: &CodeSpace, candidates: &[usize]) -> Option<(usize, usize)> {
    if candidates.is_empty() {
        return None;
    }
    debug_assert!(candidates.windows(2).all(|w| w[0] < w[1]));

    (0..space.len())
        .into_par_iter()
        .map(|probe| {
            let max_remaining = calculate_max_remaining(space, space.code(probe), candidates);
            let outsider = candidates.binary_search(&probe).is_err();
            (max_remaining, outsider, probe)
        })
        .min()
        .map(|(max_remaining, _, probe)| (probe, max_remaining))
}
