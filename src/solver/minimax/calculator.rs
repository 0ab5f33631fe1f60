//! Minimax worst-case calculation
//!
//! Given a probe code and the remaining candidates, computes how many
//! candidates survive in the largest feedback partition.

use crate::core::{Code, CodeSpace, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a probe
///
/// Returns the worst-case number of candidates left after guessing `probe`.
///
/// # Strategy
/// For each feedback the probe could receive:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::config::GameConfig;
/// use mastermind_solver::core::CodeSpace;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let space = CodeSpace::new(&GameConfig::default()).unwrap();
/// let everything: Vec<usize> = (0..space.len()).collect();
///
/// // 1 1 1 1 leaves 625 codes with no 1 at all
/// assert_eq!(calculate_max_remaining(&space, space.code(0), &everything), 625);
/// ```
#[must_use]
pub fn calculate_max_remaining(space: &CodeSpace, probe: &Code, candidates: &[usize]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let feedback_counts = group_by_feedback(space, probe, candidates);

    feedback_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they would give the probe
#[must_use]
pub fn group_by_feedback(
    space: &CodeSpace,
    probe: &Code,
    candidates: &[usize],
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::calculate(space.code(candidate).symbols(), probe.symbols());
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Feedback partition of the candidates, ordered by feedback
#[must_use]
pub fn partition_sizes(
    space: &CodeSpace,
    probe: &Code,
    candidates: &[usize],
) -> Vec<(Feedback, usize)> {
    let mut sizes: Vec<(Feedback, usize)> = group_by_feedback(space, probe, candidates)
        .into_iter()
        .collect();
    sizes.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn classic() -> CodeSpace {
        CodeSpace::new(&GameConfig::default()).unwrap()
    }

    fn index(space: &CodeSpace, symbols: &[u8]) -> usize {
        let code = Code::new(symbols.to_vec(), &GameConfig::default()).unwrap();
        space.index_of(&code).unwrap()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let space = classic();
        let a = index(&space, &[1, 1, 1, 1]);
        let b = index(&space, &[2, 2, 2, 2]);

        // Each candidate lands in its own partition
        let max = calculate_max_remaining(&space, space.code(a), &[a, b]);
        assert_eq!(max, 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let space = classic();
        let candidates = [
            index(&space, &[1, 1, 1, 1]),
            index(&space, &[2, 2, 2, 2]),
            index(&space, &[3, 3, 3, 3]),
        ];
        let probe = space.code(index(&space, &[6, 6, 6, 6]));

        assert_eq!(calculate_max_remaining(&space, probe, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let space = classic();
        assert_eq!(calculate_max_remaining(&space, space.code(0), &[]), 0);
    }

    #[test]
    fn knuth_opening_partitions() {
        let space = classic();
        let everything: Vec<usize> = (0..space.len()).collect();
        let probe = space.code(index(&space, &[1, 1, 2, 2]));

        // Knuth's 1 1 2 2 opening leaves at most 256 codes
        assert_eq!(calculate_max_remaining(&space, probe, &everything), 256);
    }

    #[test]
    fn groups_cover_every_candidate() {
        let space = classic();
        let everything: Vec<usize> = (0..space.len()).collect();
        let groups = group_by_feedback(&space, space.code(0), &everything);

        assert_eq!(groups.values().sum::<usize>(), 1296);
        assert_eq!(groups[&Feedback::new(0, 0)], 625);
        assert_eq!(groups[&Feedback::new(1, 0)], 500);
        assert_eq!(groups[&Feedback::new(2, 0)], 150);
        assert_eq!(groups[&Feedback::new(3, 0)], 20);
        assert_eq!(groups[&Feedback::new(4, 0)], 1);
    }

    #[test]
    fn partition_sizes_sorted_best_first() {
        let space = classic();
        let everything: Vec<usize> = (0..space.len()).collect();
        let sizes = partition_sizes(&space, space.code(0), &everything);

        assert_eq!(sizes.first(), Some(&(Feedback::new(4, 0), 1)));
        assert_eq!(sizes.last(), Some(&(Feedback::new(0, 0), 625)));
    }
}
