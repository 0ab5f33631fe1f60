//! Code analysis command
//!
//! Shows how a probe code would split the full code space by feedback.

use crate::core::{Code, CodeSpace, Feedback};
use crate::solver::minimax::partition_sizes;

/// Result of analyzing a probe
pub struct AnalysisResult {
    pub probe: Code,
    /// Partition sizes, perfect feedback first
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Partition every code of `space` by the feedback `probe` would receive
///
/// The probe must fit the space; parse it with the same configuration.
#[must_use]
pub fn analyze_code(space: &CodeSpace, probe: &Code) -> AnalysisResult {
    let candidates: Vec<usize> = (0..space.len()).collect();
    let partitions = partition_sizes(space, probe, &candidates);

    let total_candidates = candidates.len();
    let worst_case = partitions.iter().map(|&(_, size)| size).max().unwrap_or(0);
    // A secret lands in a partition with probability proportional to its size
    let expected_remaining = if total_candidates > 0 {
        partitions
            .iter()
            .map(|&(_, size)| (size * size) as f64)
            .sum::<f64>()
            / total_candidates as f64
    } else {
        0.0
    };

    AnalysisResult {
        probe: probe.clone(),
        partitions,
        worst_case,
        expected_remaining,
        total_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn classic() -> CodeSpace {
        CodeSpace::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn analyze_all_ones() {
        let space = classic();
        let result = analyze_code(&space, space.code(0));

        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.worst_case, 625);
        assert_eq!(result.partitions.len(), 5);
        assert_eq!(result.partitions[0], (Feedback::perfect(4), 1));
    }

    #[test]
    fn analyze_best_opening() {
        let space = classic();
        let probe = Code::new(vec![1, 1, 2, 2], &GameConfig::default()).unwrap();
        let result = analyze_code(&space, &probe);

        assert_eq!(result.worst_case, 256);
        assert_eq!(
            result.partitions.iter().map(|&(_, n)| n).sum::<usize>(),
            1296
        );
    }

    #[test]
    fn expected_remaining_bounded_by_worst_case() {
        let space = classic();
        let probe = Code::new(vec![1, 2, 3, 4], &GameConfig::default()).unwrap();
        let result = analyze_code(&space, &probe);

        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.worst_case as f64);
    }
}
