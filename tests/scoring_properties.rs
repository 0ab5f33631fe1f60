//! Property-based tests for scoring and candidate filtering.

use mastermind_solver::config::GameConfig;
use mastermind_solver::core::{Code, CodeSpace, Feedback, score};
use mastermind_solver::solver::{FirstCandidateStrategy, Solver, filter_candidates};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// A configuration plus two codes that fit it
fn arb_code_pair() -> impl Strategy<Value = (GameConfig, Code, Code)> {
    (1u8..=9, 1usize..=64).prop_flat_map(|(num_choices, length)| {
        let symbols = proptest::collection::vec(1..=num_choices, length);
        (symbols.clone(), symbols).prop_map(move |(secret, guess)| {
            let config = GameConfig::new(num_choices, length, 12).unwrap();
            (
                config,
                Code::new(secret, &config).unwrap(),
                Code::new(guess, &config).unwrap(),
            )
        })
    })
}

/// A code in the classic 6-symbol, 4-position game
fn arb_classic_code() -> impl Strategy<Value = Code> {
    proptest::collection::vec(1u8..=6, 4)
        .prop_map(|symbols| Code::new(symbols, &GameConfig::default()).unwrap())
}

/// Matches counted without position, as a multiset intersection
fn common_symbols(a: &Code, b: &Code) -> usize {
    (1..=9u8)
        .map(|symbol| {
            let in_a = a.symbols().iter().filter(|&&s| s == symbol).count();
            let in_b = b.symbols().iter().filter(|&&s| s == symbol).count();
            in_a.min(in_b)
        })
        .sum()
}

// =============================================================================
// Scoring
// =============================================================================

proptest! {
    #[test]
    fn self_score_is_perfect((config, secret, _) in arb_code_pair()) {
        let feedback = score(&secret, &secret, config.num_choices).unwrap();
        prop_assert_eq!(feedback, Feedback::perfect(secret.len()));
        prop_assert!(feedback.is_perfect(config.secret_length));
    }

    #[test]
    fn feedback_never_exceeds_length((config, secret, guess) in arb_code_pair()) {
        let feedback = score(&secret, &guess, config.num_choices).unwrap();
        prop_assert!(usize::from(feedback.exact) + usize::from(feedback.value) <= secret.len());
        prop_assert!(feedback.validate(secret.len()).is_ok());
    }

    #[test]
    fn scoring_is_symmetric((config, secret, guess) in arb_code_pair()) {
        prop_assert_eq!(
            score(&secret, &guess, config.num_choices).unwrap(),
            score(&guess, &secret, config.num_choices).unwrap()
        );
    }

    #[test]
    fn total_matches_equal_shared_symbols((config, secret, guess) in arb_code_pair()) {
        let feedback = score(&secret, &guess, config.num_choices).unwrap();
        let exact = secret
            .symbols()
            .iter()
            .zip(guess.symbols())
            .filter(|(s, g)| s == g)
            .count();

        prop_assert_eq!(usize::from(feedback.exact), exact);
        prop_assert_eq!(
            usize::from(feedback.exact) + usize::from(feedback.value),
            common_symbols(&secret, &guess)
        );
    }

    #[test]
    fn out_of_range_symbols_rejected(
        (config, secret, _) in arb_code_pair(),
        position in 0usize..64,
    ) {
        let mut symbols = secret.symbols().to_vec();
        let position = position % symbols.len();
        symbols[position] = config.num_choices + 1;

        // Build the bad guess under a wider alphabet so construction succeeds
        let wide = GameConfig::new(config.num_choices + 1, config.secret_length, 12).unwrap();
        let bad = Code::new(symbols, &wide).unwrap();

        prop_assert!(score(&secret, &bad, config.num_choices).is_err());
    }
}

// =============================================================================
// Filtering
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn filtering_keeps_secret_and_shrinks(
        secret in arb_classic_code(),
        guesses in proptest::collection::vec(arb_classic_code(), 1..6),
    ) {
        let space = CodeSpace::new(&GameConfig::default()).unwrap();
        let mut candidates: Vec<usize> = (0..space.len()).collect();
        let secret_index = space.index_of(&secret).unwrap();

        for guess in &guesses {
            let feedback = Feedback::calculate(secret.symbols(), guess.symbols());
            let next = filter_candidates(&space, &candidates, guess, feedback);

            prop_assert!(next.len() <= candidates.len());
            prop_assert!(next.contains(&secret_index));
            prop_assert!(next.iter().all(|i| candidates.contains(i)));
            candidates = next;
        }
    }

    #[test]
    fn solver_turns_keep_secret(secret in arb_classic_code()) {
        let config = GameConfig::default();
        let mut solver = Solver::new(FirstCandidateStrategy, config, Some(secret.clone())).unwrap();

        while !solver.status().is_terminal() {
            let turn = solver.play_turn().unwrap();
            prop_assert!(turn.candidates_after <= turn.candidates_before);
            prop_assert!(solver.contains_candidate(&secret));
        }
    }
}
