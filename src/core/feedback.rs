//! Feedback scoring
//!
//! Feedback is the pair `(exact, value)`:
//! - `exact`: positions where guess and secret hold the same symbol
//! - `value`: further matches after realigning the leftover symbols, each
//!   leftover occurrence usable at most once on either side

use super::Code;
use super::code::check_symbols;
use crate::error::{MastermindError, Result};
use std::fmt;

/// Score for a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    pub exact: u8,
    pub value: u8,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, value: u8) -> Self {
        Self { exact, value }
    }

    /// The winning feedback for codes of `length` positions
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Calculate feedback without validating the symbols
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and consume those positions on
    ///    both sides
    /// 2. Second pass: for each unconsumed guess symbol, consume the first
    ///    unconsumed secret occurrence of the same symbol
    ///
    /// Both codes must have the same length, at most 64.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// // Only one 1 in the secret, and it is already an exact match
    /// assert_eq!(Feedback::calculate(&[2, 1, 2, 2], &[1, 1, 1, 1]), Feedback::new(1, 0));
    /// assert_eq!(Feedback::calculate(&[2, 1, 2, 2], &[1, 2, 3, 2]), Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &[u8], guess: &[u8]) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "codes must have equal length");
        debug_assert!(secret.len() <= 64, "codes longer than 64 are unsupported");

        // Bit i set = secret position i already consumed
        let mut consumed: u64 = 0;
        // Bit i set = guess position i still open for a value match
        let mut open: u64 = 0;
        let mut exact = 0u8;

        for (i, (s, g)) in secret.iter().zip(guess).enumerate() {
            if s == g {
                exact += 1;
                consumed |= 1 << i;
            } else {
                open |= 1 << i;
            }
        }

        let mut value = 0u8;
        for (i, &g) in guess.iter().enumerate() {
            if open & (1 << i) == 0 {
                continue;
            }
            let found = secret
                .iter()
                .enumerate()
                .position(|(j, &s)| consumed & (1 << j) == 0 && s == g);
            if let Some(j) = found {
                value += 1;
                consumed |= 1 << j;
            }
        }

        Self { exact, value }
    }

    /// Check that this feedback can occur for codes of `length` positions
    ///
    /// # Errors
    /// Returns `InvalidFeedback` if `exact + value > length`, or if all but
    /// one position is exact and the remaining one is a value match.
    pub fn validate(self, length: usize) -> Result<Self> {
        let total = self.exact as usize + self.value as usize;
        let impossible_swap = length > 0 && self.exact as usize == length - 1 && self.value == 1;
        if total > length || impossible_swap {
            return Err(MastermindError::InvalidFeedback {
                exact: self.exact,
                value: self.value,
                length,
            });
        }
        Ok(self)
    }

    /// Parse feedback typed as two numbers, e.g. `"1 2"` or `"1,2"`
    ///
    /// # Errors
    /// Returns `Unparsable` unless the input is exactly two numbers, or
    /// `InvalidFeedback` if they cannot occur for `length` positions.
    pub fn parse(text: &str, length: usize) -> Result<Self> {
        let numbers: Vec<u8> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| MastermindError::Unparsable(text.trim().to_string()))?;

        match numbers.as_slice() {
            &[exact, value] => Self::new(exact, value).validate(length),
            _ => Err(MastermindError::Unparsable(text.trim().to_string())),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.value)
    }
}

/// Score `guess` against `secret`
///
/// # Errors
/// Returns `WrongLength` if the codes differ in length and
/// `SymbolOutOfRange` if either contains a symbol outside `1..=num_choices`.
///
/// # Examples
/// ```
/// use mastermind_solver::config::GameConfig;
/// use mastermind_solver::core::{Code, Feedback, score};
///
/// let config = GameConfig::default();
/// let secret = Code::new(vec![1, 2, 3, 4], &config).unwrap();
/// let feedback = score(&secret, &secret, config.num_choices).unwrap();
/// assert_eq!(feedback, Feedback::new(4, 0));
/// ```
pub fn score(secret: &Code, guess: &Code, num_choices: u8) -> Result<Feedback> {
    if secret.len() != guess.len() {
        return Err(MastermindError::WrongLength {
            got: guess.len(),
            expected: secret.len(),
        });
    }
    if secret.len() > crate::config::MAX_SECRET_LENGTH {
        return Err(MastermindError::InvalidConfig(format!(
            "codes longer than {} are unsupported",
            crate::config::MAX_SECRET_LENGTH
        )));
    }
    check_symbols(secret.symbols(), num_choices)?;
    check_symbols(guess.symbols(), num_choices)?;

    Ok(Feedback::calculate(secret.symbols(), guess.symbols()))
}
