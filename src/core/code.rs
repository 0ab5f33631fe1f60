//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of symbols drawn from `1..=num_choices`.

use crate::config::GameConfig;
use crate::error::{MastermindError, Result};
use rand::Rng;
use std::fmt;

/// A sequence of symbols, compared position by position
///
/// Ordering is lexicographic over the symbols, which matches the enumeration
/// order of [`CodeSpace`](super::CodeSpace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<u8>);

impl Code {
    /// Create a code and validate it against a configuration
    ///
    /// # Errors
    /// Returns `WrongLength` if the length differs from `config.secret_length`,
    /// or `SymbolOutOfRange` if any symbol is outside `1..=config.num_choices`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::Code;
    ///
    /// let config = GameConfig::default();
    /// let code = Code::new(vec![2, 1, 2, 2], &config).unwrap();
    /// assert_eq!(code.to_string(), "2 1 2 2");
    ///
    /// assert!(Code::new(vec![1, 2, 3], &config).is_err());
    /// assert!(Code::new(vec![1, 2, 3, 7], &config).is_err());
    /// ```
    pub fn new(symbols: impl Into<Vec<u8>>, config: &GameConfig) -> Result<Self> {
        let code = Self(symbols.into());
        code.validate(config)?;
        Ok(code)
    }

    /// Wrap symbols that are already known to be in range
    pub(crate) const fn from_symbols_unchecked(symbols: Vec<u8>) -> Self {
        Self(symbols)
    }

    /// Parse a code from user input
    ///
    /// Symbols may be separated by whitespace or commas (`"2 1 2 2"`,
    /// `"2,1,2,2"`). With at most 9 symbols the separators may be omitted
    /// (`"2122"`); larger alphabets always need them.
    ///
    /// # Errors
    /// Returns `Unparsable` for non-numeric input, otherwise the same errors
    /// as [`Code::new`].
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let compact = tokens.len() == 1
            && config.num_choices <= 9
            && config.secret_length > 1
            && tokens[0].len() == config.secret_length
            && tokens[0].bytes().all(|b| b.is_ascii_digit());

        let symbols: Vec<u8> = if compact {
            tokens[0].bytes().map(|b| b - b'0').collect()
        } else {
            tokens
                .iter()
                .map(|token| token.parse::<u8>())
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| MastermindError::Unparsable(text.trim().to_string()))?
        };

        if symbols.is_empty() {
            return Err(MastermindError::Unparsable(text.trim().to_string()));
        }

        Self::new(symbols, config)
    }

    /// Generate a code with every position uniform in `1..=num_choices`
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let symbols = (0..config.secret_length)
            .map(|_| rng.random_range(1..=config.num_choices))
            .collect();
        Self(symbols)
    }

    /// Check length and symbol range against a configuration
    ///
    /// # Errors
    /// See [`Code::new`].
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        if self.0.len() != config.secret_length {
            return Err(MastermindError::WrongLength {
                got: self.0.len(),
                expected: config.secret_length,
            });
        }
        check_symbols(&self.0, config.num_choices)
    }

    /// The symbols of this code
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reject symbols outside `1..=num_choices`
pub(crate) fn check_symbols(symbols: &[u8], num_choices: u8) -> Result<()> {
    match symbols
        .iter()
        .position(|&value| value == 0 || value > num_choices)
    {
        Some(position) => Err(MastermindError::SymbolOutOfRange {
            position,
            value: symbols[position],
            num_choices,
        }),
        None => Ok(()),
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
