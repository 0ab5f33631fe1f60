//! The full alphabet-product space of codes
//!
//! Codes are enumerated in lexicographic order with the last position
//! changing fastest, so index 0 is all `1`s and the last index is all
//! `num_choices`.

use super::Code;
use crate::config::GameConfig;
use crate::error::{MastermindError, Result};

/// Largest space that will be enumerated
pub const MAX_SPACE_SIZE: usize = 1 << 20;

/// Every code for a given alphabet size and length
#[derive(Debug, Clone)]
pub struct CodeSpace {
    num_choices: u8,
    secret_length: usize,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate all `num_choices^secret_length` codes
    ///
    /// # Errors
    /// Returns `SpaceTooLarge` if the space exceeds [`MAX_SPACE_SIZE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::CodeSpace;
    ///
    /// let space = CodeSpace::new(&GameConfig::default()).unwrap();
    /// assert_eq!(space.len(), 1296);
    /// assert_eq!(space.code(0).symbols(), &[1, 1, 1, 1]);
    /// assert_eq!(space.code(1295).symbols(), &[6, 6, 6, 6]);
    /// ```
    pub fn new(config: &GameConfig) -> Result<Self> {
        let size = Self::size_of(config.num_choices, config.secret_length)
            .filter(|&size| size <= MAX_SPACE_SIZE)
            .ok_or(MastermindError::SpaceTooLarge {
                num_choices: config.num_choices,
                secret_length: config.secret_length,
            })?;

        let mut codes = Vec::with_capacity(size);
        let mut current = vec![1u8; config.secret_length];

        loop {
            codes.push(Code::from_symbols_unchecked(current.clone()));

            // Odometer increment, last position fastest
            let Some(position) = current.iter().rposition(|&s| s < config.num_choices) else {
                break;
            };
            current[position] += 1;
            for symbol in &mut current[position + 1..] {
                *symbol = 1;
            }
        }

        debug_assert_eq!(codes.len(), size);

        Ok(Self {
            num_choices: config.num_choices,
            secret_length: config.secret_length,
            codes,
        })
    }

    /// Size of the space, or `None` on overflow
    #[must_use]
    pub fn size_of(num_choices: u8, secret_length: usize) -> Option<usize> {
        let exponent = u32::try_from(secret_length).ok()?;
        usize::from(num_choices).checked_pow(exponent)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code at an enumeration index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn code(&self, index: usize) -> &Code {
        &self.codes[index]
    }

    /// Enumeration index of a code, or `None` if it is not part of this space
    #[must_use]
    pub fn index_of(&self, code: &Code) -> Option<usize> {
        if code.len() != self.secret_length {
            return None;
        }
        let base = usize::from(self.num_choices);
        code.symbols().iter().try_fold(0usize, |index, &symbol| {
            (1..=self.num_choices)
                .contains(&symbol)
                .then(|| index * base + usize::from(symbol - 1))
        })
    }

    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    #[must_use]
    pub const fn num_choices(&self) -> u8 {
        self.num_choices
    }

    #[must_use]
    pub const fn secret_length(&self) -> usize {
        self.secret_length
    }

    /// Check that this space was built for the given configuration
    #[must_use]
    pub const fn matches(&self, config: &GameConfig) -> bool {
        self.num_choices == config.num_choices && self.secret_length == config.secret_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_space_size() {
        let space = CodeSpace::new(&GameConfig::default()).unwrap();
        assert_eq!(space.len(), 1296);
        assert!(!space.is_empty());
    }

    #[test]
    fn enumeration_is_lexicographic() {
        let config = GameConfig::new(3, 2, 12).unwrap();
        let space = CodeSpace::new(&config).unwrap();
        let listed: Vec<&[u8]> = space.iter().map(Code::symbols).collect();
        assert_eq!(
            listed,
            vec![
                &[1, 1][..],
                &[1, 2],
                &[1, 3],
                &[2, 1],
                &[2, 2],
                &[2, 3],
                &[3, 1],
                &[3, 2],
                &[3, 3]
            ]
        );
        assert!(space.codes().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn index_of_round_trips() {
        let space = CodeSpace::new(&GameConfig::default()).unwrap();
        for (i, code) in space.iter().enumerate() {
            assert_eq!(space.index_of(code), Some(i));
        }
    }

    #[test]
    fn index_of_foreign_code() {
        let space = CodeSpace::new(&GameConfig::default()).unwrap();
        let config = GameConfig::new(8, 4, 12).unwrap();
        let outside = Code::new(vec![1, 7, 1, 1], &config).unwrap();
        assert_eq!(space.index_of(&outside), None);

        let short = Code::new(vec![1, 1, 1], &GameConfig::new(6, 3, 12).unwrap()).unwrap();
        assert_eq!(space.index_of(&short), None);
    }

    #[test]
    fn single_symbol_space() {
        let config = GameConfig::new(1, 5, 12).unwrap();
        let space = CodeSpace::new(&config).unwrap();
        assert_eq!(space.len(), 1);
        assert_eq!(space.code(0).symbols(), &[1, 1, 1, 1, 1]);
    }

    #[test]
    fn too_large_space_rejected() {
        let config = GameConfig::new(25, 15, 12).unwrap();
        assert!(matches!(
            CodeSpace::new(&config),
            Err(MastermindError::SpaceTooLarge { .. })
        ));
        assert_eq!(CodeSpace::size_of(25, 15), None);
        assert_eq!(CodeSpace::size_of(6, 4), Some(1296));
    }

    #[test]
    fn matches_config() {
        let space = CodeSpace::new(&GameConfig::default()).unwrap();
        assert!(space.matches(&GameConfig::default()));
        assert!(!space.matches(&GameConfig::new(5, 4, 12).unwrap()));
    }
}
