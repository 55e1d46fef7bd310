//! Game configuration
//!
//! Fixed for the lifetime of a game; `reset` keeps it intact.

use super::code::{MAX_CODE_LENGTH, MAX_COLORS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest code space a game will enumerate
///
/// Each minimax turn scores every unused guess against every candidate.
pub const MAX_SPACE_SIZE: usize = 100_000;

/// Error type for invalid game setups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Code length must be at least 1")]
    ZeroCodeLength,

    #[error("Code length must be at most {max}, got {actual}")]
    CodeTooLong { actual: usize, max: usize },

    #[error("Number of colors must be between 1 and {max}, got {actual}")]
    InvalidColorCount { actual: usize, max: usize },

    #[error("Cannot draw {code_length} distinct colors from {num_colors} without duplicates")]
    NotEnoughColors {
        code_length: usize,
        num_colors: usize,
    },

    #[error("Code space of {size} codes exceeds the limit of {max}")]
    SpaceTooLarge { size: usize, max: usize },

    #[error("Guess budget must be at least 1")]
    ZeroGuessBudget,

    #[error("Palette is empty")]
    EmptyPalette,

    #[error("Color '{0}' appears more than once")]
    DuplicateColor(String),

    #[error("Alphabet has {actual} colors, configuration expects {expected}")]
    AlphabetSizeMismatch { expected: usize, actual: usize },
}

/// Parameters of a single Mastermind game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub code_length: usize,
    pub num_colors: usize,
    pub max_guesses: usize,
    pub duplicates_allowed: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(
        code_length: usize,
        num_colors: usize,
        max_guesses: usize,
        duplicates_allowed: bool,
    ) -> Self {
        Self {
            code_length,
            num_colors,
            max_guesses,
            duplicates_allowed,
        }
    }

    /// Check that the configuration describes a playable game
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if self.code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::CodeTooLong {
                actual: self.code_length,
                max: MAX_CODE_LENGTH,
            });
        }
        if self.num_colors == 0 || self.num_colors > MAX_COLORS {
            return Err(ConfigError::InvalidColorCount {
                actual: self.num_colors,
                max: MAX_COLORS,
            });
        }
        if !self.duplicates_allowed && self.code_length > self.num_colors {
            return Err(ConfigError::NotEnoughColors {
                code_length: self.code_length,
                num_colors: self.num_colors,
            });
        }
        let size = self.space_size();
        if size > MAX_SPACE_SIZE {
            return Err(ConfigError::SpaceTooLarge {
                size,
                max: MAX_SPACE_SIZE,
            });
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroGuessBudget);
        }
        Ok(())
    }

    /// Size of the code space: N^L, or N!/(N-L)! without duplicates
    ///
    /// Saturates at `usize::MAX` for absurd configurations.
    #[must_use]
    pub const fn space_size(&self) -> usize {
        let mut size = 1usize;
        let mut position = 0;
        while position < self.code_length && size != 0 && size != usize::MAX {
            let choices = if self.duplicates_allowed {
                self.num_colors
            } else {
                self.num_colors.saturating_sub(position)
            };
            size = size.saturating_mul(choices);
            position += 1;
        }
        size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 6, 12, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_mastermind() {
        let config = GameConfig::default();
        assert_eq!(config.code_length, 4);
        assert_eq!(config.num_colors, 6);
        assert_eq!(config.max_guesses, 12);
        assert!(config.duplicates_allowed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn space_size_with_duplicates() {
        assert_eq!(GameConfig::default().space_size(), 1296);
    }

    #[test]
    fn space_size_without_duplicates() {
        let config = GameConfig::new(4, 6, 12, false);
        assert_eq!(config.space_size(), 360);
    }

    #[test]
    fn validate_rejects_bad_configs() {
        assert_eq!(
            GameConfig::new(0, 6, 12, true).validate(),
            Err(ConfigError::ZeroCodeLength)
        );
        assert!(matches!(
            GameConfig::new(4, 0, 12, true).validate(),
            Err(ConfigError::InvalidColorCount { .. })
        ));
        assert!(matches!(
            GameConfig::new(4, 17, 12, true).validate(),
            Err(ConfigError::InvalidColorCount { .. })
        ));
        assert!(matches!(
            GameConfig::new(5, 4, 12, false).validate(),
            Err(ConfigError::NotEnoughColors { .. })
        ));
        assert_eq!(
            GameConfig::new(4, 6, 0, true).validate(),
            Err(ConfigError::ZeroGuessBudget)
        );
    }

    #[test]
    fn validate_rejects_overlong_codes() {
        assert_eq!(
            GameConfig::new(256, 2, 12, true).validate(),
            Err(ConfigError::CodeTooLong {
                actual: 256,
                max: MAX_CODE_LENGTH
            })
        );
    }

    #[test]
    fn validate_rejects_huge_spaces() {
        assert_eq!(
            GameConfig::new(12, 6, 12, true).validate(),
            Err(ConfigError::SpaceTooLarge {
                size: 2_176_782_336,
                max: MAX_SPACE_SIZE
            })
        );
        assert!(GameConfig::new(5, 8, 12, true).validate().is_ok());
        assert!(GameConfig::new(6, 8, 12, true).validate().is_err());
    }

    #[test]
    fn space_size_saturates() {
        assert_eq!(GameConfig::new(usize::MAX, 16, 1, true).space_size(), usize::MAX);
        assert_eq!(GameConfig::new(5, 3, 1, false).space_size(), 0);
    }

    #[test]
    fn more_pegs_than_colors_fine_with_duplicates() {
        assert!(GameConfig::new(5, 2, 10, true).validate().is_ok());
    }
}
