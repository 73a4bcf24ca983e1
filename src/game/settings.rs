use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("grid size must be a positive integer")]
    InvalidGridSize,
    #[error("word count must be a positive integer")]
    InvalidWordCount,
    #[error("grid size {requested} exceeds the maximum of {max}")]
    GridTooLarge { requested: usize, max: usize },
    #[error("word count {requested} exceeds the maximum of {max}")]
    TooManyWords { requested: usize, max: usize },
}

/// Largest puzzle a client may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsLimits {
    pub max_grid_size: usize,
    pub max_words: usize,
}

/// Validated inputs to puzzle generation. Only constructible through
/// [`PuzzleSettings::new`] and friends, so both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSettings {
    num_words: usize,
    grid_size: usize,
}

impl PuzzleSettings {
    pub fn new(num_words: usize, grid_size: usize) -> Result<Self, GameError> {
        if grid_size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        if num_words == 0 {
            return Err(GameError::InvalidWordCount);
        }
        Ok(Self {
            num_words,
            grid_size,
        })
    }

    /// Like [`PuzzleSettings::new`], additionally enforcing `limits`.
    pub fn bounded(
        num_words: usize,
        grid_size: usize,
        limits: SettingsLimits,
    ) -> Result<Self, GameError> {
        if grid_size > limits.max_grid_size {
            return Err(GameError::GridTooLarge {
                requested: grid_size,
                max: limits.max_grid_size,
            });
        }
        if num_words > limits.max_words {
            return Err(GameError::TooManyWords {
                requested: num_words,
                max: limits.max_words,
            });
        }
        Self::new(num_words, grid_size)
    }

    /// Apply optional overrides on top of these settings.
    pub fn with_overrides(
        self,
        num_words: Option<usize>,
        grid_size: Option<usize>,
        limits: SettingsLimits,
    ) -> Result<Self, GameError> {
        Self::bounded(
            num_words.unwrap_or(self.num_words),
            grid_size.unwrap_or(self.grid_size),
            limits,
        )
    }

    /// How many words the generator tries to hide.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// Side length of the square grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: SettingsLimits = SettingsLimits {
        max_grid_size: 30,
        max_words: 50,
    };

    #[test]
    fn test_rejects_zero_values() {
        assert_eq!(PuzzleSettings::new(5, 0), Err(GameError::InvalidGridSize));
        assert_eq!(PuzzleSettings::new(0, 5), Err(GameError::InvalidWordCount));
        assert!(PuzzleSettings::new(1, 1).is_ok());
    }

    #[test]
    fn test_bounded_caps_grid() {
        assert_eq!(
            PuzzleSettings::bounded(5, 40, LIMITS),
            Err(GameError::GridTooLarge {
                requested: 40,
                max: 30
            })
        );
    }

    #[test]
    fn test_bounded_caps_word_count() {
        assert_eq!(
            PuzzleSettings::bounded(100_000_000_000, 10, LIMITS),
            Err(GameError::TooManyWords {
                requested: 100_000_000_000,
                max: 50
            })
        );
        assert!(PuzzleSettings::bounded(50, 10, LIMITS).is_ok());
    }

    #[test]
    fn test_overrides_fall_back_to_defaults() {
        let defaults = PuzzleSettings::new(8, 10).unwrap();
        let settings = defaults.with_overrides(None, Some(12), LIMITS).unwrap();
        assert_eq!(settings.num_words(), 8);
        assert_eq!(settings.grid_size(), 12);
    }
}
