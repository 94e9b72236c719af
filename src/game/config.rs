//! Game configuration

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
}

impl GameConfig {
    /// Config with a custom attempt limit, clamped to `1..=MAX_ATTEMPTS`
    #[must_use]
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, MAX_ATTEMPTS),
        }
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_attempts() {
        assert_eq!(GameConfig::default().max_attempts(), 6);
    }

    #[test]
    fn attempt_limit_is_clamped() {
        assert_eq!(GameConfig::with_max_attempts(0).max_attempts(), 1);
        assert_eq!(GameConfig::with_max_attempts(3).max_attempts(), 3);
        assert_eq!(GameConfig::with_max_attempts(10).max_attempts(), MAX_ATTEMPTS);
        assert_eq!(GameConfig::with_max_attempts(usize::MAX).max_attempts(), MAX_ATTEMPTS);
    }
}
