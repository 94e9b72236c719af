//! Submission errors

use std::fmt;

/// Why a submitted guess was rejected
///
/// None of these are fatal: the game state is left as it was and the
/// error text becomes the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Guess length differs from the target length
    LengthMismatch { expected: usize, actual: usize },
    /// Guess is not in the known word list
    NotInWordList(String),
    /// The game is already won or lost
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { .. } => write!(f, "Word length mismatch!"),
            Self::NotInWordList(_) => write!(f, "Not in word list"),
            Self::GameOver => write!(f, "Game over! Start a new game"),
        }
    }
}

impl std::error::Error for SubmitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_game_text() {
        let err = SubmitError::LengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Word length mismatch!");
        assert_eq!(
            SubmitError::NotInWordList("abcde".into()).to_string(),
            "Not in word list"
        );
    }
}
