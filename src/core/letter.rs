//! Per-letter feedback state

use std::fmt;

/// Feedback for a single guessed letter
///
/// Variants are ordered by how much they reveal, so `max` picks the
/// best-known state: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is at this exact position in the target
    Correct,
}

impl LetterState {
    /// Emoji tile for this state
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_precedence() {
        assert!(LetterState::Correct > LetterState::Present);
        assert!(LetterState::Present > LetterState::Absent);
        assert_eq!(
            LetterState::Absent.max(LetterState::Correct),
            LetterState::Correct
        );
    }

    #[test]
    fn emoji_tiles() {
        assert_eq!(LetterState::Correct.to_emoji(), '🟩');
        assert_eq!(LetterState::Present.to_emoji(), '🟨');
        assert_eq!(LetterState::Absent.to_emoji(), '⬜');
    }

    #[test]
    fn display_names() {
        assert_eq!(LetterState::Correct.to_string(), "correct");
        assert_eq!(LetterState::Present.to_string(), "present");
        assert_eq!(LetterState::Absent.to_string(), "absent");
    }
}
