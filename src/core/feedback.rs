//! Guess feedback calculation and representation
//!
//! Feedback holds one `LetterState` per guessed position:
//! - Correct: same letter at the same position in the target
//! - Present: letter appears somewhere else in the target
//! - Absent: letter does not appear in the target
//!
//! Scoring is per position and ignores how many times a letter occurs in the
//! target. Guessing "speed" against "erase" marks both E's present even though
//! it is a different count than standard Wordle would report.

use super::{LetterState, Word};
use std::fmt;

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Wrap an existing sequence of states
    #[must_use]
    pub const fn new(states: Vec<LetterState>) -> Self {
        Self(states)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// The result has one state per letter of `guess`.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, LetterState::*, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("angle").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.states(), &[Correct, Absent, Absent, Correct, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let states = guess
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if target.chars().get(i) == Some(&letter) {
                    LetterState::Correct
                } else if target.has_letter(letter) {
                    LetterState::Present
                } else {
                    LetterState::Absent
                }
            })
            .collect();

        Self(states)
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
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

    /// Check if every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Count the present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn apple_angle_example() {
        assert_eq!(
            score("angle", "apple").states(),
            &[Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn all_absent() {
        let feedback = score("abcde", "fghij");
        assert!(feedback.states().iter().all(|&s| s == Absent));
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn all_correct_is_win() {
        let feedback = score("crane", "crane");
        assert!(feedback.is_win());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn present_letters() {
        let feedback = score("crane", "slate");
        assert_eq!(feedback.states(), &[Absent, Absent, Correct, Absent, Correct]);

        let feedback = score("least", "slate");
        assert_eq!(
            feedback.states(),
            &[Present, Present, Correct, Present, Present]
        );
        assert_eq!(feedback.count_present(), 4);
    }

    #[test]
    fn duplicate_letters_are_scored_naively() {
        // SPEED vs ERASE: both E's present, no count bookkeeping
        let feedback = score("speed", "erase");
        assert_eq!(feedback.states(), &[Present, Absent, Present, Present, Absent]);

        // A repeated letter is present everywhere it is not exact
        let feedback = score("eerie", "theme");
        assert_eq!(feedback.states(), &[Present, Present, Absent, Absent, Correct]);
    }

    #[test]
    fn result_length_follows_guess() {
        assert_eq!(score("cat", "cot").len(), 3);
        assert_eq!(score("cat", "cot").states(), &[Correct, Absent, Correct]);
    }

    #[test]
    fn empty_feedback_is_not_a_win() {
        assert!(!Feedback::new(Vec::new()).is_win());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(score("angle", "apple").to_emoji(), "🟩⬜⬜🟩🟩");
        assert_eq!(format!("{}", score("crane", "crane")), "🟩🟩🟩🟩🟩");
    }
}
