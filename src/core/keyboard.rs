//! Keyboard status aggregation
//!
//! Folds every (letter, state) observation from past guesses into the
//! best-known state per letter.

use super::{Feedback, LetterState, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, top row first
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known state of each guessed letter
///
/// Letters that were never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, LetterState>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a sequence of scored guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, KeyboardStatus, LetterState, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("angle").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// let status = KeyboardStatus::from_history([(&guess, &feedback)]);
    /// assert_eq!(status.get(b'a'), Some(LetterState::Correct));
    /// assert_eq!(status.get(b'n'), Some(LetterState::Absent));
    /// assert_eq!(status.get(b'z'), None);
    /// ```
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut status = Self::new();
        for (word, feedback) in history {
            status.record(word, feedback);
        }
        status
    }

    /// Fold one scored guess into the status
    pub fn record(&mut self, word: &Word, feedback: &Feedback) {
        for (&letter, &state) in word.chars().iter().zip(feedback.states()) {
            self.observe(letter, state);
        }
    }

    /// Record a single observation
    ///
    /// Correct is never downgraded and present is never downgraded to absent.
    pub fn observe(&mut self, letter: u8, state: LetterState) {
        self.letters
            .entry(letter)
            .and_modify(|known| *known = (*known).max(state))
            .or_insert(state);
    }

    /// Best-known state for a letter, `None` if never guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterState> {
        self.letters.get(&letter).copied()
    }

    /// Number of letters with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
