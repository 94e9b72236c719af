//! Check command
//!
//! Scores one guess against a chosen target without playing a game.

use crate::core::{Feedback, Word};
use crate::wordlists::WordList;

/// Result of scoring a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
    pub in_word_list: bool,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not alphabetic or the lengths differ.
pub fn check_guess(target: &str, guess: &str, words: &WordList) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess has {} letters but the target has {}",
            guess.len(),
            target.len()
        ));
    }

    let feedback = Feedback::calculate(&guess, &target);
    let in_word_list = words.contains(guess.text());

    Ok(CheckResult {
        target,
        guess,
        feedback,
        in_word_list,
    })
}

impl CheckResult {
    /// One-line summary such as "2 correct, 1 present" or "solved"
    #[must_use]
    pub fn summary(&self) -> String {
        if self.feedback.is_win() {
            return "solved".to_string();
        }
        format!(
            "{} correct, {} present",
            self.feedback.count_correct(),
            self.feedback.count_present()
        )
    }
}
