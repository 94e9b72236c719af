//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardStatus, LetterState, QWERTY_ROWS, Word};
use colored::{ColoredString, Colorize};

/// A single letter tile coloured by its state
#[must_use]
pub fn letter_tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn guess_tiles(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.states())
        .map(|(ch, &state)| letter_tile(ch, Some(state)).to_string())
        .collect()
}

/// The on-screen keyboard, one string per row, indented like a real keyboard
#[must_use]
pub fn keyboard_rows(status: &KeyboardStatus) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|b| letter_tile(char::from(b), status.get(b)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
