//! Core domain types for the guessing game
//!
//! Pure types with no I/O: words, per-letter feedback and the keyboard
//! status derived from past guesses.

mod feedback;
mod keyboard;
mod letter;
mod word;

pub use feedback::Feedback;
pub use keyboard::{KeyboardStatus, QWERTY_ROWS};
pub use letter::LetterState;
pub use word::{Word, WordError};
