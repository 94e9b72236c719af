//! Word lists
//!
//! The embedded list doubles as the target pool and the set of accepted guesses.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::{WordList, WordListError};
