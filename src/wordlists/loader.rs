//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::{WORDS, WordList};
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a word list from a file, one word per line
///
/// Blank lines and entries that are not alphabetic words are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the remaining words are
/// empty or of mixed lengths.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    log::debug!("Loaded {} words from {}", words.len(), path.display());

    WordList::new(words).with_context(|| format!("Invalid word list {}", path.display()))
}

/// Load the list compiled into the binary
///
/// # Errors
///
/// Returns an error only if the embedded data is malformed.
pub fn embedded() -> Result<WordList> {
    WordList::from_strs(WORDS).context("Embedded word list is invalid")
}

/// Resolve the `--wordlist` flag: `embedded` or a path to a file
///
/// # Errors
///
/// Propagates errors from [`load_from_file`] and [`embedded`].
pub fn load(source: &str) -> Result<WordList> {
    match source {
        "embedded" => embedded(),
        path => load_from_file(path),
    }
}

/// Convert string slices to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "sh0rt", "crane"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
