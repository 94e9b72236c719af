//! Word list used both as the target pool and the guess dictionary

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Ordered words of a single length with a membership index
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_len: usize,
}

/// Error type for word lists that cannot back a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    MixedLength {
        expected: usize,
        word: String,
    },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty"),
            Self::MixedLength { expected, word } => write!(
                f,
                "Word '{word}' has {} letters, expected {expected}",
                word.len()
            ),
        }
    }
}

impl std::error::Error for WordListError {}

impl WordList {
    /// Build a list from words that all share one length
    ///
    /// Order is preserved; repeated words keep their first position.
    ///
    /// # Errors
    /// Returns `WordListError` if the list is empty or the lengths differ.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        let word_len = words.first().ok_or(WordListError::Empty)?.len();

        let mut unique = Vec::with_capacity(words.len());
        let mut index = FxHashMap::default();
        for word in words {
            if word.len() != word_len {
                return Err(WordListError::MixedLength {
                    expected: word_len,
                    word: word.text().to_string(),
                });
            }
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), unique.len());
                unique.push(word);
            }
        }

        Ok(Self {
            words: unique,
            index,
            word_len,
        })
    }

    /// Build a list from string slices, skipping entries that are not valid words
    ///
    /// # Errors
    /// Returns `WordListError` if nothing valid remains or the lengths differ.
    pub fn from_strs(slice: &[&str]) -> Result<Self, WordListError> {
        Self::new(super::loader::words_from_slice(slice))
    }

    /// Look up a word by text
    #[inline]
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builds_and_indexes() {
        let list = WordList::from_strs(&["apple", "angle", "crane"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_len(), 5);
        assert!(list.contains("angle"));
        assert!(!list.contains("zebra"));
        assert_eq!(list.get("crane").map(Word::text), Some("crane"));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(WordList::new(Vec::new()).unwrap_err(), WordListError::Empty);
        assert_eq!(
            WordList::from_strs(&["12345", ""]).unwrap_err(),
            WordListError::Empty
        );
    }

    #[test]
    fn rejects_mixed_lengths() {
        let err = WordList::from_strs(&["apple", "cat"]).unwrap_err();
        assert_eq!(
            err,
            WordListError::MixedLength {
                expected: 5,
                word: "cat".to_string()
            }
        );
        assert_eq!(err.to_string(), "Word 'cat' has 3 letters, expected 5");
    }

    #[test]
    fn duplicates_keep_first_position() {
        let list = WordList::from_strs(&["apple", "crane", "apple"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0].text(), "apple");
        assert_eq!(list.words()[1].text(), "crane");
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let list = WordList::from_strs(&["apple", "angle", "crane", "slate", "plead"]).unwrap();
        let a = list.choose(&mut StdRng::seed_from_u64(7)).clone();
        let b = list.choose(&mut StdRng::seed_from_u64(7)).clone();
        assert_eq!(a, b);
        assert!(list.contains(a.text()));
    }

    #[test]
    fn choose_reaches_every_word() {
        let list = WordList::from_strs(&["apple", "angle", "crane"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            seen.insert(list.choose(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
