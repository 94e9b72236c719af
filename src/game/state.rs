//! Game state and its transitions
//!
//! Every transition borrows the current state and returns the next one, so a
//! front end can keep, compare or discard states freely.

use super::{GameConfig, SubmitError};
use crate::core::{Feedback, KeyboardStatus, Word};
use crate::wordlists::WordList;
use rand::Rng;

/// Message shown after a winning guess
pub const WIN_MESSAGE: &str = "🎉 You won!";

/// Message shown after the last attempt, revealing the target
#[must_use]
pub fn loss_message(target: &Word) -> String {
    format!("Game over! Word: {target}")
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub result: Feedback,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    guesses: Vec<Guess>,
    current_input: String,
    message: String,
    config: GameConfig,
}

impl GameState {
    /// Fresh game against a known target
    #[must_use]
    pub fn new(target: Word, config: GameConfig) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            current_input: String::new(),
            message: String::new(),
            config,
        }
    }

    /// Fresh game with a target drawn uniformly from `words`
    pub fn start<R: Rng>(words: &WordList, config: GameConfig, rng: &mut R) -> Self {
        let target = words.choose(rng).clone();
        log::trace!("New target selected: {target}");
        Self::new(target, config)
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Win, loss or error text; empty while play continues normally
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self
            .guesses
            .last()
            .is_some_and(|g| g.word == self.target)
        {
            GameStatus::Won
        } else if self.guesses.len() >= self.config.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Best-known state of every guessed letter
    #[must_use]
    pub fn keyboard(&self) -> KeyboardStatus {
        KeyboardStatus::from_history(self.guesses.iter().map(|g| (&g.word, &g.result)))
    }

    /// Append a letter to the current input
    ///
    /// Non-letters are ignored, letters are lowercased, and nothing happens
    /// once the input is as long as the target or the game is over.
    #[must_use]
    pub fn with_letter(&self, ch: char) -> Self {
        if self.status().is_over()
            || !ch.is_ascii_alphabetic()
            || self.current_input.len() >= self.target.len()
        {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_input.push(ch.to_ascii_lowercase());
        next
    }

    /// Remove the last input letter, if any
    #[must_use]
    pub fn with_backspace(&self) -> Self {
        let mut next = self.clone();
        if !self.status().is_over() {
            next.current_input.pop();
        }
        next
    }

    /// Empty the current input
    #[must_use]
    pub fn with_cleared_input(&self) -> Self {
        let mut next = self.clone();
        if !self.status().is_over() {
            next.current_input.clear();
        }
        next
    }

    /// Same state with a different message
    #[must_use]
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.message = message.into();
        next
    }

    /// Validate and score a guess
    ///
    /// The guess is lowercased first. Checks run in order: game still in
    /// progress, length equals the target length, word is in `words`. On
    /// success the guess is recorded, the input and message are cleared, and
    /// the win or loss message is set if the game just ended.
    ///
    /// # Errors
    /// Returns `SubmitError` without touching `self` if any check fails.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    /// use wordle_clone::game::{GameConfig, GameState, GameStatus, SubmitError};
    /// use wordle_clone::wordlists::WordList;
    ///
    /// let words = WordList::from_strs(&["apple", "angle"]).unwrap();
    /// let state = GameState::new(Word::new("apple").unwrap(), GameConfig::default());
    ///
    /// assert!(matches!(
    ///     state.submit_guess("app", &words),
    ///     Err(SubmitError::LengthMismatch { .. })
    /// ));
    ///
    /// let next = state.submit_guess("apple", &words).unwrap();
    /// assert_eq!(next.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(&self, guess: &str, words: &WordList) -> Result<Self, SubmitError> {
        if self.status().is_over() {
            return Err(SubmitError::GameOver);
        }

        let guess = guess.to_ascii_lowercase();
        let length = guess.chars().count();
        if length != self.target.len() {
            return Err(SubmitError::LengthMismatch {
                expected: self.target.len(),
                actual: length,
            });
        }

        let word = words
            .get(&guess)
            .ok_or_else(|| SubmitError::NotInWordList(guess.clone()))?
            .clone();

        let result = Feedback::calculate(&word, &self.target);
        log::debug!(
            "Guess {}/{}: {word} {}",
            self.guesses.len() + 1,
            self.config.max_attempts(),
            result.to_emoji()
        );

        let mut next = self.clone();
        next.guesses.push(Guess { word, result });
        next.current_input.clear();
        next.message.clear();

        match next.status() {
            GameStatus::Won => next.message = WIN_MESSAGE.to_string(),
            GameStatus::Lost => next.message = loss_message(&next.target),
            GameStatus::InProgress => {}
        }

        Ok(next)
    }
}
