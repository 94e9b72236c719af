//! Word Guess
//!
//! A Wordle-style game: guess the hidden word within six attempts, with
//! per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_clone::game::{Action, GameConfig, GameState, apply};
//! use wordle_clone::wordlists::WordList;
//!
//! let words = WordList::from_strs(&["apple", "angle", "crane"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut state = GameState::start(&words, GameConfig::default(), &mut rng);
//!
//! for action in "crane".chars().map(Action::Type).chain([Action::Submit]) {
//!     state = apply(&state, action, &words, &mut rng);
//! }
//! assert_eq!(state.guesses().len(), 1);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging backend
pub mod logging;
