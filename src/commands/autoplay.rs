//! Autoplay - simulated games against random targets
//!
//! A bot plays through the same action path a human uses, guessing a random
//! word that is still consistent with all feedback seen so far.

use crate::core::{Feedback, Word};
use crate::game::{Action, GameConfig, GameState, Statistics, apply};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Settings for an autoplay run
#[derive(Debug, Clone, Copy)]
pub struct AutoplayConfig {
    pub games: usize,
    pub seed: u64,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl AutoplayConfig {
    #[must_use]
    pub fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            game: GameConfig::default(),
            show_progress: true,
        }
    }
}

/// Result of an autoplay run
pub struct AutoplayResult {
    pub stats: Statistics,
    pub duration: Duration,
}

/// Words that would have produced every piece of feedback in `state`
#[must_use]
pub fn consistent_candidates<'a>(state: &GameState, words: &'a WordList) -> Vec<&'a Word> {
    words
        .words()
        .iter()
        .filter(|candidate| {
            state
                .guesses()
                .iter()
                .all(|g| Feedback::calculate(&g.word, candidate) == g.result)
        })
        .collect()
}

/// Play one game to the end and return the final state
///
/// Game `index` uses an RNG seeded with `seed + index`, so runs are reproducible.
#[must_use]
pub fn play_game(words: &WordList, config: GameConfig, seed: u64) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::start(words, config, &mut rng);

    while !state.status().is_over() {
        let candidates = consistent_candidates(&state, words);
        // The target itself is always consistent
        let Some(guess) = candidates.choose(&mut rng) else {
            break;
        };

        for ch in guess.text().chars() {
            state = apply(&state, Action::Type(ch), words, &mut rng);
        }
        state = apply(&state, Action::Submit, words, &mut rng);
    }

    state
}

/// Play `config.games` games in parallel and collect statistics
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_autoplay(words: &WordList, config: AutoplayConfig) -> AutoplayResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("playing");

    let stats = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let state = play_game(words, config.game, config.seed.wrapping_add(index as u64));
            pb.inc(1);
            let mut stats = Statistics::default();
            stats.record(&state);
            stats
        })
        .reduce(Statistics::default, |a, b| a.merge(&b));

    pb.finish_with_message("done");
    log::info!(
        "Autoplay finished: {}/{} won",
        stats.games_won,
        stats.total_games
    );

    AutoplayResult {
        stats,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn words() -> WordList {
        WordList::from_strs(&[
            "apple", "angle", "crane", "slate", "plead", "light", "might", "night", "sight",
        ])
        .unwrap()
    }

    #[test]
    fn candidates_include_target() {
        let list = words();
        let state = GameState::new(Word::new("might").unwrap(), GameConfig::default())
            .submit_guess("light", &list)
            .unwrap();

        let texts: Vec<&str> = consistent_candidates(&state, &list)
            .iter()
            .map(|w| w.text())
            .collect();
        assert!(texts.contains(&"might"));
        assert!(!texts.contains(&"light"));
        assert!(!texts.contains(&"apple"));
    }

    #[test]
    fn games_finish() {
        let list = words();
        for seed in 0..20 {
            let state = play_game(&list, GameConfig::default(), seed);
            assert!(state.status().is_over());
            assert!(state.guesses().len() <= 6);
        }
    }

    #[test]
    fn games_are_reproducible() {
        let list = words();
        assert_eq!(
            play_game(&list, GameConfig::default(), 42),
            play_game(&list, GameConfig::default(), 42)
        );
    }

    #[test]
    fn single_word_list_wins_first_guess() {
        let list = WordList::from_strs(&["apple"]).unwrap();
        let state = play_game(&list, GameConfig::default(), 0);
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.guesses().len(), 1);
    }

    #[test]
    fn run_counts_every_game() {
        let mut config = AutoplayConfig::new(25, 7);
        config.show_progress = false;
        let result = run_autoplay(&words(), config);
        assert_eq!(result.stats.total_games, 25);
        assert_eq!(
            result.stats.games_won + result.stats.games_lost(),
            result.stats.total_games
        );
    }
}
