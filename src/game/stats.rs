//! In-memory statistics for finished games

use super::{GameState, GameStatus};

/// Win/loss counts and the guess distribution of won games
///
/// `guess_distribution[n]` counts wins on guess `n`; index 0 is unused.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; games still in progress are ignored
    pub fn record(&mut self, state: &GameState) {
        let status = state.status();
        if !status.is_over() {
            return;
        }

        self.total_games += 1;
        if status == GameStatus::Won {
            self.record_win(state.guesses().len());
        }
    }

    fn record_win(&mut self, guesses: usize) {
        self.games_won += 1;
        if self.guess_distribution.len() <= guesses {
            self.guess_distribution.resize(guesses + 1, 0);
        }
        self.guess_distribution[guesses] += 1;
    }

    /// Combine two sets of statistics
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.total_games += other.total_games;
        self.games_won += other.games_won;
        if self.guess_distribution.len() < other.guess_distribution.len() {
            self.guess_distribution
                .resize(other.guess_distribution.len(), 0);
        }
        for (slot, &count) in self
            .guess_distribution
            .iter_mut()
            .zip(&other.guess_distribution)
        {
            *slot += count;
        }
        self
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.total_games - self.games_won
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Average number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}
