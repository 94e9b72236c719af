//! Game state machine
//!
//! A game moves from `InProgress` to `Won` or `Lost`; a new game returns to
//! `InProgress` with a fresh target. All input goes through [`apply`].

mod action;
mod config;
mod error;
mod state;
mod stats;

pub use action::{Action, apply};
pub use config::{GameConfig, MAX_ATTEMPTS};
pub use error::SubmitError;
pub use state::{GameState, GameStatus, Guess, WIN_MESSAGE, loss_message};
pub use stats::Statistics;
