//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a guess or a `/command`.

use crate::game::{GameConfig, GameState, Statistics};
use crate::output::{print_board, print_statistics};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<R: Rng>(words: &WordList, config: GameConfig, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Word Guess - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        words.word_len(),
        config.max_attempts()
    );
    println!("Commands: /new for a new game, /stats for statistics, /quit to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = GameState::start(words, config, rng);
    let mut stats = Statistics::default();

    loop {
        let Some(line) = prompt(&mut lines, "Guess")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "/quit" | "/q" | "/exit" => break,
            "/new" | "/n" => {
                state = GameState::start(words, config, rng);
                println!("\n🔄 New game started!\n");
            }
            "/stats" => print_statistics(&stats),
            guess => {
                if state.status().is_over() {
                    println!("Game over! Type /new to play again.\n");
                    continue;
                }

                state = match state.submit_guess(guess, words) {
                    Ok(next) => next,
                    Err(err) => {
                        log::info!("Rejected guess '{guess}': {err}");
                        state.with_message(err.to_string())
                    }
                };
                print_board(&state);

                if state.status().is_over() {
                    stats.record(&state);
                    println!("Type /new to play again or /quit to exit.\n");
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

/// Print a prompt and read the next trimmed line, `None` at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
        .context("Failed to read input")
}
