//! Word Guess - CLI
//!
//! Play in a TUI or on plain lines, score single guesses, or let a bot play.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_clone::{
    commands::{AutoplayConfig, check_guess, make_rng, run_autoplay, run_simple},
    game::{GameConfig, GameState, MAX_ATTEMPTS},
    interactive::{App, run_tui},
    logging::init_logging,
    output::{print_autoplay_result, print_check_result},
    wordlists::{WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of guesses allowed per game (1 to 6)
    #[arg(short = 'a', long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The hidden word
        target: String,

        /// The guessed word
        guess: String,
    },

    /// Let a bot play many games and report statistics
    Autoplay {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let words = loader::load(&cli.wordlist)?;
    log::info!(
        "Using {} words of length {}",
        words.len(),
        words.word_len()
    );

    let config = GameConfig::with_max_attempts(cli.max_attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, config, cli.seed),
        Commands::Simple => run_simple(&words, config, &mut make_rng(cli.seed)),
        Commands::Check { target, guess } => run_check_command(&target, &guess, &words),
        Commands::Autoplay { games } => {
            run_autoplay_command(&words, config, games, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let state = GameState::start(words, config, &mut rng);
    run_tui(App::new(words, state, rng))
}

fn run_check_command(target: &str, guess: &str, words: &WordList) -> Result<()> {
    let result = check_guess(target, guess, words).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_autoplay_command(words: &WordList, config: GameConfig, games: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Playing {games} games (seed {seed})...");

    let mut autoplay = AutoplayConfig::new(games, seed);
    autoplay.game = config;
    let result = run_autoplay(words, autoplay);
    print_autoplay_result(&result);
}
