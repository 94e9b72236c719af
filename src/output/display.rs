//! Display functions for command results

use super::formatters::{create_progress_bar, guess_tiles, keyboard_rows};
use crate::commands::{AutoplayResult, CheckResult};
use crate::game::{GameState, GameStatus, Statistics};
use colored::Colorize;

/// Print the board: past guesses, empty rows, then the keyboard
pub fn print_board(state: &GameState) {
    println!();
    for guess in state.guesses() {
        println!("  {}", guess_tiles(&guess.word, &guess.result));
    }
    let blank = " _ ".repeat(state.target().len());
    for _ in state.guesses().len()..state.max_attempts() {
        println!("  {}", blank.bright_black());
    }

    println!();
    for row in keyboard_rows(&state.keyboard()) {
        println!("  {row}");
    }
    println!();

    if !state.message().is_empty() {
        let message = match state.status() {
            GameStatus::Won => state.message().green().bold(),
            GameStatus::Lost => state.message().red().bold(),
            GameStatus::InProgress => state.message().yellow(),
        };
        println!("  {message}\n");
    }
}

/// Print the feedback for a single guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}  {}",
        guess_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );

    let states: Vec<String> = result
        .feedback
        .states()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  {}", states.join(", ").bright_black());
    println!("  {}", result.summary().bright_cyan());
    if !result.in_word_list {
        println!("  {}", "(guess is not in the word list)".yellow());
    }
}

/// Print session statistics with a guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Won / lost:    {} / {}",
        stats.games_won.to_string().green(),
        stats.games_lost().to_string().red()
    );
    println!(
        "   Win rate:      {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    if let Some(avg) = stats.average_guesses() {
        println!("   Avg guesses:   {avg:.2}");
    }

    if stats.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let pct = count as f64 / stats.games_won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of an autoplay run
pub fn print_autoplay_result(result: &AutoplayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_statistics(&result.stats);

    let secs = result.duration.as_secs_f64();
    println!("\n   Time taken:    {secs:.2}s");
    if secs > 0.0 {
        println!(
            "   Games/second:  {:.1}",
            result.stats.total_games as f64 / secs
        );
    }
}
