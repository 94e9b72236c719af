//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, message line and status bar.

use super::app::App;
use crate::core::{KeyboardStatus, LetterState, QWERTY_ROWS};
use crate::game::{GameState, GameStatus};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let grid_height = u16::try_from(app.state.max_attempts()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                             // Header
            Constraint::Length(grid_height.saturating_add(2)), // Board
            Constraint::Length(5),                             // Keyboard
            Constraint::Length(3),                             // Message
            Constraint::Min(1),                                // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.state, chunks[1]);
    render_keyboard(f, &app.state.keyboard(), chunks[2]);
    render_message(f, &app.state, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GUESS 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colours for a letter state; `None` is an unscored tile
fn tile_style(state: Option<LetterState>) -> Style {
    match state {
        Some(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: Option<char>, state: Option<LetterState>) -> Span<'static> {
    let ch = letter.map_or('·', |c| c.to_ascii_uppercase());
    Span::styled(format!(" {ch} "), tile_style(state))
}

/// One line per attempt: scored guesses, then the input row, then blanks
fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let width = state.target().len();
    let mut lines = Vec::with_capacity(state.max_attempts());

    for guess in state.guesses() {
        let spans: Vec<Span> = guess
            .word
            .text()
            .chars()
            .zip(guess.result.states())
            .flat_map(|(ch, &s)| [tile(Some(ch), Some(s)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    if !state.status().is_over() {
        let input: Vec<char> = state.current_input().chars().collect();
        let spans: Vec<Span> = (0..width)
            .flat_map(|i| [tile(input.get(i).copied(), None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < state.max_attempts() {
        let spans: Vec<Span> = (0..width)
            .flat_map(|_| [tile(None, None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans).style(Style::default().fg(Color::DarkGray)));
    }

    lines
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let title = format!(
        " Attempts left: {}/{} ",
        state.attempts_remaining(),
        state.max_attempts()
    );
    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, status: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    let state = status.get(b);
                    [tile(Some(char::from(b)), state), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, state: &GameState, area: Rect) {
    let color = match state.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::InProgress => Color::Yellow,
    };

    let message = Paragraph::new(state.message().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.state.status().is_over() {
        "Ctrl-N: New Game | Ctrl-Q: Quit"
    } else {
        "Enter: Submit | Esc: Clear | Ctrl-N: New Game | Ctrl-Q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_has_one_line_per_attempt() {
        let words = WordList::from_strs(&["apple", "angle"]).unwrap();
        let state = GameState::new(Word::new("apple").unwrap(), GameConfig::default())
            .submit_guess("angle", &words)
            .unwrap()
            .with_letter('a')
            .with_letter('p');

        let lines = board_lines(&state);
        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[0]), " A   N   G   L   E  ");
        assert_eq!(line_text(&lines[1]), " A   P   ·   ·   ·  ");
    }

    #[test]
    fn finished_board_has_no_input_row() {
        let words = WordList::from_strs(&["apple"]).unwrap();
        let state = GameState::new(Word::new("apple").unwrap(), GameConfig::default())
            .submit_guess("apple", &words)
            .unwrap();

        let lines = board_lines(&state);
        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[1]), " ·   ·   ·   ·   ·  ");
    }

    #[test]
    fn huge_attempt_limit_renders_six_rows() {
        let state = GameState::new(
            Word::new("apple").unwrap(),
            GameConfig::with_max_attempts(usize::MAX),
        );
        assert_eq!(board_lines(&state).len(), 6);
    }

    #[test]
    fn tile_styles_follow_state() {
        assert_eq!(tile_style(Some(LetterState::Correct)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(LetterState::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(LetterState::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }
}
