//! TUI application state and event loop

use crate::game::{Action, GameState, Statistics, apply};
use crate::logging::Silenced;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, R: Rng> {
    pub words: &'a WordList,
    pub state: GameState,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: R,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(words: &'a WordList, state: GameState, rng: R) -> Self {
        Self {
            words,
            state,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Apply an action and record the game if it just finished
    pub fn dispatch(&mut self, action: Action) {
        let was_over = self.state.status().is_over();
        self.state = apply(&self.state, action, self.words, &mut self.rng);

        if !was_over && self.state.status().is_over() {
            self.stats.record(&self.state);
        }
    }

    /// Map a key press to an action
    ///
    /// Letters type, Enter submits, Backspace deletes, Esc clears the input,
    /// Ctrl-N starts a new game and Ctrl-C or Ctrl-Q quits.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.dispatch(Action::NewGame),
            KeyCode::F(2) => self.dispatch(Action::NewGame),
            KeyCode::Char(c) if !ctrl => self.dispatch(Action::Type(c)),
            KeyCode::Backspace => self.dispatch(Action::Backspace),
            KeyCode::Esc => self.dispatch(Action::Clear),
            KeyCode::Enter => self.dispatch(Action::Submit),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    let _quiet = Silenced::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
