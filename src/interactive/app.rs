//! TUI application state and logic

use crate::commands::start_session;
use crate::core::{Difficulty, PerLanguage, WORD_LENGTH};
use crate::puzzle::GameId;
use crate::scoring::{GameStatus, TurnScore};
use crate::session::{GameRecord, GameSession, LetterStatusMap, PlayerStats};
use crate::wordlists::WordPools;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub pools: &'a WordPools,
    pub difficulties: PerLanguage<Difficulty>,
    pub session: GameSession,
    pub keyboard: LetterStatusMap,
    pub last_turn: Option<TurnScore>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: PlayerStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// App playing `id`, or a fresh puzzle at `difficulties`
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle cannot be decoded from the pools.
    pub fn new(
        pools: &'a WordPools,
        id: Option<GameId>,
        difficulties: PerLanguage<Difficulty>,
    ) -> Result<Self> {
        let session = start_session(pools, id, &difficulties)?;

        let mut app = Self {
            pools,
            difficulties,
            session,
            keyboard: LetterStatusMap::new(),
            last_turn: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: PlayerStats::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Welcome! One guess plays on all three boards.",
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter.", MessageStyle::Info);
        Ok(app)
    }

    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Ok(report) => {
                self.input_buffer.clear();
                for (language, row) in report.rows.iter() {
                    self.keyboard.record(language, &report.guess, row);
                }

                for language in &report.newly_solved {
                    self.add_message(
                        &format!("{} solved!", language.name()),
                        MessageStyle::Success,
                    );
                }
                self.add_message(
                    &format!(
                        "{}: {:+} points",
                        report.guess.display().to_uppercase(),
                        report.score.total()
                    ),
                    MessageStyle::Info,
                );
                self.last_turn = Some(report.score);

                if report.status.is_over() {
                    self.finish_game(report.adjustment);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self, adjustment: i64) {
        if let Some(record) = GameRecord::from_session(&self.session) {
            self.stats.record(&record);
        }
        self.input_mode = InputMode::GameOver;

        let (text, style) = match self.session.status() {
            GameStatus::Won => (
                format!("🎉 ALL THREE SOLVED! Bonus {adjustment:+}"),
                MessageStyle::Success,
            ),
            _ => (
                format!("Out of guesses. Penalty {adjustment:+}"),
                MessageStyle::Error,
            ),
        };
        self.add_message(&text, style);
        self.add_message(
            &format!("Final score {}. Press 'n' for new game or 'q' to quit.", self.session.score()),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        match start_session(self.pools, None, &self.difficulties) {
            Ok(session) => {
                self.session = session;
                self.keyboard = LetterStatusMap::new();
                self.last_turn = None;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("Could not start a game: {e}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < WORD_LENGTH && c.is_alphabetic() {
                        self.input_buffer.extend(c.to_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    if self.input_buffer.chars().count() == WORD_LENGTH {
                        self.submit_guess();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
