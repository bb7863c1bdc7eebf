//! TUI application state and logic

use crate::game::{GuessError, RoundStatus, Session};
use crate::output::formatters::share_text;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept for the messages panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_hints: bool,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_hints: false,
            should_quit: false,
        };
        app.add_message("Welcome! Type a word and press Enter.", MessageStyle::Info);
        app.announce_round();
        app
    }

    fn announce_round(&mut self) {
        let round = self.session.round();
        let text = format!(
            "Find the {}-letter word in {} attempts.",
            round.word_length(),
            round.max_attempts()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => self.reveal(),
            KeyCode::Char('h') if ctrl => self.toggle_hints(),
            KeyCode::Left => self.change_length(false),
            KeyCode::Right => self.change_length(true),
            KeyCode::Char(c) if !ctrl => self.push_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Add a typed letter to the current row
    pub fn push_letter(&mut self, c: char) {
        let round = self.session.round();
        if round.status().is_finished() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.len() < round.word_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit(&mut self) {
        if self.session.round().status().is_finished() {
            self.add_message("Round over. Press Ctrl-N for a new game.", MessageStyle::Info);
            return;
        }

        let guess = self.input_buffer.clone();
        match self.session.submit_guess(&guess) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome.status {
                    RoundStatus::Won { attempts } => {
                        let celebration = match attempts {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "🎊 SOLVED! 🎊",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        if let Some(text) = share_text(self.session.round())
                            && let Some(headline) = text.lines().next()
                        {
                            self.add_message(headline, MessageStyle::Success);
                        }
                        self.add_message("Press Ctrl-N for a new game.", MessageStyle::Info);
                    }
                    RoundStatus::Lost => {
                        let text = format!(
                            "Out of attempts! The word was {}.",
                            self.session.round().target().text().to_uppercase()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press Ctrl-N for a new game.", MessageStyle::Info);
                    }
                    RoundStatus::InProgress | RoundStatus::Revealed => {
                        let left = self.session.round().remaining_attempts();
                        self.add_message(&format!("{left} attempts left"), MessageStyle::Info);
                    }
                }
            }
            Err(GuessError::Incomplete { expected, .. }) => {
                self.add_message(
                    &format!("Fill in all {expected} letters!"),
                    MessageStyle::Error,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        match self.session.new_game() {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_round();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn reveal(&mut self) {
        let finished = self.session.round().status().is_finished();
        let target = self.session.reveal();
        let text = if finished {
            format!("The word was {}.", target.text().to_uppercase())
        } else {
            format!("Revealed: {}. Counted as a loss.", target.text().to_uppercase())
        };
        self.input_buffer.clear();
        self.add_message(&text, MessageStyle::Error);
    }

    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
    }

    /// Step to the next shorter or longer available word length
    pub fn change_length(&mut self, longer: bool) {
        let lengths = self.session.pool().available_lengths();
        let current = self.session.round().word_length();
        let next = if longer {
            lengths.iter().copied().find(|&l| l > current)
        } else {
            lengths.iter().copied().rev().find(|&l| l < current)
        };

        let Some(length) = next else {
            self.add_message("No other word lengths available", MessageStyle::Info);
            return;
        };

        self.input_buffer.clear();
        match self.session.set_word_length(length) {
            Ok(_) => {
                self.messages.clear();
                self.add_message(&format!("Switched to {length}-letter words"), MessageStyle::Info);
                self.announce_round();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Percentage of recorded games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.session.games_played();
        if played == 0 {
            0.0
        } else {
            self.session.games_won() as f64 / played as f64 * 100.0
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "TUI loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::loader::load_pool;

    fn app(words: &str) -> App {
        let config = GameConfig {
            seed: Some(9),
            ..GameConfig::default()
        };
        App::new(Session::new(config, load_pool(Some(words), 5)).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_row_up_to_word_length() {
        let mut app = app("tiger\n");
        type_word(&mut app, "Grapes1");
        assert_eq!(app.input_buffer, "grape");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "grap");
    }

    #[test]
    fn enter_submits_guess() {
        let mut app = app("tiger\n");
        type_word(&mut app, "grape");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.round().history().len(), 1);

        type_word(&mut app, "tiger");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.session.round().status(),
            RoundStatus::Won { attempts: 2 }
        );
        assert_eq!(app.messages.last().unwrap().text, "Press Ctrl-N for a new game.");
    }

    #[test]
    fn incomplete_row_is_rejected() {
        let mut app = app("tiger\n");
        type_word(&mut app, "tig");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.input_buffer, "tig");
        assert!(app.session.round().history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Fill in all 5 letters!");
    }

    #[test]
    fn arrows_change_word_length() {
        let mut app = app("cat\ntiger\nopaque\n");
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.session.round().word_length(), 6);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.session.round().word_length(), 6);

        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.session.round().word_length(), 3);
    }

    #[test]
    fn control_keys() {
        let mut app = app("tiger\n");
        app.handle_key(ctrl('h'));
        assert!(app.show_hints);

        app.handle_key(ctrl('r'));
        assert_eq!(app.session.round().status(), RoundStatus::Revealed);
        assert_eq!(app.session.games_played(), 1);
        assert!(app.win_rate().abs() < f64::EPSILON);

        // Letters are ignored once the round is over
        type_word(&mut app, "ab");
        assert!(app.input_buffer.is_empty());

        app.handle_key(ctrl('n'));
        assert_eq!(app.session.round().status(), RoundStatus::InProgress);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app("tiger\n");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
