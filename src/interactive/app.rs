//! TUI application state and logic

use crate::core::{SpellChecker, SubmissionResult};
use crate::game::Session;
use crate::output::Alert;
use crate::output::formatters::capitalize;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<C: SpellChecker, R: Rng = StdRng> {
    pub session: Session<C, R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
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

impl<C: SpellChecker, R: Rng> App<C, R> {
    #[must_use]
    pub fn new(session: Session<C, R>) -> Self {
        let rules = session.rules();
        let requirements = format!(
            "Words need {}+ letters and must be real words ({}).",
            rules.min_length, rules.language
        );

        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: requirements,
                    style: MessageStyle::Info,
                },
            ],
            alert: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.alert.is_some() {
            InputMode::Alert
        } else {
            InputMode::Typing
        }
    }

    /// Submit the input buffer to the current round
    ///
    /// Blank input is ignored and left in place.
    pub fn submit_input(&mut self) {
        let Some(result) = self.session.submit(&self.input_buffer) else {
            return;
        };
        self.input_buffer.clear();

        match result {
            SubmissionResult::Accepted { word, points } => {
                self.add_message(
                    &format!("{} +{points}", capitalize(&word)),
                    MessageStyle::Success,
                );
            }
            SubmissionResult::Rejected(rejection) => {
                let alert = Alert::from(&rejection);
                self.add_message(alert.title(), MessageStyle::Error);
                self.alert = Some(alert);
            }
        }
    }

    pub fn request_reset(&mut self) {
        self.alert = Some(Alert::ResetConfirm);
    }

    pub fn show_score_help(&mut self) {
        self.alert = Some(Alert::ScoreHelp);
    }

    /// Accept the open alert, resetting the round if that is what it asked
    pub fn confirm_alert(&mut self) {
        if let Some(alert) = self.alert.take()
            && alert.needs_confirmation()
        {
            self.new_round();
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        let root = capitalize(self.session.reset().root_word());
        self.add_message(
            &format!("New round started! Root word: {root}"),
            MessageStyle::Info,
        );
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode() {
            InputMode::Alert => match key.code {
                KeyCode::Enter | KeyCode::Char('y' | 'Y') => self.confirm_alert(),
                KeyCode::Esc | KeyCode::Char('n' | 'N') => self.dismiss_alert(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.request_reset();
                }
                KeyCode::Tab => self.show_score_help(),
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
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
pub fn run_tui<C: SpellChecker, R: Rng>(app: App<C, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, C, R>(terminal: &mut Terminal<B>, mut app: App<C, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    C: SpellChecker,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
