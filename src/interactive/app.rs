//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Code, CodeSpace};
use crate::game::Game;
use crate::solver::minimax::calculate_max_remaining;
use crate::solver::{MinimaxStrategy, Status, candidates_consistent_with, select_next_guess};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

/// Application state
pub struct App {
    pub config: GameConfig,
    /// `None` when the space is too large to enumerate; hints are disabled
    pub space: Option<Arc<CodeSpace>>,
    pub game: Game,
    pub input_buffer: String,
    pub hint: Option<Hint>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    GameOver,
}

/// The solver's suggestion for the player's own history
#[derive(Debug, Clone)]
pub struct Hint {
    pub guess: Code,
    pub worst_case: usize,
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl App {
    /// Create the app with an explicit or random secret
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit secret does not fit `config`.
    pub fn new(config: GameConfig, secret: Option<Code>, mut rng: StdRng) -> Result<Self> {
        let space = match CodeSpace::new(&config) {
            Ok(space) => Some(Arc::new(space)),
            Err(err) => {
                log::warn!("hints disabled: {err}");
                None
            }
        };
        let game = Game::new(config, secret, &mut rng)?;

        let mut app = Self {
            config,
            space,
            game,
            input_buffer: String::new(),
            hint: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guess,
            rng,
        };
        app.add_message(
            &format!(
                "I'm thinking of {} numbers between 1 and {}. Can you guess the sequence?",
                config.secret_length, config.num_choices
            ),
            MessageStyle::Info,
        );
        app.add_message("Press TAB for a hint from the solver.", MessageStyle::Info);
        Ok(app)
    }

    /// Ask the solver what it would guess given the player's history
    pub fn compute_hint(&mut self) {
        let Some(space) = &self.space else {
            self.add_message("Hints are unavailable for a space this large.", MessageStyle::Error);
            return;
        };

        let history = self.game.observations();
        let candidates = candidates_consistent_with(space, &history);
        let choice = select_next_guess(&MinimaxStrategy, space, &candidates, history.is_empty());

        self.hint = choice.map(|index| {
            let guess = space.code(index).clone();
            Hint {
                worst_case: calculate_max_remaining(space, &guess, &candidates),
                candidates: candidates.len(),
                guess,
            }
        });

        if let Some(hint) = &self.hint {
            let text = format!(
                "Hint: {} ({} candidates, at most {} left after it)",
                hint.guess, hint.candidates, hint.worst_case
            );
            self.add_message(&text, MessageStyle::Info);
        }
    }

    /// Submit the typed guess
    pub fn submit_guess(&mut self) {
        let guess = match Code::parse(&self.input_buffer, &self.config) {
            Ok(guess) => guess,
            Err(err) => {
                self.add_message(&format!("Invalid guess: {err}"), MessageStyle::Error);
                return;
            }
        };

        let status = match self.game.submit(&guess) {
            Ok(status) => status,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();
        self.hint = None;

        match status {
            Status::Won => {
                let guesses = self.game.history().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                *self.stats.guess_distribution.entry(guesses).or_insert(0) += 1;
                self.input_mode = InputMode::GameOver;

                self.add_message(
                    &format!("🎉 That is correct! You win in {guesses}!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::Exhausted => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;

                self.add_message("You lose! Too many guesses!", MessageStyle::Error);
                let reveal = format!("The secret was {}", self.game.secret());
                self.add_message(&reveal, MessageStyle::Info);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::Guessing => {
                let left = self.game.guesses_left();
                self.add_message(&format!("{left} guesses left"), MessageStyle::Info);
            }
        }
    }

    /// Start over with a fresh random secret
    pub fn new_game(&mut self) {
        self.game = match Game::new(self.config, None, &mut self.rng) {
            Ok(game) => game,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();
        self.hint = None;
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started! I have a new secret.", MessageStyle::Info);
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
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.compute_hint(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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
