//! TUI application state and logic
//!
//! The app is the presentation side of a session: it shuffles options for
//! display, forwards picks to the engine, and owns the pause between a
//! resolved round and the next one.

use crate::config::Timing;
use crate::core::Round;
use crate::output::formatters::{display_order, outcome_summary};
use crate::session::{AdvanceResult, Phase, SessionEngine, SubmitResult};
use crate::share::ShareEncoder;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll interval while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub engine: SessionEngine,
    rounds: Vec<Round>,
    pub timing: Timing,
    rng: StdRng,
    /// Current round's options in display order
    pub options: Vec<String>,
    pub selected: usize,
    /// Options already guessed wrong this round
    pub wrong_picks: Vec<String>,
    /// When the resolved round should advance
    pub pending_advance: Option<Instant>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub sessions_completed: usize,
    pub best_score: usize,
}

impl App {
    /// Create the app and start the first session
    ///
    /// # Errors
    ///
    /// Returns an error if `rounds` is empty.
    pub fn new(
        rounds: Vec<Round>,
        encoder: ShareEncoder,
        timing: Timing,
        rng: StdRng,
    ) -> Result<Self> {
        let mut engine = SessionEngine::new(encoder);
        engine.start(rounds.clone())?;

        let mut app = Self {
            engine,
            rounds,
            timing,
            rng,
            options: Vec::new(),
            selected: 0,
            wrong_picks: Vec::new(),
            pending_advance: None,
            messages: vec![Message {
                text: "Pick the emoji that completes the equation.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        };
        app.prepare_round();
        Ok(app)
    }

    /// Shuffle options for the round now in play
    fn prepare_round(&mut self) {
        self.options = self
            .engine
            .current_round()
            .map(|round| display_order(round, &mut self.rng))
            .unwrap_or_default();
        self.selected = 0;
        self.wrong_picks.clear();
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Select by 1-based number; out-of-range numbers are ignored
    pub fn select_number(&mut self, number: usize) {
        if (1..=self.options.len()).contains(&number) {
            self.selected = number - 1;
        }
    }

    /// Submit the highlighted option
    pub fn submit_selected(&mut self, now: Instant) {
        let Some(option) = self.options.get(self.selected).cloned() else {
            return;
        };
        let offered = self
            .engine
            .current_round()
            .is_some_and(|round| round.offers(&option));
        if !offered || self.engine.phase() != Phase::RoundActive {
            return;
        }
        if self.wrong_picks.contains(&option) {
            self.add_message(&format!("Already tried {option}."), MessageStyle::Info);
            return;
        }

        match self.engine.submit(&option) {
            SubmitResult::Ignored => {}
            SubmitResult::Incorrect { attempts_remaining } => {
                self.wrong_picks.push(option);
                self.add_message(
                    &format!(
                        "Not quite! {attempts_remaining} {} left.",
                        if attempts_remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Error,
                );
            }
            SubmitResult::Resolved(outcome) => {
                if !outcome.correct {
                    self.wrong_picks.push(option);
                }
                let delay = self
                    .engine
                    .current_round()
                    .map_or(self.timing.resolve_delay, |round| {
                        self.timing.delay_for(round)
                    });
                self.pending_advance = Some(now + delay);
                debug!(delay_ms = delay.as_millis(), "Scheduled advance");

                let style = if outcome.correct {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&outcome_summary(&outcome), style);
            }
        }
    }

    /// Advance once the scheduled delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self.pending_advance.is_some_and(|deadline| now >= deadline) {
            self.advance_now();
        }
    }

    /// Skip the rest of the display delay
    pub fn advance_now(&mut self) {
        self.pending_advance = None;

        match self.engine.advance() {
            AdvanceResult::Ignored => {}
            AdvanceResult::NextRound(index) => {
                self.prepare_round();
                self.add_message(&format!("Round {}", index + 1), MessageStyle::Info);
            }
            AdvanceResult::Complete => {
                self.prepare_round();
                let score = self.engine.score();
                self.stats.sessions_completed += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                info!(score, "TUI session complete");
                self.add_message(
                    &format!("Done! {score}/{} correct.", self.rounds.len()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'r' to play again or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Start over with the same rounds, dropping any scheduled advance
    pub fn play_again(&mut self) {
        self.pending_advance = None;
        if self.engine.restart(self.rounds.clone()).is_ok() {
            self.prepare_round();
            self.messages.clear();
            self.add_message("New game started!", MessageStyle::Info);
        }
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.pending_advance
            .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now))
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

    #[must_use]
    pub fn share_string(&self) -> Option<String> {
        self.engine.share_string()
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if self.engine.phase() == Phase::Complete => {
                self.play_again();
            }
            KeyCode::Left | KeyCode::Up => self.select_previous(),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => self.select_next(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.select_number(c.to_digit(10).map_or(0, |d| d as usize));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.engine.phase() == Phase::RoundResolved {
                    self.advance_now();
                } else {
                    self.submit_selected(now);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// Returns the share string if the last session was completed.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal even if the app failed
    let restored = restore_terminal(&mut terminal);
    settle(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Combine the app result with terminal cleanup; the app's error wins
fn settle(outcome: Result<Option<String>>, restored: Result<()>) -> Result<Option<String>> {
    let share = outcome?;
    restored?;
    Ok(share)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, key.modifiers, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app.share_string())
}
