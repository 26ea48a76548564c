//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # Architecture
//! `TuiInterface` observes engine events to keep its view model current and
//! turns key presses into [`UserAction`]s for the game loop.
//!
//! # State Machine
//! - `Playing` → `RoundOver` when the engine reports the round ended
//! - `RoundOver` → `Playing` when the next round's word is initialized

use crate::engine::PlayedResult;
use crate::error::GameError;
use crate::events::{GameEvent, GameObserver, RoundOutcome};
use crate::game_state::{GameInterface, UserAction};
use crate::life::LifeBand;
use crate::word::display_letter;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const LETTER_GAP: &str = "  ";

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const HIT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const MISS_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

/// Gallows drawings, from untouched to hanged.
const GALLOWS: [&[&str]; 7] = [
    &["  +---+", "  |   |", "      |", "      |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "========="],
    &["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "========="],
];

/// Which gallows drawing to show for the remaining life.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn gallows_stage(fraction: f64) -> usize {
    let last = GALLOWS.len() - 1;
    let lost = (1.0 - fraction.clamp(0.0, 1.0)) * last as f64;
    (lost.round() as usize).min(last)
}

/// Colour of the life gauge for a band.
#[must_use]
pub fn band_color(band: LifeBand) -> Color {
    match band {
        LifeBand::Critical => Color::Rgb(255, 0, 0),
        LifeBand::Warning => Color::Rgb(255, 163, 33),
        LifeBand::Healthy => Color::Rgb(36, 232, 18),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Playing,
    RoundOver,
}

#[derive(Debug)]
struct GuessedLetter {
    letter: String,
    hit: bool,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    masked_word: &'a str,
    life: f64,
    band: LifeBand,
    guesses: &'a [GuessedLetter],
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    masked_word: String,
    life: f64,
    band: LifeBand,
    guesses: Vec<GuessedLetter>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::Playing,
            masked_word: String::new(),
            life: 1.0,
            band: LifeBand::Healthy,
            guesses: Vec::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            masked_word: &self.masked_word,
            life: self.life,
            band: self.band,
            guesses: &self.guesses,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Gallows and word
                Constraint::Length(3), // Life gauge
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(20)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, body[0], ctx.life);
        Self::render_word(f, body[1], ctx);
        Self::render_life(f, chunks[2], ctx.life, ctx.band);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, life: f64) {
        let lines: Vec<Line> = GALLOWS[gallows_stage(life)]
            .iter()
            .map(|row| Line::from(*row))
            .collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let letters: Vec<String> = ctx.masked_word.chars().map(String::from).collect();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(letters.join(LETTER_GAP), WORD_STYLE))
                .alignment(Alignment::Center),
            Line::from(""),
        ];

        if !ctx.guesses.is_empty() {
            let mut spans = vec![Span::raw("Tried: ")];
            for guess in ctx.guesses {
                let style = if guess.hit { HIT_STYLE } else { MISS_STYLE };
                let letter: String = guess.letter.chars().map(display_letter).collect();
                spans.push(Span::styled(format!(" {letter} "), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            let style = match ctx.state {
                TuiState::Playing => MESSAGE_STYLE,
                TuiState::RoundOver if ctx.life > 0.0 => SUCCESS_STYLE,
                TuiState::RoundOver => FAILURE_STYLE,
            };
            lines.push(Line::from(Span::styled(ctx.message, style)));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_life(f: &mut Frame, area: Rect, life: f64, band: LifeBand) {
        let ratio = life.clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().title("Life").borders(Borders::ALL))
            .gauge_style(Style::new().fg(band_color(band)))
            .ratio(ratio)
            .label(format!("{:.0}% ({})", ratio * 100.0, band.label()));
        f.render_widget(gauge, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "Type a letter to guess | ESC: Quit",
            TuiState::RoundOver => "ENTER or N: New round | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info_log!("handle_input() - Ctrl-C pressed, returning Exit");
            return Ok(Some(UserAction::Exit));
        }
        if Self::has_modifier_keys(&key) {
            debug_log!("handle_input() - Ignoring key with modifier: {:?}", key.modifiers);
            return Ok(None);
        }

        debug_log!("handle_input() - Key event received: code={:?}", key.code);
        Ok(match self.state {
            TuiState::Playing => Self::handle_playing_input(key),
            TuiState::RoundOver => Self::handle_round_over_input(key),
        })
    }

    fn handle_playing_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            // Validation is left to the engine so non-letters get its error message
            KeyCode::Char(c) => Some(UserAction::Guess(c.to_string())),
            _ => None,
        }
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(UserAction::NewRound),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl GameObserver for TuiInterface {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::WordInitialized { length } => {
                self.state = TuiState::Playing;
                self.masked_word = "_".repeat(*length);
                self.life = 1.0;
                self.band = LifeBand::Healthy;
                self.guesses.clear();
                self.error_message.clear();
                self.message = format!("New round: the word has {length} letters.");
                self.status = "Guess a letter".to_string();
            }
            GameEvent::LettersRevealed { masked_word } => {
                self.masked_word.clone_from(masked_word);
            }
            GameEvent::LifeChanged { fraction, band } => {
                self.life = *fraction;
                self.band = *band;
            }
            GameEvent::RoundEnded {
                outcome,
                revealed_word,
            } => {
                self.state = TuiState::RoundOver;
                self.masked_word = revealed_word.chars().map(display_letter).collect();
                let word = &self.masked_word;
                match outcome {
                    RoundOutcome::Won => {
                        self.message = format!("Congratulations! You escaped. Solution: {word}");
                        self.status = "Round won".to_string();
                    }
                    RoundOutcome::Lost => {
                        self.message = format!("You are dead... Solution: {word}");
                        self.status = "Round lost".to_string();
                    }
                }
            }
        }
        self.draw_or_log();
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    self.error_message.clear();
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_result(&mut self, guess: &str, result: PlayedResult) {
        let hit = match result {
            PlayedResult::NoChange => {
                self.error_message = format!("You already tried '{guess}'.");
                self.draw_or_log();
                return;
            }
            PlayedResult::Used | PlayedResult::Won => true,
            PlayedResult::Failed | PlayedResult::Lost => false,
        };
        self.guesses.push(GuessedLetter {
            letter: guess.to_string(),
            hit,
        });
        if result == PlayedResult::Used {
            self.status = format!("'{guess}' is in the word");
        } else if result == PlayedResult::Failed {
            self.status = format!("No '{guess}' in the word");
        }
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
