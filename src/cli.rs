use crate::debug_log;
use crate::engine::{DEFAULT_MAX_WRONG_GUESSES, PlayedResult};
use crate::error::GameError;
use crate::events::{GameEvent, GameObserver, RoundOutcome};
use crate::game_state::{GameInterface, UserAction};
use crate::word::display_letter;
use clap::Parser;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Hangman: guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Wrong guesses allowed before the round is lost
    #[arg(
        short = 'm',
        long = "max-wrong-guesses",
        default_value_t = DEFAULT_MAX_WRONG_GUESSES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_wrong_guesses: u32,

    /// Seed for a reproducible sequence of words
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the line-mode interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Spreads the masked word out so single placeholders are easy to count.
#[must_use]
pub fn spaced(masked_word: &str) -> String {
    let mut out = String::with_capacity(masked_word.len() * 2);
    for (i, c) in masked_word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Line-mode front end over any reader/writer pair.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("CliInterface - write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> GameObserver for CliInterface<R, W> {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::WordInitialized { length } => {
                self.say(format!("\nNew round! The word has {length} letters."));
                self.say(spaced(&"_".repeat(*length)));
            }
            GameEvent::LettersRevealed { masked_word } => {
                self.say(spaced(masked_word));
            }
            GameEvent::LifeChanged { fraction, band } => {
                self.say(format!(
                    "Life: {:.0}% ({})",
                    fraction * 100.0,
                    band.label()
                ));
            }
            GameEvent::RoundEnded {
                outcome,
                revealed_word,
            } => {
                let word: String = revealed_word.chars().map(display_letter).collect();
                match outcome {
                    RoundOutcome::Won => self.say(format!("You escaped! The word was {word}.")),
                    RoundOutcome::Lost => {
                        self.say(format!("Your life ran out. The word was {word}."));
                    }
                }
                self.say("Type 'next' for a new round or 'exit' to quit.");
            }
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_action(&mut self) -> Option<UserAction> {
        self.say("\nGuess a letter ('next' for a new round, 'exit' to quit):");
        if let Err(e) = self.writer.flush() {
            debug_log!("CliInterface - flush failed: {}", e);
        }

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => return Some(UserAction::Exit),
            Ok(_) => {}
            Err(e) => {
                debug_log!("CliInterface - read failed: {}", e);
                return Some(UserAction::Exit);
            }
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") {
            Some(UserAction::Exit)
        } else if input.eq_ignore_ascii_case("next") {
            Some(UserAction::NewRound)
        } else if input.is_empty() {
            self.say("Please enter a letter.");
            None
        } else {
            Some(UserAction::Guess(input.to_string()))
        }
    }

    fn display_result(&mut self, guess: &str, result: PlayedResult) {
        match result {
            PlayedResult::NoChange => {
                self.say(format!("You already tried '{guess}'."));
            }
            PlayedResult::Used => self.say(format!("Yes, '{guess}' is in the word.")),
            PlayedResult::Failed => self.say(format!("No '{guess}' in the word.")),
            PlayedResult::Won | PlayedResult::Lost => {}
        }
    }

    fn display_error(&mut self, error: &GameError) {
        match error {
            GameError::RoundFinished => {
                self.say("The round is over. Type 'next' to play again.");
            }
            other => self.say(other),
        }
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }
}
