//! Round state machine
//!
//! The engine owns the live round: the hidden word, which positions are
//! revealed, which letters were tried and how much life is left. Rounds go
//! `InProgress` to either `Won` or `Lost`, and a finished round accepts no
//! more guesses until [`GameEngine::start_round`] replaces it.

use crate::error::{GameError, GameResult};
use crate::events::{GameEvent, GameObserver, RoundOutcome};
use crate::life::{life_band, life_fraction};
use crate::word::{Word, normalize_letter};
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;

/// Wrong guesses allowed per round unless configured otherwise.
pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }
}

/// Outcome of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayedResult {
    /// The letter was already tried this round; nothing changed.
    NoChange,
    /// The letter is in the word and the round continues.
    Used,
    /// The letter is not in the word and the round continues.
    Failed,
    /// The guess revealed the last hidden position.
    Won,
    /// The guess used up the last of the life.
    Lost,
}

/// State of one round, from word selection to the final outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    target: Word,
    revealed: Vec<bool>,
    guessed_letters: BTreeSet<char>,
    wrong_guesses: u32,
    max_wrong_guesses: u32,
    status: RoundStatus,
}

impl RoundState {
    fn new(target: Word, max_wrong_guesses: u32) -> Self {
        let revealed = vec![false; target.len()];
        Self {
            target,
            revealed,
            guessed_letters: BTreeSet::new(),
            wrong_guesses: 0,
            max_wrong_guesses,
            status: RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    #[must_use]
    pub fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn life_fraction(&self) -> f64 {
        life_fraction(self.wrong_guesses, self.max_wrong_guesses)
    }

    #[must_use]
    pub fn masked_word(&self) -> String {
        self.target.masked(&self.revealed)
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Marks every hidden position holding `letter` and returns how many
    /// positions changed.
    fn reveal(&mut self, letter: char) -> usize {
        let mut newly_revealed = 0;
        for (revealed, &c) in self.revealed.iter_mut().zip(self.target.letters()) {
            if c == letter && !*revealed {
                *revealed = true;
                newly_revealed += 1;
            }
        }
        newly_revealed
    }
}

/// Parses a guess token into a lower-case letter.
fn parse_guess(token: &str) -> GameResult<char> {
    let mut chars = token.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(GameError::InvalidInput(format!(
            "expected a single letter, got {token:?}"
        )));
    };
    normalize_letter(c)
        .ok_or_else(|| GameError::InvalidInput(format!("'{c}' is not a letter")))
}

/// Core game engine: pulls words from a [`WordSource`] and runs rounds.
pub struct GameEngine<S> {
    source: S,
    max_wrong_guesses: u32,
    round: Option<RoundState>,
}

impl<S: WordSource> GameEngine<S> {
    /// Creates an engine with no round in progress.
    ///
    /// # Errors
    ///
    /// [`GameError::Configuration`] if `max_wrong_guesses` is zero.
    pub fn new(source: S, max_wrong_guesses: u32) -> GameResult<Self> {
        if max_wrong_guesses == 0 {
            return Err(GameError::Configuration(
                "at least one wrong guess must be allowed".to_string(),
            ));
        }
        Ok(Self {
            source,
            max_wrong_guesses,
            round: None,
        })
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    /// The current round, if one was ever started.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Masked rendering of the current round, `None` before the first round.
    #[must_use]
    pub fn masked_word(&self) -> Option<String> {
        self.round.as_ref().map(RoundState::masked_word)
    }

    /// Discards any current round and starts a new one.
    ///
    /// Emits [`GameEvent::WordInitialized`] with the word length.
    ///
    /// # Errors
    ///
    /// Whatever the word source returns; the previous round is kept intact.
    pub fn start_round(&mut self, observer: &mut dyn GameObserver) -> GameResult<()> {
        let target = self.source.pick()?;
        let length = target.len();
        self.round = Some(RoundState::new(target, self.max_wrong_guesses));
        info_log!("start_round() - new round, {} letters", length);
        observer.notify(&GameEvent::WordInitialized { length });
        Ok(())
    }

    /// Plays one letter against the current round.
    ///
    /// # Errors
    ///
    /// * [`GameError::RoundFinished`] if no round is in progress
    /// * [`GameError::InvalidInput`] if `token` is not exactly one letter
    ///
    /// In both cases the round is untouched and no event is emitted.
    pub fn guess_letter(
        &mut self,
        token: &str,
        observer: &mut dyn GameObserver,
    ) -> GameResult<PlayedResult> {
        let round = match self.round.as_mut() {
            Some(round) if round.status == RoundStatus::InProgress => round,
            _ => return Err(GameError::RoundFinished),
        };
        let letter = parse_guess(token)?;

        if !round.guessed_letters.insert(letter) {
            debug_log!("guess_letter() - '{}' already tried", letter);
            return Ok(PlayedResult::NoChange);
        }

        if round.reveal(letter) == 0 {
            round.wrong_guesses += 1;
            let fraction = round.life_fraction();
            debug_log!(
                "guess_letter() - '{}' missed, life now {:.2}",
                letter,
                fraction
            );
            observer.notify(&GameEvent::LifeChanged {
                fraction,
                band: life_band(fraction),
            });
            if round.wrong_guesses >= round.max_wrong_guesses {
                round.status = RoundStatus::Lost;
                info_log!("guess_letter() - round lost");
                observer.notify(&GameEvent::RoundEnded {
                    outcome: RoundOutcome::Lost,
                    revealed_word: round.target.to_string(),
                });
                return Ok(PlayedResult::Lost);
            }
            return Ok(PlayedResult::Failed);
        }

        let masked_word = round.masked_word();
        debug_log!("guess_letter() - '{}' hit, word now {}", letter, masked_word);
        observer.notify(&GameEvent::LettersRevealed { masked_word });
        if round.is_fully_revealed() {
            round.status = RoundStatus::Won;
            info_log!("guess_letter() - round won");
            observer.notify(&GameEvent::RoundEnded {
                outcome: RoundOutcome::Won,
                revealed_word: round.target.to_string(),
            });
            return Ok(PlayedResult::Won);
        }
        Ok(PlayedResult::Used)
    }
}
