use crate::error::{GameError, GameResult};
use std::fmt;
use std::str::FromStr;

/// Character shown for positions that have not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Lower-cases a single letter.
///
/// Returns `None` for anything that is not alphabetic, or whose lower-case
/// form expands to more than one character.
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut lower = c.to_lowercase();
    let first = lower.next()?;
    if lower.next().is_some() {
        return None;
    }
    Some(first)
}

/// Upper-cases a letter for display, keeping one character per position.
///
/// Letters whose upper-case form expands (such as 'ß' to "SS") are shown as
/// stored.
#[must_use]
pub fn display_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// A target word: non-empty, letters only, stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<char>,
}

impl Word {
    pub fn new(text: &str) -> GameResult<Self> {
        if text.is_empty() {
            return Err(GameError::InvalidWord(text.to_string()));
        }
        let letters: Option<Vec<char>> = text.chars().map(normalize_letter).collect();
        match letters {
            Some(letters) => Ok(Self { letters }),
            None => Err(GameError::InvalidWord(text.to_string())),
        }
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Renders the word with revealed positions shown via [`display_letter`]
    /// and the rest replaced by [`PLACEHOLDER`]. Always one character per
    /// position.
    ///
    /// `revealed` is indexed by position; missing entries count as hidden.
    #[must_use]
    pub fn masked(&self, revealed: &[bool]) -> String {
        let mut out = String::with_capacity(self.letters.len());
        for (i, &c) in self.letters.iter().enumerate() {
            if revealed.get(i).copied().unwrap_or(false) {
                out.push(display_letter(c));
            } else {
                out.push(PLACEHOLDER);
            }
        }
        out
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
