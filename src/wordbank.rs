use crate::error::{GameError, GameResult};
use crate::word::Word;
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Parses a newline-delimited word list.
///
/// Lines are trimmed; blank lines and lines that are not a single word of
/// letters are skipped. Duplicates are dropped, keeping the first occurrence.
pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    collect_words(data.lines())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<String>>>()?;
    Ok(collect_words(lines))
}

fn collect_words<I, L>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter_map(|line| Word::new(line.as_ref().trim()).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Supplies the vocabulary a word source draws from.
pub trait VocabularyLoader {
    fn load(&self) -> io::Result<Vec<Word>>;
}

/// The word list compiled into the binary.
pub struct EmbeddedVocabulary;

impl VocabularyLoader for EmbeddedVocabulary {
    fn load(&self) -> io::Result<Vec<Word>> {
        Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }
}

/// A newline-delimited word list on disk.
pub struct FileVocabulary {
    path: PathBuf,
}

impl FileVocabulary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularyLoader for FileVocabulary {
    fn load(&self) -> io::Result<Vec<Word>> {
        load_wordbank_from_file(&self.path)
    }
}

/// Supplies one target word per round.
pub trait WordSource {
    fn pick(&mut self) -> GameResult<Word>;
}

/// Draws uniformly at random, with replacement, from a fixed vocabulary.
pub struct RandomWordSource<R = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl RandomWordSource<StdRng> {
    /// Builds a source seeded from OS entropy.
    pub fn new(words: Vec<Word>) -> GameResult<Self> {
        Self::with_rng(words, StdRng::from_entropy())
    }

    /// Builds a source whose sequence of picks is reproducible.
    pub fn with_seed(words: Vec<Word>, seed: u64) -> GameResult<Self> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordSource<R> {
    pub fn with_rng(words: Vec<Word>, rng: R) -> GameResult<Self> {
        if words.is_empty() {
            return Err(GameError::Configuration(
                "vocabulary is empty".to_string(),
            ));
        }
        info_log!("RandomWordSource - vocabulary of {} words", words.len());
        Ok(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn pick(&mut self) -> GameResult<Word> {
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| GameError::Configuration("vocabulary is empty".to_string()))?;
        debug_log!("RandomWordSource::pick() - {} letters", word.len());
        Ok(word)
    }
}
