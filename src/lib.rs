// Library interface for hangman
// The binary and the integration tests both go through these modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod events;
pub mod game_state;
pub mod life;
pub mod logging;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{DEFAULT_MAX_WRONG_GUESSES, GameEngine, PlayedResult, RoundState, RoundStatus};
pub use error::{GameError, GameResult};
pub use events::{GameEvent, GameObserver, RoundOutcome};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use life::{LifeBand, life_band, life_fraction};
pub use word::{Word, display_letter};
pub use wordbank::{
    RandomWordSource, VocabularyLoader, WordSource, load_wordbank_from_file, load_wordbank_from_str,
};
