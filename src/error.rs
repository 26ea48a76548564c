/// Errors surfaced by the game core.
///
/// Every variant is caller-correctable; the engine never retries and never
/// leaves a round half-updated when it returns one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The vocabulary or engine settings cannot support a round.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A guess token that is not a single letter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A guess arrived while no round is in progress.
    #[error("No round in progress; start a new round first")]
    RoundFinished,

    /// Text that cannot be used as a target word.
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::Configuration("vocabulary is empty".to_string()).to_string(),
            "Configuration error: vocabulary is empty"
        );
        assert_eq!(
            GameError::InvalidInput("'7' is not a letter".to_string()).to_string(),
            "Invalid input: '7' is not a letter"
        );
        assert_eq!(
            GameError::RoundFinished.to_string(),
            "No round in progress; start a new round first"
        );
        assert_eq!(
            GameError::InvalidWord("c4t".to_string()).to_string(),
            "Invalid word: \"c4t\""
        );
    }
}
