use crate::engine::{GameEngine, PlayedResult};
use crate::error::{GameError, GameResult};
use crate::events::GameObserver;
use crate::info_log;
use crate::wordbank::WordSource;

/// Something the player asked the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewRound,
    Exit,
}

/// A front end that can host the engine.
///
/// It observes engine events and supplies player actions. `read_action`
/// returns `None` when the input was not actionable and should be re-read.
pub trait GameInterface: GameObserver {
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_result(&mut self, guess: &str, result: PlayedResult);
    fn display_error(&mut self, error: &GameError);
    fn display_exit_message(&mut self);
}

/// Runs rounds until the player exits.
///
/// # Errors
///
/// Returns the error if a round cannot be started. Errors from individual
/// guesses are shown to the player and play continues.
pub fn game_loop<S, I>(engine: &mut GameEngine<S>, interface: &mut I) -> GameResult<()>
where
    S: WordSource,
    I: GameInterface,
{
    engine.start_round(interface)?;

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        info_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return Ok(());
            }
            UserAction::NewRound => engine.start_round(interface)?,
            UserAction::Guess(guess) => match engine.guess_letter(&guess, interface) {
                Ok(result) => interface.display_result(&guess, result),
                Err(e) => interface.display_error(&e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{GameEvent, RoundOutcome};
    use crate::word::Word;
    use crate::wordbank::RandomWordSource;
    use std::collections::VecDeque;

    /// Replays canned actions and records everything shown.
    struct Recorder {
        actions: VecDeque<Option<UserAction>>,
        events: Vec<GameEvent>,
        results: Vec<(String, PlayedResult)>,
        errors: Vec<GameError>,
        exited: bool,
    }

    impl Recorder {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                events: Vec::new(),
                results: Vec::new(),
                errors: Vec::new(),
                exited: false,
            }
        }
    }

    impl GameObserver for Recorder {
        fn notify(&mut self, event: &GameEvent) {
            self.events.push(event.clone());
        }
    }

    impl GameInterface for Recorder {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_result(&mut self, guess: &str, result: PlayedResult) {
            self.results.push((guess.to_string(), result));
        }

        fn display_error(&mut self, error: &GameError) {
            self.errors.push(error.clone());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn guess(letter: &str) -> Option<UserAction> {
        Some(UserAction::Guess(letter.to_string()))
    }

    fn single_word_engine(word: &str, max: u32) -> GameEngine<RandomWordSource> {
        let source = RandomWordSource::with_seed(vec![Word::new(word).unwrap()], 0).unwrap();
        GameEngine::new(source, max).unwrap()
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut engine = single_word_engine("cat", 5);
        let mut recorder = Recorder::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut engine, &mut recorder).unwrap();
        assert!(recorder.exited);
        assert_eq!(recorder.events, vec![GameEvent::WordInitialized { length: 3 }]);
    }

    #[test]
    fn test_game_loop_skips_unreadable_input() {
        let mut engine = single_word_engine("cat", 5);
        let mut recorder = Recorder::new(vec![None, None, guess("c")]);
        game_loop(&mut engine, &mut recorder).unwrap();
        assert_eq!(recorder.results, vec![("c".to_string(), PlayedResult::Used)]);
    }

    #[test]
    fn test_game_loop_win() {
        let mut engine = single_word_engine("cat", 5);
        let mut recorder = Recorder::new(vec![guess("c"), guess("a"), guess("t")]);
        game_loop(&mut engine, &mut recorder).unwrap();
        let results: Vec<PlayedResult> = recorder.results.iter().map(|(_, r)| *r).collect();
        assert_eq!(
            results,
            vec![PlayedResult::Used, PlayedResult::Used, PlayedResult::Won]
        );
        assert!(recorder.events.contains(&GameEvent::RoundEnded {
            outcome: RoundOutcome::Won,
            revealed_word: "cat".to_string()
        }));
    }

    #[test]
    fn test_game_loop_reports_errors_and_continues() {
        let mut engine = single_word_engine("a", 5);
        let mut recorder = Recorder::new(vec![guess("1"), guess("a"), guess("b")]);
        game_loop(&mut engine, &mut recorder).unwrap();
        assert!(matches!(recorder.errors[0], GameError::InvalidInput(_)));
        assert_eq!(recorder.errors[1], GameError::RoundFinished);
        assert_eq!(recorder.results, vec![("a".to_string(), PlayedResult::Won)]);
    }

    #[test]
    fn test_game_loop_new_round_after_loss() {
        let mut engine = single_word_engine("cat", 1);
        let mut recorder =
            Recorder::new(vec![guess("z"), Some(UserAction::NewRound), guess("c")]);
        game_loop(&mut engine, &mut recorder).unwrap();
        let results: Vec<PlayedResult> = recorder.results.iter().map(|(_, r)| *r).collect();
        assert_eq!(results, vec![PlayedResult::Lost, PlayedResult::Used]);
        let starts = recorder
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::WordInitialized { .. }))
            .count();
        assert_eq!(starts, 2);
    }
}
