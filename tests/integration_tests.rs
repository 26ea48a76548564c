// Integration tests for hangman
// These tests verify that the word list, engine and line-mode host work together

use hangman::cli::CliInterface;
use hangman::*;
use std::io::Cursor;

fn engine_for(word: &str, max_wrong_guesses: u32) -> GameEngine<RandomWordSource> {
    let source = RandomWordSource::with_seed(vec![Word::new(word).unwrap()], 1).unwrap();
    GameEngine::new(source, max_wrong_guesses).unwrap()
}

fn play_cli(engine: &mut GameEngine<RandomWordSource>, input: &str) -> String {
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    game_loop(engine, &mut interface).unwrap();
    String::from_utf8(interface.into_writer()).unwrap()
}

#[test]
fn test_cat_round_through_engine() {
    let mut engine = engine_for("cat", 5);
    let mut events: Vec<GameEvent> = Vec::new();
    engine.start_round(&mut events).unwrap();

    assert_eq!(engine.guess_letter("z", &mut events), Ok(PlayedResult::Failed));
    let round = engine.round().unwrap();
    assert_eq!(round.life_fraction(), 0.8);
    assert_eq!(life_band(round.life_fraction()), LifeBand::Healthy);

    assert_eq!(engine.guess_letter("z", &mut events), Ok(PlayedResult::NoChange));
    assert_eq!(engine.round().unwrap().life_fraction(), 0.8);

    assert_eq!(engine.guess_letter("c", &mut events), Ok(PlayedResult::Used));
    assert_eq!(engine.masked_word().as_deref(), Some("C__"));
    assert_eq!(engine.guess_letter("a", &mut events), Ok(PlayedResult::Used));
    assert_eq!(engine.masked_word().as_deref(), Some("CA_"));
    assert_eq!(engine.guess_letter("t", &mut events), Ok(PlayedResult::Won));

    assert_eq!(
        events,
        vec![
            GameEvent::WordInitialized { length: 3 },
            GameEvent::LifeChanged {
                fraction: 0.8,
                band: LifeBand::Healthy
            },
            GameEvent::LettersRevealed {
                masked_word: "C__".to_string()
            },
            GameEvent::LettersRevealed {
                masked_word: "CA_".to_string()
            },
            GameEvent::LettersRevealed {
                masked_word: "CAT".to_string()
            },
            GameEvent::RoundEnded {
                outcome: RoundOutcome::Won,
                revealed_word: "cat".to_string()
            },
        ]
    );
}

#[test]
fn test_five_misses_through_engine() {
    let mut engine = engine_for("cat", 5);
    engine.start_round(&mut ()).unwrap();

    let results: Vec<PlayedResult> = ["x", "y", "z", "q", "w"]
        .iter()
        .map(|l| engine.guess_letter(l, &mut ()).unwrap())
        .collect();
    assert_eq!(
        results,
        vec![
            PlayedResult::Failed,
            PlayedResult::Failed,
            PlayedResult::Failed,
            PlayedResult::Failed,
            PlayedResult::Lost,
        ]
    );

    let round = engine.round().unwrap();
    assert_eq!(round.status(), RoundStatus::Lost);
    assert_eq!(round.life_fraction(), 0.0);
    assert_eq!(life_band(round.life_fraction()), LifeBand::Critical);
    assert_eq!(
        engine.guess_letter("c", &mut ()),
        Err(GameError::RoundFinished)
    );
}

#[test]
fn test_cli_game_won() {
    let mut engine = engine_for("cat", 5);
    let output = play_cli(&mut engine, "z\nz\nc\na\nt\nexit\n");

    assert!(output.contains("The word has 3 letters."));
    assert!(output.contains("No 'z' in the word."));
    assert!(output.contains("Life: 80% (healthy)"));
    assert!(output.contains("You already tried 'z'."));
    assert!(output.contains("C _ _"));
    assert!(output.contains("C A _"));
    assert!(output.contains("C A T"));
    assert!(output.contains("You escaped! The word was CAT."));
    assert!(output.contains("Exiting."));
    assert_eq!(engine.round().unwrap().status(), RoundStatus::Won);
}

#[test]
fn test_cli_game_lost_then_new_round() {
    let mut engine = engine_for("cat", 2);
    let output = play_cli(&mut engine, "x\ny\nq\nnext\nc\n");

    assert!(output.contains("Life: 50% (warning)"));
    assert!(output.contains("Life: 0% (critical)"));
    assert!(output.contains("Your life ran out. The word was CAT."));
    assert!(output.contains("The round is over. Type 'next' to play again."));
    assert!(output.contains("Yes, 'c' is in the word."));

    let round = engine.round().unwrap();
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.wrong_guesses(), 0);
    assert_eq!(engine.masked_word().as_deref(), Some("C__"));
}

#[test]
fn test_cli_invalid_input_is_reported() {
    let mut engine = engine_for("cat", 5);
    let output = play_cli(&mut engine, "4\nab\n\nexit\n");

    assert!(output.contains("Invalid input: '4' is not a letter"));
    assert!(output.contains("Invalid input: expected a single letter, got \"ab\""));
    assert!(output.contains("Please enter a letter."));
    let round = engine.round().unwrap();
    assert!(round.guessed_letters().is_empty());
    assert_eq!(round.life_fraction(), 1.0);
}

#[test]
fn test_cli_uppercase_guesses() {
    let mut engine = engine_for("cat", 5);
    play_cli(&mut engine, "C\nA\nT\n");
    assert_eq!(engine.round().unwrap().status(), RoundStatus::Won);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("hangman_integration_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Python").unwrap();
        writeln!(file, "not a word").unwrap();
        writeln!(file).unwrap();
    }

    let words = load_wordbank_from_file(&path).unwrap();
    assert_eq!(words, vec![Word::new("python").unwrap()]);

    let source = RandomWordSource::with_seed(words, 9).unwrap();
    let mut engine = GameEngine::new(source, DEFAULT_MAX_WRONG_GUESSES).unwrap();
    let output = play_cli(&mut engine, "p\ny\nt\nh\no\nn\n");
    assert!(output.contains("The word was PYTHON."));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_empty_wordbank_cannot_start() {
    let words = load_wordbank_from_str("123\n\n   \n");
    assert!(words.is_empty());
    assert!(matches!(
        RandomWordSource::new(words),
        Err(GameError::Configuration(_))
    ));
}

#[test]
fn test_game_loop_propagates_source_failure() {
    struct Empty;

    impl WordSource for Empty {
        fn pick(&mut self) -> GameResult<Word> {
            Err(GameError::Configuration("vocabulary unavailable".to_string()))
        }
    }

    let mut engine = GameEngine::new(Empty, 3).unwrap();
    let mut interface = CliInterface::new(Cursor::new("a\n"), Vec::new());
    let result = game_loop(&mut engine, &mut interface);
    assert_eq!(
        result,
        Err(GameError::Configuration("vocabulary unavailable".to_string()))
    );
    assert!(engine.round().is_none());
}

#[test]
fn test_seeded_games_are_reproducible() {
    let words = load_wordbank_from_str("apple\nbanana\ncherry\ndamson\nelder\n");
    let mut a = GameEngine::new(RandomWordSource::with_seed(words.clone(), 77).unwrap(), 6).unwrap();
    let mut b = GameEngine::new(RandomWordSource::with_seed(words, 77).unwrap(), 6).unwrap();
    for _ in 0..10 {
        a.start_round(&mut ()).unwrap();
        b.start_round(&mut ()).unwrap();
        assert_eq!(a.round().unwrap().target(), b.round().unwrap().target());
    }
}
