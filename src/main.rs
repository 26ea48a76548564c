use hangman::cli::{Cli, CliInterface, parse_cli};
use hangman::engine::GameEngine;
use hangman::error::{GameError, GameResult};
use hangman::game_state::game_loop;
use hangman::logging::init_logging;
use hangman::tui::TuiInterface;
use hangman::word::Word;
use hangman::wordbank::{EmbeddedVocabulary, FileVocabulary, RandomWordSource, VocabularyLoader};
use std::io;
use std::process::ExitCode;

fn load_vocabulary(cli: &Cli) -> GameResult<Vec<Word>> {
    let loaded = match &cli.wordbank_path {
        Some(path) => {
            let vocabulary = FileVocabulary::new(path);
            log::info!("Loading word list from {}", vocabulary.path().display());
            vocabulary.load()
        }
        None => EmbeddedVocabulary.load(),
    };
    loaded.map_err(|e| GameError::Configuration(format!("cannot load word list: {e}")))
}

fn run(cli: &Cli) -> GameResult<()> {
    let words = load_vocabulary(cli)?;

    let source = match cli.seed {
        Some(seed) => RandomWordSource::with_seed(words, seed)?,
        None => RandomWordSource::new(words)?,
    };
    let mut engine = GameEngine::new(source, cli.max_wrong_guesses)?;
    log::info!(
        "Loaded {} words, {} wrong guesses allowed",
        engine.source().len(),
        engine.max_wrong_guesses()
    );

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), io::stdout());
        return game_loop(&mut engine, &mut interface);
    }

    let mut interface = TuiInterface::new().map_err(|e| {
        GameError::Configuration(format!("cannot initialize terminal: {e}"))
    })?;
    game_loop(&mut engine, &mut interface)
}

fn main() -> ExitCode {
    let cli = parse_cli();

    match init_logging(cli.log_file.as_deref(), cli.verbose) {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
