// main.rs - terminal front end: one command per line on stdin
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use grid_2048::logging::setup_logging;
use grid_2048::persistence::DEFAULT_BEST_SCORE_FILE;
use grid_2048::{
    BestScoreStore, Direction, EngineConfig, GameEngine, GameSession, GameSnapshot, GridError,
    TurnOutcome,
};
use rand::Rng;

#[derive(Parser, Debug)]
#[command(name = "grid_2048", version, about)]
struct Config {
    /// Board side length
    #[arg(short = 'n', long, default_value_t = 4)]
    size: usize,

    /// Tile value that wins the game
    #[arg(short = 'w', long, default_value_t = 2048)]
    win: u64,

    /// Seed for reproducible spawns (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// File holding the best score between runs
    #[arg(long, default_value = DEFAULT_BEST_SCORE_FILE)]
    best_score_file: PathBuf,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write rotating log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print one JSON object per turn instead of the text grid
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Direction),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> grid_2048::Result<Command> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "restart" => Ok(Command::Restart),
        other => other.parse().map(Command::Move),
    }
}

#[derive(Serialize)]
struct TurnReport<'a> {
    #[serde(flatten)]
    snapshot: GameSnapshot,
    turns: usize,
    outcome: Option<&'a TurnOutcome>,
}

fn render<R: Rng, W: Write>(
    out: &mut W,
    session: &GameSession<R>,
    outcome: Option<&TurnOutcome>,
    json: bool,
) -> io::Result<()> {
    let engine = session.engine();
    if json {
        let report = TurnReport {
            snapshot: engine.snapshot(),
            turns: session.turns(),
            outcome,
        };
        let line = serde_json::to_string(&report).map_err(io::Error::other)?;
        writeln!(out, "{}", line)?;
        return out.flush();
    }

    write!(out, "\n{}", engine.board())?;
    writeln!(
        out,
        "SCORE {}   BEST {}",
        engine.current_score(),
        engine.best_score()
    )?;
    match outcome {
        Some(TurnOutcome::Blocked) => writeln!(out, "Nothing moves that way.")?,
        Some(TurnOutcome::Won { .. }) => writeln!(
            out,
            "YOU WIN! 'r' to restart, or keep playing."
        )?,
        Some(TurnOutcome::GameOver { .. }) => {
            writeln!(out, "GAME OVER. 'r' to restart, 'q' to quit.")?
        }
        _ => {}
    }
    out.flush()
}

fn report_error<W: Write>(out: &mut W, error: &GridError, json: bool) -> io::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({ "error": error.to_string() }))?;
    } else {
        writeln!(out, "{} (moves: w/a/s/d, h/j/k/l or words; r restart; q quit)", error)?;
    }
    out.flush()
}

fn run<R: Rng, I: BufRead, W: Write>(
    session: &mut GameSession<R>,
    input: I,
    out: &mut W,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    render(out, session, None, json)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Restart) => {
                session.restart()?;
                render(out, session, None, json)?;
            }
            Ok(Command::Move(direction)) => {
                let outcome = session.play(direction)?;
                render(out, session, Some(&outcome), json)?;
            }
            Err(e) => {
                log::debug!("rejected input {:?}: {}", line, e);
                report_error(out, &e, json)?;
            }
        }
    }
    Ok(())
}

/// Runs the command loop, then stores the best score whether or not the loop
/// ended on an error.
fn play_and_save<R: Rng, I: BufRead, W: Write>(
    session: &mut GameSession<R>,
    input: I,
    out: &mut W,
    json: bool,
    store: &BestScoreStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let played = run(session, input, out, json);
    let saved = store.save(session.engine().best_score());
    if let Err(e) = &played {
        log::error!("session stopped: {}", e);
        if let Err(save_error) = &saved {
            log::error!("best score not saved: {}", save_error);
        }
        return played;
    }
    saved?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let store = BestScoreStore::new(&config.best_score_file);
    let best_score = store.load().unwrap_or_else(|e| {
        log::warn!("ignoring stored best score: {}", e);
        0
    });

    let engine_config = EngineConfig {
        size: config.size,
        win_threshold: config.win,
        best_score,
    };
    let engine = match config.seed {
        Some(seed) => GameEngine::seeded(engine_config, seed)?,
        None => GameEngine::with_entropy(engine_config)?,
    };

    let mut session = GameSession::new(engine);
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_and_save(
        &mut session,
        stdin.lock(),
        &mut stdout.lock(),
        config.json,
        &store,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use grid_2048::Board;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert_eq!(parse_command(" Restart ").unwrap(), Command::Restart);
        assert_eq!(parse_command("r").unwrap(), Command::Restart);
        assert_eq!(parse_command("w").unwrap(), Command::Move(Direction::Up));
        assert_eq!(parse_command("right").unwrap(), Command::Move(Direction::Right));
        assert_matches!(parse_command("jump"), Err(GridError::InvalidArgument(_)));
    }

    #[test]
    fn test_json_render_is_one_line() {
        let engine = GameEngine::seeded(EngineConfig::default(), 9).unwrap();
        let session = GameSession::new(engine);
        let mut buf = Vec::new();
        render(&mut buf, &session, Some(&TurnOutcome::Blocked), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["current_score"], 0);
        assert_eq!(value["outcome"], "Blocked");
        assert_eq!(value["board"].as_array().unwrap().len(), 4);
    }

    struct BrokenInput;

    impl io::Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("input closed unexpectedly"))
        }
    }

    fn session_on(rows: Vec<Vec<u64>>) -> GameSession<StdRng> {
        let engine = GameEngine::from_board(
            Board::from_rows(rows).unwrap(),
            EngineConfig::default(),
            StdRng::seed_from_u64(4),
        )
        .unwrap();
        GameSession::new(engine)
    }

    #[test]
    fn test_best_score_saved_when_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = BestScoreStore::new(dir.path().join("bestscore.ini"));
        let mut session = session_on(vec![
            vec![2, 2, 0, 0],
            vec![0; 4],
            vec![0; 4],
            vec![0; 4],
        ]);
        let input = io::BufReader::new(io::Read::chain(&b"a\n"[..], BrokenInput));
        let mut out = Vec::new();

        let result = play_and_save(&mut session, input, &mut out, false, &store);
        assert!(result.is_err());
        assert_eq!(session.engine().best_score(), 4);
        assert_eq!(store.load().unwrap(), 4);
    }

    #[test]
    fn test_quit_saves_best_score() {
        let dir = tempfile::tempdir().unwrap();
        let store = BestScoreStore::new(dir.path().join("bestscore.ini"));
        let mut session = session_on(vec![
            vec![4, 4, 0, 0],
            vec![0; 4],
            vec![0; 4],
            vec![0; 4],
        ]);
        let mut out = Vec::new();

        play_and_save(&mut session, &b"jump\na\nq\nd\n"[..], &mut out, false, &store).unwrap();
        assert_eq!(store.load().unwrap(), 8);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown direction"));
    }

    #[test]
    fn test_text_render_shows_scores() {
        let engine = GameEngine::seeded(EngineConfig::default(), 9).unwrap();
        let session = GameSession::new(engine);
        let mut buf = Vec::new();
        render(&mut buf, &session, None, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("SCORE 0"));
        assert!(text.contains("BEST 0"));
    }
}
