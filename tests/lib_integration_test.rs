//! Integration tests for the grid library public API

use grid_2048::{
    BestScoreStore, Board, Direction, EngineConfig, GameEngine, GameSession, GridError, Result,
    TurnOutcome, DESCRIPTION, NAME, VERSION,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "grid_2048");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let invalid = GridError::InvalidArgument("bad direction".to_string());
    assert!(matches!(invalid, GridError::InvalidArgument(_)));
    assert!(invalid.to_string().contains("bad direction"));

    let violation = GridError::InvariantViolation("full board".to_string());
    assert!(matches!(violation, GridError::InvariantViolation(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<u64> = Ok(42);
    assert_eq!(success.unwrap(), 42);

    let failure: Result<u64> = Err(GridError::Persistence("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_engine_config_default() {
    let config = EngineConfig::default();
    assert_eq!(config.size, 4);
    assert_eq!(config.win_threshold, 2048);
    assert_eq!(config.best_score, 0);
}

#[test]
fn test_move_then_spawn_cycle() {
    let mut engine = GameEngine::seeded(EngineConfig::default(), 2024).unwrap();
    let mut moves = 0;
    while !engine.is_game_over() && moves < 200 {
        let direction = engine.moveable_directions()[moves % engine.moveable_directions().len()];
        let occupied = engine.board().occupied_count();
        let score = engine.current_score();
        assert!(engine.apply_move(direction));
        assert!(engine.board().occupied_count() <= occupied);
        assert!(engine.current_score() >= score);
        engine.spawn_tile().unwrap();
        assert!(engine.best_score() >= engine.current_score());
        moves += 1;
    }
    assert!(moves > 0);
}

#[test]
fn test_scenario_row_left() {
    let board = Board::from_rows(vec![
        vec![2, 0, 2, 4],
        vec![0; 4],
        vec![0; 4],
        vec![0; 4],
    ])
    .unwrap();
    let mut engine =
        GameEngine::from_board(board, EngineConfig::default(), StdRng::seed_from_u64(1)).unwrap();
    assert!(engine.apply_move(Direction::Left));
    assert_eq!(engine.board().rows()[0], vec![4, 4, 0, 0]);
    assert_eq!(engine.current_score(), 4);
}

#[test]
fn test_session_with_persisted_best_score() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = BestScoreStore::new(dir.path().join("bestscore.ini"));
    store.save(12)?;

    let config = EngineConfig {
        best_score: store.load()?,
        ..EngineConfig::default()
    };
    let board = Board::from_rows(vec![
        vec![8, 8, 0, 0],
        vec![0; 4],
        vec![0; 4],
        vec![0; 4],
    ])?;
    let engine = GameEngine::from_board(board, config, StdRng::seed_from_u64(3))?;
    let mut session = GameSession::new(engine);

    let outcome = session.play(Direction::Left)?;
    assert!(matches!(outcome, TurnOutcome::Moved { gained: 16, .. }));
    assert_eq!(session.engine().best_score(), 16);

    session.restart()?;
    store.save(session.engine().best_score())?;
    assert_eq!(store.load()?, 16);
    Ok(())
}
