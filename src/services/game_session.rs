// src/services/game_session.rs - Sequencing of one turn on top of the engine

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{Direction, GameEngine, SpawnedTile};
use crate::Result;

/// What a single turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Nothing could move that way; no tile was spawned.
    Blocked,
    /// The board changed and a tile was spawned.
    Moved { gained: u64, spawned: SpawnedTile },
    /// The move left no direction open.
    GameOver { gained: u64 },
    /// A tile reached the win threshold.
    Won { gained: u64 },
}

impl TurnOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::GameOver { .. } | TurnOutcome::Won { .. })
    }
}

/// One player's game: the engine plus the turn loop a front end would run on
/// each key press.
#[derive(Debug)]
pub struct GameSession<R: Rng> {
    engine: GameEngine<R>,
    turns: usize,
}

impl<R: Rng> GameSession<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self { engine, turns: 0 }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Moves that changed the board since the last (re)start.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Move, spawn if the board changed, then check game over before win.
    pub fn play(&mut self, direction: Direction) -> Result<TurnOutcome> {
        let before = self.engine.current_score();
        if !self.engine.apply_move(direction) {
            return Ok(TurnOutcome::Blocked);
        }
        let gained = self.engine.current_score() - before;
        let spawned = self.engine.spawn_tile()?;
        self.turns += 1;

        if self.engine.is_game_over() {
            log::info!(
                "game over after {} turns, score {}",
                self.turns,
                self.engine.current_score()
            );
            return Ok(TurnOutcome::GameOver { gained });
        }
        if self.engine.is_win() {
            log::info!(
                "reached {} after {} turns",
                self.engine.win_threshold(),
                self.turns
            );
            return Ok(TurnOutcome::Won { gained });
        }
        Ok(TurnOutcome::Moved { gained, spawned })
    }

    /// Fresh game, best score preserved.
    pub fn restart(&mut self) -> Result<()> {
        self.engine.restart()?;
        self.turns = 0;
        Ok(())
    }

    pub fn into_engine(self) -> GameEngine<R> {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, EngineConfig};
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session_on(rows: Vec<Vec<u64>>, win_threshold: u64) -> GameSession<StdRng> {
        let config = EngineConfig {
            size: rows.len(),
            win_threshold,
            best_score: 0,
        };
        let engine = GameEngine::from_board(
            Board::from_rows(rows).unwrap(),
            config,
            StdRng::seed_from_u64(11),
        )
        .unwrap();
        GameSession::new(engine)
    }

    #[test]
    fn test_blocked_turn_spawns_nothing() {
        let mut session = session_on(vec![vec![2, 0], vec![0, 0]], 2048);
        assert_matches!(session.play(Direction::Left), Ok(TurnOutcome::Blocked));
        assert_eq!(session.engine().board().occupied_count(), 1);
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn test_moved_turn_spawns_one_tile() {
        let mut session = session_on(
            vec![vec![2, 2, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            2048,
        );
        let outcome = session.play(Direction::Left).unwrap();
        assert_matches!(outcome, TurnOutcome::Moved { gained: 4, .. });
        assert_eq!(session.engine().board().occupied_count(), 2);
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_win_is_reported() {
        let mut session = session_on(
            vec![vec![1024, 1024, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            2048,
        );
        assert_matches!(
            session.play(Direction::Left),
            Ok(TurnOutcome::Won { gained: 2048 })
        );
    }

    #[test]
    fn test_game_over_is_reported() {
        // (0, 1) is the only empty cell once the 2s merge; seed 11 spawns a 2 there.
        let mut session = session_on(vec![vec![2, 2], vec![8, 16]], 2048);
        let outcome = session.play(Direction::Left).unwrap();
        assert_eq!(outcome, TurnOutcome::GameOver { gained: 4 });
        assert_eq!(
            session.engine().board().rows(),
            &[vec![4, 2], vec![8, 16]][..]
        );
        assert!(outcome.is_terminal());
        assert!(session.engine().is_game_over());
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_restart_resets_turns() {
        let mut session = session_on(
            vec![vec![4, 4, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            2048,
        );
        session.play(Direction::Left).unwrap();
        session.restart().unwrap();
        assert_eq!(session.turns(), 0);
        assert_eq!(session.engine().current_score(), 0);
        assert_eq!(session.engine().best_score(), 8);
    }
}
