//! The grid engine: sole owner and mutator of one game's board and score.
//!
//! The engine never spawns on its own. A front end drives it as
//! `apply_move` → (if it returned true) `spawn_tile` → re-query state.

use crate::game::board::Board;
use crate::game::direction::Direction;
use crate::game::shift;
use crate::game::spawn::{self, SpawnedTile};
use crate::scoring::ScoreBoard;
use crate::{GridError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Construction parameters for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board side length N.
    pub size: usize,
    /// A tile of at least this value wins.
    pub win_threshold: u64,
    /// Best score carried in from storage.
    pub best_score: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_threshold: 2048,
            best_score: 0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size < crate::game::board::MIN_SIZE {
            return Err(GridError::InvalidArgument(format!(
                "board size must be at least {}, got {}",
                crate::game::board::MIN_SIZE,
                self.size
            )));
        }
        if self.win_threshold < 4 || !self.win_threshold.is_power_of_two() {
            return Err(GridError::InvalidArgument(format!(
                "win threshold must be a power of two >= 4, got {}",
                self.win_threshold
            )));
        }
        Ok(())
    }
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Vec<u64>>,
    pub current_score: u64,
    pub best_score: u64,
    pub won: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameEngine<R: Rng = StdRng> {
    board: Board,
    score: ScoreBoard,
    win_threshold: u64,
    rng: R,
}

impl GameEngine<StdRng> {
    /// New game with an OS-seeded generator.
    pub fn with_entropy(config: EngineConfig) -> Result<Self> {
        GameEngine::new_game(config, StdRng::from_os_rng())
    }

    /// New game whose spawns are fully determined by `seed`.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self> {
        GameEngine::new_game(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Empty board with two spawned tiles.
    pub fn new_game(config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut engine = GameEngine {
            board: Board::empty(config.size)?,
            score: ScoreBoard::with_best(config.best_score),
            win_threshold: config.win_threshold,
            rng,
        };
        engine.spawn_initial_tiles()?;
        log::info!(
            "new {}x{} game (win at {}, best {})",
            config.size,
            config.size,
            config.win_threshold,
            config.best_score
        );
        Ok(engine)
    }

    /// Resume from a known position. Nothing is spawned; `config.size` must
    /// match the board.
    pub fn from_board(board: Board, config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        if board.size() != config.size {
            return Err(GridError::InvalidArgument(format!(
                "board is {}x{} but config size is {}",
                board.size(),
                board.size(),
                config.size
            )));
        }
        Ok(GameEngine {
            board,
            score: ScoreBoard::with_best(config.best_score),
            win_threshold: config.win_threshold,
            rng,
        })
    }

    fn spawn_initial_tiles(&mut self) -> Result<()> {
        self.spawn_tile()?;
        self.spawn_tile()?;
        Ok(())
    }

    /// Start over on a fresh board. The best score survives.
    pub fn restart(&mut self) -> Result<()> {
        self.board = Board::empty(self.board.size())?;
        self.score.reset_current();
        self.spawn_initial_tiles()?;
        log::info!("restarted (best {})", self.score.best());
        Ok(())
    }

    /// Slide/merge toward `direction`.
    ///
    /// Returns false, leaving everything untouched, when nothing can move that
    /// way. On true the caller is expected to call `spawn_tile` once.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.is_moveable(direction) {
            log::trace!("{} blocked", direction);
            return false;
        }
        let (moved, gained) = shift::shift(&self.board, direction);
        self.board = moved;
        self.score.add(gained);
        log::debug!(
            "moved {} (+{}, score {})",
            direction,
            gained,
            self.score.current()
        );
        true
    }

    /// Place one tile (2 or 4) on a random empty cell.
    ///
    /// Fails with `InvariantViolation` on a full board.
    pub fn spawn_tile(&mut self) -> Result<SpawnedTile> {
        spawn::spawn_tile(&mut self.board, &mut self.rng)
    }

    pub fn is_moveable(&self, direction: Direction) -> bool {
        shift::is_moveable(&self.board, direction)
    }

    pub fn moveable_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_moveable(direction))
            .collect()
    }

    /// No direction can move.
    pub fn is_game_over(&self) -> bool {
        !Direction::ALL
            .into_iter()
            .any(|direction| self.is_moveable(direction))
    }

    /// Some tile reached the win threshold.
    pub fn is_win(&self) -> bool {
        self.board.max_tile() >= self.win_threshold
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn win_threshold(&self) -> u64 {
        self.win_threshold
    }

    pub fn current_score(&self) -> u64 {
        self.score.current()
    }

    pub fn best_score(&self) -> u64 {
        self.score.best()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.board.has_empty_cell()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_rows(),
            current_score: self.current_score(),
            best_score: self.best_score(),
            won: self.is_win(),
            game_over: self.is_game_over(),
        }
    }
}
