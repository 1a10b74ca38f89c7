//! # Grid 2048 Library
//!
//! A 2048-style tile merging engine: an N×N grid of powers of two that slide
//! and merge in four directions.
//!
//! ## Features
//!
//! - **Game Engine**: board state, single-pass merge rules, spawns and terminal checks
//! - **Scoring**: current and best score bookkeeping
//! - **Persistence**: best score stored as a plain text file, outside the engine
//! - **Session**: one-turn sequencing (move, spawn, terminal check) for any front end
//!
//! ## Usage
//!
//! ```rust
//! use grid_2048::{Direction, EngineConfig, GameEngine};
//!
//! let mut engine = GameEngine::seeded(EngineConfig::default(), 42).unwrap();
//! if engine.apply_move(Direction::Left) {
//!     engine.spawn_tile().unwrap();
//! }
//! assert!(engine.best_score() >= engine.current_score());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Score bookkeeping
pub mod scoring;

/// Best score storage
pub mod persistence;

/// Turn sequencing on top of the engine
pub mod services;

/// Logger setup for binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

/// Main game engine facade
pub use game::*;

pub use persistence::BestScoreStore;
pub use scoring::ScoreBoard;
pub use services::{GameSession, TurnOutcome};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the grid library
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GridError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
