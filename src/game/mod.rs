//! Game module: N×N board, direction enum, slide/merge rules, spawns and the
//! engine facade that ties them together.
//!
//! - `GameEngine` owns one game and is the only thing that mutates its board.
//! - `shift` and `board` expose the pure pieces (row merge, `transpose`,
//!   `invert`) for callers that want to reason about positions directly.

pub mod board;
pub mod direction;
pub mod engine;
pub mod shift;
pub mod spawn;

pub use board::{invert, transpose, Board};
pub use direction::Direction;
pub use engine::{EngineConfig, GameEngine, GameSnapshot};
pub use shift::{is_moveable, merge, move_row_left, row_is_left_moveable, shift, tighten};
pub use spawn::SpawnedTile;
