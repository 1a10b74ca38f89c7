use crate::game::board::Board;
use crate::{GridError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Out of 100 draws, how many spawn a 2 (the rest spawn a 4).
const TWO_WEIGHT: u32 = 89;

/// Where a spawn landed and what it placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u64,
}

/// 2 with probability 0.89, 4 otherwise.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    if rng.random_range(0..100) < TWO_WEIGHT {
        2
    } else {
        4
    }
}

/// Place one new tile on a uniformly chosen empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        log::warn!("spawn requested on a full {}x{} board", board.size(), board.size());
        return Err(GridError::InvariantViolation(
            "cannot spawn a tile: no empty cell".to_string(),
        ));
    }
    let (row, col) = empty[rng.random_range(0..empty.len())];
    let value = random_tile_value(rng);
    board.set(row, col, value);
    log::debug!("spawned {} at ({}, {})", value, row, col);
    Ok(SpawnedTile { row, col, value })
}
