use crate::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest board the engine accepts: two spawned tiles must fit.
pub const MIN_SIZE: usize = 2;

/// Largest tile a board may hold. Two of these never merge, so no cell can
/// outgrow `u64`.
pub const MAX_TILE: u64 = 1 << 62;

/// Square grid of tile values. 0 is an empty cell, anything else is a power of two ≥ 2.
///
/// Serialized as a bare array of rows; deserializing runs the same checks as
/// `Board::from_rows`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct Board {
    rows: Vec<Vec<u64>>,
}

impl Board {
    /// Empty `size`×`size` board.
    pub fn empty(size: usize) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(GridError::InvalidArgument(format!(
                "board size must be at least {}, got {}",
                MIN_SIZE, size
            )));
        }
        Ok(Board {
            rows: vec![vec![0; size]; size],
        })
    }

    /// Build a board from explicit rows, checking shape and tile values.
    ///
    /// Every cell must be 0 or a power of two in `2..=MAX_TILE`.
    ///
    /// ```
    /// use grid_2048::Board;
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.occupied_count(), 2);
    /// assert!(Board::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let size = rows.len();
        if size < MIN_SIZE {
            return Err(GridError::InvalidArgument(format!(
                "board size must be at least {}, got {}",
                MIN_SIZE, size
            )));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != size) {
            return Err(GridError::InvalidArgument(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                size
            )));
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidArgument(format!(
                        "cell ({}, {}) holds {}, expected 0 or a power of two in 2..={}",
                        r, c, value, MAX_TILE
                    )));
                }
            }
        }
        Ok(Board { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Copy of the rows, for snapshots handed to front ends.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows.clone()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u64) {
        self.rows[row][col] = value;
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &value)| value == 0)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.rows.iter().flatten().any(|&value| value == 0)
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&value| value != 0).count()
    }

    /// Sum of all tile values, saturating at `u64::MAX`.
    pub fn tile_sum(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .fold(0u64, |acc, &value| acc.saturating_add(value))
    }

    pub fn max_tile(&self) -> u64 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<u64>>) -> Self {
        Board { rows }
    }
}

impl TryFrom<Vec<Vec<u64>>> for Board {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<u64>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

fn is_valid_tile(value: u64) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Swap rows and columns.
pub fn transpose(board: &Board) -> Board {
    let size = board.size();
    let rows = (0..size)
        .map(|c| (0..size).map(|r| board.rows[r][c]).collect())
        .collect();
    Board::from_rows_unchecked(rows)
}

/// Mirror every row left-to-right.
pub fn invert(board: &Board) -> Board {
    let rows = board
        .rows
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect();
    Board::from_rows_unchecked(rows)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(4);
        let separator = "-".repeat((width + 1) * self.size() - 1);
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f, "{}", separator)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&value| match value {
                    0 => " ".repeat(width),
                    v => format!("{:^width$}", v, width = width),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
