//! Slide/merge rules.
//!
//! Only the leftward move of a single row is implemented directly. Every other
//! direction is that same row move seen through `invert` and `transpose`:
//!
//! - Right = invert ∘ Left ∘ invert
//! - Up    = transpose ∘ Left ∘ transpose
//! - Down  = transpose ∘ Right ∘ transpose
//!
//! `is_moveable` goes through the same compositions, so "can this move" and
//! "what this move does" never disagree.

use crate::game::board::{invert, transpose, Board, MAX_TILE};
use crate::game::direction::Direction;

/// Drop empty cells, keep tile order, pad with zeros at the end.
pub fn tighten(row: &[u64]) -> Vec<u64> {
    let mut tightened: Vec<u64> = row.iter().copied().filter(|&v| v != 0).collect();
    tightened.resize(row.len(), 0);
    tightened
}

/// Single left-to-right merge pass over an already tightened row.
///
/// Returns the merged row and the points it earned. A freshly merged cell is
/// never merged again in the same pass: `[2, 2, 4, 0]` becomes `[4, 4, 0, 0]`,
/// not `[8, 0, 0, 0]`. A pair of `MAX_TILE`s stays as it is.
pub fn merge(row: &[u64]) -> (Vec<u64>, u64) {
    let mut merged = Vec::with_capacity(row.len());
    let mut gained: u64 = 0;
    let mut i = 0;
    while i < row.len() && row[i] != 0 {
        if i + 1 < row.len() && can_merge(row[i], row[i + 1]) {
            let value = row[i] * 2;
            merged.push(value);
            gained = gained.saturating_add(value);
            i += 2;
        } else {
            merged.push(row[i]);
            i += 1;
        }
    }
    merged.resize(row.len(), 0);
    (merged, gained)
}

fn can_merge(a: u64, b: u64) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

pub fn move_row_left(row: &[u64]) -> (Vec<u64>, u64) {
    merge(&tighten(row))
}

fn shift_left(board: &Board) -> (Board, u64) {
    let mut gained: u64 = 0;
    let rows = board
        .rows()
        .iter()
        .map(|row| {
            let (moved, points) = move_row_left(row);
            gained = gained.saturating_add(points);
            moved
        })
        .collect();
    (Board::from_rows_unchecked(rows), gained)
}

fn shift_right(board: &Board) -> (Board, u64) {
    let (moved, gained) = shift_left(&invert(board));
    (invert(&moved), gained)
}

/// Board after sliding/merging in `direction` (no spawn) and the points earned.
///
/// Applies unconditionally; a blocked direction returns an identical board
/// and 0 points.
pub fn shift(board: &Board, direction: Direction) -> (Board, u64) {
    match direction {
        Direction::Left => shift_left(board),
        Direction::Right => shift_right(board),
        Direction::Up => {
            let (moved, gained) = shift_left(&transpose(board));
            (transpose(&moved), gained)
        }
        Direction::Down => {
            let (moved, gained) = shift_right(&transpose(board));
            (transpose(&moved), gained)
        }
    }
}

/// True if some adjacent pair would change on a leftward move: an empty cell
/// followed by a tile, or two equal tiles.
pub fn row_is_left_moveable(row: &[u64]) -> bool {
    row.windows(2)
        .any(|pair| (pair[0] == 0 && pair[1] != 0) || can_merge(pair[0], pair[1]))
}

fn left_moveable(board: &Board) -> bool {
    board.rows().iter().any(|row| row_is_left_moveable(row))
}

/// Whether moving in `direction` would change the board. Never mutates.
pub fn is_moveable(board: &Board, direction: Direction) -> bool {
    match direction {
        Direction::Left => left_moveable(board),
        Direction::Right => left_moveable(&invert(board)),
        Direction::Up => left_moveable(&transpose(board)),
        Direction::Down => left_moveable(&invert(&transpose(board))),
    }
}
