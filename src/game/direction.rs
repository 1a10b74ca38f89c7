use crate::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order terminal checks visit them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Accepts full names plus WASD and vi-key shorthands.
impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "a" | "h" => Ok(Direction::Left),
            "right" | "d" | "l" => Ok(Direction::Right),
            "up" | "w" | "k" => Ok(Direction::Up),
            "down" | "s" | "j" => Ok(Direction::Down),
            other => Err(GridError::InvalidArgument(format!(
                "unknown direction '{}'",
                other
            ))),
        }
    }
}

/// Numeric codes: 0=Left, 1=Right, 2=Up, 3=Down.
impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL.get(code as usize).copied().ok_or_else(|| {
            GridError::InvalidArgument(format!("unknown direction code {}", code))
        })
    }
}
