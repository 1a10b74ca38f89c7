use serde::{Deserialize, Serialize};

/// Current game score plus the best score seen across games.
///
/// `best >= current` holds after every `add`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    current: u64,
    best: u64,
}

impl ScoreBoard {
    /// Fresh game score, carrying over a previously recorded best.
    pub fn with_best(best: u64) -> Self {
        ScoreBoard { current: 0, best }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Add merge points to the current score, raising the best if overtaken.
    pub fn add(&mut self, points: u64) {
        self.current = self.current.saturating_add(points);
        if self.current > self.best {
            self.best = self.current;
        }
    }

    /// Start a new game: current drops to 0, best stays.
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}
