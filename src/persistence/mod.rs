pub mod best_score;

pub use best_score::{BestScoreStore, DEFAULT_BEST_SCORE_FILE};
