//! Best score kept between sessions as a plain decimal number in a text file.

use crate::{GridError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when none is configured.
pub const DEFAULT_BEST_SCORE_FILE: &str = "bestscore.ini";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored best score, or 0 when nothing has been saved yet.
    pub fn load(&self) -> Result<u64> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no best score at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        contents.trim().parse::<u64>().map_err(|e| {
            GridError::Persistence(format!(
                "{} does not hold a score ({}): {:?}",
                self.path.display(),
                e,
                contents.trim()
            ))
        })
    }

    pub fn save(&self, score: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, score.to_string())?;
        log::debug!("saved best score {} to {}", score, self.path.display());
        Ok(())
    }
}

impl Default for BestScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_BEST_SCORE_FILE)
    }
}
