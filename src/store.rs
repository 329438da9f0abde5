use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

pub const DEFAULT_SAVE_PATH: &str = "snake_save.json";

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    /// Stored best score; 0 when nothing usable is stored.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> Result<(), StorageError>;
}

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
struct SaveData {
    best_score: u32,
}

/// `{"best_score": n}` in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<SaveData>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(data) => data.unwrap_or_default().best_score,
            Err(e) => {
                log::warn!("ignoring save file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(&SaveData { best_score: score })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Keeps the score in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) -> Result<(), StorageError> {
        self.best = score;
        Ok(())
    }
}
