use thiserror::Error;

use crate::geometry::Cell;

/// Rejections raised when building a snake or a game state by hand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("snake needs at least {min} cells, got {actual}")]
    TooShort { min: usize, actual: usize },
    #[error("cell ({}, {}) lies outside the grid", .0.x, .0.y)]
    OffGrid(Cell),
    #[error("cell ({}, {}) appears more than once in the snake", .0.x, .0.y)]
    DuplicateCell(Cell),
    #[error("segment {index} is not adjacent to the segment before it")]
    NotContiguous { index: usize },
    #[error("food at ({}, {}) overlaps the snake", .0.x, .0.y)]
    FoodOnSnake(Cell),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
