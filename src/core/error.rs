use thiserror::Error;

use crate::core::Position;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Position {pos} is outside the grid")]
    OutOfBounds { pos: Position },

    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    #[error("Level JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
