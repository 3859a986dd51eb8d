//! Error types for chess-review-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Illegal move '{san}' at index {index}: {reason}")]
    IllegalMove {
        index: usize,
        san: String,
        reason: String,
    },

    #[error("PGN parsing error: {0}")]
    Pgn(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
