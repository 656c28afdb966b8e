use puzzler_core::PuzzleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid file format: expected {expected}, got {actual}")]
    InvalidFormat { expected: String, actual: String },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
}
