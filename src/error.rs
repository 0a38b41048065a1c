//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({x},{y}) is already occupied")]
    OccupiedCell { x: usize, y: usize },

    #[error("invalid move: coordinates ({x},{y}) are outside the grid")]
    OutOfBounds { x: usize, y: usize },

    #[error("game already over")]
    GameOver,

    #[error("no empty cells left to choose from")]
    NoEmptyCells,

    #[error("input ended before a valid move was read")]
    InputExhausted,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Attach an operation context to an I/O error.
    pub(crate) fn io(operation: &str, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.to_string(),
            source,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
