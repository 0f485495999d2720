//! Error types for the cell command-line tool

use cell_engine::{CoordinateError, ParseError};
use thiserror::Error;

/// Errors that can occur while running a command
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error(transparent)]
    Cell(#[from] ParseError),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

pub type Result<T> = std::result::Result<T, CliError>;
