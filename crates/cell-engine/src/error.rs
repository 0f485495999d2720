//! Error types for the CELL engine.

use thiserror::Error;

/// Reasons a string is not a valid CELL coordinate.
///
/// Each kind is reported at the earliest scan position where it can be
/// detected, so a given input always maps to exactly one kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("input exceeds maximum length")]
    InputTooLong,

    #[error("must start with lowercase letter")]
    InvalidStart,

    #[error("unexpected character")]
    UnexpectedChar,

    #[error("leading zero in number")]
    LeadingZero,

    #[error("index exceeds maximum")]
    IndexOutOfRange,

    #[error("exceeds maximum dimensions")]
    TooManyDims,
}

/// Errors raised when building a coordinate from explicit indices.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateError {
    #[error("coordinate requires at least one index")]
    Empty,

    #[error("{dims} dimensions exceed the limit of {max}")]
    TooManyDims { dims: usize, max: usize },

    #[error("index {index} exceeds the maximum of {max}")]
    IndexOutOfRange { index: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, ParseError>;
