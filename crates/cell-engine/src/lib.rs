//! cell_engine - CELL coordinate parsing, validation and encoding.
//!
//! CELL strings such as `e4`, `a1A` or `h8Hh8` encode one index per
//! dimension, cycling through lowercase letters, positive integers and
//! uppercase letters.

pub mod engine;
pub mod error;

pub use engine::{Coordinate, UnboundedCoordinate, decode, encode, validate};
pub use error::{CoordinateError, ParseError};
