//! CELL coordinate engine.
//!
//! - [`CharClass`] - Expected character class per dimension
//! - [`scan()`], [`validate`], [`decode`] - Scanner and decoder
//! - [`letters_to_index`], [`digits_to_index`] - Bijective numerals
//! - [`Coordinate`], [`UnboundedCoordinate`] - Decoded values
//! - [`encode`], [`encode_indices`] - Encoder
//! - [`Profile`] - Dimension, index and length limits
//! - [`grammar`] - Canonical regular expression

mod class;
mod coordinate;
mod format;
pub mod grammar;
mod must;
mod numeral;
mod profile;
mod scan;
mod unbounded;

pub use class::CharClass;
pub use coordinate::Coordinate;
pub use format::{encode, encode_indices};
pub use must::{
    must_components, must_coordinate, must_decode, must_decode_unbounded, must_encode_indices,
};
pub use numeral::{digits_to_index, index_to_digits, index_to_letters, letters_to_index};
pub use profile::{MAX_DIMS, MAX_INDEX, MAX_STRING_LEN, Profile, UNBOUNDED_MAX_INDEX};
pub use scan::{
    Run, components, decode, decode_into, decode_unbounded, dimensions, is_valid,
    is_valid_unbounded, scan, validate, validate_unbounded,
};
pub use unbounded::UnboundedCoordinate;
