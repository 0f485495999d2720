//! Limits applied while scanning and constructing coordinates.

use crate::error::CoordinateError;

/// Maximum number of dimensions in the bounded profile.
pub const MAX_DIMS: usize = 3;

/// Maximum value of a single index in the bounded profile (fits a byte).
pub const MAX_INDEX: u64 = 255;

/// Maximum length of a bounded CELL string, reached by `"iv256IV"`.
pub const MAX_STRING_LEN: usize = 7;

/// Largest index the unbounded profile accepts.
///
/// Its one-based numeral is `u64::MAX`, the last value a 64-bit accumulator
/// can hold while decoding.
pub const UNBOUNDED_MAX_INDEX: u64 = u64::MAX - 1;

/// Dimension, index and length ceilings shared by the scanner and the
/// coordinate constructors.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Profile {
    pub max_dims: Option<usize>,
    pub max_index: u64,
    pub max_len: Option<usize>,
}

impl Profile {
    /// Up to 3 dimensions, indices up to 255, strings up to 7 bytes.
    pub const BOUNDED: Profile = Profile {
        max_dims: Some(MAX_DIMS),
        max_index: MAX_INDEX,
        max_len: Some(MAX_STRING_LEN),
    };

    /// Any number of dimensions, indices up to [`UNBOUNDED_MAX_INDEX`].
    pub const UNBOUNDED: Profile = Profile {
        max_dims: None,
        max_index: UNBOUNDED_MAX_INDEX,
        max_len: None,
    };

    /// Check an explicit list of indices against this profile.
    pub fn check(&self, indices: &[u64]) -> Result<(), CoordinateError> {
        if indices.is_empty() {
            return Err(CoordinateError::Empty);
        }
        if let Some(max) = self.max_dims
            && indices.len() > max
        {
            return Err(CoordinateError::TooManyDims {
                dims: indices.len(),
                max,
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i > self.max_index) {
            return Err(CoordinateError::IndexOutOfRange {
                index,
                max: self.max_index,
            });
        }
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::BOUNDED
    }
}
