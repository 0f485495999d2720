//! Bounded coordinate value (up to 3 dimensions, indices up to 255).
//!
//! Storage is a fixed `[u8; 3]` plus a dimension count, so decoding and
//! copying never allocate.
//!
//! # Examples
//!
//! ```ignore
//! let c: Coordinate = "e4".parse().unwrap();
//! assert_eq!(c.indices(), vec![4, 3]);
//! assert_eq!(c.to_string(), "e4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::format::write_indices;
use super::profile::{MAX_DIMS, Profile};
use super::scan;
use super::unbounded::UnboundedCoordinate;
use crate::error::{CoordinateError, ParseError};

/// A decoded CELL coordinate in the bounded profile.
///
/// Unused slots of `indices` are always zero, so derived equality and
/// hashing are structural over `dims` and the used indices.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    indices: [u8; MAX_DIMS],
    dims: u8,
}

impl Coordinate {
    /// Build a coordinate from 1 to 3 indices, each at most 255.
    pub fn new(indices: &[u64]) -> Result<Coordinate, CoordinateError> {
        Profile::BOUNDED.check(indices)?;
        let mut slots = [0u8; MAX_DIMS];
        for (slot, &index) in slots.iter_mut().zip(indices) {
            *slot = index as u8;
        }
        Ok(Coordinate::from_parts(slots, indices.len() as u8))
    }

    pub(crate) fn from_parts(indices: [u8; MAX_DIMS], dims: u8) -> Coordinate {
        Coordinate { indices, dims }
    }

    /// Number of dimensions (1, 2 or 3).
    pub fn dims(&self) -> usize {
        usize::from(self.dims)
    }

    /// A copy of the indices; changing it does not affect the coordinate.
    pub fn indices(&self) -> Vec<u8> {
        self.indices[..self.dims()].to_vec()
    }

    /// Index of dimension `i` (0-indexed), or `None` past the last dimension.
    pub fn at(&self, i: usize) -> Option<u8> {
        if i < self.dims() {
            Some(self.indices[i])
        } else {
            None
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.indices[..self.dims()].iter().map(|&i| u64::from(i))
    }
}

impl From<u8> for Coordinate {
    fn from(a: u8) -> Self {
        Coordinate::from_parts([a, 0, 0], 1)
    }
}

impl From<(u8, u8)> for Coordinate {
    fn from((a, b): (u8, u8)) -> Self {
        Coordinate::from_parts([a, b, 0], 2)
    }
}

impl From<(u8, u8, u8)> for Coordinate {
    fn from((a, b, c): (u8, u8, u8)) -> Self {
        Coordinate::from_parts([a, b, c], 3)
    }
}

impl TryFrom<&[u64]> for Coordinate {
    type Error = CoordinateError;

    fn try_from(indices: &[u64]) -> Result<Self, Self::Error> {
        Coordinate::new(indices)
    }
}

impl TryFrom<UnboundedCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(c: UnboundedCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(&c.indices())
    }
}

impl TryFrom<String> for Coordinate {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        scan::decode(&s)
    }
}

impl From<Coordinate> for String {
    fn from(c: Coordinate) -> Self {
        c.to_string()
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan::decode(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indices(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_one_to_three_dims() {
        let c = Coordinate::new(&[4]).unwrap();
        assert_eq!(c.dims(), 1);
        let c = Coordinate::new(&[4, 3]).unwrap();
        assert_eq!(c.indices(), vec![4, 3]);
        let c = Coordinate::new(&[255, 255, 255]).unwrap();
        assert_eq!(c.to_string(), "iv256IV");
    }

    #[test]
    fn test_new_guards() {
        assert_eq!(Coordinate::new(&[]), Err(CoordinateError::Empty));
        assert!(matches!(
            Coordinate::new(&[256, 0]),
            Err(CoordinateError::IndexOutOfRange { index: 256, .. })
        ));
        assert!(matches!(
            Coordinate::new(&[1, 2, 3, 4]),
            Err(CoordinateError::TooManyDims { dims: 4, max: 3 })
        ));
    }

    #[test]
    fn test_indices_returns_copy() {
        let c = Coordinate::from((4, 3));
        let mut copy = c.indices();
        copy[0] = 99;
        assert_eq!(c.at(0), Some(4));
    }

    #[test]
    fn test_at() {
        let c = Coordinate::from((1, 2, 3));
        assert_eq!(c.at(0), Some(1));
        assert_eq!(c.at(2), Some(3));
        assert_eq!(c.at(3), None);
        assert_eq!(Coordinate::from(7).at(1), None);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Coordinate::from((4, 3)), "e4".parse::<Coordinate>().unwrap());
        assert_ne!(Coordinate::from(0), Coordinate::from((0, 0)));
        assert_ne!(Coordinate::from((0, 0)), Coordinate::from((0, 0, 0)));
    }

    #[test]
    fn test_narrowing_from_unbounded() {
        let wide = UnboundedCoordinate::new(vec![4, 3]).unwrap();
        assert_eq!(Coordinate::try_from(wide), Ok(Coordinate::from((4, 3))));

        let too_many = UnboundedCoordinate::new(vec![0, 0, 0, 0]).unwrap();
        assert!(Coordinate::try_from(too_many).is_err());
    }

    #[test]
    fn test_serde_uses_cell_text() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Square {
            at: Coordinate,
        }

        let square = Square {
            at: Coordinate::from((4, 3)),
        };
        let text = toml::to_string(&square).unwrap();
        assert_eq!(text.trim(), r#"at = "e4""#);
        assert_eq!(toml::from_str::<Square>(&text).unwrap(), square);
        assert!(toml::from_str::<Square>(r#"at = "a0""#).is_err());
    }
}
