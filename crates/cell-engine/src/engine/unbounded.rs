//! Coordinate value without dimension or byte-sized index limits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::coordinate::Coordinate;
use super::format::write_indices;
use super::profile::Profile;
use super::scan;
use crate::error::{CoordinateError, ParseError};

/// A CELL coordinate of any dimensionality, backed by a growable vector.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnboundedCoordinate {
    indices: Vec<u64>,
}

impl UnboundedCoordinate {
    /// Build a coordinate from at least one index.
    pub fn new(indices: Vec<u64>) -> Result<UnboundedCoordinate, CoordinateError> {
        Profile::UNBOUNDED.check(&indices)?;
        Ok(UnboundedCoordinate { indices })
    }

    /// Caller guarantees `indices` passed the unbounded profile.
    pub(crate) fn from_vec_unchecked(indices: Vec<u64>) -> UnboundedCoordinate {
        UnboundedCoordinate { indices }
    }

    /// Number of dimensions (at least 1).
    pub fn dims(&self) -> usize {
        self.indices.len()
    }

    /// A copy of the indices; changing it does not affect the coordinate.
    pub fn indices(&self) -> Vec<u64> {
        self.indices.clone()
    }

    /// Index of dimension `i` (0-indexed), or `None` past the last dimension.
    pub fn at(&self, i: usize) -> Option<u64> {
        self.indices.get(i).copied()
    }
}

impl From<Coordinate> for UnboundedCoordinate {
    fn from(c: Coordinate) -> Self {
        UnboundedCoordinate::from_vec_unchecked(c.iter().collect())
    }
}

impl TryFrom<String> for UnboundedCoordinate {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        scan::decode_unbounded(&s)
    }
}

impl From<UnboundedCoordinate> for String {
    fn from(c: UnboundedCoordinate) -> Self {
        c.to_string()
    }
}

impl FromStr for UnboundedCoordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan::decode_unbounded(s)
    }
}

impl fmt::Display for UnboundedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indices(f, self.indices.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_dimensions() {
        let c: UnboundedCoordinate = "h8Hh8".parse().unwrap();
        assert_eq!(c.dims(), 5);
        assert_eq!(c.indices(), vec![7, 7, 7, 7, 7]);
        assert_eq!(c.to_string(), "h8Hh8");
    }

    #[test]
    fn test_large_indices() {
        let c = UnboundedCoordinate::new(vec![702, 1000, 26]).unwrap();
        assert_eq!(c.to_string(), "aaa1001AA");
        let max = UnboundedCoordinate::new(vec![u64::MAX - 1]).unwrap();
        assert_eq!(max.to_string().parse::<UnboundedCoordinate>(), Ok(max));
    }

    #[test]
    fn test_construction_guards() {
        assert_eq!(UnboundedCoordinate::new(vec![]), Err(CoordinateError::Empty));
        assert!(UnboundedCoordinate::new(vec![u64::MAX]).is_err());
        assert!(UnboundedCoordinate::new(vec![0; 12]).is_ok());
    }

    #[test]
    fn test_widening_from_bounded() {
        let c = UnboundedCoordinate::from(Coordinate::from((255, 0, 9)));
        assert_eq!(c.indices(), vec![255, 0, 9]);
        assert_eq!(c.to_string(), "iv1J");
    }

    #[test]
    fn test_at() {
        let c: UnboundedCoordinate = "a1Aa".parse().unwrap();
        assert_eq!(c.at(3), Some(0));
        assert_eq!(c.at(4), None);
    }
}
