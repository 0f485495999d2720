//! Fail-fast wrappers for literal coordinates known to be valid.
//!
//! These panic on error. Use them for constants, never for untrusted input.

use super::coordinate::Coordinate;
use super::format;
use super::profile::Profile;
use super::scan;
use super::unbounded::UnboundedCoordinate;

/// Like [`scan::decode`] but panics on error.
///
/// ```ignore
/// let origin = must_decode("a1");
/// ```
pub fn must_decode(s: &str) -> Coordinate {
    match scan::decode(s) {
        Ok(c) => c,
        Err(err) => panic!("cell: must_decode({:?}): {}", s, err),
    }
}

/// Like [`scan::decode_unbounded`] but panics on error.
pub fn must_decode_unbounded(s: &str) -> UnboundedCoordinate {
    match scan::decode_unbounded(s) {
        Ok(c) => c,
        Err(err) => panic!("cell: must_decode_unbounded({:?}): {}", s, err),
    }
}

/// Like [`Coordinate::new`] but panics on error.
pub fn must_coordinate(indices: &[u64]) -> Coordinate {
    match Coordinate::new(indices) {
        Ok(c) => c,
        Err(err) => panic!("cell: must_coordinate({:?}): {}", indices, err),
    }
}

/// Like [`scan::components`] but panics on error.
///
/// ```ignore
/// assert_eq!(must_components("a1A", &Profile::BOUNDED), ["a", "1", "A"]);
/// ```
pub fn must_components<'a>(s: &'a str, profile: &Profile) -> Vec<&'a str> {
    match scan::components(s, profile) {
        Ok(runs) => runs,
        Err(err) => panic!("cell: must_components({:?}): {}", s, err),
    }
}

/// Like [`format::encode_indices`] but panics on error.
pub fn must_encode_indices(indices: &[u64], profile: &Profile) -> String {
    match format::encode_indices(indices, profile) {
        Ok(s) => s,
        Err(err) => panic!("cell: must_encode_indices({:?}): {}", indices, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_decode_valid() {
        assert_eq!(must_decode("e4").indices(), vec![4, 3]);
        assert_eq!(must_decode_unbounded("h8Hh8").dims(), 5);
        assert_eq!(must_coordinate(&[0, 0, 0]).to_string(), "a1A");
    }

    #[test]
    fn test_must_components_and_encode_valid() {
        assert_eq!(must_components("a1A", &Profile::BOUNDED), vec!["a", "1", "A"]);
        assert_eq!(
            must_components("h8Hh8", &Profile::UNBOUNDED),
            vec!["h", "8", "H", "h", "8"]
        );
        assert_eq!(must_encode_indices(&[4, 3], &Profile::BOUNDED), "e4");
        assert_eq!(must_encode_indices(&[0, 0, 0, 0], &Profile::UNBOUNDED), "a1Aa");
    }

    #[test]
    #[should_panic(expected = "must_components(\"h8Hh8\")")]
    fn test_must_components_panics() {
        must_components("h8Hh8", &Profile::BOUNDED);
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum of 255")]
    fn test_must_encode_indices_panics() {
        must_encode_indices(&[256], &Profile::BOUNDED);
    }

    #[test]
    #[should_panic(expected = "must_decode(\"1nvalid\")")]
    fn test_must_decode_panics() {
        must_decode("1nvalid");
    }

    #[test]
    #[should_panic(expected = "leading zero")]
    fn test_must_decode_unbounded_panics() {
        must_decode_unbounded("a0");
    }

    #[test]
    #[should_panic]
    fn test_must_coordinate_panics_on_empty() {
        must_coordinate(&[]);
    }
}
