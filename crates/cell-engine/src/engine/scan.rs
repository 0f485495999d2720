//! Lexical scanning, validation and decoding of CELL strings.
//!
//! A single left-to-right pass splits the input into one maximal run per
//! dimension, checks each run against the class its dimension expects, and
//! decodes it immediately so an out-of-range run is reported before the next
//! dimension is looked at.
//!
//! The structure accepted here is the one described by
//! `^[a-z]+(?:[1-9][0-9]*[A-Z]+[a-z]+)*(?:[1-9][0-9]*[A-Z]*)?$`, with line
//! breaks and every other non-ASCII-alphanumeric byte rejected.

use super::class::CharClass;
use super::coordinate::Coordinate;
use super::numeral;
use super::profile::{MAX_DIMS, Profile};
use super::unbounded::UnboundedCoordinate;
use crate::error::{ParseError, Result};

/// One dimension's run, as handed to a [`scan`] visitor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Run<'a> {
    /// 1-indexed dimension this run belongs to.
    pub dimension: usize,
    pub class: CharClass,
    pub text: &'a str,
    pub index: u64,
}

/// Scan `s` under `profile`, calling `visit` once per decoded run.
///
/// Returns the number of dimensions on success. On failure `visit` may
/// already have seen the runs preceding the error.
pub fn scan<'a, F>(s: &'a str, profile: &Profile, mut visit: F) -> Result<usize>
where
    F: FnMut(Run<'a>),
{
    let bytes = s.as_bytes();
    let n = bytes.len();

    if n == 0 {
        return Err(ParseError::EmptyInput);
    }
    if profile.max_len.is_some_and(|max| n > max) {
        return Err(ParseError::InputTooLong);
    }
    if !bytes[0].is_ascii_lowercase() {
        return Err(ParseError::InvalidStart);
    }

    let mut cursor = 0;
    let mut dimension = 1;

    while cursor < n {
        // The dimension ceiling wins over class checks ("a1A1" is TooManyDims).
        if profile.max_dims.is_some_and(|max| dimension > max) {
            return Err(ParseError::TooManyDims);
        }

        let class = CharClass::of_dimension(dimension);
        let start = cursor;
        while cursor < n && class.contains(bytes[cursor]) {
            cursor += 1;
        }
        if cursor == start {
            return Err(ParseError::UnexpectedChar);
        }
        if class == CharClass::Numeric && bytes[start] == b'0' {
            return Err(ParseError::LeadingZero);
        }

        // Run boundaries sit on ASCII bytes, so this slice is always valid.
        let text = &s[start..cursor];
        let index = numeral::decode_run(text, class)
            .filter(|&index| index <= profile.max_index)
            .ok_or(ParseError::IndexOutOfRange)?;

        visit(Run {
            dimension,
            class,
            text,
            index,
        });
        dimension += 1;
    }

    Ok(dimension - 1)
}

/// Check that `s` is a valid bounded CELL coordinate.
pub fn validate(s: &str) -> Result<()> {
    scan(s, &Profile::BOUNDED, |_| {}).map(|_| ())
}

/// Check that `s` is a valid CELL coordinate of any dimensionality.
pub fn validate_unbounded(s: &str) -> Result<()> {
    scan(s, &Profile::UNBOUNDED, |_| {}).map(|_| ())
}

/// Whether `s` is a valid bounded CELL coordinate.
pub fn is_valid(s: &str) -> bool {
    validate(s).is_ok()
}

/// Whether `s` is a valid CELL coordinate of any dimensionality.
pub fn is_valid_unbounded(s: &str) -> bool {
    validate_unbounded(s).is_ok()
}

/// Decode a bounded coordinate without touching the heap.
pub fn decode(s: &str) -> Result<Coordinate> {
    let mut indices = [0u8; MAX_DIMS];
    let dims = scan(s, &Profile::BOUNDED, |run| {
        // The bounded profile caps both the dimension and the index.
        indices[run.dimension - 1] = run.index as u8;
    })?;
    Ok(Coordinate::from_parts(indices, dims as u8))
}

/// Decode a coordinate of any dimensionality.
pub fn decode_unbounded(s: &str) -> Result<UnboundedCoordinate> {
    let mut indices = Vec::new();
    decode_into(s, &Profile::UNBOUNDED, &mut indices)?;
    Ok(UnboundedCoordinate::from_vec_unchecked(indices))
}

/// Append the indices of `s` to `out`, returning how many were appended.
///
/// On failure `out` is truncated back to its original length.
pub fn decode_into(s: &str, profile: &Profile, out: &mut Vec<u64>) -> Result<usize> {
    let start = out.len();
    match scan(s, profile, |run| out.push(run.index)) {
        Ok(dims) => Ok(dims),
        Err(err) => {
            out.truncate(start);
            Err(err)
        }
    }
}

/// Split `s` into the raw run of each dimension.
///
/// ```ignore
/// assert_eq!(components("h8Hh8", &Profile::UNBOUNDED)?, ["h", "8", "H", "h", "8"]);
/// ```
pub fn components<'a>(s: &'a str, profile: &Profile) -> Result<Vec<&'a str>> {
    let mut runs = Vec::new();
    scan(s, profile, |run| runs.push(run.text))?;
    Ok(runs)
}

/// Number of dimensions of `s`, or 0 when it is not a valid coordinate.
pub fn dimensions(s: &str) -> usize {
    scan(s, &Profile::UNBOUNDED, |_| {}).unwrap_or(0)
}
