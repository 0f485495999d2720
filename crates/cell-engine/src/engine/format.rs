//! Rendering indices back to CELL text.

use std::fmt;

use super::class::CharClass;
use super::coordinate::Coordinate;
use super::numeral::write_run;
use super::profile::Profile;
use crate::error::CoordinateError;

/// Write `indices` in dimension order, each in the notation of its class.
pub(crate) fn write_indices<W, I>(out: &mut W, indices: I) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator<Item = u64>,
{
    for (i, index) in indices.into_iter().enumerate() {
        write_run(out, index, CharClass::of_dimension(i + 1))?;
    }
    Ok(())
}

/// Encode a bounded coordinate (same as `c.to_string()`).
pub fn encode(c: &Coordinate) -> String {
    c.to_string()
}

/// Check `indices` against `profile` and encode them.
///
/// ```ignore
/// assert_eq!(encode_indices(&[4, 3], &Profile::BOUNDED)?, "e4");
/// ```
pub fn encode_indices(indices: &[u64], profile: &Profile) -> Result<String, CoordinateError> {
    profile.check(indices)?;
    let mut out = String::new();
    write_indices(&mut out, indices.iter().copied())
        .expect("writing to a String must not fail");
    Ok(out)
}
