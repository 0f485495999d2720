//! Numeral conversions for dimension runs.
//!
//! Letter runs use bijective base-26 ("spreadsheet column" numbering, with no
//! zero digit): `a` -> 0, `z` -> 25, `aa` -> 26, `zz` -> 701, `aaa` -> 702.
//! Digit runs are 1-indexed decimal: `1` -> 0, `10` -> 9, `256` -> 255.
//!
//! Decoding uses checked arithmetic and returns `None` on overflow, so a run
//! can never wrap around into a smaller index.

use std::fmt;

use super::class::CharClass;

/// Letters needed for the largest `u64` index (26^14 > 2^64).
const MAX_LETTERS: usize = 14;

/// Convert a letter run to its 0-indexed value (case-insensitive).
///
/// Returns `None` for an empty run, a non-letter byte, or a value that does
/// not fit in `u64`.
pub fn letters_to_index(letters: &str) -> Option<u64> {
    let mut acc = 0u64;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = u64::from(b.to_ascii_lowercase() - b'a') + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    acc.checked_sub(1)
}

/// Convert a 1-indexed decimal run to its 0-indexed value.
///
/// Returns `None` for an empty run, a non-digit byte, a leading `0`, or a
/// value that does not fit in `u64`.
pub fn digits_to_index(digits: &str) -> Option<u64> {
    if digits.starts_with('0') {
        return None;
    }
    let mut acc = 0u64;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        acc = acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    acc.checked_sub(1)
}

/// Convert an index to lowercase letters (0 -> a, 25 -> z, 26 -> aa).
pub fn index_to_letters(index: u64) -> String {
    let mut out = String::new();
    write_letters(&mut out, index, b'a').expect("writing to a String must not fail");
    out
}

/// Convert an index to its 1-indexed decimal form (0 -> 1, 255 -> 256).
pub fn index_to_digits(index: u64) -> String {
    (u128::from(index) + 1).to_string()
}

/// Decode one run according to the class of its dimension.
pub(crate) fn decode_run(run: &str, class: CharClass) -> Option<u64> {
    match class {
        CharClass::Numeric => digits_to_index(run),
        CharClass::Lower | CharClass::Upper => letters_to_index(run),
    }
}

/// Write one index in the notation of `class`.
pub(crate) fn write_run<W: fmt::Write>(out: &mut W, index: u64, class: CharClass) -> fmt::Result {
    match class {
        CharClass::Lower => write_letters(out, index, b'a'),
        CharClass::Numeric => write!(out, "{}", u128::from(index) + 1),
        CharClass::Upper => write_letters(out, index, b'A'),
    }
}

fn write_letters<W: fmt::Write>(out: &mut W, index: u64, base: u8) -> fmt::Result {
    // Least significant letter first, filled from the back.
    let mut buf = [0u8; MAX_LETTERS];
    let mut pos = MAX_LETTERS;
    let mut n = index;
    loop {
        pos -= 1;
        buf[pos] = base + (n % 26) as u8;
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    for &b in &buf[pos..] {
        out.write_char(char::from(b))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_to_index_known_values() {
        assert_eq!(letters_to_index("a"), Some(0));
        assert_eq!(letters_to_index("z"), Some(25));
        assert_eq!(letters_to_index("aa"), Some(26));
        assert_eq!(letters_to_index("az"), Some(51));
        assert_eq!(letters_to_index("ba"), Some(52));
        assert_eq!(letters_to_index("iv"), Some(255));
        assert_eq!(letters_to_index("iw"), Some(256));
        assert_eq!(letters_to_index("zz"), Some(701));
        assert_eq!(letters_to_index("aaa"), Some(702));
    }

    #[test]
    fn test_letters_to_index_ignores_case() {
        assert_eq!(letters_to_index("IV"), Some(255));
        assert_eq!(letters_to_index("Aa"), Some(26));
    }

    #[test]
    fn test_letters_to_index_rejects_bad_runs() {
        assert_eq!(letters_to_index(""), None);
        assert_eq!(letters_to_index("a1"), None);
        assert_eq!(letters_to_index("é"), None);
    }

    #[test]
    fn test_letters_to_index_overflow_returns_none() {
        assert_eq!(letters_to_index(&"z".repeat(40)), None);
    }

    #[test]
    fn test_digits_to_index_known_values() {
        assert_eq!(digits_to_index("1"), Some(0));
        assert_eq!(digits_to_index("9"), Some(8));
        assert_eq!(digits_to_index("10"), Some(9));
        assert_eq!(digits_to_index("256"), Some(255));
        assert_eq!(digits_to_index("18446744073709551615"), Some(u64::MAX - 1));
    }

    #[test]
    fn test_digits_to_index_rejects_bad_runs() {
        assert_eq!(digits_to_index(""), None);
        assert_eq!(digits_to_index("0"), None);
        assert_eq!(digits_to_index("01"), None);
        assert_eq!(digits_to_index("1a"), None);
        assert_eq!(digits_to_index("18446744073709551616"), None);
    }

    #[test]
    fn test_index_to_letters_known_values() {
        assert_eq!(index_to_letters(0), "a");
        assert_eq!(index_to_letters(25), "z");
        assert_eq!(index_to_letters(26), "aa");
        assert_eq!(index_to_letters(51), "az");
        assert_eq!(index_to_letters(52), "ba");
        assert_eq!(index_to_letters(255), "iv");
        assert_eq!(index_to_letters(701), "zz");
        assert_eq!(index_to_letters(702), "aaa");
    }

    #[test]
    fn test_index_to_letters_handles_max_u64() {
        let letters = index_to_letters(u64::MAX);
        assert!(letters.len() <= MAX_LETTERS);
        assert!(letters.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_index_to_digits_known_values() {
        assert_eq!(index_to_digits(0), "1");
        assert_eq!(index_to_digits(8), "9");
        assert_eq!(index_to_digits(9), "10");
        assert_eq!(index_to_digits(255), "256");
        assert_eq!(index_to_digits(u64::MAX), "18446744073709551616");
    }

    #[test]
    fn test_letters_are_bijective_over_small_range() {
        for n in 0..20_000u64 {
            assert_eq!(letters_to_index(&index_to_letters(n)), Some(n), "index {}", n);
        }
        assert_eq!(
            letters_to_index(&index_to_letters(u64::MAX - 1)),
            Some(u64::MAX - 1)
        );
    }

    #[test]
    fn test_write_run_uses_class_case() {
        let mut out = String::new();
        write_run(&mut out, 27, CharClass::Upper).unwrap();
        write_run(&mut out, 9, CharClass::Numeric).unwrap();
        write_run(&mut out, 27, CharClass::Lower).unwrap();
        assert_eq!(out, "AB10ab");
    }
}
