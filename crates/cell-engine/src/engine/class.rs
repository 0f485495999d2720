//! Character classes of the cyclic dimension scheme.
//!
//! | Dimension      | Class                   |
//! |----------------|-------------------------|
//! | 1st, 4th, 7th… | lowercase (`a`–`z`)     |
//! | 2nd, 5th, 8th… | positive integers       |
//! | 3rd, 6th, 9th… | uppercase (`A`–`Z`)     |

/// The character class expected for one dimension.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum CharClass {
    Lower,
    Numeric,
    Upper,
}

impl CharClass {
    /// Class of the given 1-indexed dimension.
    pub fn of_dimension(dimension: usize) -> CharClass {
        match dimension.saturating_sub(1) % 3 {
            0 => CharClass::Lower,
            1 => CharClass::Numeric,
            _ => CharClass::Upper,
        }
    }

    /// Whether `byte` belongs to this class.
    pub fn contains(self, byte: u8) -> bool {
        match self {
            CharClass::Lower => byte.is_ascii_lowercase(),
            CharClass::Numeric => byte.is_ascii_digit(),
            CharClass::Upper => byte.is_ascii_uppercase(),
        }
    }
}
