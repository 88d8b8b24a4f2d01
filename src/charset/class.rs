//! Character classes and their ASCII ranges.
//!
//! Membership is decided with the same ASCII predicates used to build
//! the alphabet, so a class that contributes characters to the alphabet
//! can always be recognised in a candidate.

use serde::{Deserialize, Serialize};
use std::fmt;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes a policy can require.
///
/// Variants are declared in alphabet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// ASCII uppercase letters `A`-`Z`.
    Upper,
    /// ASCII lowercase letters `a`-`z`.
    Lower,
    /// ASCII decimal digits `0`-`9`.
    Digit,
    /// The 32 printable ASCII punctuation characters.
    Symbol,
}

impl CharClass {
    /// All classes in alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Returns the characters of this class as ASCII bytes.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Returns true if `c` belongs to this class.
    #[inline]
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => c.is_ascii_punctuation(),
        }
    }

    /// Returns the class `c` belongs to, if any.
    pub fn classify(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Bit used for this class inside a [`ClassSet`](super::ClassSet).
    #[inline]
    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}
