//! Class sets and the sampling alphabet derived from them.

use super::CharClass;
use std::fmt;

/// A set of character classes.
///
/// Iteration always yields classes in alphabet order
/// (upper, lower, digit, symbol), regardless of insertion order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set containing every class.
    pub fn all() -> Self {
        CharClass::ALL.into_iter().collect()
    }

    /// Adds a class to the set.
    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    /// Returns true if `class` is in the set.
    #[inline]
    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Number of classes in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no class is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the classes in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ordered set of characters eligible for sampling.
///
/// Built by concatenating the ranges of every class in a [`ClassSet`],
/// in alphabet order. All characters are ASCII.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
}

impl Alphabet {
    /// Builds the alphabet for the given classes.
    pub fn from_classes(classes: ClassSet) -> Self {
        let chars = classes
            .iter()
            .flat_map(|class| class.chars().iter().copied())
            .collect();
        Self { chars }
    }

    /// Number of characters in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the alphabet has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the character at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&b| b as char)
    }

    /// Returns true if `c` is part of the alphabet.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }

    /// Returns the raw ASCII bytes in sampling order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("len", &self.chars.len())
            .finish_non_exhaustive()
    }
}
