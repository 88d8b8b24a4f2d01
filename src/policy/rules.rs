//! Generation policy: target length and required character classes.
//!
//! A policy is plain configuration. Normalization (the lowercase
//! fallback when no class is requested) is computed on read and never
//! written back, so a policy always reports exactly what was asked for.

use crate::charset::{CharClass, ClassSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised for policies that no password can satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The requested length is zero.
    #[error("password length must be at least 1")]
    ZeroLength,
    /// More classes are required than the password has positions.
    #[error("policy requires {required} character classes but length is only {length}")]
    Unsatisfiable {
        /// Requested password length.
        length: usize,
        /// Number of classes the password must contain.
        required: usize,
    },
}

/// Password generation policy.
///
/// Each `use_*` flag means the class is part of the alphabet *and* the
/// password must contain at least one character from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Number of characters in the generated password.
    pub length: usize,
    /// Include and require uppercase letters.
    pub use_upper: bool,
    /// Include and require lowercase letters.
    pub use_lower: bool,
    /// Include and require digits.
    pub use_digits: bool,
    /// Include and require punctuation symbols.
    pub use_symbols: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            length: 16,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl Policy {
    /// Creates a policy from a length and the four class flags.
    pub fn new(
        length: usize,
        use_upper: bool,
        use_lower: bool,
        use_digits: bool,
        use_symbols: bool,
    ) -> Self {
        Self {
            length,
            use_upper,
            use_lower,
            use_digits,
            use_symbols,
        }
    }

    /// Returns the policy with a different length.
    pub fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    /// Returns the policy with `class` switched on or off.
    pub fn with_class(mut self, class: CharClass, enabled: bool) -> Self {
        match class {
            CharClass::Upper => self.use_upper = enabled,
            CharClass::Lower => self.use_lower = enabled,
            CharClass::Digit => self.use_digits = enabled,
            CharClass::Symbol => self.use_symbols = enabled,
        }
        self
    }

    /// Classes exactly as requested, before normalization.
    pub fn requested_classes(&self) -> ClassSet {
        let flags = [
            (CharClass::Upper, self.use_upper),
            (CharClass::Lower, self.use_lower),
            (CharClass::Digit, self.use_digits),
            (CharClass::Symbol, self.use_symbols),
        ];
        flags
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(class, _)| class)
            .collect()
    }

    /// Effective classes: the requested ones, or lowercase alone when
    /// none were requested.
    pub fn classes(&self) -> ClassSet {
        let requested = self.requested_classes();
        if requested.is_empty() {
            [CharClass::Lower].into_iter().collect()
        } else {
            requested
        }
    }

    /// Checks that some password of `length` characters can satisfy
    /// the policy.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.length == 0 {
            return Err(PolicyError::ZeroLength);
        }

        let required = self.classes().len();
        if self.length < required {
            return Err(PolicyError::Unsatisfiable {
                length: self.length,
                required,
            });
        }

        Ok(())
    }
}
