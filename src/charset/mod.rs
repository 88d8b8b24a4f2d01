//! Character classes and sampling alphabets.
//!
//! This module defines the four character classes a policy can require
//! and builds the alphabet a password is sampled from.

mod alphabet;
mod class;

pub use alphabet::{Alphabet, ClassSet};
pub use class::CharClass;
