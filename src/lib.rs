//! Secure Password Generation Library
//!
//! Generates passwords of a fixed length that contain at least one
//! character from every required class (uppercase, lowercase, digits,
//! symbols), drawing from a cryptographically secure random source.
//!
//! # Architecture
//!
//! ```text
//! policy → charset (alphabet) → generator ← rng
//! ```
//!
//! # Design Principles
//!
//! - **Fail fast**: Policies no password can satisfy are rejected at
//!   construction, never left to spin in the sampling loop
//! - **Uniform positions**: Whole candidates are rejected; individual
//!   characters are never forced or re-placed
//! - **Uses standard primitives**: OS entropy directly, or ChaCha20
//!   seeded from it
//!
//! # Example
//!
//! ```no_run
//! use secure_passgen::{PasswordGenerator, Policy};
//!
//! let policy = Policy::new(12, true, true, true, false);
//! let generator = PasswordGenerator::new(policy).unwrap();
//!
//! let password = generator.generate();
//! assert_eq!(password.len(), 12);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod generator;
pub mod policy;
pub mod rng;

// Re-export commonly used types at crate root
pub use charset::{Alphabet, CharClass, ClassSet};
pub use generator::{meets_requirements, PasswordGenerator};
pub use policy::{ConfigError, FileConfig, Policy, PolicyError};
pub use rng::{EntropySource, SessionRng};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
