//! Password policies and their configuration.
//!
//! A [`Policy`] states the password length and which character classes
//! are required. Validation rejects policies no password can satisfy
//! before any sampling happens.

mod config;
mod rules;

pub use config::{ConfigError, FileConfig, OutputConfig};
pub use rules::{Policy, PolicyError};
