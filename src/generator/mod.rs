//! Password generation.
//!
//! Candidates are sampled uniformly from the policy alphabet and
//! rejected until one covers every required class.

mod password;
mod requirements;

pub use password::PasswordGenerator;
pub use requirements::{meets_requirements, missing_classes, present_classes};
