//! Cryptographically secure random sources.
//!
//! Passwords are drawn either straight from the operating system
//! (`OsRng`) or from a [`SessionRng`], a ChaCha20 generator seeded and
//! periodically reseeded from the operating system.

mod session;

pub use session::{SessionRng, DEFAULT_RESEED_INTERVAL};

use rand_core::{CryptoRng, OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Selects the random source used for generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntropySource {
    /// Operating system entropy for every draw.
    #[default]
    Os,
    /// ChaCha20 session generator seeded from the operating system.
    Session,
}

impl EntropySource {
    /// Instantiates the selected source.
    pub fn build(self) -> GeneratorRng {
        match self {
            EntropySource::Os => GeneratorRng::Os(OsRng),
            EntropySource::Session => GeneratorRng::Session(SessionRng::from_os_entropy()),
        }
    }
}

/// A random source chosen at runtime.
#[derive(Debug)]
pub enum GeneratorRng {
    /// Operating system entropy.
    Os(OsRng),
    /// Reseeding ChaCha20 session generator.
    Session(SessionRng),
}

impl RngCore for GeneratorRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            GeneratorRng::Os(rng) => rng.next_u32(),
            GeneratorRng::Session(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            GeneratorRng::Os(rng) => rng.next_u64(),
            GeneratorRng::Session(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            GeneratorRng::Os(rng) => rng.fill_bytes(dest),
            GeneratorRng::Session(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match self {
            GeneratorRng::Os(rng) => rng.try_fill_bytes(dest),
            GeneratorRng::Session(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for GeneratorRng {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_source() {
        assert!(matches!(EntropySource::Os.build(), GeneratorRng::Os(_)));
        assert!(matches!(
            EntropySource::Session.build(),
            GeneratorRng::Session(_)
        ));
    }

    #[test]
    fn test_session_source_counts_bytes() {
        let mut rng = EntropySource::Session.build();
        let mut buf = [0u8; 24];
        rng.fill_bytes(&mut buf);

        match rng {
            GeneratorRng::Session(session) => assert_eq!(session.bytes_since_reseed(), 24),
            GeneratorRng::Os(_) => unreachable!(),
        }
    }
}
