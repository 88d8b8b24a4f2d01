//! ChaCha-based session CSPRNG with periodic reseeding.
//!
//! Wraps ChaCha20 seeded from the OS entropy source. After a
//! configurable number of output bytes the generator reseeds itself.
//!
//! # Reseeding Model
//!
//! Reseeding uses BLAKE3 to mix:
//! - Previous seed material (retained across reseeds)
//! - 32 fresh bytes from the OS entropy source
//! - A domain separator and reseed counter

use blake3::Hasher;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};

/// Domain separator for reseeding operations.
const RESEED_DOMAIN: &[u8] = b"secure-passgen-session-reseed-v1";

/// Default number of output bytes between automatic reseeds (1 MiB).
pub const DEFAULT_RESEED_INTERVAL: u64 = 1 << 20;

/// A ChaCha20 CSPRNG that reseeds itself from OS entropy.
///
/// Intended for batch generation where drawing every byte straight
/// from the OS would be wasteful.
pub struct SessionRng {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
    /// Retained seed material for mixing during reseed.
    /// This is NOT the ChaCha internal state.
    seed_material: [u8; 32],
    /// Output bytes allowed before an automatic reseed.
    reseed_interval: u64,
    /// Total reseeds performed.
    reseed_count: u64,
    /// Bytes generated since last reseed.
    bytes_since_reseed: u64,
}

impl SessionRng {
    /// Creates a new CSPRNG seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        let mut seed_material = [0u8; 32];
        OsRng.fill_bytes(&mut seed_material);

        Self {
            inner: ChaCha20Rng::from_seed(seed_material),
            seed_material,
            reseed_interval: DEFAULT_RESEED_INTERVAL,
            reseed_count: 0,
            bytes_since_reseed: 0,
        }
    }

    /// Creates a CSPRNG that reseeds every `bytes` output bytes.
    pub fn with_reseed_interval(bytes: u64) -> Self {
        Self {
            reseed_interval: bytes.max(1),
            ..Self::from_os_entropy()
        }
    }

    /// Creates a CSPRNG from a known seed (for testing only).
    #[cfg(test)]
    pub(crate) fn from_seed_for_testing(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            seed_material: seed,
            reseed_interval: DEFAULT_RESEED_INTERVAL,
            reseed_count: 0,
            bytes_since_reseed: 0,
        }
    }

    /// Reseeds immediately with fresh OS entropy.
    pub fn reseed(&mut self) {
        let mut fresh = [0u8; 32];
        OsRng.fill_bytes(&mut fresh);
        self.mix(&fresh);
    }

    /// new_seed = BLAKE3(domain || counter || old_seed_material || fresh)
    fn mix(&mut self, fresh: &[u8; 32]) {
        let mut hasher = Hasher::new();
        hasher.update(RESEED_DOMAIN);
        hasher.update(&self.reseed_count.to_le_bytes());
        hasher.update(&self.seed_material);
        hasher.update(fresh);

        let new_seed_material: [u8; 32] = *hasher.finalize().as_bytes();

        self.seed_material = new_seed_material;
        self.inner = ChaCha20Rng::from_seed(new_seed_material);
        self.reseed_count += 1;
        self.bytes_since_reseed = 0;

        tracing::info!(
            reseed_count = self.reseed_count,
            "Session RNG reseeded via BLAKE3 mixing"
        );
    }

    #[inline]
    fn account(&mut self, bytes: u64) {
        if self.bytes_since_reseed >= self.reseed_interval {
            self.reseed();
        }
        self.bytes_since_reseed += bytes;
    }

    /// Returns the number of reseeds performed.
    pub fn reseed_count(&self) -> u64 {
        self.reseed_count
    }

    /// Returns bytes generated since last reseed.
    pub fn bytes_since_reseed(&self) -> u64 {
        self.bytes_since_reseed
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.account(4);
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.account(8);
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.account(dest.len() as u64);
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.account(dest.len() as u64);
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SessionRng {}

impl std::fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRng")
            .field("reseed_count", &self.reseed_count)
            .field("bytes_since_reseed", &self.bytes_since_reseed)
            .finish_non_exhaustive()
    }
}
