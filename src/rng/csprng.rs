//! Seedable ChaCha20 DRBG
//!
//! [`Csprng`] expands a 256-bit seed into a keystream and rekeys itself after
//! every request, so a captured state does not reveal earlier output. Seeded
//! with [`Csprng::from_seed`] it is fully deterministic, which is what makes
//! it useful as a drop-in [`EntropySource`] for reproducible tests.

use tracing::debug;

use crate::entropy::EntropySource;
use crate::error::Result;
use crate::os::sys_random;
use crate::rng::chacha20::{BLOCK_LEN, block};

/// ChaCha20-based deterministic random bit generator.
pub struct Csprng {
    key: [u8; 32],
    /// Fixed at zero; uniqueness comes from the counter and rekeying.
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Seeds a new generator from the operating system.
    pub fn from_os() -> Result<Self> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;
        debug!("seeded csprng from os entropy");

        Ok(Self::from_seed(seed))
    }

    /// Builds a generator from a caller-provided seed.
    ///
    /// Two generators built from the same seed produce identical streams.
    /// The seed should be uniformly random unless reproducibility is the
    /// point, as it is in tests.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: seed,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with keystream bytes, then rekeys.
    ///
    /// The key is also replaced whenever the counter reaches its last value,
    /// so a block is never produced twice under the same key.
    pub fn fill(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(BLOCK_LEN) {
            if self.counter == u32::MAX {
                self.rekey();
            }
            let ks = self.next_block();
            chunk.copy_from_slice(&ks[..chunk.len()]);
        }

        self.rekey();
    }

    fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        let ks = block(&self.key, self.counter, &self.nonce);
        self.counter = self.counter.wrapping_add(1);
        ks
    }

    /// Replaces the key with the first half of a fresh block.
    fn rekey(&mut self) {
        let ks = self.next_block();
        self.key.copy_from_slice(&ks[..32]);
    }
}

impl EntropySource for Csprng {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.fill(dest);
        Ok(())
    }
}

impl std::fmt::Debug for Csprng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Csprng").finish_non_exhaustive()
    }
}
