//! Entropy source abstraction
//!
//! Every generator in this crate draws its bytes through [`EntropySource`]
//! instead of reaching for a global random device. Production code passes
//! [`OsEntropy`]; tests pass a seeded [`Csprng`](crate::rng::Csprng) or a
//! scripted source to get reproducible output.

use crate::error::Result;
use crate::os::sys_random;

/// A capability to fill a buffer with uniformly distributed random bytes.
///
/// Implementations must either fill the whole buffer or return an error.
pub trait EntropySource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Draws a single byte.
    fn next_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.fill_bytes(&mut byte)?;
        Ok(byte[0])
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }

    fn next_byte(&mut self) -> Result<u8> {
        (**self).next_byte()
    }
}

/// The operating system's CSPRNG.
///
/// Stateless; every call goes straight to the platform entropy API.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        sys_random(dest)
    }
}
