//! Seedable randomness
//!
//! The operating system is the default entropy source, but a reproducible
//! source is needed wherever output has to be checked. This module provides
//! one built on the ChaCha20 block function:
//!
//! - `chacha20`: the RFC 8439 keystream block (crate-private)
//! - [`Csprng`]: a DRBG that expands a 256-bit seed and rekeys after each use

pub(crate) mod chacha20;
mod csprng;

pub use csprng::Csprng;
