//! Secure random values for client-side secrets
//!
//! This crate turns cryptographically secure bytes into the small values an
//! application needs when it generates secrets: bounded integers, random
//! passwords and URL-safe keys.
//!
//! # Module overview
//!
//! - `bounded`
//!   Unbiased integers over a range of at most 256 values, and random
//!   strings over a configurable alphabet. Integers use rejection sampling
//!   so that every value is exactly equally likely; the retry loop is
//!   bounded and fails with an error instead of looping forever.
//!
//! - `key`
//!   22-character URL-safe keys, suitable for embedding in links.
//!
//! - `entropy`
//!   The [`EntropySource`] capability every generator draws from, and
//!   [`OsEntropy`], the operating system's CSPRNG.
//!
//! - `rng`
//!   A ChaCha20 DRBG ([`Csprng`]) that can be seeded explicitly. With a
//!   fixed seed it gives reproducible streams for tests; seeded from the OS
//!   it is a regular CSPRNG.
//!
//! - `error`
//!   [`RandomError`] and the crate-wide [`Result`] alias.
//!
//! # Quick start
//!
//! ```no_run
//! let die = randkit::random_int(1, 7)?;
//! let password = randkit::random_string()?;
//! assert!((1..7).contains(&die));
//! assert_eq!(password.chars().count(), 32);
//! # Ok::<(), randkit::RandomError>(())
//! ```
//!
//! The free functions at the crate root draw from [`OsEntropy`]. The
//! functions in [`bounded`] and [`key`] take any [`EntropySource`].

mod os;

pub mod bounded;
pub mod entropy;
pub mod error;
pub mod key;
pub mod rng;

pub use bounded::{Sampling, StringParams};
pub use entropy::{EntropySource, OsEntropy};
pub use error::{ParamError, RandomError, Result};
pub use key::generate_key;
pub use rng::Csprng;

/// Returns an integer uniformly distributed over `[min, max)` using OS
/// entropy. See [`bounded::random_int`].
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    bounded::random_int(&mut OsEntropy, min, max)
}

/// Returns a 32-symbol string from [`bounded::DEFAULT_CHARSET`] using OS
/// entropy. See [`bounded::random_string`].
pub fn random_string() -> Result<String> {
    bounded::random_string(&mut OsEntropy)
}
