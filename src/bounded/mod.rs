//! Bounded random values
//!
//! This module turns a stream of uniform bytes into values drawn from a
//! small, bounded domain:
//!
//! - [`random_int`]
//!   An integer in a half-open range of at most 256 values, exactly
//!   uniform thanks to rejection sampling.
//!
//! - [`random_string`] / [`random_string_with`]
//!   A string of symbols from an alphabet, either with the plain modulo
//!   mapping or with per-symbol rejection sampling.
//!
//! All functions take the byte source explicitly, so the same code runs
//! against the operating system in production and against a seeded
//! generator in tests. Retries are bounded by [`MAX_ATTEMPTS`].

mod int;
mod params;
mod string;

pub use int::{MAX_ATTEMPTS, random_int, uniform_index};
pub use params::{DEFAULT_CHARSET, DEFAULT_LENGTH, Sampling, StringParams};
pub use string::{random_string, random_string_with};
