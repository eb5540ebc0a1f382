//! Error types shared by every generator in the crate
//!
//! Failures fall into two groups: caller errors (a bad range or bad string
//! parameters), which are reported immediately and never retried, and
//! environment faults (the entropy source is unavailable or keeps producing
//! rejected bytes), which are fatal for the current call. No generator
//! silently substitutes a default value or a weaker source.

/// Reasons a [`StringParams`](crate::bounded::StringParams) value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    /// The requested output length is zero.
    #[error("string length must be at least 1")]
    ZeroLength,
    /// The alphabet has no symbols.
    #[error("charset must not be empty")]
    EmptyCharset,
    /// The alphabet has more symbols than a single byte can index.
    #[error("charset has {len} symbols, at most 256 are supported")]
    CharsetTooLarge { len: usize },
    /// The alphabet lists the same symbol twice.
    #[error("charset contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),
}

/// Errors returned by the random generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    /// `max <= min`, or the range is wider than 256 values.
    #[error("invalid range [{min}, {max}): width must be between 1 and 256")]
    InvalidRange { min: i64, max: i64 },

    /// Every draw of the rejection loop fell in the biased region.
    #[error("entropy source exhausted after {attempts} rejected draws")]
    EntropyExhausted { attempts: u32 },

    /// The underlying secure byte source failed.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// String generation parameters failed validation.
    #[error("invalid string parameters: {0}")]
    InvalidParams(#[from] ParamError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;
