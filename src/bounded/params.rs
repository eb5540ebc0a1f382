//! Parameters for random string generation

use std::collections::HashSet;

use crate::error::ParamError;

/// Default output length of [`random_string`](super::random_string).
pub const DEFAULT_LENGTH: usize = 32;

/// Default 75-symbol alphabet: letters, digits and `!@#$%^&*()_+~`.
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+~";

/// How a random byte is turned into a symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// `charset[byte % len]`. One byte per symbol, slightly biased towards
    /// the first `256 % len` symbols.
    #[default]
    Modulo,
    /// Rejection sampling per symbol. Exactly uniform, may draw more than
    /// one byte per symbol.
    Rejection,
}

/// Configuration for [`random_string_with`](super::random_string_with).
///
/// The default reproduces [`random_string`](super::random_string): 32
/// symbols from [`DEFAULT_CHARSET`] with [`Sampling::Modulo`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringParams {
    /// Number of symbols in the output (minimum 1).
    pub length: usize,
    /// Alphabet to draw from (1..=256 distinct symbols).
    pub charset: String,
    /// Byte-to-symbol mapping.
    pub sampling: Sampling,
}

impl StringParams {
    /// Checks the parameters and returns the alphabet as symbols.
    pub(crate) fn symbols(&self) -> Result<Vec<char>, ParamError> {
        if self.length == 0 {
            return Err(ParamError::ZeroLength);
        }

        let symbols: Vec<char> = self.charset.chars().collect();

        if symbols.is_empty() {
            return Err(ParamError::EmptyCharset);
        }

        if symbols.len() > 256 {
            return Err(ParamError::CharsetTooLarge { len: symbols.len() });
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(&dup) = symbols.iter().find(|c| !seen.insert(**c)) {
            return Err(ParamError::DuplicateSymbol(dup));
        }

        Ok(symbols)
    }

    /// Validates the parameters without generating anything.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.symbols().map(|_| ())
    }
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            charset: DEFAULT_CHARSET.to_owned(),
            sampling: Sampling::Modulo,
        }
    }
}
