use crate::bounded::int::uniform_index;
use crate::bounded::params::{Sampling, StringParams};
use crate::entropy::EntropySource;
use crate::error::Result;

/// Returns 32 symbols from [`DEFAULT_CHARSET`](super::DEFAULT_CHARSET).
///
/// Draws exactly 32 bytes in a single request and maps each with
/// `byte % 75`, so the first `256 % 75 = 31` symbols are marginally more
/// likely than the rest. Use [`random_string_with`] and
/// [`Sampling::Rejection`] for an exactly uniform alphabet.
pub fn random_string<S>(source: &mut S) -> Result<String>
where
    S: EntropySource + ?Sized,
{
    random_string_with(source, &StringParams::default())
}

/// Returns a string built according to `params`.
///
/// # Errors
/// - [`RandomError::InvalidParams`](crate::RandomError::InvalidParams) if
///   `params` fail validation; nothing is drawn.
/// - [`RandomError::EntropyExhausted`](crate::RandomError::EntropyExhausted)
///   in rejection mode, if one symbol could not be drawn.
/// - Any error from the source, unchanged.
pub fn random_string_with<S>(source: &mut S, params: &StringParams) -> Result<String>
where
    S: EntropySource + ?Sized,
{
    let symbols = params.symbols()?;

    match params.sampling {
        Sampling::Modulo => {
            let mut bytes = vec![0u8; params.length];
            source.fill_bytes(&mut bytes)?;

            let out = bytes
                .iter()
                .map(|&b| symbols[usize::from(b) % symbols.len()])
                .collect();
            bytes.fill(0);

            Ok(out)
        }
        Sampling::Rejection => (0..params.length)
            .map(|_| uniform_index(source, symbols.len()).map(|i| symbols[i]))
            .collect(),
    }
}
