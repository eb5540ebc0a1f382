//! URL-safe secret keys

use data_encoding::BASE64URL;

use crate::entropy::EntropySource;
use crate::error::Result;

/// Length of a generated key, in characters and in source bytes.
pub const KEY_LENGTH: usize = 22;

/// Returns a 22-character key from the URL-safe base64 alphabet.
///
/// 22 random bytes are encoded and the encoding is cut to 22 characters,
/// which keeps 132 bits of entropy and drops the padding.
pub fn generate_key<S>(source: &mut S) -> Result<String>
where
    S: EntropySource + ?Sized,
{
    let mut bytes = [0u8; KEY_LENGTH];
    source.fill_bytes(&mut bytes)?;

    let mut key = BASE64URL.encode(&bytes);
    bytes.fill(0);
    key.truncate(KEY_LENGTH);

    Ok(key)
}
