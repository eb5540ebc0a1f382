//! Unbiased bounded integers
//!
//! A byte is uniform over 256 values. Reducing it with `% range` favours the
//! low residues whenever `range` does not divide 256, so draws at or above
//! the largest multiple of `range` are thrown away and redrawn. Every
//! accepted byte then maps onto exactly `256 / range` residues.

use tracing::{trace, warn};

use crate::entropy::EntropySource;
use crate::error::{RandomError, Result};

/// Upper bound on draws per value before giving up.
///
/// For any range of at most 256 values fewer than half the bytes are
/// rejected, so a healthy source exceeds this with probability below 2^-64.
pub const MAX_ATTEMPTS: u32 = 64;

const BYTE_SPACE: u16 = 256;

/// Returns an integer uniformly distributed over `[min, max)`.
///
/// The range must hold between 1 and 256 values. One byte is drawn per
/// attempt; `random_int(source, 0, 256)` therefore always uses exactly one.
///
/// # Errors
/// - [`RandomError::InvalidRange`] if `max <= min` or `max - min > 256`.
///   Nothing is drawn in that case.
/// - [`RandomError::EntropyExhausted`] if [`MAX_ATTEMPTS`] draws in a row
///   were rejected.
/// - Any error from the source, unchanged.
pub fn random_int<S>(source: &mut S, min: i64, max: i64) -> Result<i64>
where
    S: EntropySource + ?Sized,
{
    let width = i128::from(max) - i128::from(min);
    if !(1..=i128::from(BYTE_SPACE)).contains(&width) {
        return Err(RandomError::InvalidRange { min, max });
    }

    let offset = draw_below(source, width as u16)?;

    Ok(min + i64::from(offset))
}

/// Returns an index uniformly distributed over `[0, n)`, for `1 <= n <= 256`.
pub fn uniform_index<S>(source: &mut S, n: usize) -> Result<usize>
where
    S: EntropySource + ?Sized,
{
    if n == 0 || n > usize::from(BYTE_SPACE) {
        return Err(RandomError::InvalidRange {
            min: 0,
            max: i64::try_from(n).unwrap_or(i64::MAX),
        });
    }

    draw_below(source, n as u16).map(usize::from)
}

/// Rejection loop shared by the public entry points. `range` is in `1..=256`.
fn draw_below<S>(source: &mut S, range: u16) -> Result<u8>
where
    S: EntropySource + ?Sized,
{
    let threshold = (BYTE_SPACE / range) * range;

    for _ in 0..MAX_ATTEMPTS {
        let byte = u16::from(source.next_byte()?);
        if byte < threshold {
            return Ok((byte % range) as u8);
        }
        trace!(range, threshold, "rejected draw in biased region");
    }

    warn!(range, attempts = MAX_ATTEMPTS, "rejection sampling exhausted");
    Err(RandomError::EntropyExhausted {
        attempts: MAX_ATTEMPTS,
    })
}
