//! Unbiased integer sampling over a byte stream.

use tracing::trace;

use super::RandomSource;
use crate::{Error, Result};

/// Draw a uniformly distributed integer in `[min, max)`.
///
/// Reads the fewest big-endian bytes `k` with `256^k >= max - min` and
/// rejects values at or above the largest multiple of the range that fits in
/// `256^k`, so every result is equally likely. A range of one returns `min`
/// without drawing.
pub fn sample<R: RandomSource + ?Sized>(rng: &mut R, min: usize, max: usize) -> Result<usize> {
    if max <= min {
        return Err(Error::InvalidRange { min, max });
    }

    let range = (max - min) as u128;
    if range == 1 {
        return Ok(min);
    }

    let width = byte_width(range);
    let space = 1u128 << (8 * width);
    let limit = space - space % range;

    let mut buf = [0u8; 8];
    loop {
        let bytes = &mut buf[..width];
        rng.fill(bytes)?;
        let value = bytes
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
        if value < limit {
            return Ok(min + (value % range) as usize);
        }
        trace!(width, "rejected biased sample");
    }
}

/// Smallest `k` with `256^k >= range`.
fn byte_width(range: u128) -> usize {
    let mut width = 1;
    while (1u128 << (8 * width)) < range {
        width += 1;
    }
    width
}
