//! Operating system entropy.

use super::RandomSource;
use crate::{Error, Result};

/// Largest buffer handed to a single OS call.
pub const MAX_CHUNK: usize = 65_536;

/// Cryptographically secure bytes from the OS CSPRNG via `getrandom`.
///
/// Requests larger than [`MAX_CHUNK`] are split into consecutive calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        fill_chunked(dest, |chunk| getrandom::fill(chunk).map_err(Error::Entropy))
    }
}

/// Hand `dest` to `f` in pieces of at most [`MAX_CHUNK`] bytes, stopping at
/// the first error.
fn fill_chunked<F>(dest: &mut [u8], mut f: F) -> Result<()>
where
    F: FnMut(&mut [u8]) -> Result<()>,
{
    for chunk in dest.chunks_mut(MAX_CHUNK) {
        f(chunk)?;
    }
    Ok(())
}
