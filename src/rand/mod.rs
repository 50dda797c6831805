//! Random byte sources and unbiased integer sampling.
//!
//! Generation never reaches for a process-wide RNG: every entry point takes a
//! [`RandomSource`] so callers can swap the OS source for a seeded stream or a
//! scripted one in tests.

mod os;
mod sample;
mod seeded;

#[cfg(test)]
pub(crate) mod testing;

pub use os::{MAX_CHUNK, OsRandom};
pub use sample::sample;
pub use seeded::{BLOCK_LEN, SeededRandom};

use crate::Result;

/// A producer of random bytes.
pub trait RandomSource {
    /// Fill `dest` completely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Draw `n` fresh bytes.
    fn bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}
