//! Deterministic byte stream keyed from caller-supplied seed bytes.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::trace;
use zeroize::Zeroize;

use super::RandomSource;
use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Bytes produced per counter step.
pub const BLOCK_LEN: usize = 32;

/// Keyed pseudorandom stream: `HMAC-SHA-256(seed, counter)` for a big-endian
/// 64-bit counter starting at zero.
///
/// Each `fill` consumes whole blocks and drops the unused tail of the last
/// one, so the stream depends on the sequence of request sizes as well as the
/// seed. The same seed driven through the same requests always yields the
/// same bytes. This is repeatable, not unpredictable.
pub struct SeededRandom {
    mac: HmacSha256,
    counter: u64,
}

impl SeededRandom {
    pub fn new(seed: impl AsRef<[u8]>) -> Result<Self> {
        let seed = seed.as_ref();
        if seed.is_empty() {
            return Err(Error::EmptySeed);
        }
        let mac = HmacSha256::new_from_slice(seed).map_err(|_| Error::MacUnavailable)?;
        Ok(Self { mac, counter: 0 })
    }

    /// Blocks produced so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    fn next_block(&mut self, out: &mut [u8; BLOCK_LEN]) {
        let mut mac = self.mac.clone();
        mac.update(&self.counter.to_be_bytes());
        out.copy_from_slice(&mac.finalize().into_bytes());
        trace!(counter = self.counter, "deterministic block");
        self.counter = self.counter.wrapping_add(1);
    }
}

impl RandomSource for SeededRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        let mut block = [0u8; BLOCK_LEN];
        for chunk in dest.chunks_mut(BLOCK_LEN) {
            self.next_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        block.zeroize();
        Ok(())
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(seed: &[u8], counter: u64) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(seed).unwrap();
        mac.update(&counter.to_be_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    #[test]
    fn empty_seed_is_rejected() {
        assert!(matches!(SeededRandom::new(Vec::<u8>::new()), Err(Error::EmptySeed)));
        assert!(matches!(SeededRandom::new(""), Err(Error::EmptySeed)));
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRandom::new([9, 8, 7]).unwrap();
        let mut b = SeededRandom::new([9, 8, 7]).unwrap();
        let first = a.bytes(32).unwrap();
        assert_eq!(first.len(), 32);
        assert_eq!(first, b.bytes(32).unwrap());
        assert_eq!(a.bytes(5).unwrap(), b.bytes(5).unwrap());
    }

    #[test]
    fn different_seeds_diverge() {
        let a = SeededRandom::new("alpha").unwrap().bytes(32).unwrap();
        let b = SeededRandom::new("beta").unwrap().bytes(32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn stream_is_hmac_of_big_endian_counter() {
        let seed = b"deterministic-seed";
        let mut rng = SeededRandom::new(seed).unwrap();
        let out = rng.bytes(40).unwrap();

        let mut expected = block(seed, 0);
        expected.extend_from_slice(&block(seed, 1)[..8]);
        assert_eq!(out, expected);
        assert_eq!(rng.counter(), 2);
    }

    #[test]
    fn each_fill_starts_a_fresh_block() {
        let seed = [1, 2, 3, 4];
        let mut rng = SeededRandom::new(seed).unwrap();
        let first = rng.bytes(10).unwrap();
        let second = rng.bytes(10).unwrap();

        assert_eq!(first, block(&seed, 0)[..10]);
        assert_eq!(second, block(&seed, 1)[..10]);
    }

    #[test]
    fn debug_hides_key_material() {
        let rng = SeededRandom::new("secret").unwrap();
        let shown = format!("{rng:?}");
        assert!(shown.contains("counter"));
        assert!(!shown.contains("secret"));
    }
}
