//! Test doubles for [`RandomSource`].

use super::RandomSource;
use crate::{Error, Result};

/// Replays a fixed byte script, panicking if it runs dry.
pub(crate) struct Scripted {
    bytes: Vec<u8>,
    pos: usize,
}

impl Scripted {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Scripted {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        let end = self.pos + dest.len();
        assert!(end <= self.bytes.len(), "scripted source exhausted");
        dest.copy_from_slice(&self.bytes[self.pos..end]);
        self.pos = end;
        Ok(())
    }
}

/// Counts fill calls and returns zero bytes.
#[derive(Default)]
pub(crate) struct Counting {
    pub(crate) calls: usize,
}

impl RandomSource for Counting {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.calls += 1;
        dest.fill(0);
        Ok(())
    }
}

/// Fails every fill with an OS entropy error.
#[derive(Default)]
pub(crate) struct Failing {
    pub(crate) calls: usize,
}

impl Failing {
    pub(crate) fn error() -> Error {
        Error::Entropy(getrandom::Error::UNSUPPORTED)
    }
}

impl RandomSource for Failing {
    fn fill(&mut self, _dest: &mut [u8]) -> Result<()> {
        self.calls += 1;
        Err(Self::error())
    }
}
