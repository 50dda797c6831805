//! Passphrases built from memorable words.

use tracing::debug;

use super::generate;
use crate::Result;
use crate::rand::{RandomSource, sample};

pub const MIN_WORD_LENGTH: usize = 3;
pub const MAX_WORD_LENGTH: usize = 7;

/// Draw a length in `[MIN_WORD_LENGTH, MAX_WORD_LENGTH]` for each of `count`
/// words. With a `target`, grow randomly chosen words one letter at a time
/// until the total reaches it or every word is at the maximum. Lengths are
/// never reduced.
pub fn plan<R>(rng: &mut R, count: usize, target: Option<usize>) -> Result<Vec<usize>>
where
    R: RandomSource + ?Sized,
{
    let mut lengths = (0..count)
        .map(|_| sample(rng, MIN_WORD_LENGTH, MAX_WORD_LENGTH + 1))
        .collect::<Result<Vec<_>>>()?;

    let Some(target) = target else {
        return Ok(lengths);
    };
    let total: usize = lengths.iter().sum();
    if total >= target {
        return Ok(lengths);
    }

    debug!(total, target, words = count, "growing passphrase words");
    let mut growable: Vec<usize> = (0..count)
        .filter(|&i| lengths[i] < MAX_WORD_LENGTH)
        .collect();
    let mut remaining = target - total;
    while remaining > 0 && !growable.is_empty() {
        let pick = sample(rng, 0, growable.len())?;
        let word = growable[pick];
        lengths[word] += 1;
        remaining -= 1;
        if lengths[word] >= MAX_WORD_LENGTH {
            growable.remove(pick);
        }
    }
    Ok(lengths)
}

/// `count` memorable words, each starting on a consonant, joined by spaces.
pub fn passphrase<R>(rng: &mut R, count: usize, target: Option<usize>) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let words = plan(rng, count, target)?
        .into_iter()
        .map(|len| generate::memorable(rng, len, false))
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(" "))
}
