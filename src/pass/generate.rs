//! Character generation for pattern and memorable modes.

use super::charset;
use super::entropy::alternation;
use crate::Result;
use crate::rand::{RandomSource, sample};

/// Extend `prefix` with uniform draws from `chars` until it holds `length`
/// characters. A prefix already at or past `length` comes back unchanged.
pub fn from_charset<R>(rng: &mut R, chars: &[u8], length: usize, prefix: &str) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let mut count = prefix.chars().count();
    let mut out = String::with_capacity(prefix.len() + length.saturating_sub(count));
    out.push_str(prefix);
    while count < length {
        out.push(chars[sample(rng, 0, chars.len())?] as char);
        count += 1;
    }
    Ok(out)
}

/// `count` lowercase letters alternating consonant and vowel, one accepted
/// draw per slot.
pub fn memorable<R>(rng: &mut R, count: usize, vowel_first: bool) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    alternation(vowel_first)
        .take(count)
        .map(|vowel| {
            let alphabet = charset::memorable(vowel);
            sample(rng, 0, alphabet.len()).map(|i| alphabet[i] as char)
        })
        .collect()
}

/// Memorable continuation of `prefix` up to `length` characters.
pub fn memorable_with_prefix<R>(rng: &mut R, length: usize, prefix: &str) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let count = length.saturating_sub(prefix.chars().count());
    let tail = memorable(rng, count, charset::ends_with_consonant(prefix))?;
    Ok(format!("{prefix}{tail}"))
}
