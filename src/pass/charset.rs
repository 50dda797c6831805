//! Character alphabets for pattern and memorable generation.

use std::ops::RangeInclusive;

use super::Pattern;
use crate::{Error, Result};

/// Printable ASCII, excluding space.
pub const PRINTABLE: RangeInclusive<u8> = 33..=126;

pub const VOWELS: &[u8] = b"aeiou";
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Collect every printable ASCII character `pattern` accepts.
pub fn build(pattern: &Pattern) -> Result<Vec<u8>> {
    let chars: Vec<u8> = PRINTABLE.filter(|&b| pattern.matches(b as char)).collect();
    if chars.is_empty() {
        return Err(Error::NoMatchingCharacters(pattern.to_string()));
    }
    Ok(chars)
}

/// The alphabet for one memorable slot.
#[inline]
pub fn memorable(vowel: bool) -> &'static [u8] {
    if vowel { VOWELS } else { CONSONANTS }
}

/// Case-insensitive consonant test.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii() && CONSONANTS.contains(&(c.to_ascii_lowercase() as u8))
}

/// Memorable text continues with a vowel only after a consonant.
pub fn ends_with_consonant(prefix: &str) -> bool {
    prefix.chars().next_back().is_some_and(is_consonant)
}
