//! Entropy estimation for pattern and memorable configurations.
//!
//! Estimates are pure functions of the request. They describe what the
//! generators actually do: pattern mode draws each character uniformly from
//! its alphabet and memorable mode accepts exactly one sample per alternation
//! slot, so the figures here are exact rather than bounds.

use std::iter;
use std::sync::LazyLock;

use super::charset;

/// Minimum estimated entropy accepted without an explicit override.
pub const MIN_ENTROPY_BITS: f64 = 64.0;

/// Shortest memorable run, starting on a consonant, that clears the floor.
pub static MIN_MEMORABLE_LENGTH: LazyLock<usize> = LazyLock::new(|| chars_to_floor(false));

/// Estimated entropy of a configuration and the length that would clear the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub entropy_bits: f64,
    /// `None` when no length can reach the floor.
    pub recommended_length: Option<usize>,
}

impl Estimate {
    pub fn is_secure(&self) -> bool {
        self.entropy_bits >= MIN_ENTROPY_BITS
    }
}

/// Bits contributed by one uniform draw from `alphabet_size` symbols.
pub fn bits_per_char(alphabet_size: usize) -> f64 {
    if alphabet_size > 1 {
        (alphabet_size as f64).log2()
    } else {
        0.0
    }
}

/// Pattern mode: every character after the prefix is an independent draw.
pub fn pattern(alphabet_size: usize, length: usize, prefix_len: usize) -> Estimate {
    let per_char = bits_per_char(alphabet_size);
    Estimate {
        entropy_bits: per_char * length.saturating_sub(prefix_len) as f64,
        recommended_length: (per_char > 0.0)
            .then(|| prefix_len + (MIN_ENTROPY_BITS / per_char).ceil() as usize),
    }
}

/// Memorable mode: characters alternate consonant and vowel, continuing
/// from wherever `prefix` leaves off.
pub fn memorable(length: usize, prefix: &str) -> Estimate {
    let prefix_len = prefix.chars().count();
    let vowel_first = charset::ends_with_consonant(prefix);
    let entropy_bits = alternation(vowel_first)
        .take(length.saturating_sub(prefix_len))
        .map(slot_bits)
        .sum();
    Estimate {
        entropy_bits,
        recommended_length: Some(prefix_len + chars_to_floor(vowel_first)),
    }
}

/// Slot classes for memorable text: `true` is a vowel slot.
pub fn alternation(vowel_first: bool) -> impl Iterator<Item = bool> {
    iter::successors(Some(vowel_first), |vowel| Some(!vowel))
}

/// Characters of alternation needed to reach [`MIN_ENTROPY_BITS`].
pub fn chars_to_floor(vowel_first: bool) -> usize {
    let mut bits = 0.0;
    alternation(vowel_first)
        .take_while(|&vowel| {
            let below = bits < MIN_ENTROPY_BITS;
            bits += slot_bits(vowel);
            below
        })
        .count()
}

fn slot_bits(vowel: bool) -> f64 {
    bits_per_char(charset::memorable(vowel).len())
}

/// Human label for an entropy figure.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
