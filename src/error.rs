//! Library error type.

use std::fmt;

use thiserror::Error;

use crate::pass::entropy::MIN_ENTROPY_BITS;
use crate::pass::words::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating a request or generating from it.
///
/// Every error is terminal for the call that raised it. Nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length is beyond the largest exactly representable integer.
    #[error("length must be a safe integer (at most 2^53 - 1), got {0}")]
    LengthTooLarge(usize),

    /// Passphrase mode was requested with zero words.
    #[error("words must be a positive integer")]
    ZeroWords,

    /// Word count is beyond the largest exactly representable integer.
    #[error("words must be a safe integer (at most 2^53 - 1), got {0}")]
    WordsTooLarge(usize),

    /// A prefix was combined with passphrase mode.
    #[error("prefix is not supported when words are enabled")]
    PrefixWithWords,

    /// The pattern expression failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The pattern matches no printable ASCII character.
    #[error(
        "Could not find characters that match the password pattern {0}. \
         Patterns must match individual characters, not the password as a whole."
    )]
    NoMatchingCharacters(String),

    /// Estimated entropy is below the floor and the policy was not overridden.
    #[error("Security recommendation: {0} To override, set ignore_security_recommendations.")]
    Insecure(Advice),

    /// Deterministic mode was requested with an empty seed.
    #[error("entropy seed must not be empty")]
    EmptySeed,

    /// The keyed MAC backing deterministic mode could not be initialised.
    #[error("HMAC-SHA-256 is required for deterministic entropy")]
    MacUnavailable,

    /// The operating system random source failed.
    #[error("secure random source failed: {0}")]
    Entropy(getrandom::Error),

    /// Sampler bounds do not describe a non-empty range.
    #[error("max must be greater than min (got min {min}, max {max})")]
    InvalidRange { min: usize, max: usize },
}

/// Why a configuration was rejected and what would fix it.
#[derive(Debug, Clone, PartialEq)]
pub enum Advice {
    /// Pattern mode fell short. `recommended_length` is `None` when the
    /// alphabet is too small to ever reach the floor.
    Pattern {
        entropy_bits: f64,
        recommended_length: Option<usize>,
    },
    /// Memorable mode fell short.
    Memorable {
        entropy_bits: f64,
        recommended_length: usize,
    },
    /// Even maximum-length words could not reach the floor.
    Words {
        words: usize,
        recommended_words: usize,
    },
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::Pattern {
                entropy_bits,
                recommended_length,
            } => {
                write!(
                    f,
                    "estimated entropy {entropy_bits:.1} bits is below {MIN_ENTROPY_BITS} bits. "
                )?;
                match recommended_length {
                    Some(len) => write!(f, "Use length >= {len} or broaden the pattern."),
                    None => write!(f, "Use a broader pattern to increase the character set."),
                }
            }
            Advice::Memorable {
                entropy_bits,
                recommended_length,
            } => write!(
                f,
                "estimated entropy {entropy_bits:.1} bits is below {MIN_ENTROPY_BITS} bits. \
                 Use length >= {recommended_length} or disable memorable mode."
            ),
            Advice::Words {
                words,
                recommended_words,
            } => write!(
                f,
                "word count {words} cannot reach {MIN_ENTROPY_BITS} bits with \
                 {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letter words. Use words >= {recommended_words}."
            ),
        }
    }
}
