//! Passwords and passphrases from a secure or seeded byte stream.
//!
//! Three modes, chosen per request:
//!
//! - **pattern**: characters drawn uniformly from the printable ASCII
//!   characters a [`Pattern`] accepts;
//! - **memorable**: lowercase letters strictly alternating consonant and vowel;
//! - **passphrase**: space-separated memorable words of three to seven letters.
//!
//! Requests estimated below 64 bits of entropy are refused with
//! [`Error::Insecure`] unless `ignore_security_recommendations` is set.
//!
//! ```no_run
//! use password_generator::{GenerateOptions, generate_with_options};
//!
//! let password = generate_with_options(&GenerateOptions::default().length(16))?;
//! let phrase = generate_with_options(&GenerateOptions::default().words(4))?;
//! # Ok::<(), password_generator::Error>(())
//! ```

mod error;
pub mod pass;
pub mod rand;

pub use error::{Advice, Error, Result};
pub use pass::{DEFAULT_LENGTH, GenerateOptions, Pattern};
pub use rand::{OsRandom, RandomSource, SeededRandom};

/// Positional form of [`generate_with_options`] with the security policy on.
pub fn generate(length: usize, memorable: bool, pattern: Pattern, prefix: &str) -> Result<String> {
    generate_with_options(&GenerateOptions {
        length,
        memorable,
        pattern,
        prefix: prefix.to_owned(),
        ..Default::default()
    })
}

/// Generate from OS randomness, or from a [`SeededRandom`] stream when
/// `options.entropy` is set.
pub fn generate_with_options(options: &GenerateOptions) -> Result<String> {
    pass::policy::validate(options)?;
    match &options.entropy {
        Some(seed) => pass::policy::route(options, &mut SeededRandom::new(seed)?),
        None => pass::policy::route(options, &mut OsRandom),
    }
}

/// Generate with a caller-supplied source. `options.entropy` is ignored.
pub fn generate_with_source<R>(options: &GenerateOptions, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    pass::policy::validate(options)?;
    pass::policy::route(options, rng)
}
