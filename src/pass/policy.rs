//! Request validation, the entropy floor, and mode routing.

use tracing::debug;

use super::entropy::{self, Estimate, MIN_ENTROPY_BITS, MIN_MEMORABLE_LENGTH};
use super::words::{self, MAX_WORD_LENGTH};
use super::{GenerateOptions, charset, generate};
use crate::rand::RandomSource;
use crate::{Advice, Error, Result};

/// Largest integer a double represents exactly.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Reject malformed requests before any randomness is drawn.
pub fn validate(options: &GenerateOptions) -> Result<()> {
    if options.length as u64 > MAX_SAFE_INTEGER {
        return Err(Error::LengthTooLarge(options.length));
    }
    if let Some(words) = options.words {
        if words == 0 {
            return Err(Error::ZeroWords);
        }
        if words as u64 > MAX_SAFE_INTEGER {
            return Err(Error::WordsTooLarge(words));
        }
        if !options.prefix.is_empty() {
            return Err(Error::PrefixWithWords);
        }
    }
    Ok(())
}

/// Generate from an already validated request.
pub(crate) fn route<R>(options: &GenerateOptions, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let enforce = !options.ignore_security_recommendations;

    if let Some(count) = options.words {
        debug!(words = count, enforce, "passphrase mode");
        if enforce {
            check_words(count)?;
        }
        let target = enforce.then_some(*MIN_MEMORABLE_LENGTH);
        return words::passphrase(rng, count, target);
    }

    if options.memorable {
        debug!(length = options.length, enforce, "memorable mode");
        if enforce {
            let est = log_estimate(entropy::memorable(options.length, &options.prefix));
            if !est.is_secure() {
                return Err(reject(Advice::Memorable {
                    entropy_bits: est.entropy_bits,
                    recommended_length: est.recommended_length.unwrap_or(options.length),
                }));
            }
        }
        return generate::memorable_with_prefix(rng, options.length, &options.prefix);
    }

    let chars = charset::build(&options.pattern)?;
    debug!(
        length = options.length,
        alphabet = chars.len(),
        pattern = %options.pattern,
        enforce,
        "pattern mode"
    );
    if enforce {
        let prefix_len = options.prefix.chars().count();
        let est = log_estimate(entropy::pattern(chars.len(), options.length, prefix_len));
        if !est.is_secure() {
            return Err(reject(Advice::Pattern {
                entropy_bits: est.entropy_bits,
                recommended_length: est.recommended_length,
            }));
        }
    }
    generate::from_charset(rng, &chars, options.length, &options.prefix)
}

/// Passphrases fail only when every word at full length still falls short.
fn check_words(count: usize) -> Result<()> {
    let needed = *MIN_MEMORABLE_LENGTH;
    if count.saturating_mul(MAX_WORD_LENGTH) < needed {
        return Err(reject(Advice::Words {
            words: count,
            recommended_words: needed.div_ceil(MAX_WORD_LENGTH),
        }));
    }
    Ok(())
}

fn log_estimate(est: Estimate) -> Estimate {
    debug!(
        entropy_bits = est.entropy_bits,
        strength = entropy::strength(est.entropy_bits),
        "estimated entropy"
    );
    est
}

fn reject(advice: Advice) -> Error {
    debug!(%advice, floor = MIN_ENTROPY_BITS, "rejected below entropy floor");
    Error::Insecure(advice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pattern;
    use crate::rand::testing::Counting;

    #[test]
    fn validation_order() {
        let too_long = GenerateOptions::default().length((MAX_SAFE_INTEGER + 1) as usize);
        assert!(matches!(validate(&too_long), Err(Error::LengthTooLarge(_))));

        let zero = GenerateOptions::default().words(0);
        assert!(matches!(validate(&zero), Err(Error::ZeroWords)));

        let huge = GenerateOptions::default().words((MAX_SAFE_INTEGER + 1) as usize);
        assert!(matches!(validate(&huge), Err(Error::WordsTooLarge(_))));

        let prefixed = GenerateOptions::default().words(3).prefix("pre-");
        assert!(matches!(validate(&prefixed), Err(Error::PrefixWithWords)));

        assert!(validate(&GenerateOptions::default()).is_ok());
        assert!(validate(&GenerateOptions::default().length(0)).is_ok());
    }

    #[test]
    fn prefix_alone_is_fine_without_words() {
        let opts = GenerateOptions::default().prefix("pre-").length(20);
        assert!(validate(&opts).is_ok());
    }

    #[test]
    fn rejections_draw_no_randomness() {
        let mut rng = Counting::default();
        let weak = GenerateOptions::default()
            .length(8)
            .pattern(Pattern::regex(r"\d").unwrap());
        assert!(matches!(
            route(&weak, &mut rng),
            Err(Error::Insecure(Advice::Pattern {
                recommended_length: Some(20),
                ..
            }))
        ));

        let short = GenerateOptions::default().memorable(true).length(10);
        assert!(matches!(
            route(&short, &mut rng),
            Err(Error::Insecure(Advice::Memorable {
                recommended_length: 19,
                ..
            }))
        ));

        let two = GenerateOptions::default().words(2);
        assert!(matches!(
            route(&two, &mut rng),
            Err(Error::Insecure(Advice::Words {
                words: 2,
                recommended_words: 3
            }))
        ));

        let exhausted = GenerateOptions::default()
            .pattern(Pattern::regex("test").unwrap())
            .ignore_security_recommendations(true);
        assert!(matches!(
            route(&exhausted, &mut rng),
            Err(Error::NoMatchingCharacters(_))
        ));

        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn single_character_alphabet_has_no_recommended_length() {
        let mut rng = Counting::default();
        let opts = GenerateOptions::default()
            .length(100)
            .pattern(Pattern::regex("[~]").unwrap());
        assert!(matches!(
            route(&opts, &mut rng),
            Err(Error::Insecure(Advice::Pattern {
                recommended_length: None,
                ..
            }))
        ));
    }

    #[test]
    fn three_words_pass_the_gate() {
        assert!(check_words(3).is_ok());
        assert!(check_words(2).is_err());
    }
}
