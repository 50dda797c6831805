//! Generation request.

use super::Pattern;

/// Length used when none is given.
pub const DEFAULT_LENGTH: usize = 12;

/// Everything one generation call needs. Built per call and not retained.
///
/// Exactly one mode applies: passphrase mode when `words` is set, otherwise
/// memorable mode when `memorable` is true, otherwise pattern mode.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Total characters including the prefix. Ignored in passphrase mode.
    pub length: usize,
    pub memorable: bool,
    /// Alphabet for pattern mode.
    pub pattern: Pattern,
    /// Literal text the result starts with. Counts toward `length`.
    pub prefix: String,
    pub ignore_security_recommendations: bool,
    /// Seed for a repeatable stream instead of OS randomness.
    pub entropy: Option<Vec<u8>>,
    /// Word count for passphrase mode.
    pub words: Option<usize>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            memorable: false,
            pattern: Pattern::default(),
            prefix: String::new(),
            ignore_security_recommendations: false,
            entropy: None,
            words: None,
        }
    }
}

impl GenerateOptions {
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn memorable(mut self, memorable: bool) -> Self {
        self.memorable = memorable;
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn ignore_security_recommendations(mut self, ignore: bool) -> Self {
        self.ignore_security_recommendations = ignore;
        self
    }

    /// Seed from bytes or a string's UTF-8 encoding.
    pub fn with_seed(mut self, seed: impl AsRef<[u8]>) -> Self {
        self.entropy = Some(seed.as_ref().to_vec());
        self
    }

    pub fn words(mut self, words: usize) -> Self {
        self.words = Some(words);
        self
    }
}
