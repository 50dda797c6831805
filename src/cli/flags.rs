#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub memorable: bool,
    pub non_memorable: bool,
    pub ignore_security: bool,
    /// `-s` with no count: use the configured word count.
    pub words_default: bool,
    pub words: Option<usize>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub pattern: Option<String>,
    pub seed: Option<String>,
}

impl CliFlags {
    /// Passphrase mode requested in either form.
    pub fn wants_words(&self) -> bool {
        self.words.is_some() || self.words_default
    }

    /// `-c` and `-p` both force pattern mode over `-m`.
    pub fn is_memorable(&self) -> bool {
        self.memorable && !self.non_memorable && self.pattern.is_none()
    }
}
