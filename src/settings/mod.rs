//! CLI defaults.

mod file;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub length: usize,
    pub memorable_length: usize,
    pub words: usize,
    pub number: usize,
}

impl Settings {
    /// Defaults overlaid with the settings file, if one exists.
    pub fn load() -> Self {
        let mut settings = Settings::default();
        file::load(&mut settings);
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            memorable_length: 20,
            words: 3,
            number: 1,
        }
    }
}
