//! Single-character membership predicates.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::Result;

type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Decides whether one character belongs to the password alphabet.
///
/// Either a regular expression tested against the character on its own, or
/// an arbitrary predicate. Patterns are matched per character, never against
/// the whole password, so `test` matches nothing while `[test]` matches three
/// letters.
#[derive(Clone)]
pub struct Pattern {
    kind: Kind,
}

#[derive(Clone)]
enum Kind {
    Regex(Regex),
    Predicate { name: String, test: Predicate },
}

impl Pattern {
    /// Compile `expr` as a regular expression.
    pub fn regex(expr: &str) -> Result<Self> {
        Ok(Self::from(Regex::new(expr)?))
    }

    /// Wrap a predicate. `name` is what error messages show.
    pub fn from_fn<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: Kind::Predicate {
                name: name.into(),
                test: Arc::new(test),
            },
        }
    }

    /// ASCII word characters, `[A-Za-z0-9_]`.
    pub fn word() -> Self {
        Self::from_fn(r"\w", |c| c.is_ascii_alphanumeric() || c == '_')
    }

    pub fn matches(&self, c: char) -> bool {
        match &self.kind {
            Kind::Regex(re) => {
                let mut buf = [0u8; 4];
                re.is_match(c.encode_utf8(&mut buf))
            }
            Kind::Predicate { test, .. } => test(c),
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::word()
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self {
            kind: Kind::Regex(re),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Regex(re) => write!(f, "/{}/", re.as_str()),
            Kind::Predicate { name, .. } => write!(f, "/{name}/"),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_is_word_class() {
        let p = Pattern::default();
        assert!(p.matches('a') && p.matches('Z') && p.matches('7') && p.matches('_'));
        assert!(!p.matches('-') && !p.matches('~'));
        assert_eq!(p.to_string(), r"/\w/");
    }

    #[test]
    fn regex_matches_single_characters() {
        let p = Pattern::regex("[Aa]").unwrap();
        assert!(p.matches('A') && p.matches('a'));
        assert!(!p.matches('b'));

        let whole_word = Pattern::regex("test").unwrap();
        assert!(!whole_word.matches('t'));
    }

    #[test]
    fn malformed_regex_is_an_error() {
        assert!(matches!(Pattern::regex("[a-"), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn predicates_are_shown_by_name() {
        let p = Pattern::from_fn("hex", |c| c.is_ascii_hexdigit());
        assert!(p.matches('f') && !p.matches('g'));
        assert_eq!(format!("{p:?}"), "Pattern(/hex/)");
    }
}
