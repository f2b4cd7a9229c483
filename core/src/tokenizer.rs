use crate::error::{Result, SearchError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // ASCII letters plus the Croatian diacritics, matched after lower-casing.
    static ref RE: Regex = Regex::new(r"[a-zšđžčć]+").expect("valid regex");
}

/// Exact-match set of words excluded from indexing and querying.
///
/// Entries are stored in Unicode NFC, the form `tokenize` compares tokens in. Case is kept
/// as given.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Read a newline-delimited stop-word list. Lines are taken verbatim apart from
    /// their terminators and NFC composition.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SearchError::Config {
            path: path.to_path_buf(),
            reason: format!("cannot read stop-word list: {e}"),
        })?;
        Ok(text.lines().collect())
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                w.nfc().collect::<String>()
            })
            .collect();
        Self { words }
    }
}

/// Tokenize text using NFC normalization, lowercase, alphabet filtering and stop-word removal.
/// Order and duplicates are preserved.
pub fn tokenize(text: &str, stopwords: &StopWords) -> Vec<String> {
    let normalized = text.nfc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|token| !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}
