//! Dictionary word list used to validate candidate answers
//!
//! The backing file is a newline-delimited list. Every line is trimmed and
//! lowercased; blank lines are skipped. Parsing from an in-memory string is
//! kept separate from file loading so callers can embed their own lists.

use crate::io::error::{Result, WithPath};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Membership query over valid dictionary words
pub trait Corpus {
    /// Check whether `word` is a valid answer
    fn contains(&self, word: &str) -> bool;
}

/// Immutable set of lowercase dictionary words
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    words: HashSet<String>,
}

impl WordCorpus {
    /// Parse a newline-delimited word list
    pub fn parse_from_str(contents: &str) -> Self {
        contents.lines().collect()
    }

    /// Read and parse a word list file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).with_path(path, "read word list")?;
        let corpus = Self::parse_from_str(&data);
        tracing::info!(path = %path.display(), words = corpus.len(), "loaded word corpus");
        Ok(corpus)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordCorpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

impl Corpus for WordCorpus {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Corpus for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        Self::contains(self, word)
    }
}

impl Corpus for HashSet<&str> {
    fn contains(&self, word: &str) -> bool {
        Self::contains(self, word)
    }
}

impl Corpus for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        Self::contains(self, word)
    }
}
