//! Image identifier to candidate word mapping
//!
//! Each row holds an image identifier and a whitespace separated list of
//! the words the image may depict, e.g. `dove_symbol.png,dove peace`.
//! Rows are read as CSV, so either column may be quoted. The column
//! delimiter is not fixed: it is detected from the start of the source by
//! picking the first candidate delimiter that appears on every complete
//! sampled line.

use crate::io::configuration::{CANDIDATE_DELIMITERS, DELIMITER_SNIFF_BYTES};
use crate::io::error::{RebusError, Result, WithPath};
use std::collections::HashMap;
use std::path::Path;

/// Lookup of the candidate words an image identifier denotes
pub trait Lexicon {
    /// Candidate words for `image_id`, in listed order, or `None` if unknown
    ///
    /// Matching is exact, including any image marker prefix.
    fn lookup(&self, image_id: &str) -> Option<&[String]>;
}

/// Immutable image lexicon
#[derive(Debug, Clone, Default)]
pub struct ImageLexicon {
    entries: HashMap<String, Vec<String>>,
}

impl ImageLexicon {
    /// Parse delimited lexicon text, detecting the delimiter
    ///
    /// # Errors
    ///
    /// Returns an error if no delimiter can be detected, or a row does not
    /// hold exactly an image name and its candidate words
    pub fn parse_from_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let delimiter = sniff_delimiter(contents)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());

        let mut entries = HashMap::new();
        for (index, row) in reader.records().enumerate() {
            let record = row.map_err(|err| RebusError::LexiconFormat {
                line: err.position().map_or(index + 1, |position| position.line() as usize),
                reason: err.to_string(),
            })?;
            let line = record.position().map_or(index + 1, |position| position.line() as usize);

            if record.iter().all(str::is_empty) {
                continue;
            }

            let (key, value) = match (record.get(0), record.get(1), record.len()) {
                (Some(key), Some(value), 2) => (key, value),
                (_, _, columns) => {
                    return Err(RebusError::LexiconFormat {
                        line,
                        reason: format!("expected 2 columns separated by {delimiter:?}, found {columns}"),
                    });
                }
            };

            let candidates: Vec<String> = value.split_whitespace().map(str::to_string).collect();
            if key.is_empty() || candidates.is_empty() {
                return Err(RebusError::LexiconFormat {
                    line,
                    reason: "expected an image name and at least one word".to_string(),
                });
            }

            // Later rows replace earlier ones, as in a plain key/value load
            entries.insert(key.to_string(), candidates);
        }

        Ok(Self { entries })
    }

    /// Read and parse a lexicon file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).with_path(path, "read image lexicon")?;
        let lexicon = Self::parse_from_str(&data)?;
        tracing::info!(path = %path.display(), images = lexicon.len(), "loaded image lexicon");
        Ok(lexicon)
    }

    /// Number of image identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ImageLexicon
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| {
                let candidates = value
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                (key.into(), candidates)
            })
            .collect();
        Self { entries }
    }
}

impl Lexicon for ImageLexicon {
    fn lookup(&self, image_id: &str) -> Option<&[String]> {
        self.entries.get(image_id).map(Vec::as_slice)
    }
}

impl Lexicon for HashMap<String, Vec<String>> {
    fn lookup(&self, image_id: &str) -> Option<&[String]> {
        self.get(image_id).map(Vec::as_slice)
    }
}

/// Detect the column delimiter from the leading sample of `contents`
///
/// Only complete lines of the sample are considered, unless the sample
/// holds a single line. The first candidate found on every line wins;
/// failing that, the candidate found on the most lines.
///
/// # Errors
///
/// Returns an error if no candidate delimiter appears in the sample
pub fn sniff_delimiter(contents: &str) -> Result<char> {
    let mut end = contents.len().min(DELIMITER_SNIFF_BYTES);
    while !contents.is_char_boundary(end) {
        end -= 1;
    }
    let sample = contents.get(..end).unwrap_or(contents);
    let truncated = end < contents.len();

    let mut lines: Vec<&str> = sample
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if truncated && lines.len() > 1 && !sample.ends_with('\n') {
        lines.pop();
    }

    let coverage = |delimiter: char| lines.iter().filter(|line| line.contains(delimiter)).count();

    // Rows missing the delimiter are left for the parser to report by line
    CANDIDATE_DELIMITERS
        .into_iter()
        .find(|&delimiter| !lines.is_empty() && coverage(delimiter) == lines.len())
        .or_else(|| {
            CANDIDATE_DELIMITERS
                .into_iter()
                .rev()
                .filter(|&delimiter| coverage(delimiter) > 0)
                .max_by_key(|&delimiter| coverage(delimiter))
        })
        .ok_or_else(|| RebusError::LexiconFormat {
            line: 1,
            reason: "could not detect a column delimiter".to_string(),
        })
}
