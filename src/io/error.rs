//! Error types and context management for rebus resolution

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all resolution and loading operations
#[derive(Debug)]
pub enum RebusError {
    /// No combination strategy produced a corpus word
    NoWordFound {
        /// Reduced base fragment
        word: String,
        /// Reduced addition fragment
        add: String,
    },

    /// Every candidate of a multi-word image was filtered out
    ///
    /// Occurs when none of the candidates contains all of the
    /// letters being subtracted.
    AmbiguousImageUnresolved {
        /// Image identifier as looked up
        image: String,
        /// De-duplicated subtraction letters used as the filter
        letters: String,
        /// Candidates listed for the image
        candidates: Vec<String>,
    },

    /// Combined fragment too long for the permutation search
    PermutationLimitExceeded {
        /// Combined length of base and addition fragments
        length: usize,
        /// Configured maximum length
        limit: usize,
    },

    /// Rebus notation could not be parsed
    InvalidNotation {
        /// Text being parsed
        input: String,
        /// Byte offset of the failure
        position: usize,
        /// Explanation of what was expected
        reason: String,
    },

    /// Image lexicon source is malformed
    LexiconFormat {
        /// One-based line number of the offending row
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RebusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordFound { word, add } => {
                write!(f, "No word found combining '{word}' with '{add}'")
            }
            Self::AmbiguousImageUnresolved {
                image,
                letters,
                candidates,
            } => {
                write!(
                    f,
                    "Image '{image}' has no candidate containing '{letters}' (candidates: {})",
                    candidates.join(", ")
                )
            }
            Self::PermutationLimitExceeded { length, limit } => {
                write!(
                    f,
                    "Permutation search over {length} letters exceeds the limit of {limit}"
                )
            }
            Self::InvalidNotation {
                input,
                position,
                reason,
            } => {
                write!(f, "Invalid rebus '{input}' at offset {position}: {reason}")
            }
            Self::LexiconFormat { line, reason } => {
                write!(f, "Invalid image lexicon at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for RebusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rebus results
pub type Result<T> = std::result::Result<T, RebusError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`RebusError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation recorded
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| RebusError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for RebusError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RebusError {
    RebusError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a notation error at the given byte offset
pub fn invalid_notation(input: &str, position: usize, reason: &impl ToString) -> RebusError {
    RebusError::InvalidNotation {
        input: input.to_string(),
        position,
        reason: reason.to_string(),
    }
}
