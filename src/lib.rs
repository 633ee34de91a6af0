//! Rebus puzzle solver: derives the word a picture-and-letters puzzle spells
//!
//! A rebus starts from an image or some letters, adds a fragment and takes
//! letters away. The solver reduces the fragments, searches the ways they
//! can be combined for a dictionary word, and scores how hard the puzzle is.

#![forbid(unsafe_code)]

/// Word resolution: letter reduction, combination strategies and image disambiguation
pub mod algorithm;
/// Difficulty scoring and sentence composition
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Operands, resolved values and clue notation
pub mod puzzle;

pub use algorithm::resolver::{Resolver, ResolverConfig};
pub use analysis::{scoring::Score, sentence::Sentence};
pub use io::corpus::{Corpus, WordCorpus};
pub use io::error::{RebusError, Result};
pub use io::lexicon::{ImageLexicon, Lexicon};
pub use puzzle::{
    operand::Operand,
    resolved::{Resolved, Strategy},
};
