/// Command-line parsing and command execution
pub mod cli;
/// Notation, scoring and data-file constants
pub mod configuration;
/// Dictionary word list loading and membership
pub mod corpus;
/// Error types shared by the whole crate
pub mod error;
/// Image name to candidate word mapping
pub mod lexicon;
/// Batch progress display
pub mod progress;
