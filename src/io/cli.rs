//! Command-line interface for solving single rebuses and puzzle files

use crate::algorithm::resolver::{Resolver, ResolverConfig};
use crate::analysis::sentence::Sentence;
use crate::io::configuration::{
    BATCH_COMMENT_PREFIX, DEFAULT_IMAGE_LIST_PATH, DEFAULT_MAX_PERMUTATION_LENGTH,
    DEFAULT_WORD_LIST_PATH,
};
use crate::io::corpus::{Corpus, WordCorpus};
use crate::io::error::{Result, WithPath};
use crate::io::lexicon::ImageLexicon;
use crate::io::progress::ProgressManager;
use crate::puzzle::notation::parse_sentence;
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "rebus")]
#[command(author, version, about = "Resolve rebus puzzles into the words they spell")]
/// Command-line arguments for the rebus solver
pub struct Cli {
    /// Newline-delimited dictionary word list
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_WORD_LIST_PATH)]
    pub words: PathBuf,

    /// Image name to word mapping
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_IMAGE_LIST_PATH)]
    pub images: PathBuf,

    /// Longest combined fragment the permutation search accepts
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PERMUTATION_LENGTH)]
    pub max_permutation_length: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Solver operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve clues such as ":dove+sl-d" and print the sentence they form
    Solve {
        /// Clues in rebus notation; separate arguments are joined with spaces.
        /// Quote operands holding '+', '-', parentheses or spaces, e.g.
        /// '"dove-symbol.png"+sl-d'.
        #[arg(required = true, value_name = "CLUE", allow_hyphen_values = true)]
        clues: Vec<String>,
    },

    /// Resolve every sentence in a puzzle file, one per line
    Batch {
        /// Puzzle file; blank lines and lines starting with '#' are skipped
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Report whether words are in the dictionary
    Check {
        /// Words to look up
        #[arg(required = true, value_name = "WORD")]
        words: Vec<String>,
    },
}

impl Cli {
    /// Maximum log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    const fn needs_lexicon(&self) -> bool {
        !matches!(self.command, Command::Check { .. })
    }
}

/// Runs a parsed command against loaded puzzle data
pub struct PuzzleProcessor {
    cli: Cli,
    corpus: WordCorpus,
    lexicon: ImageLexicon,
    config: ResolverConfig,
}

impl PuzzleProcessor {
    /// Load the word list and image lexicon named on the command line
    ///
    /// The lexicon is skipped for commands that do not resolve puzzles.
    ///
    /// # Errors
    ///
    /// Returns an error if a data file cannot be loaded or the permutation
    /// limit is out of range
    pub fn new(cli: Cli) -> Result<Self> {
        let corpus = WordCorpus::load_from_path(&cli.words)?;
        let lexicon = if cli.needs_lexicon() {
            ImageLexicon::load_from_path(&cli.images)?
        } else {
            ImageLexicon::default()
        };
        Self::from_parts(cli, corpus, lexicon)
    }

    /// Build a processor from already loaded data
    ///
    /// # Errors
    ///
    /// Returns an error if the permutation limit is out of range
    pub fn from_parts(cli: Cli, corpus: WordCorpus, lexicon: ImageLexicon) -> Result<Self> {
        let config = ResolverConfig::new(cli.max_permutation_length)?;
        Ok(Self {
            cli,
            corpus,
            lexicon,
            config,
        })
    }

    /// Run the command, writing results to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or output cannot be written
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Run the command, writing results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or output cannot be written
    pub fn process_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Command::Solve { clues } => self.solve(&clues.join(" "), out),
            Command::Batch { file } => self.batch(file, out),
            Command::Check { words } => self.check(words, out),
        }
    }

    fn resolver(&self) -> Resolver<'_, WordCorpus, ImageLexicon> {
        Resolver::new(&self.corpus, &self.lexicon).with_config(self.config)
    }

    fn solve<W: Write>(&self, input: &str, out: &mut W) -> Result<()> {
        let clues = parse_sentence(input)?;
        let sentence = self.resolver().resolve_sentence(&clues)?;

        if self.cli.verbose > 0 {
            for (clue, resolved) in clues.iter().zip(sentence.members()) {
                write_line(
                    out,
                    &format!(
                        "{clue} => {resolved} [{}, score {}]",
                        resolved.strategy(),
                        resolved.score()
                    ),
                )?;
            }
        }

        write_line(out, &format!("{sentence} (score {})", sentence.score()))
    }

    fn batch<W: Write>(&self, file: &Path, out: &mut W) -> Result<()> {
        let contents = std::fs::read_to_string(file).with_path(file, "read puzzle file")?;
        let puzzles: Vec<(usize, &str)> = contents
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with(BATCH_COMMENT_PREFIX))
            .collect();

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(puzzles.len())
        } else {
            ProgressManager::hidden()
        };

        let resolver = self.resolver();
        for (line_number, line) in puzzles {
            match parse_sentence(line).and_then(|clues| resolver.resolve_sentence(&clues)) {
                Ok(sentence) => {
                    progress.solved(&sentence.to_string());
                    write_line(out, &format_sentence(&sentence))?;
                }
                Err(err) => {
                    tracing::warn!(line = line_number, error = %err, "unsolved puzzle");
                    progress.failed();
                    write_line(out, &format!("line {line_number}: {err}"))?;
                }
            }
        }

        progress.finish();
        if progress.failures() > 0 {
            tracing::info!(
                failures = progress.failures(),
                puzzles = progress.position(),
                "batch finished with unsolved puzzles"
            );
        }
        Ok(())
    }

    fn check<W: Write>(&self, words: &[String], out: &mut W) -> Result<()> {
        for word in words {
            let known = self.corpus.contains(&word.to_lowercase());
            write_line(out, &format!("{word}\t{known}"))?;
        }
        Ok(())
    }
}

/// Tab separated phrase and score, as written by batch mode
pub fn format_sentence(sentence: &Sentence) -> String {
    format!("{sentence}\t{}", sentence.score())
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}").with_path(Path::new("<output>"), "write output")
}
