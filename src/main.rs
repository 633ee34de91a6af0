//! CLI entry point for the rebus solver

use clap::Parser;
use rebus::io::cli::{Cli, PuzzleProcessor};

fn main() -> rebus::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let processor = PuzzleProcessor::new(cli)?;
    processor.process()
}
