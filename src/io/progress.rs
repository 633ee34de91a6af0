//! Progress display for batch puzzle files

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Puzzles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks solved lines of a batch file
///
/// A hidden bar is used when progress output is suppressed, so callers
/// report progress the same way either way.
pub struct ProgressManager {
    bar: ProgressBar,
    failures: usize,
}

impl ProgressManager {
    /// Create a visible progress bar over `total` puzzles
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, failures: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            failures: 0,
        }
    }

    /// Record a solved puzzle
    pub fn solved(&self, phrase: &str) {
        self.bar.set_message(phrase.to_string());
        self.bar.inc(1);
    }

    /// Record a puzzle that could not be solved
    pub fn failed(&mut self) {
        self.failures += 1;
        self.bar.set_message(format!("{} failed", self.failures));
        self.bar.inc(1);
    }

    /// Number of failed puzzles so far
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Number of puzzles processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
