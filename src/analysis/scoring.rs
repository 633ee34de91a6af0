//! Puzzle difficulty scoring
//!
//! Every letter a solver has to add or take away makes a rebus harder, and
//! consonants more so than vowels. Images carry no letter cost, and neither
//! does a value that was already scored when it was resolved, so nesting a
//! resolved word inside another rebus never counts it twice.

use crate::io::configuration::{CONSONANT_COST, VOWEL_COST, VOWELS};
use crate::io::lexicon::Lexicon;
use crate::puzzle::operand::Operand;
use std::ops::Add;

/// Cost of a single character
pub fn letter_cost(letter: char) -> u32 {
    if VOWELS.contains(&letter) {
        VOWEL_COST
    } else {
        CONSONANT_COST
    }
}

/// Sum of character costs of plain text
pub fn text_cost(text: &str) -> u32 {
    text.chars().map(letter_cost).sum()
}

/// Scored text and its difficulty cost
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Score {
    text: String,
    value: u32,
}

impl Score {
    /// Score an operand
    ///
    /// Resolved values, image-marked literals and literals naming a lexicon
    /// image score zero. Anything else costs its letters.
    pub fn of<L: Lexicon + ?Sized>(operand: &Operand, lexicon: &L) -> Self {
        let value = match operand {
            Operand::Resolved(_) | Operand::Literal { image_marked: true, .. } => 0,
            Operand::Literal { text, .. } if lexicon.lookup(text).is_some() => 0,
            Operand::Literal { text, .. } => text_cost(text),
        };

        Self {
            text: operand.letters().to_string(),
            value,
        }
    }

    /// Score plain text with no image lexicon in play
    pub fn of_text(text: &str) -> Self {
        let operand = Operand::literal(text);
        let value = if operand.is_image_marked() {
            0
        } else {
            text_cost(text)
        };

        Self {
            text: operand.letters().to_string(),
            value,
        }
    }

    /// Text that was scored, without image marker
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Difficulty cost
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl Add for Score {
    type Output = u32;

    fn add(self, other: Self) -> u32 {
        self.value + other.value
    }
}

impl Add for &Score {
    type Output = u32;

    fn add(self, other: Self) -> u32 {
        self.value + other.value
    }
}
