//! One-line notation for nested rebus clues
//!
//! ```text
//! clue    := term ('+' term)? ('-' term)?
//! term    := '(' clue ')' | '"' quoted '"' | literal
//! literal := characters other than whitespace, '+', '-', '(', ')', '"'
//! quoted  := characters other than '"'
//! ```
//!
//! Quoting lets an image name hold operator characters, as in
//! `"dove-symbol.png"+sl-d`.
//!
//! `:dove + (:castle - :cat) - (:badge - :bag)` reads as "dove, plus what is
//! left of castle without cat, minus what is left of badge without bag".
//! A sentence is a whitespace separated sequence of clues.

use crate::io::error::{Result, invalid_notation};
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Operand position of a clue
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// Literal text as written, image marker included
    Literal(String),
    /// Parenthesised clue resolved before use
    Nested(Box<Clue>),
}

/// Base with optional addition and subtraction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    /// Image or letters the answer starts from
    pub base: Term,
    /// Fragment combined into the base
    pub add: Option<Term>,
    /// Letters removed from the base
    pub subtract: Option<Term>,
}

impl Clue {
    /// Parse a single clue
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not exactly one well-formed clue
    pub fn parse(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        cursor.skip_whitespace();
        let clue = cursor.clue()?;
        cursor.skip_whitespace();
        match cursor.peek() {
            None => Ok(clue),
            Some((position, ch)) => Err(invalid_notation(
                input,
                position,
                &format!("unexpected '{ch}' after clue"),
            )),
        }
    }
}

/// Parse a whitespace separated sequence of clues
///
/// # Errors
///
/// Returns an error if any clue is malformed or the input holds no clue
pub fn parse_sentence(input: &str) -> Result<Vec<Clue>> {
    let mut cursor = Cursor::new(input);
    let mut clues = Vec::new();

    cursor.skip_whitespace();
    while cursor.peek().is_some() {
        clues.push(cursor.clue()?);
        cursor.skip_whitespace();
    }

    if clues.is_empty() {
        return Err(invalid_notation(input, 0, &"expected at least one clue"));
    }
    Ok(clues)
}

const QUOTE: char = '"';

fn is_literal_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '+' | '-' | '(' | ')' | QUOTE)
}

struct Cursor<'s> {
    input: &'s str,
    chars: Peekable<CharIndices<'s>>,
}

impl<'s> Cursor<'s> {
    fn new(input: &'s str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn offset(&mut self) -> usize {
        self.peek().map_or(self.input.len(), |(position, _)| position)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
    }

    /// Consume `expected` after optional whitespace; the cursor is untouched otherwise
    fn eat_operator(&mut self, expected: char) -> bool {
        let mut lookahead = self.chars.clone();
        while lookahead.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
        if lookahead.next_if(|&(_, ch)| ch == expected).is_some() {
            self.chars = lookahead;
            self.skip_whitespace();
            true
        } else {
            false
        }
    }

    fn clue(&mut self) -> Result<Clue> {
        let base = self.term()?;
        let add = if self.eat_operator('+') {
            Some(self.term()?)
        } else {
            None
        };
        let subtract = if self.eat_operator('-') {
            Some(self.term()?)
        } else {
            None
        };
        Ok(Clue {
            base,
            add,
            subtract,
        })
    }

    fn term(&mut self) -> Result<Term> {
        if self.chars.next_if(|&(_, ch)| ch == '(').is_some() {
            self.skip_whitespace();
            let clue = self.clue()?;
            self.skip_whitespace();
            return match self.chars.next() {
                Some((_, ')')) => Ok(Term::Nested(Box::new(clue))),
                Some((position, ch)) => Err(invalid_notation(
                    self.input,
                    position,
                    &format!("expected ')' but found '{ch}'"),
                )),
                None => Err(invalid_notation(
                    self.input,
                    self.input.len(),
                    &"unclosed '('",
                )),
            };
        }

        if let Some((open, _)) = self.chars.next_if(|&(_, ch)| ch == QUOTE) {
            return self.quoted(open);
        }

        let start = self.offset();
        while self.chars.next_if(|&(_, ch)| is_literal_char(ch)).is_some() {}
        let end = self.offset();

        match self.input.get(start..end) {
            Some(literal) if !literal.is_empty() => Ok(Term::Literal(literal.to_string())),
            _ => Err(invalid_notation(self.input, start, &"expected an operand")),
        }
    }

    /// Read a quoted literal whose opening quote sits at `open`
    fn quoted(&mut self, open: usize) -> Result<Term> {
        let start = open + QUOTE.len_utf8();
        while self.chars.next_if(|&(_, ch)| ch != QUOTE).is_some() {}
        let end = self.offset();

        if self.chars.next().is_none() {
            return Err(invalid_notation(self.input, open, &"unclosed '\"'"));
        }
        match self.input.get(start..end) {
            Some(literal) if !literal.is_empty() => Ok(Term::Literal(literal.to_string())),
            _ => Err(invalid_notation(self.input, open, &"empty quoted operand")),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) if text.is_empty() || !text.chars().all(is_literal_char) => {
                write!(f, "{QUOTE}{text}{QUOTE}")
            }
            Self::Literal(text) => f.write_str(text),
            Self::Nested(clue) => write!(f, "({clue})"),
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(add) = &self.add {
            write!(f, "+{add}")?;
        }
        if let Some(subtract) = &self.subtract {
            write!(f, "-{subtract}")?;
        }
        Ok(())
    }
}
