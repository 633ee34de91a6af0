use crate::puzzle::resolved::Resolved;
use std::fmt;

/// Ordered phrase of resolved words with a total difficulty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    members: Vec<Resolved>,
    score: u32,
}

impl Sentence {
    /// Compose resolved words in order, totalling their scores once
    pub fn compose<I: IntoIterator<Item = Resolved>>(members: I) -> Self {
        let members: Vec<Resolved> = members.into_iter().collect();
        let score = members.iter().map(Resolved::score).sum();
        Self { members, score }
    }

    /// Total difficulty of all members
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Members in display order
    pub fn members(&self) -> &[Resolved] {
        &self.members
    }

    /// Words in display order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(Resolved::word)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the sentence has no words
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Resolved> for Sentence {
    fn from_iter<I: IntoIterator<Item = Resolved>>(iter: I) -> Self {
        Self::compose(iter)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}
