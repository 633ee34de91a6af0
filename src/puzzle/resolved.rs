use std::fmt;

/// How a resolved word was formed from its fragments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Letters removed from the base, nothing added
    Reduction,
    /// Characters alternated starting with the addition
    InterleaveAddFirst,
    /// Characters alternated starting with the base
    InterleaveWordFirst,
    /// Addition followed by base
    ConcatAddFirst,
    /// Base followed by addition
    ConcatWordFirst,
    /// Rearrangement found by exhaustive permutation search
    Permutation,
}

impl Strategy {
    /// Direct strategies in the order they are attempted
    pub const DIRECT: [Self; 4] = [
        Self::InterleaveAddFirst,
        Self::InterleaveWordFirst,
        Self::ConcatAddFirst,
        Self::ConcatWordFirst,
    ];

    /// Short stable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reduction => "reduction",
            Self::InterleaveAddFirst => "interleave-add-first",
            Self::InterleaveWordFirst => "interleave-word-first",
            Self::ConcatAddFirst => "concat-add-first",
            Self::ConcatWordFirst => "concat-word-first",
            Self::Permutation => "permutation",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Answer word of one rebus with its accumulated difficulty
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    word: String,
    score: u32,
    strategy: Strategy,
}

impl Resolved {
    /// Create a resolved value
    pub fn new(word: impl Into<String>, score: u32, strategy: Strategy) -> Self {
        Self {
            word: word.into(),
            score,
            strategy,
        }
    }

    /// Final answer word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Accumulated difficulty score
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Strategy that produced the word
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}
