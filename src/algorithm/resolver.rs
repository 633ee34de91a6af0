use crate::{
    algorithm::disambiguation::select_candidate,
    algorithm::interleave::round_robin,
    algorithm::permutation::word_permutations,
    algorithm::reduction::{reduce, reduce_operand},
    analysis::scoring::Score,
    analysis::sentence::Sentence,
    io::configuration::{DEFAULT_MAX_PERMUTATION_LENGTH, PERMUTATION_LENGTH_CEILING},
    io::corpus::Corpus,
    io::error::{RebusError, Result, invalid_parameter},
    io::lexicon::Lexicon,
    puzzle::notation::{Clue, Term},
    puzzle::operand::Operand,
    puzzle::resolved::{Resolved, Strategy},
};

/// Engine parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Longest combined fragment handed to the permutation search
    pub max_permutation_length: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_permutation_length: DEFAULT_MAX_PERMUTATION_LENGTH,
        }
    }
}

impl ResolverConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the permutation limit is zero or above
    /// [`PERMUTATION_LENGTH_CEILING`]
    pub fn new(max_permutation_length: usize) -> Result<Self> {
        if max_permutation_length == 0 || max_permutation_length > PERMUTATION_LENGTH_CEILING {
            return Err(invalid_parameter(
                "max_permutation_length",
                &max_permutation_length,
                &format!("must be between 1 and {PERMUTATION_LENGTH_CEILING}"),
            ));
        }
        Ok(Self {
            max_permutation_length,
        })
    }
}

/// Word resolution engine over an injected corpus and image lexicon
///
/// Holds shared references only, so one resolver can serve any number of
/// resolutions, from several threads if the providers allow it.
#[derive(Debug)]
pub struct Resolver<'a, C: ?Sized, L: ?Sized> {
    corpus: &'a C,
    lexicon: &'a L,
    config: ResolverConfig,
}

impl<C: ?Sized, L: ?Sized> Clone for Resolver<'_, C, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, L: ?Sized> Copy for Resolver<'_, C, L> {}

impl<'a, C, L> Resolver<'a, C, L>
where
    C: Corpus + ?Sized,
    L: Lexicon + ?Sized,
{
    /// Create a resolver with default configuration
    pub fn new(corpus: &'a C, lexicon: &'a L) -> Self {
        Self {
            corpus,
            lexicon,
            config: ResolverConfig::default(),
        }
    }

    /// Replace the engine configuration
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    pub const fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Resolve one rebus
    ///
    /// Multi-meaning images are narrowed by the subtracted letters. With no
    /// image and nothing to add the base is only reduced; otherwise the
    /// reduced base and addition are combined by the first strategy whose
    /// result is a corpus word.
    ///
    /// # Errors
    ///
    /// Returns an error if the image candidates cannot be narrowed, the
    /// permutation search would exceed its limit, or no word is found
    pub fn resolve(
        &self,
        base: impl Into<Operand>,
        add: impl Into<Operand>,
        subtract: impl Into<Operand>,
    ) -> Result<Resolved> {
        let base = base.into();
        let add = add.into();
        let subtract = subtract.into();

        let image_word = self.image_word(&base, &subtract)?;

        if image_word.is_none() && add.is_empty() {
            let score = Score::of(&subtract, self.lexicon).value();
            let word = reduce_operand(&base, &subtract);
            tracing::debug!(base = %base, subtract = %subtract, word = word.as_str(), "reduced");
            return Ok(Resolved::new(word, score, Strategy::Reduction));
        }

        let score = Score::of(&add, self.lexicon) + Score::of(&subtract, self.lexicon);
        let addition = add.letters();
        let word = match image_word {
            Some(image_word) => reduce(image_word, subtract.letters()),
            None => reduce_operand(&base, &subtract),
        };

        let (answer, strategy) = self.combine(&word, addition)?;
        tracing::debug!(
            base = %base,
            add = %add,
            subtract = %subtract,
            answer = answer.as_str(),
            %strategy,
            "resolved"
        );
        Ok(Resolved::new(answer, score, strategy))
    }

    /// Resolve a parsed clue, resolving nested clues first
    ///
    /// # Errors
    ///
    /// Returns the first error met while resolving the clue or its parts
    pub fn resolve_clue(&self, clue: &Clue) -> Result<Resolved> {
        let base = self.term_operand(&clue.base)?;
        let add = match &clue.add {
            Some(term) => self.term_operand(term)?,
            None => Operand::default(),
        };
        let subtract = match &clue.subtract {
            Some(term) => self.term_operand(term)?,
            None => Operand::default(),
        };
        self.resolve(base, add, subtract)
    }

    /// Resolve every clue and compose the answers into a sentence
    ///
    /// # Errors
    ///
    /// Returns the first clue resolution error
    pub fn resolve_sentence(&self, clues: &[Clue]) -> Result<Sentence> {
        clues
            .iter()
            .map(|clue| self.resolve_clue(clue))
            .collect::<Result<Vec<_>>>()
            .map(Sentence::compose)
    }

    /// Find the word formed by combining two reduced fragments
    ///
    /// Tries interleaving and concatenation in both orders before falling
    /// back to the permutation search, whose lexicographically smallest hit
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the permutation search would exceed the configured
    /// length or no corpus word can be formed
    pub fn combine(&self, word: &str, add: &str) -> Result<(String, Strategy)> {
        for strategy in Strategy::DIRECT {
            let candidate = Self::arrange(strategy, word, add);
            if self.corpus.contains(&candidate) {
                return Ok((candidate, strategy));
            }
        }

        let length = word.chars().count() + add.chars().count();
        if length > self.config.max_permutation_length {
            return Err(RebusError::PermutationLimitExceeded {
                length,
                limit: self.config.max_permutation_length,
            });
        }

        tracing::debug!(word, add, length, "falling back to permutation search");
        word_permutations(self.corpus, word, add)
            .into_iter()
            .next()
            .map(|answer| (answer, Strategy::Permutation))
            .ok_or_else(|| RebusError::NoWordFound {
                word: word.to_string(),
                add: add.to_string(),
            })
    }

    /// Score an operand against this resolver's lexicon
    pub fn score(&self, operand: &Operand) -> Score {
        Score::of(operand, self.lexicon)
    }

    fn arrange(strategy: Strategy, word: &str, add: &str) -> String {
        match strategy {
            Strategy::InterleaveAddFirst => round_robin(&[add, word]),
            Strategy::InterleaveWordFirst => round_robin(&[word, add]),
            Strategy::ConcatAddFirst => format!("{add}{word}"),
            Strategy::ConcatWordFirst | Strategy::Reduction | Strategy::Permutation => {
                format!("{word}{add}")
            }
        }
    }

    fn image_word(&self, base: &Operand, subtract: &Operand) -> Result<Option<&'a str>> {
        let Some(key) = base.lexicon_key() else {
            return Ok(None);
        };
        let lexicon: &'a L = self.lexicon;
        match lexicon.lookup(&key) {
            Some(candidates) => select_candidate(&key, candidates, subtract.letters()).map(Some),
            None => Ok(None),
        }
    }

    fn term_operand(&self, term: &Term) -> Result<Operand> {
        match term {
            Term::Literal(text) => Ok(Operand::literal(text)),
            Term::Nested(clue) => self.resolve_clue(clue).map(Operand::Resolved),
        }
    }
}
