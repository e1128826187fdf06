use crate::data::Corpus;
use crate::rules;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;
use std::result::Result;
use std::sync::Arc;

/// Indicates that a set of puzzle letters violates the puzzle contract.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PuzzleError {
    /// The same letter appears more than once.
    DuplicateLetter(char),
    /// A letter is not an ASCII lowercase letter.
    NotLowercase(char),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::DuplicateLetter(letter) => {
                write!(f, "puzzle letter '{}' appears more than once", letter)
            }
            PuzzleError::NotLowercase(letter) => {
                write!(f, "puzzle letter '{}' is not a lowercase ASCII letter", letter)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// A generated puzzle: seven letters, the words they admit, and the maximum
/// achievable score.
///
/// A `Puzzle` is immutable once constructed. All words are drawn from the
/// [`Corpus`] it was built from, every allowed word contains the required
/// letter and uses only puzzle letters, and `max_score` is always the sum of
/// the scores of the allowed words; these invariants hold by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    letters: [char; 7],
    allowed_words: HashSet<Arc<str>>,
    starweaves: HashSet<Arc<str>>,
    max_score: u32,
}

impl Puzzle {
    /// Builds the puzzle defined by the given letters, judging every corpus
    /// word against them.
    ///
    /// `letters[0]` is the required (center) letter; the other six are the
    /// ring, whose order is cosmetic. All seven must be distinct ASCII
    /// lowercase letters.
    ///
    /// This accepts any qualifying letters, however unproductive; use
    /// [`generate`](crate::generate) to search for a puzzle with a guaranteed
    /// minimum number of answers.
    pub fn from_letters(
        letters: [char; 7],
        corpus: &Corpus,
        min_len: usize,
    ) -> Result<Puzzle, PuzzleError> {
        let mut seven = HashSet::with_capacity(7);
        for letter in letters {
            if !letter.is_ascii_lowercase() {
                return Err(PuzzleError::NotLowercase(letter));
            }
            if !seven.insert(letter) {
                return Err(PuzzleError::DuplicateLetter(letter));
            }
        }
        let required = letters[0];

        let allowed_words: HashSet<Arc<str>> = corpus
            .par_iter()
            .filter(|word| rules::is_valid_for_puzzle(word, &seven, required, min_len))
            .map(Arc::clone)
            .collect();
        let starweaves: HashSet<Arc<str>> = allowed_words
            .iter()
            .filter(|word| rules::is_starweave(word, &seven))
            .map(Arc::clone)
            .collect();
        let max_score = allowed_words
            .iter()
            .map(|word| rules::score(word, starweaves.contains(word)))
            .sum();

        Ok(Puzzle {
            letters,
            allowed_words,
            starweaves,
            max_score,
        })
    }

    /// The seven puzzle letters. Index 0 is the required (center) letter.
    pub fn letters(&self) -> &[char; 7] {
        &self.letters
    }

    /// The letter every accepted word must contain.
    pub fn required_letter(&self) -> char {
        self.letters[0]
    }

    /// The six non-required letters. Their order is display-only.
    pub fn ring_letters(&self) -> &[char] {
        &self.letters[1..]
    }

    /// The seven letters as a set, in the form the [`rules`] functions take.
    pub fn letter_set(&self) -> HashSet<char> {
        self.letters.iter().copied().collect()
    }

    /// Every corpus word that is a valid answer for this puzzle.
    pub fn allowed_words(&self) -> &HashSet<Arc<str>> {
        &self.allowed_words
    }

    /// The allowed words that use all seven letters at least once.
    pub fn starweaves(&self) -> &HashSet<Arc<str>> {
        &self.starweaves
    }

    /// Older name for [`Puzzle::starweaves`].
    #[deprecated(since = "0.3.0", note = "use `starweaves` instead")]
    pub fn pangrams(&self) -> &HashSet<Arc<str>> {
        &self.starweaves
    }

    /// The sum of the scores of all allowed words.
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Judges a player submission, returning its score if it is an accepted
    /// answer.
    ///
    /// The submission must already be lowercase. Returns `None` for anything
    /// that is not in [`Puzzle::allowed_words`].
    pub fn judge(&self, word: &str) -> Option<u32> {
        if !self.allowed_words.contains(word) {
            return None;
        }
        Some(rules::score(word, self.starweaves.contains(word)))
    }
}
