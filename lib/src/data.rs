use std::collections::HashSet;
use std::io::BufRead;
use std::io::Result;
use std::ops::Deref;
use std::sync::Arc;

/// The word list that puzzles are generated from and judged against.
///
/// Words are stored lowercase as `Arc<str>` so they can be shared cheaply
/// with the [`Puzzle`](crate::Puzzle)s built from them. Duplicates are
/// removed, but the first-seen order of the input is preserved: generation
/// shuffles the corpus with a seeded rng, so a reproducible iteration order
/// is what makes a fixed seed yield the same puzzle on every run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Arc<str>>,
}

impl Corpus {
    /// Constructs a `Corpus` by reading words from the given reader, one word
    /// per line.
    ///
    /// Each line is trimmed and converted to lower case. Tokens shorter than
    /// two characters or containing anything other than ASCII letters are
    /// skipped.
    ///
    /// ```
    /// use starweave::Corpus;
    /// use std::io::Cursor;
    ///
    /// let mut cursor = Cursor::new("Apple\nbanana\n\nx\ncafé\n");
    /// let corpus = Corpus::from_reader(&mut cursor).unwrap();
    ///
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self> {
        let mut words = Vec::new();
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim().to_lowercase();
            if !is_clean(&word) {
                continue;
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if seen.insert(Arc::clone(&word)) {
                words.push(word);
            }
        }
        Ok(Corpus { words })
    }

    /// Constructs a `Corpus` from the given words, applying the same
    /// normalization as [`Corpus::from_reader`].
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut cleaned = Vec::new();
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !is_clean(&word) {
                continue;
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if seen.insert(Arc::clone(&word)) {
                cleaned.push(word);
            }
        }
        Corpus { words: cleaned }
    }

    /// Returns the number of words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff the corpus has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` iff the given word is in the corpus. The word must
    /// already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|known| known.as_ref() == word)
    }
}

impl Deref for Corpus {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

fn is_clean(word: &str) -> bool {
    word.len() >= 2 && word.chars().all(|ch| ch.is_ascii_lowercase())
}
