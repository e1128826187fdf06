use crate::data::Corpus;
use crate::puzzle::Puzzle;
use crate::rules;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;

/// Tuning knobs for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// The minimum number of allowed words a configuration must admit to be
    /// accepted.
    pub min_answers: usize,
    /// The maximum number of candidate words to try before giving up.
    pub max_tries: usize,
    /// The minimum accepted word length.
    pub min_len: usize,
}

impl Default for GeneratorOptions {
    fn default() -> GeneratorOptions {
        GeneratorOptions {
            min_answers: 20,
            max_tries: 2000,
            min_len: rules::DEFAULT_MIN_LEN,
        }
    }
}

/// Derives the seed for the daily puzzle from a calendar date.
///
/// The derivation is fixed and portable: `year * 10_000 + month * 100 + day`,
/// reinterpreted as a `u64`. Distinct days always produce distinct seeds. The
/// library never reads the clock itself; callers wanting a daily puzzle pass
/// today's date here and hand the result to [`generate`].
pub fn daily_seed(year: i32, month: u32, day: u32) -> u64 {
    (year as i64 * 10_000 + month as i64 * 100 + day as i64) as u64
}

/// Searches the corpus for a puzzle admitting at least
/// `options.min_answers` words.
///
/// Candidate words are those with exactly seven distinct letters (the word
/// may be longer; only the distinct-letter count matters). They are shuffled
/// with an rng seeded from `seed` and at most `options.max_tries` of them are
/// tried. For each candidate, every letter of its set is tried as the center
/// in lexicographic order, and the first configuration admitting enough
/// words is returned: this is first-fit acceptance, not an optimal search,
/// which keeps generation fast and retries cheap.
///
/// The same corpus and seed always produce the same puzzle.
///
/// Returns `None` when no tried configuration reaches `min_answers`. That is
/// an expected outcome for small or unproductive corpora; callers may retry
/// with another seed or relaxed options.
pub fn generate(corpus: &Corpus, seed: u64, options: &GeneratorOptions) -> Option<Puzzle> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut candidates: Vec<&Arc<str>> = corpus
        .iter()
        .filter(|word| {
            let distinct: HashSet<char> = word.chars().collect();
            distinct.len() == 7
        })
        .collect();
    debug!(
        "{} of {} corpus words are candidate letter sets",
        candidates.len(),
        corpus.len()
    );
    candidates.shuffle(&mut rng);
    candidates.truncate(options.max_tries);

    for candidate in candidates {
        let mut sorted: Vec<char> = candidate
            .chars()
            .collect::<HashSet<char>>()
            .into_iter()
            .collect();
        sorted.sort_unstable();

        // Centers are tried smallest-letter first so a fixed letter set
        // always resolves to the same configuration.
        for (index, center) in sorted.iter().enumerate() {
            let mut letters = ['\0'; 7];
            letters[0] = *center;
            let mut at = 1;
            for (other_index, other) in sorted.iter().enumerate() {
                if other_index != index {
                    letters[at] = *other;
                    at += 1;
                }
            }

            // Letters come from a normalized corpus word, so construction
            // cannot fail; skip rather than panic if it somehow does.
            let Ok(puzzle) = Puzzle::from_letters(letters, corpus, options.min_len) else {
                continue;
            };
            if puzzle.allowed_words().len() >= options.min_answers {
                debug!(
                    "accepted candidate '{}' with center '{}': {} answers, {} starweaves, max score {}",
                    candidate,
                    center,
                    puzzle.allowed_words().len(),
                    puzzle.starweaves().len(),
                    puzzle.max_score()
                );
                return Some(puzzle);
            }
        }
    }
    debug!("no configuration reached {} answers", options.min_answers);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_seed_is_the_documented_date_number() {
        assert_eq!(daily_seed(2024, 1, 15), 20_240_115);
        assert_eq!(daily_seed(2026, 8, 27), 20_260_827);
    }

    #[test]
    fn daily_seed_distinguishes_adjacent_days() {
        assert_ne!(daily_seed(2024, 2, 29), daily_seed(2024, 3, 1));
    }

    #[test]
    fn default_options_match_the_baseline() {
        let options = GeneratorOptions::default();

        assert_eq!(options.min_answers, 20);
        assert_eq!(options.max_tries, 2000);
        assert_eq!(options.min_len, 4);
    }
}
