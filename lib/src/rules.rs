//! The pure decision rules shared by puzzle generation and live judging.
//!
//! These functions are stateless and never allocate. Callers must normalize
//! words to lowercase before calling; the rules do not re-validate corpus
//! hygiene.

use std::collections::HashSet;

/// The baseline minimum word length accepted by a puzzle.
pub const DEFAULT_MIN_LEN: usize = 4;

/// The bonus added to the score of a starweave.
pub const STARWEAVE_BONUS: u32 = 7;

/// Returns `true` iff `word` is an acceptable answer for the puzzle described
/// by `seven` and `required`.
///
/// A word is acceptable iff it is at least `min_len` characters long, it
/// contains the required letter at least once, and every one of its
/// characters is a puzzle letter. Letters may repeat.
///
/// `seven` must hold exactly seven distinct lowercase letters including
/// `required`; violating that is a contract error, not a runtime condition.
///
/// ```
/// use starweave::rules::{is_valid_for_puzzle, DEFAULT_MIN_LEN};
/// use std::collections::HashSet;
///
/// let seven: HashSet<char> = "ablureg".chars().collect();
///
/// assert!(is_valid_for_puzzle("bugle", &seven, 'g', DEFAULT_MIN_LEN));
/// assert!(!is_valid_for_puzzle("blue", &seven, 'g', DEFAULT_MIN_LEN));
/// ```
pub fn is_valid_for_puzzle(
    word: &str,
    seven: &HashSet<char>,
    required: char,
    min_len: usize,
) -> bool {
    debug_assert!(seven.len() == 7);
    debug_assert!(seven.contains(&required));
    word.len() >= min_len
        && word.contains(required)
        && word.chars().all(|letter| seven.contains(&letter))
}

/// Returns `true` iff `word` uses every letter in `seven` at least once.
///
/// This does not imply the word is a valid answer; check
/// [`is_valid_for_puzzle`] first where that matters.
pub fn is_starweave(word: &str, seven: &HashSet<char>) -> bool {
    seven.iter().all(|letter| word.contains(*letter))
}

/// Computes the score of an accepted word.
///
/// Four-letter words are worth a flat 1 point regardless of starweave
/// status. Longer words are worth their length, plus a bonus of
/// [`STARWEAVE_BONUS`] if `is_starweave` is set. The flag is not re-derived
/// here; the caller must pass the correct value.
///
/// ```
/// use starweave::rules::score;
///
/// assert_eq!(score("blue", false), 1);
/// assert_eq!(score("bluejay", true), 14);
/// ```
pub fn score(word: &str, is_starweave: bool) -> u32 {
    if word.len() == 4 {
        return 1;
    }
    word.len() as u32 + if is_starweave { STARWEAVE_BONUS } else { 0 }
}

/// Older name for [`is_valid_for_puzzle`] with the baseline minimum length.
#[deprecated(since = "0.3.0", note = "use `is_valid_for_puzzle` instead")]
pub fn is_valid_for_bee(word: &str, seven: &HashSet<char>, required: char) -> bool {
    is_valid_for_puzzle(word, seven, required, DEFAULT_MIN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> HashSet<char> {
        ['a', 'b', 'l', 'u', 'e', 'g', 'r'].into_iter().collect()
    }

    #[test]
    fn valid_word_meets_all_three_conditions() {
        assert!(is_valid_for_puzzle("bugle", &seven(), 'g', DEFAULT_MIN_LEN));
    }

    #[test]
    fn word_missing_required_letter_is_invalid() {
        assert!(!is_valid_for_puzzle("blue", &seven(), 'g', DEFAULT_MIN_LEN));
    }

    #[test]
    fn word_with_foreign_letter_is_invalid() {
        assert!(!is_valid_for_puzzle("bugles", &seven(), 'g', DEFAULT_MIN_LEN));
    }

    #[test]
    fn word_shorter_than_min_len_is_invalid() {
        assert!(!is_valid_for_puzzle("rug", &seven(), 'g', DEFAULT_MIN_LEN));
        assert!(is_valid_for_puzzle("rug", &seven(), 'g', 3));
    }

    #[test]
    fn repeated_letters_are_allowed() {
        assert!(is_valid_for_puzzle("gurgle", &seven(), 'g', DEFAULT_MIN_LEN));
    }

    #[test]
    fn starweave_requires_all_seven_letters() {
        assert!(is_starweave("burglae", &seven()));
        // No 'u'.
        assert!(!is_starweave("algebra", &seven()));
    }

    #[test]
    fn four_letter_words_score_a_flat_point() {
        assert_eq!(score("blue", false), 1);
        // The flat rate overrides the starweave bonus.
        assert_eq!(score("glue", true), 1);
    }

    #[test]
    fn longer_words_score_length_plus_bonus() {
        assert_eq!(score("bluejay", true), 14);
        assert_eq!(score("bluejays", false), 8);
    }

    #[test]
    #[allow(deprecated)]
    fn bee_alias_delegates_to_canonical_rule() {
        assert!(is_valid_for_bee("bugle", &seven(), 'g'));
        assert!(!is_valid_for_bee("rug", &seven(), 'g'));
    }
}
